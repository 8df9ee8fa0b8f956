//! Dispatch outcomes and the status signals derived from them.

use std::fmt;

/// Which maintainer command a handle lookup belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleCommand {
    /// The assign-user prefix command.
    AssignUser,
    /// The unassign-user prefix command.
    UnassignUser,
}

/// Why a comment produced no assignment change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The comment expressed interest in contributing; a suggestion was posted.
    InterestAcknowledged,
    /// Self-assignment was refused because the issue already has an assignee.
    AlreadyAssigned {
        /// The existing assignee.
        assignee: String,
    },
    /// Self-unassignment was requested by someone other than the assignee.
    NotTheAssignee,
    /// A maintainer-only path was reached by a non-maintainer.
    NotAMaintainer,
    /// No maintainers are configured, so maintainer commands are disabled.
    NoMaintainersConfigured,
    /// A maintainer command carried no `@handle`.
    NoHandleFound(HandleCommand),
    /// The handle named in an unassign command is not the current assignee.
    HandleNotAssignee {
        /// The handle named in the comment.
        handle: String,
    },
    /// The comment did not contain a supported command.
    NoMatchingCommand,
}

impl IgnoreReason {
    /// Returns the stable identifier for this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InterestAcknowledged => "interest-acknowledged",
            Self::AlreadyAssigned { .. } => "already-assigned",
            Self::NotTheAssignee => "not-the-assignee",
            Self::NotAMaintainer => "not-a-maintainer",
            Self::NoMaintainersConfigured => "no-maintainers-configured",
            Self::NoHandleFound(_) => "no-handle-found",
            Self::HandleNotAssignee { .. } => "handle-not-assignee",
            Self::NoMatchingCommand => "no-matching-command",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why dispatch stopped before evaluating any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// No tracker token was configured.
    MissingToken,
    /// The issue lacks the configured required label.
    MissingRequiredLabel {
        /// The label that was required.
        label: String,
    },
}

impl FailureReason {
    /// Returns the stable identifier for this reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing-token",
            Self::MissingRequiredLabel { .. } => "missing-required-label",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => f.write_str("missing required input \"token\""),
            Self::MissingRequiredLabel { label } => {
                write!(f, "missing required label \"{label}\"")
            }
        }
    }
}

/// The single terminal result of dispatching one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handle was assigned to the issue.
    Assigned(String),
    /// The handle was unassigned from the issue.
    Unassigned(String),
    /// No assignment change was made.
    Ignored(IgnoreReason),
    /// A pre-check failed; nothing was evaluated or changed.
    Failed(FailureReason),
}

impl DispatchOutcome {
    /// Returns `true` for [`DispatchOutcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the action status signals implied by this outcome.
    #[must_use]
    pub const fn status(&self) -> StatusSignals {
        match self {
            Self::Assigned(_) => StatusSignals::assigned(true),
            Self::Unassigned(_) => StatusSignals::unassigned(true),
            Self::Ignored(
                IgnoreReason::AlreadyAssigned { .. }
                | IgnoreReason::NoHandleFound(HandleCommand::AssignUser),
            ) => StatusSignals::assigned(false),
            Self::Ignored(
                IgnoreReason::NotTheAssignee
                | IgnoreReason::HandleNotAssignee { .. }
                | IgnoreReason::NoHandleFound(HandleCommand::UnassignUser),
            ) => StatusSignals::unassigned(false),
            Self::Ignored(_) | Self::Failed(_) => StatusSignals::none(),
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(handle) => write!(f, "assigned @{handle}"),
            Self::Unassigned(handle) => write!(f, "unassigned @{handle}"),
            Self::Ignored(reason) => write!(f, "ignored ({reason})"),
            Self::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// The `assigned` and `unassigned` status signals.
///
/// `None` means the branch taken does not set that signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSignals {
    /// Value of the `assigned` signal.
    pub assigned: Option<bool>,
    /// Value of the `unassigned` signal.
    pub unassigned: Option<bool>,
}

impl StatusSignals {
    const fn none() -> Self {
        Self {
            assigned: None,
            unassigned: None,
        }
    }

    const fn assigned(value: bool) -> Self {
        Self {
            assigned: Some(value),
            unassigned: None,
        }
    }

    const fn unassigned(value: bool) -> Self {
        Self {
            assigned: None,
            unassigned: Some(value),
        }
    }

    /// Returns the signals as `(name, "yes" | "no")` pairs, skipping unset ones.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        [("assigned", self.assigned), ("unassigned", self.unassigned)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|flag| (name, yes_no(flag))))
            .collect()
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
