//! Dispatch configuration.
//!
//! A [`Configuration`] is read once per invocation and is immutable for the
//! rest of the run. Defaults mirror the documented action inputs so a
//! workflow only has to override what it changes.

use std::fmt;

/// Phrases that signal a commenter wants to pick up an issue.
///
/// Matching is case-insensitive substring search over the comment body.
pub const CONTRIBUTION_PHRASES: &[&str] = &[
    "assign this issue to me",
    "I would like to work on this issue",
    "can I take on this issue",
    "may I work on this issue",
    "I'm keen to have a go",
    "I am here to do a university assignment",
    "I hope to contribute to this issue",
    "can I be assigned to this issue",
    "is this issue available to work on",
    "I would be happy to pick this up",
    "I want to take this issue",
    "I have read through this issue and want to contribute",
    "is this issue still open for contribution",
    "Hi, can I take this issue",
    "I would love to work on this issue",
    "Hey, I'd like to be assigned to this issue",
    "Please assign me to this issue",
];

/// Default self-assign command.
pub const DEFAULT_SELF_ASSIGN_CMD: &str = "/assign-me";
/// Default self-unassign command.
pub const DEFAULT_SELF_UNASSIGN_CMD: &str = "/unassign-me";
/// Default maintainer assign command prefix.
pub const DEFAULT_ASSIGN_USER_CMD: &str = "/assign";
/// Default maintainer unassign command prefix.
pub const DEFAULT_UNASSIGN_USER_CMD: &str = "/unassign";
/// Default number of days reported in assignment replies.
pub const DEFAULT_DAYS_UNTIL_UNASSIGN: u32 = 7;
/// Default label applied to assigned issues.
pub const DEFAULT_ASSIGNED_LABEL: &str = "Assigned";
/// Default label maintainers use to pin an assignment.
pub const DEFAULT_PIN_LABEL: &str = "Pinned";

const DEFAULT_ASSIGNED_TEMPLATE: &str = concat!(
    "👋 Hey @{{ handle }}, thanks for your interest in this issue! 🎉\n\n",
    "⚠ Note that this issue will become unassigned if it isn't closed within ",
    "**{{ total_days }} days** (by {{ unassigned_date }}).\n\n",
    "🔧 A maintainer can also add the **{{ pin_label }}** label to prevent it ",
    "from being unassigned automatically.",
);

const DEFAULT_ALREADY_ASSIGNED_TEMPLATE: &str = concat!(
    "👋 Hey @{{ handle }}, this issue is already assigned to @{{ assignee }}.\n\n",
    "⚠️ It will become unassigned if it isn't closed within ",
    "**{{ unassigned_date }} days**.\n\n",
    "🔧 A maintainer can also add you to the list of assignees or swap you ",
    "with the current assignee.",
);

const DEFAULT_UNASSIGNED_TEMPLATE: &str =
    "👋 Hey @{{ handle }}, you have been unassigned from this issue.";

const DEFAULT_ASSIGNMENT_INTEREST_TEMPLATE: &str = concat!(
    "👋 Hey @{{ handle }}, looks like you're interested in working on this issue! 🎉\n\n",
    "If you'd like to take on this issue, please use the command `/assign-me` ",
    "to assign yourself.",
);

/// Access token used to authenticate against the issue tracker.
///
/// The value is redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` when no usable token was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Exposes the raw secret for adapters that must send it.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("AuthToken(<empty>)")
        } else {
            f.write_str("AuthToken(<redacted>)")
        }
    }
}

/// Command tokens recognized in comment bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTokens {
    /// Exact command a commenter uses to assign themselves.
    pub self_assign: String,
    /// Exact command the assignee uses to unassign themselves.
    pub self_unassign: String,
    /// Prefix a maintainer uses to assign another user.
    pub assign_user: String,
    /// Prefix a maintainer uses to unassign another user.
    pub unassign_user: String,
}

impl Default for CommandTokens {
    fn default() -> Self {
        Self {
            self_assign: DEFAULT_SELF_ASSIGN_CMD.to_owned(),
            self_unassign: DEFAULT_SELF_UNASSIGN_CMD.to_owned(),
            assign_user: DEFAULT_ASSIGN_USER_CMD.to_owned(),
            unassign_user: DEFAULT_UNASSIGN_USER_CMD.to_owned(),
        }
    }
}

/// Reply templates keyed by reply kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTemplates {
    /// Posted when a user is assigned.
    pub assigned: String,
    /// Posted when self-assignment is refused because of an existing assignee.
    pub already_assigned: String,
    /// Posted when a user is unassigned.
    pub unassigned: String,
    /// Posted when a comment expresses interest in contributing.
    pub assignment_interest: String,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            assigned: DEFAULT_ASSIGNED_TEMPLATE.to_owned(),
            already_assigned: DEFAULT_ALREADY_ASSIGNED_TEMPLATE.to_owned(),
            unassigned: DEFAULT_UNASSIGNED_TEMPLATE.to_owned(),
            assignment_interest: DEFAULT_ASSIGNMENT_INTEREST_TEMPLATE.to_owned(),
        }
    }
}

/// Full dispatch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Tracker access token; dispatch fails fast when empty.
    pub token: AuthToken,
    /// Label the issue must carry before any command is considered.
    pub required_label: Option<String>,
    /// Recognized command tokens.
    pub commands: CommandTokens,
    /// Whether contribution-interest phrases trigger a suggestion reply.
    pub enable_auto_suggestion: bool,
    /// Handles allowed to assign and unassign other users.
    pub maintainers: Vec<String>,
    /// Days reported in assignment replies. Informational only.
    pub days_until_unassign: u32,
    /// Label added on assignment and removed on unassignment.
    pub assigned_label: String,
    /// Label name mentioned in the assigned reply.
    pub pin_label: String,
    /// Reply templates.
    pub templates: ReplyTemplates,
}

impl Configuration {
    /// Creates a configuration with default commands, labels and templates.
    #[must_use]
    pub fn new(token: AuthToken) -> Self {
        Self {
            token,
            required_label: None,
            commands: CommandTokens::default(),
            enable_auto_suggestion: true,
            maintainers: Vec::new(),
            days_until_unassign: DEFAULT_DAYS_UNTIL_UNASSIGN,
            assigned_label: DEFAULT_ASSIGNED_LABEL.to_owned(),
            pin_label: DEFAULT_PIN_LABEL.to_owned(),
            templates: ReplyTemplates::default(),
        }
    }

    /// Sets the label required on the issue. Empty values clear the gate.
    #[must_use]
    pub fn with_required_label(mut self, label: impl Into<String>) -> Self {
        let value = label.into();
        self.required_label = (!value.trim().is_empty()).then_some(value);
        self
    }

    /// Replaces the command tokens.
    #[must_use]
    pub fn with_commands(mut self, commands: CommandTokens) -> Self {
        self.commands = commands;
        self
    }

    /// Enables or disables contribution-interest suggestions.
    #[must_use]
    pub const fn with_auto_suggestion(mut self, enabled: bool) -> Self {
        self.enable_auto_suggestion = enabled;
        self
    }

    /// Sets the maintainer allow-list. Blank handles are dropped.
    #[must_use]
    pub fn with_maintainers(
        mut self,
        maintainers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.maintainers = maintainers
            .into_iter()
            .map(Into::into)
            .map(|handle: String| handle.trim().to_owned())
            .filter(|handle| !handle.is_empty())
            .collect();
        self
    }

    /// Sets the number of days reported in assignment replies.
    #[must_use]
    pub const fn with_days_until_unassign(mut self, days: u32) -> Self {
        self.days_until_unassign = days;
        self
    }

    /// Sets the assigned and pin label names.
    #[must_use]
    pub fn with_labels(mut self, assigned: impl Into<String>, pin: impl Into<String>) -> Self {
        self.assigned_label = assigned.into();
        self.pin_label = pin.into();
        self
    }

    /// Replaces the reply templates.
    #[must_use]
    pub fn with_templates(mut self, templates: ReplyTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// Returns `true` when `handle` is on the maintainer allow-list.
    #[must_use]
    pub fn is_maintainer(&self, handle: &str) -> bool {
        self.maintainers.iter().any(|maintainer| maintainer == handle)
    }

    /// Returns the assigned label, or `None` when it is configured blank.
    #[must_use]
    pub fn assigned_label(&self) -> Option<&str> {
        let label = self.assigned_label.trim();
        (!label.is_empty()).then_some(label)
    }
}
