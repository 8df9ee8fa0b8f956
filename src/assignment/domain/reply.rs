//! Acknowledgment replies and their template variables.

use serde::Serialize;
use std::fmt;

use super::ReplyTemplates;

/// Kind of acknowledgment reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    /// Self-assignment refused because of an existing assignee.
    AlreadyAssigned,
    /// A user was assigned.
    Assigned,
    /// A user was unassigned.
    Unassigned,
    /// The commenter expressed interest in contributing.
    AssignmentInterest,
}

impl ReplyKind {
    /// Returns the stable identifier for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyAssigned => "already-assigned",
            Self::Assigned => "assigned",
            Self::Unassigned => "unassigned",
            Self::AssignmentInterest => "assignment-interest",
        }
    }
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variables for the already-assigned reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlreadyAssignedVars {
    /// The configured day count, rendered as text.
    ///
    /// This is the full configured period, not the time remaining on the
    /// existing assignment.
    pub unassigned_date: String,
    /// The commenter who asked to be assigned.
    pub handle: String,
    /// The existing assignee.
    pub assignee: String,
}

/// Variables for the assigned reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedVars {
    /// Configured number of days until unassignment.
    pub total_days: u32,
    /// Date the assignment lapses, formatted `DD Month YYYY`.
    pub unassigned_date: String,
    /// The assigned user.
    pub handle: String,
    /// Label maintainers can add to keep the assignment.
    pub pin_label: String,
}

/// Variables for the unassigned and assignment-interest replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleVars {
    /// The user the reply addresses.
    pub handle: String,
}

/// A reply to post on the issue, carrying its template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Self-assignment refused.
    AlreadyAssigned(AlreadyAssignedVars),
    /// User assigned.
    Assigned(AssignedVars),
    /// User unassigned.
    Unassigned(HandleVars),
    /// Contribution interest acknowledged.
    AssignmentInterest(HandleVars),
}

impl Reply {
    /// Returns the kind of this reply.
    #[must_use]
    pub const fn kind(&self) -> ReplyKind {
        match self {
            Self::AlreadyAssigned(_) => ReplyKind::AlreadyAssigned,
            Self::Assigned(_) => ReplyKind::Assigned,
            Self::Unassigned(_) => ReplyKind::Unassigned,
            Self::AssignmentInterest(_) => ReplyKind::AssignmentInterest,
        }
    }

    /// Returns the handle the reply is addressed to.
    #[must_use]
    pub fn handle(&self) -> &str {
        match self {
            Self::AlreadyAssigned(vars) => &vars.handle,
            Self::Assigned(vars) => &vars.handle,
            Self::Unassigned(vars) | Self::AssignmentInterest(vars) => &vars.handle,
        }
    }

    /// Selects the configured template for this reply.
    #[must_use]
    pub fn template<'t>(&self, templates: &'t ReplyTemplates) -> &'t str {
        match self.kind() {
            ReplyKind::AlreadyAssigned => &templates.already_assigned,
            ReplyKind::Assigned => &templates.assigned,
            ReplyKind::Unassigned => &templates.unassigned,
            ReplyKind::AssignmentInterest => &templates.assignment_interest,
        }
    }
}
