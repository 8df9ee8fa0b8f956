//! Domain model for comment-driven issue assignment.
//!
//! Everything here is pure data and matching logic. Tracker access and
//! template rendering live behind the ports in [`crate::assignment::ports`].

mod command;
mod config;
mod effect;
mod error;
mod event;
mod outcome;
mod reply;

pub use command::{CommandMatcher, extract_handle, mentions_any, normalize};
pub use config::{
    AuthToken, CONTRIBUTION_PHRASES, CommandTokens, Configuration, DEFAULT_ASSIGN_USER_CMD,
    DEFAULT_ASSIGNED_LABEL, DEFAULT_DAYS_UNTIL_UNASSIGN, DEFAULT_PIN_LABEL,
    DEFAULT_SELF_ASSIGN_CMD, DEFAULT_SELF_UNASSIGN_CMD, DEFAULT_UNASSIGN_USER_CMD, ReplyTemplates,
};
pub use effect::{AssigneeChange, Decision, EffectPlan, LabelChange};
pub use error::AssignmentDomainError;
pub use event::{CommentEvent, IssueNumber};
pub use outcome::{DispatchOutcome, FailureReason, HandleCommand, IgnoreReason, StatusSignals};
pub use reply::{AlreadyAssignedVars, AssignedVars, HandleVars, Reply, ReplyKind};
