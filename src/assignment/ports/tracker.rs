//! Issue tracker port.
//!
//! The dispatcher issues the calls for one outcome concurrently and waits for
//! all of them. Implementations get no transactional guarantee from the
//! caller: if one call fails after a sibling succeeded, the sibling's change
//! stays applied. Callers that need compensation must inspect
//! [`crate::assignment::services::DispatchError::Effects`] and roll back
//! themselves.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::assignment::domain::IssueNumber;

/// Result type for issue tracker operations.
pub type IssueTrackerResult<T> = Result<T, IssueTrackerError>;

/// Tracker mutation that can be issued by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerOperation {
    /// Add assignees to an issue.
    AddAssignees,
    /// Remove assignees from an issue.
    RemoveAssignees,
    /// Add labels to an issue.
    AddLabels,
    /// Remove one label from an issue.
    RemoveLabel,
    /// Post a comment on an issue.
    CreateComment,
}

impl TrackerOperation {
    /// Returns a short name for logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddAssignees => "add assignees",
            Self::RemoveAssignees => "remove assignees",
            Self::AddLabels => "add labels",
            Self::RemoveLabel => "remove label",
            Self::CreateComment => "create comment",
        }
    }
}

impl fmt::Display for TrackerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue tracker capability used by the dispatcher.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Adds `handles` as assignees of the issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the tracker rejects the change or
    /// cannot be reached.
    async fn add_assignees(&self, issue: IssueNumber, handles: &[String])
    -> IssueTrackerResult<()>;

    /// Removes `handles` from the issue's assignees.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the tracker rejects the change or
    /// cannot be reached.
    async fn remove_assignees(
        &self,
        issue: IssueNumber,
        handles: &[String],
    ) -> IssueTrackerResult<()>;

    /// Adds `labels` to the issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the tracker rejects the change or
    /// cannot be reached.
    async fn add_labels(&self, issue: IssueNumber, labels: &[String]) -> IssueTrackerResult<()>;

    /// Removes `label` from the issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the tracker rejects the change or
    /// cannot be reached.
    async fn remove_label(&self, issue: IssueNumber, label: &str) -> IssueTrackerResult<()>;

    /// Posts a comment on the issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError`] when the tracker rejects the comment or
    /// cannot be reached.
    async fn create_comment(&self, issue: IssueNumber, body: &str) -> IssueTrackerResult<()>;
}

/// Errors returned by issue tracker implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueTrackerError {
    /// The tracker answered with a failure status.
    #[error("{operation} on issue #{issue} was rejected with status {status}: {message}")]
    Rejected {
        /// Operation that was attempted.
        operation: TrackerOperation,
        /// Target issue.
        issue: IssueNumber,
        /// Status code returned by the tracker.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// The tracker could not be reached or returned an unreadable response.
    #[error("{operation} on issue #{issue} failed: {cause}")]
    Transport {
        /// Operation that was attempted.
        operation: TrackerOperation,
        /// Target issue.
        issue: IssueNumber,
        /// Underlying transport error.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl IssueTrackerError {
    /// Wraps a transport error.
    pub fn transport(
        operation: TrackerOperation,
        issue: IssueNumber,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            operation,
            issue,
            cause: Arc::new(err),
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> TrackerOperation {
        match self {
            Self::Rejected { operation, .. } | Self::Transport { operation, .. } => *operation,
        }
    }
}
