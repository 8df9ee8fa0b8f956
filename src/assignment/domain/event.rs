//! Comment events and the issue identifiers they carry.

use super::AssignmentDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Positive issue number from the issue tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Creates a validated issue number.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidIssueNumber`] when the value is
    /// zero.
    pub const fn new(value: u64) -> Result<Self, AssignmentDomainError> {
        if value == 0 {
            return Err(AssignmentDomainError::InvalidIssueNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single comment posted on an issue, as delivered by the triggering
/// platform.
///
/// The event is immutable for the lifetime of a dispatch. The comment body is
/// kept in its original case because handle extraction is case-preserving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEvent {
    issue_number: IssueNumber,
    issue_labels: BTreeSet<String>,
    issue_assignee: Option<String>,
    commenter_handle: String,
    comment_body: String,
}

impl CommentEvent {
    /// Creates an event for an unassigned, unlabeled issue.
    #[must_use]
    pub fn new(
        issue_number: IssueNumber,
        commenter_handle: impl Into<String>,
        comment_body: impl Into<String>,
    ) -> Self {
        Self {
            issue_number,
            issue_labels: BTreeSet::new(),
            issue_assignee: None,
            commenter_handle: commenter_handle.into(),
            comment_body: comment_body.into(),
        }
    }

    /// Sets the labels currently attached to the issue.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.issue_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the current assignee of the issue.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.issue_assignee = Some(assignee.into());
        self
    }

    /// Returns the issue number.
    #[must_use]
    pub const fn issue_number(&self) -> IssueNumber {
        self.issue_number
    }

    /// Returns the labels attached to the issue.
    #[must_use]
    pub const fn issue_labels(&self) -> &BTreeSet<String> {
        &self.issue_labels
    }

    /// Returns `true` when the issue carries `label` (exact match).
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.issue_labels.contains(label)
    }

    /// Returns the current assignee handle, if any.
    #[must_use]
    pub fn issue_assignee(&self) -> Option<&str> {
        self.issue_assignee.as_deref()
    }

    /// Returns `true` when `handle` is the current assignee.
    #[must_use]
    pub fn is_assignee(&self, handle: &str) -> bool {
        self.issue_assignee.as_deref() == Some(handle)
    }

    /// Returns the handle of the user who posted the comment.
    #[must_use]
    pub fn commenter_handle(&self) -> &str {
        &self.commenter_handle
    }

    /// Returns the raw comment body.
    #[must_use]
    pub fn comment_body(&self) -> &str {
        &self.comment_body
    }
}
