//! Decoding of the `issue_comment` webhook payload.
//!
//! Only the fields dispatch needs are read; everything else in the payload is
//! ignored.

use serde::Deserialize;
use thiserror::Error;

use crate::assignment::domain::{AssignmentDomainError, CommentEvent, IssueNumber};

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    issue: Option<IssuePayload>,
    comment: Option<CommentPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
struct IssuePayload {
    number: u64,
    #[serde(default)]
    labels: Vec<LabelPayload>,
    assignee: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct CommentPayload {
    body: Option<String>,
    user: UserPayload,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    full_name: String,
}

/// Errors raised while decoding a webhook payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload is not valid JSON or has unexpected field types.
    #[error("invalid webhook payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload carries no issue, so it is not an issue comment event.
    #[error("webhook payload has no issue")]
    MissingIssue,

    /// The payload carries no comment.
    #[error("webhook payload has no comment")]
    MissingComment,

    /// The issue number is not valid.
    #[error(transparent)]
    Issue(#[from] AssignmentDomainError),
}

/// A decoded comment event plus the repository it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    /// The comment event.
    pub event: CommentEvent,
    /// `owner/name` of the repository, when the payload names it.
    pub repository: Option<String>,
}

/// Decodes an `issue_comment` webhook payload.
///
/// A missing comment body decodes as an empty body.
///
/// # Errors
///
/// Returns [`PayloadError`] when the JSON is malformed or the issue or
/// comment is absent.
pub fn decode_event(json: &str) -> Result<DecodedEvent, PayloadError> {
    let payload: WebhookPayload = serde_json::from_str(json)?;
    let issue = payload.issue.ok_or(PayloadError::MissingIssue)?;
    let comment = payload.comment.ok_or(PayloadError::MissingComment)?;

    let mut event = CommentEvent::new(
        IssueNumber::new(issue.number)?,
        comment.user.login,
        comment.body.unwrap_or_default(),
    )
    .with_labels(issue.labels.into_iter().map(|label| label.name));
    if let Some(assignee) = issue.assignee {
        event = event.with_assignee(assignee.login);
    }

    Ok(DecodedEvent {
        event,
        repository: payload.repository.map(|repository| repository.full_name),
    })
}
