//! GitHub REST issue tracker adapter.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{RequestBuilder, Url};
use serde_json::json;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::assignment::domain::{AuthToken, IssueNumber};
use crate::assignment::ports::{
    IssueTracker, IssueTrackerError, IssueTrackerResult, TrackerOperation,
};

/// Public GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GithubRepository {
    owner: String,
    name: String,
}

impl GithubRepository {
    /// Parses an `owner/name` repository reference.
    ///
    /// # Errors
    ///
    /// Returns [`GithubClientError::InvalidRepository`] unless the value has
    /// exactly one non-empty owner and name segment.
    pub fn parse(value: &str) -> Result<Self, GithubClientError> {
        let trimmed = value.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| GithubClientError::InvalidRepository(value.to_owned()))?;
        let is_valid = !owner.is_empty()
            && !name.is_empty()
            && !name.contains('/')
            && !trimmed.chars().any(char::is_whitespace);
        if !is_valid {
            return Err(GithubClientError::InvalidRepository(value.to_owned()));
        }
        Ok(Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GithubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Errors raised while building the GitHub client.
#[derive(Debug, Error)]
pub enum GithubClientError {
    /// The repository reference is not `owner/name`.
    #[error("invalid repository '{0}', expected owner/name")]
    InvalidRepository(String),

    /// The token cannot be sent as an HTTP header.
    #[error("github token contains characters that are not valid in a header")]
    InvalidToken,

    /// The API base is not a usable URL.
    #[error("invalid github api base '{0}'")]
    InvalidApiBase(String),

    /// The HTTP client could not be created.
    #[error("failed to create github api client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Issue tracker backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubIssueTracker {
    http: reqwest::Client,
    api_base: Url,
    repository: GithubRepository,
}

impl GithubIssueTracker {
    /// Creates a tracker for `repository` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`GithubClientError`] when the API base or token is unusable or
    /// the HTTP client cannot be built.
    pub fn new(
        api_base: &str,
        token: &AuthToken,
        repository: GithubRepository,
    ) -> Result<Self, GithubClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("assignbot"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose().trim()))
            .map_err(|_| GithubClientError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base = format!("{}/", api_base.trim().trim_end_matches('/'));
        let parsed_base =
            Url::parse(&base).map_err(|_| GithubClientError::InvalidApiBase(api_base.to_owned()))?;
        if parsed_base.cannot_be_a_base() {
            return Err(GithubClientError::InvalidApiBase(api_base.to_owned()));
        }

        Ok(Self {
            http,
            api_base: parsed_base,
            repository,
        })
    }

    /// Returns the repository this tracker writes to.
    #[must_use]
    pub const fn repository(&self) -> &GithubRepository {
        &self.repository
    }

    /// Builds `{base}/repos/{owner}/{repo}/issues/{n}/{segments...}` with each
    /// segment percent-encoded.
    fn issue_url(
        &self,
        operation: TrackerOperation,
        issue: IssueNumber,
        segments: &[&str],
    ) -> IssueTrackerResult<Url> {
        let mut url = self.api_base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                IssueTrackerError::transport(
                    operation,
                    issue,
                    std::io::Error::other("github api base cannot carry a path"),
                )
            })?;
            path.pop_if_empty();
            path.extend([
                "repos",
                self.repository.owner(),
                self.repository.name(),
                "issues",
                &issue.to_string(),
            ]);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn send(
        operation: TrackerOperation,
        issue: IssueNumber,
        request: RequestBuilder,
    ) -> IssueTrackerResult<()> {
        let response = request
            .send()
            .await
            .map_err(|err| IssueTrackerError::transport(operation, issue, err))?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%issue, %operation, status = status.as_u16(), "github call succeeded");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(IssueTrackerError::Rejected {
            operation,
            issue,
            status: status.as_u16(),
            message: truncate_for_error(&body),
        })
    }
}

fn truncate_for_error(body: &str) -> String {
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if body.chars().nth(MAX_ERROR_BODY_CHARS).is_some() {
        truncated.push_str("...");
    }
    truncated
}

#[async_trait]
impl IssueTracker for GithubIssueTracker {
    async fn add_assignees(
        &self,
        issue: IssueNumber,
        handles: &[String],
    ) -> IssueTrackerResult<()> {
        let operation = TrackerOperation::AddAssignees;
        let url = self.issue_url(operation, issue, &["assignees"])?;
        let request = self.http.post(url).json(&json!({ "assignees": handles }));
        Self::send(operation, issue, request).await
    }

    async fn remove_assignees(
        &self,
        issue: IssueNumber,
        handles: &[String],
    ) -> IssueTrackerResult<()> {
        let operation = TrackerOperation::RemoveAssignees;
        let url = self.issue_url(operation, issue, &["assignees"])?;
        let request = self.http.delete(url).json(&json!({ "assignees": handles }));
        Self::send(operation, issue, request).await
    }

    async fn add_labels(&self, issue: IssueNumber, labels: &[String]) -> IssueTrackerResult<()> {
        let operation = TrackerOperation::AddLabels;
        let url = self.issue_url(operation, issue, &["labels"])?;
        let request = self.http.post(url).json(&json!({ "labels": labels }));
        Self::send(operation, issue, request).await
    }

    async fn remove_label(&self, issue: IssueNumber, label: &str) -> IssueTrackerResult<()> {
        let operation = TrackerOperation::RemoveLabel;
        let url = self.issue_url(operation, issue, &["labels", label])?;
        Self::send(operation, issue, self.http.delete(url)).await
    }

    async fn create_comment(&self, issue: IssueNumber, body: &str) -> IssueTrackerResult<()> {
        let operation = TrackerOperation::CreateComment;
        let url = self.issue_url(operation, issue, &["comments"])?;
        let request = self.http.post(url).json(&json!({ "body": body }));
        Self::send(operation, issue, request).await
    }
}
