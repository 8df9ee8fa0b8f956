//! Action entry point: read the event, dispatch it, publish outputs.

use mockable::DefaultClock;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use super::inputs::{ConfigError, InputSource, load_configuration};
use super::outputs::append_status;
use super::payload::{PayloadError, decode_event};
use crate::assignment::adapters::{
    DEFAULT_API_BASE, GithubClientError, GithubIssueTracker, GithubRepository, MiniJinjaRenderer,
};
use crate::assignment::domain::{CommentEvent, Configuration, DispatchOutcome};
use crate::assignment::ports::IssueTracker;
use crate::assignment::services::{CommandDispatcher, DispatchError};

/// Path of the webhook payload file.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
/// Path of the step output file.
pub const OUTPUT_PATH_VAR: &str = "GITHUB_OUTPUT";
/// `owner/name` of the repository running the workflow.
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
/// Base URL of the GitHub REST API.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Errors that stop the action before or during dispatch.
#[derive(Debug, Error)]
pub enum ActionError {
    /// An input could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required environment variable is unset.
    #[error("environment variable {0} is not set")]
    MissingEnvironment(&'static str),

    /// The event payload file could not be read.
    #[error("failed to read event payload {}: {source}", .path.display())]
    ReadEvent {
        /// Payload path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The event payload could not be decoded.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Neither the payload nor the environment names the repository.
    #[error("cannot determine the repository for this event")]
    MissingRepository,

    /// The GitHub client could not be created.
    #[error(transparent)]
    Github(#[from] GithubClientError),

    /// Dispatch failed after the outcome was decided.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The step outputs could not be written.
    #[error("failed to write step outputs: {0}")]
    WriteOutputs(#[source] io::Error),
}

/// Runner environment, normally read from the `GITHUB_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEnvironment {
    /// Webhook payload file.
    pub event_path: PathBuf,
    /// Step output file, if outputs should be published.
    pub output_path: Option<PathBuf>,
    /// Repository used when the payload does not name one.
    pub repository: Option<String>,
    /// GitHub REST API base URL.
    pub api_base: String,
}

impl ActionEnvironment {
    /// Reads the runner environment from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingEnvironment`] when `GITHUB_EVENT_PATH`
    /// is unset.
    pub fn from_env() -> Result<Self, ActionError> {
        let event_path = non_empty_var(EVENT_PATH_VAR)
            .ok_or(ActionError::MissingEnvironment(EVENT_PATH_VAR))?;
        Ok(Self {
            event_path: PathBuf::from(event_path),
            output_path: non_empty_var(OUTPUT_PATH_VAR).map(PathBuf::from),
            repository: non_empty_var(REPOSITORY_VAR),
            api_base: non_empty_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Runs the action once against GitHub.
///
/// Loads the configuration from `inputs`, decodes the event payload, dispatches
/// it through a [`GithubIssueTracker`] and appends the status signals to the
/// output file when one is configured.
///
/// # Errors
///
/// Returns [`ActionError`] when inputs, the payload or the GitHub client are
/// unusable, when dispatch fails, or when outputs cannot be written.
pub async fn run_action(
    environment: &ActionEnvironment,
    inputs: &impl InputSource,
) -> Result<DispatchOutcome, ActionError> {
    let config = load_configuration(inputs)?;
    let payload = fs::read_to_string(&environment.event_path).map_err(|source| {
        ActionError::ReadEvent {
            path: environment.event_path.clone(),
            source,
        }
    })?;
    let decoded = decode_event(&payload)?;
    let repository = decoded
        .repository
        .or_else(|| environment.repository.clone())
        .ok_or(ActionError::MissingRepository)?;

    let tracker = GithubIssueTracker::new(
        &environment.api_base,
        &config.token,
        GithubRepository::parse(&repository)?,
    )?;
    tracing::debug!(repository = %tracker.repository(), "github client ready");

    let outcome = dispatch_event(config, &decoded.event, Arc::new(tracker)).await?;
    if let Some(path) = &environment.output_path {
        append_status(path, &outcome.status()).map_err(ActionError::WriteOutputs)?;
    }
    Ok(outcome)
}

/// Dispatches `event` through `tracker` with the template renderer and the
/// system clock.
///
/// # Errors
///
/// Returns [`DispatchError`] when the reply cannot be rendered or a tracker
/// call fails.
pub async fn dispatch_event<T: IssueTracker>(
    config: Configuration,
    event: &CommentEvent,
    tracker: Arc<T>,
) -> Result<DispatchOutcome, DispatchError> {
    let dispatcher = CommandDispatcher::new(
        Arc::new(config),
        tracker,
        Arc::new(MiniJinjaRenderer::new()),
        Arc::new(DefaultClock),
    );
    dispatcher.dispatch(event).await
}
