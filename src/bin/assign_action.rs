//! Runs assignbot as a GitHub Actions step.
//!
//! Inputs are read from `INPUT_<NAME>` variables and the triggering comment
//! from `GITHUB_EVENT_PATH`. The process exits non-zero when a pre-check fails
//! or any error stops the dispatch.

use assignbot::action::{ActionEnvironment, ActionError, EnvInputs, error_annotation, run_action};
use assignbot::assignment::domain::DispatchOutcome;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(outcome) if outcome.is_failure() => fail(&outcome),
        Ok(outcome) => {
            tracing::info!(outcome = %outcome, "assignment check complete");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

async fn run() -> Result<DispatchOutcome, ActionError> {
    let environment = ActionEnvironment::from_env()?;
    run_action(&environment, &EnvInputs).await
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Logs `reason` and emits a workflow error annotation.
fn fail(reason: &dyn std::fmt::Display) -> ExitCode {
    let message = format!("Error: {reason}");
    tracing::error!("{message}");
    if let Err(err) = writeln!(io::stdout().lock(), "{}", error_annotation(&message)) {
        tracing::warn!(%err, "failed to write workflow annotation");
    }
    ExitCode::FAILURE
}
