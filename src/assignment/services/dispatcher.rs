//! Comment dispatch service.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::effects::run_effects;
use super::rules::{RuleContext, evaluate, precheck};
use crate::assignment::domain::{
    CommentEvent, Configuration, DispatchOutcome, EffectPlan, IgnoreReason, IssueNumber,
};
use crate::assignment::ports::{IssueTracker, IssueTrackerError, RenderError, ReplyRenderer};

/// Errors that abort a dispatch after the outcome was decided.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The reply could not be rendered. No tracker call was issued.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// One or more tracker calls failed. Calls not listed were applied.
    #[error("{} tracker call(s) failed: {}", .failures.len(), summarize(.failures))]
    Effects {
        /// Errors of the failed calls.
        failures: Vec<IssueTrackerError>,
    },
}

fn summarize(failures: &[IssueTrackerError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Dispatches one comment event to at most one assignment action.
#[derive(Clone)]
pub struct CommandDispatcher<T, R, C>
where
    T: IssueTracker,
    R: ReplyRenderer,
    C: Clock + Send + Sync,
{
    config: Arc<Configuration>,
    tracker: Arc<T>,
    renderer: Arc<R>,
    clock: Arc<C>,
}

impl<T, R, C> CommandDispatcher<T, R, C>
where
    T: IssueTracker,
    R: ReplyRenderer,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(
        config: Arc<Configuration>,
        tracker: Arc<T>,
        renderer: Arc<R>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            config,
            tracker,
            renderer,
            clock,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Decides the outcome for `event` and applies its side effects.
    ///
    /// Pre-check failures are returned as [`DispatchOutcome::Failed`] without
    /// touching the tracker. Otherwise the reply is rendered, then every
    /// tracker call of the outcome is issued concurrently and awaited.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Render`] when the reply template cannot be
    /// rendered and [`DispatchError::Effects`] when any tracker call fails.
    pub async fn dispatch(&self, event: &CommentEvent) -> DispatchResult<DispatchOutcome> {
        let issue = event.issue_number();
        tracing::info!(
            %issue,
            commenter = event.commenter_handle(),
            "checking comment for assignment commands"
        );

        if let Some(reason) = precheck(&self.config, event) {
            tracing::error!(%issue, reason = reason.as_str(), "{reason}");
            return Ok(DispatchOutcome::Failed(reason));
        }

        let context = RuleContext::new(event, &self.config, self.clock.utc());
        let (rule, decision) = evaluate(&context);
        log_decision(issue, rule, &decision.outcome);

        self.apply(issue, &decision.effects).await?;
        if !decision.effects.is_empty() {
            tracing::info!(%issue, outcome = %decision.outcome, "side effects applied");
        }
        Ok(decision.outcome)
    }

    async fn apply(&self, issue: IssueNumber, plan: &EffectPlan) -> DispatchResult<()> {
        if plan.is_empty() {
            return Ok(());
        }
        let comment = plan
            .reply
            .as_ref()
            .map(|reply| {
                self.renderer
                    .render(reply.template(&self.config.templates), reply)
            })
            .transpose()?;

        run_effects(&*self.tracker, issue, plan, comment.as_deref())
            .await
            .map_err(|failures| {
                for failure in &failures {
                    tracing::error!(
                        %issue,
                        operation = failure.operation().as_str(),
                        "tracker call failed: {failure}"
                    );
                }
                DispatchError::Effects { failures }
            })
    }
}

fn log_decision(issue: IssueNumber, rule: &'static str, outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Assigned(handle) => {
            tracing::info!(
                %issue,
                rule,
                handle = handle.as_str(),
                "assigning @{handle} to issue #{issue}"
            );
        }
        DispatchOutcome::Unassigned(handle) => {
            tracing::info!(
                %issue,
                rule,
                handle = handle.as_str(),
                "unassigning @{handle} from issue #{issue}"
            );
        }
        DispatchOutcome::Ignored(reason) => {
            tracing::info!(
                %issue,
                rule,
                reason = reason.as_str(),
                "{}",
                describe_ignore(issue, reason)
            );
        }
        DispatchOutcome::Failed(reason) => {
            tracing::error!(%issue, rule, reason = reason.as_str(), "{reason}");
        }
    }
}

fn describe_ignore(issue: IssueNumber, reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::InterestAcknowledged => {
            "comment indicates interest in contribution, posting a suggestion".to_owned()
        }
        IgnoreReason::AlreadyAssigned { assignee } => {
            format!("issue #{issue} is already assigned to @{assignee}")
        }
        IgnoreReason::NotTheAssignee => {
            "commenter is different from the assignee, ignoring".to_owned()
        }
        IgnoreReason::NotAMaintainer => {
            "ignoring comment because the commenter is not a maintainer".to_owned()
        }
        IgnoreReason::NoMaintainersConfigured => {
            "ignoring comment because no maintainers are configured".to_owned()
        }
        IgnoreReason::NoHandleFound(_) => "no valid user handle found after the command".to_owned(),
        IgnoreReason::HandleNotAssignee { handle } => {
            format!("user @{handle} is not assigned to issue #{issue}")
        }
        IgnoreReason::NoMatchingCommand => {
            "ignoring comment because it does not contain a supported command".to_owned()
        }
    }
}
