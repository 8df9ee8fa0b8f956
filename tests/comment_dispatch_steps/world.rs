//! Shared world state for comment dispatch BDD scenarios.

use std::sync::Arc;

use assignbot::assignment::{
    adapters::{InMemoryIssueTracker, MiniJinjaRenderer},
    domain::{AuthToken, CommentEvent, Configuration, DispatchOutcome, IssueNumber},
    services::{CommandDispatcher, DispatchResult},
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to 2026-03-01 12:00 UTC.
#[derive(Debug, Clone, Copy)]
pub struct PinnedClock;

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("pinned instant must be unambiguous"))
    }
}

/// Dispatcher type used by the BDD world.
pub type TestDispatcher = CommandDispatcher<InMemoryIssueTracker, MiniJinjaRenderer, PinnedClock>;

/// Issue state seeded before the comment arrives.
#[derive(Debug, Clone)]
pub struct SeededIssue {
    pub number: IssueNumber,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

/// Scenario world for comment dispatch behaviour tests.
pub struct DispatchWorld {
    pub config: Configuration,
    pub issue: Option<SeededIssue>,
    pub tracker: Option<Arc<InMemoryIssueTracker>>,
    pub last_result: Option<DispatchResult<DispatchOutcome>>,
}

impl DispatchWorld {
    /// Creates a world with a tokenised default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Configuration::new(AuthToken::new("test-token")),
            issue: None,
            tracker: None,
            last_result: None,
        }
    }

    /// Seeds the tracker from the pending issue and returns the event for
    /// `commenter` posting `body`.
    pub fn prepare(
        &mut self,
        commenter: &str,
        body: &str,
    ) -> Result<(CommentEvent, TestDispatcher), eyre::Report> {
        let seeded = self
            .issue
            .clone()
            .ok_or_else(|| eyre::eyre!("no issue seeded in scenario world"))?;
        let tracker = Arc::new(InMemoryIssueTracker::new().with_issue(
            seeded.number,
            seeded.assignee.as_deref(),
            seeded.labels.iter().cloned(),
        ));
        self.tracker = Some(Arc::clone(&tracker));

        let mut event =
            CommentEvent::new(seeded.number, commenter, body).with_labels(seeded.labels);
        if let Some(assignee) = seeded.assignee {
            event = event.with_assignee(assignee);
        }
        let dispatcher = CommandDispatcher::new(
            Arc::new(self.config.clone()),
            tracker,
            Arc::new(MiniJinjaRenderer::new()),
            Arc::new(PinnedClock),
        );
        Ok((event, dispatcher))
    }

    /// Returns the tracker created by the `when` step.
    pub fn tracker(&self) -> Result<&InMemoryIssueTracker, eyre::Report> {
        self.tracker
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no comment dispatched in scenario world"))
    }

    /// Returns the outcome of the last dispatch.
    pub fn outcome(&self) -> Result<&DispatchOutcome, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing dispatch result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected dispatch failure: {err}"))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an issue number from a step argument.
pub fn issue_number(value: u64) -> Result<IssueNumber, eyre::Report> {
    IssueNumber::new(value).map_err(|err| eyre::eyre!("invalid issue number: {err}"))
}
