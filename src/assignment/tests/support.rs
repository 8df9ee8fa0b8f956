//! Shared fixtures for assignment unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::assignment::domain::{AuthToken, CommentEvent, Configuration, IssueNumber};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2026-03-01 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed test instant must be unambiguous"))
}

pub fn issue() -> IssueNumber {
    IssueNumber::new(7).unwrap_or_else(|err| panic!("valid issue number: {err}"))
}

pub fn comment(commenter: &str, body: &str) -> CommentEvent {
    CommentEvent::new(issue(), commenter, body)
}

#[fixture]
pub fn config() -> Configuration {
    Configuration::new(AuthToken::new("token"))
        .with_maintainers(["alice", "carol-admin"])
        .with_days_until_unassign(7)
        .with_labels("Assigned", "Pinned")
}
