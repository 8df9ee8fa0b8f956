//! Comment-driven issue assignment.
//!
//! A single issue comment is checked against a fixed, ordered set of command
//! rules: contribution-interest phrases, self-assign, self-unassign, and the
//! maintainer-only assign and unassign commands. At most one rule decides the
//! outcome, and the assignee, label and reply changes it implies are issued
//! to the tracker concurrently. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use assignbot::assignment::adapters::{InMemoryIssueTracker, MiniJinjaRenderer};
//! use assignbot::assignment::domain::{
//!     AuthToken, CommentEvent, Configuration, DispatchOutcome, IssueNumber,
//! };
//! use assignbot::assignment::services::CommandDispatcher;
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let issue = IssueNumber::new(42).expect("valid issue number");
//! let tracker = Arc::new(InMemoryIssueTracker::new());
//! let dispatcher = CommandDispatcher::new(
//!     Arc::new(Configuration::new(AuthToken::new("secret"))),
//!     Arc::clone(&tracker),
//!     Arc::new(MiniJinjaRenderer::new()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let event = CommentEvent::new(issue, "alice", "/assign-me");
//! let outcome = dispatcher.dispatch(&event).await.expect("dispatch succeeds");
//!
//! assert_eq!(outcome, DispatchOutcome::Assigned("alice".to_owned()));
//! assert!(tracker.issue(issue).assignees.contains("alice"));
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
