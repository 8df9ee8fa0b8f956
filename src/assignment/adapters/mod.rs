//! Adapter implementations for the assignment ports.

pub mod github;
pub mod memory;
pub mod template;

pub use github::{DEFAULT_API_BASE, GithubClientError, GithubIssueTracker, GithubRepository};
pub use memory::{InMemoryIssueTracker, IssueRecord, TrackerCall};
pub use template::MiniJinjaRenderer;
