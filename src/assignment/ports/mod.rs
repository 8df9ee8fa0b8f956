//! Port contracts for comment dispatch.
//!
//! Ports define infrastructure-agnostic interfaces used by the dispatcher.

pub mod renderer;
pub mod tracker;

pub use renderer::{RenderError, ReplyRenderer};
pub use tracker::{IssueTracker, IssueTrackerError, IssueTrackerResult, TrackerOperation};
