//! Assignbot: comment-driven issue assignment for GitHub repositories.
//!
//! Contributors claim or release an issue by commenting a short command, and
//! maintainers assign or unassign others the same way. Each comment is
//! evaluated against an ordered rule set and turned into at most one
//! assignment change, a label change and a reply.
//!
//! # Architecture
//!
//! Assignbot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure decision logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the issue tracker and renderer
//! - **Adapters**: Concrete implementations of ports (GitHub, in-memory,
//!   templates)
//!
//! # Modules
//!
//! - [`assignment`]: Command rules, dispatch and tracker adapters
//! - [`action`]: GitHub Actions inputs, payload decoding and outputs

pub mod action;
pub mod assignment;
