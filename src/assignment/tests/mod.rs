//! Unit tests for the assignment module.
//!
//! Tests are organised by layer: command matching, individual rules, and the
//! dispatcher end to end against the in-memory tracker.

mod outcome_tests;
mod support;
