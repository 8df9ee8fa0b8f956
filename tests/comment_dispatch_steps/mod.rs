//! Step definitions for comment dispatch scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
