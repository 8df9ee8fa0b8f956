//! Application services for comment dispatch.

mod dispatcher;
mod effects;
pub mod rules;

pub use dispatcher::{CommandDispatcher, DispatchError, DispatchResult};
pub use effects::run_effects;
