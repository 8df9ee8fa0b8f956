//! GitHub Actions integration.
//!
//! Reads the step inputs and the `issue_comment` webhook payload provided by
//! the runner, dispatches the comment through [`crate::assignment`] against
//! the GitHub REST API, and publishes the `assigned` / `unassigned` step
//! outputs.

pub mod inputs;
pub mod outputs;
pub mod payload;
pub mod runner;

pub use inputs::{ConfigError, EnvInputs, InputSource, load_configuration};
pub use outputs::{append_status, error_annotation, write_status};
pub use payload::{DecodedEvent, PayloadError, decode_event};
pub use runner::{ActionEnvironment, ActionError, dispatch_event, run_action};
