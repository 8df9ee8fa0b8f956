//! Reply rendering port.

use thiserror::Error;

use crate::assignment::domain::{Reply, ReplyKind};

/// Renders acknowledgment replies from configured templates.
pub trait ReplyRenderer: Send + Sync {
    /// Renders `template` with the variables carried by `reply`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template is malformed or rendering
    /// fails.
    fn render(&self, template: &str, reply: &Reply) -> Result<String, RenderError>;
}

/// Error raised while rendering a reply template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {kind} reply: {reason}")]
pub struct RenderError {
    /// Reply being rendered.
    pub kind: ReplyKind,
    /// Rendering failure reason.
    pub reason: String,
}

impl RenderError {
    /// Creates a render error.
    #[must_use]
    pub fn new(kind: ReplyKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}
