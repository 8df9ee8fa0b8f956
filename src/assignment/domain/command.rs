//! Command matching over comment bodies.
//!
//! All case folding and whitespace trimming for command recognition happens
//! here. Exact commands compare the trimmed, lower-cased body against the
//! trimmed, lower-cased token. Prefix commands match case-insensitively at
//! the start of the trimmed body and hand back the original-case remainder so
//! handles keep their spelling.

use regex::Regex;
use std::sync::LazyLock;

use super::CommandTokens;

#[expect(
    clippy::expect_used,
    reason = "pattern is a literal and is covered by unit tests"
)]
static HANDLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z0-9-]{1,39})").expect("handle pattern must compile")
});

/// Returns the first `@handle` mention in `text`, without the `@`.
///
/// A handle is 1 to 39 characters from `[A-Za-z0-9-]`. Longer runs are cut at
/// 39 characters.
#[must_use]
pub fn extract_handle(text: &str) -> Option<&str> {
    HANDLE_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|handle| handle.as_str())
}

/// Lower-cases and trims text for command comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns `true` when `body` contains any of `phrases`, ignoring case.
#[must_use]
pub fn mentions_any(body: &str, phrases: &[&str]) -> bool {
    let haystack = body.to_lowercase();
    phrases
        .iter()
        .any(|phrase| haystack.contains(&phrase.to_lowercase()))
}

/// Matches comment bodies against configured command tokens.
#[derive(Debug, Clone, Copy)]
pub struct CommandMatcher<'a> {
    tokens: &'a CommandTokens,
}

impl<'a> CommandMatcher<'a> {
    /// Creates a matcher over the configured tokens.
    #[must_use]
    pub const fn new(tokens: &'a CommandTokens) -> Self {
        Self { tokens }
    }

    /// Returns `true` when the body is exactly the self-assign command.
    #[must_use]
    pub fn is_self_assign(&self, body: &str) -> bool {
        exact_match(body, &self.tokens.self_assign)
    }

    /// Returns `true` when the body is exactly the self-unassign command.
    #[must_use]
    pub fn is_self_unassign(&self, body: &str) -> bool {
        exact_match(body, &self.tokens.self_unassign)
    }

    /// Returns the text following the assign-user prefix, if the body starts
    /// with it.
    #[must_use]
    pub fn assign_user_argument<'b>(&self, body: &'b str) -> Option<&'b str> {
        strip_prefix_ignore_case(body, &self.tokens.assign_user)
    }

    /// Returns the text following the unassign-user prefix, if the body starts
    /// with it.
    #[must_use]
    pub fn unassign_user_argument<'b>(&self, body: &'b str) -> Option<&'b str> {
        strip_prefix_ignore_case(body, &self.tokens.unassign_user)
    }
}

fn exact_match(body: &str, command: &str) -> bool {
    let expected = normalize(command);
    !expected.is_empty() && normalize(body) == expected
}

fn strip_prefix_ignore_case<'b>(body: &'b str, prefix: &str) -> Option<&'b str> {
    let trimmed_prefix = prefix.trim();
    if trimmed_prefix.is_empty() {
        return None;
    }
    let trimmed_body = body.trim_start();
    let head = trimmed_body.get(..trimmed_prefix.len())?;
    if head.to_lowercase() != trimmed_prefix.to_lowercase() {
        return None;
    }
    trimmed_body.get(trimmed_prefix.len()..)
}
