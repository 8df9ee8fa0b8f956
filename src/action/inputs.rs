//! Action input loading.
//!
//! GitHub exposes each `with:` input of a workflow step as an
//! `INPUT_<NAME>` environment variable. Values are trimmed, and blank values
//! count as not provided so the built-in defaults apply.

use std::collections::BTreeMap;
use std::env;
use thiserror::Error;

use crate::assignment::domain::{AuthToken, CommandTokens, Configuration, ReplyTemplates};

/// Input names understood by the action.
pub mod names {
    /// Tracker access token.
    pub const GITHUB_TOKEN: &str = "github_token";
    /// Label the issue must carry.
    pub const REQUIRED_LABEL: &str = "required_label";
    /// Self-assign command.
    pub const SELF_ASSIGN_CMD: &str = "self_assign_cmd";
    /// Self-unassign command.
    pub const SELF_UNASSIGN_CMD: &str = "self_unassign_cmd";
    /// Maintainer assign command prefix.
    pub const ASSIGN_USER_CMD: &str = "assign_user_cmd";
    /// Maintainer unassign command prefix.
    pub const UNASSIGN_USER_CMD: &str = "unassign_user_cmd";
    /// Whether contribution-interest phrases are acknowledged.
    pub const ENABLE_AUTO_SUGGESTION: &str = "enable_auto_suggestion";
    /// Comma-separated maintainer handles.
    pub const MAINTAINERS: &str = "maintainers";
    /// Days reported in assignment replies.
    pub const DAYS_UNTIL_UNASSIGN: &str = "days_until_unassign";
    /// Label added on assignment.
    pub const ASSIGNED_LABEL: &str = "assigned_label";
    /// Label that pins an assignment.
    pub const PIN_LABEL: &str = "pin_label";
    /// Assigned reply template.
    pub const ASSIGNED_COMMENT: &str = "assigned_comment";
    /// Already-assigned reply template.
    pub const ALREADY_ASSIGNED_COMMENT: &str = "already_assigned_comment";
    /// Unassigned reply template.
    pub const UNASSIGNED_COMMENT: &str = "unassigned_comment";
    /// Assignment-interest reply template.
    pub const ASSIGNMENT_SUGGESTION_COMMENT: &str = "assignment_suggestion_comment";
}

/// Source of raw action input values.
pub trait InputSource {
    /// Returns the raw value of input `name`, if set.
    fn input(&self, name: &str) -> Option<String>;
}

/// Reads inputs from `INPUT_<NAME>` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    /// Returns the environment variable name for input `name`.
    #[must_use]
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn input(&self, name: &str) -> Option<String> {
        env::var(Self::variable_name(name)).ok()
    }
}

impl InputSource for BTreeMap<String, String> {
    fn input(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Errors raised while reading action inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean input is not `true` or `false`.
    #[error(
        "input \"{name}\" does not meet YAML 1.2 \"Core Schema\" specification: {value} \
         (expected true|True|TRUE|false|False|FALSE)"
    )]
    InvalidBoolean {
        /// Input name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// A numeric input is not a non-negative integer.
    #[error("input \"{name}\" must be a non-negative integer, received \"{value}\"")]
    InvalidNumber {
        /// Input name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Builds a [`Configuration`] from action inputs, applying defaults for
/// anything not provided.
///
/// A missing token is not an error here; dispatch reports it as a failed
/// pre-check.
///
/// # Errors
///
/// Returns [`ConfigError`] when a boolean or numeric input cannot be parsed.
pub fn load_configuration(source: &impl InputSource) -> Result<Configuration, ConfigError> {
    let token = AuthToken::new(text(source, names::GITHUB_TOKEN).unwrap_or_default());
    let defaults = Configuration::new(token);

    let commands = CommandTokens {
        self_assign: text_or(source, names::SELF_ASSIGN_CMD, defaults.commands.self_assign),
        self_unassign: text_or(
            source,
            names::SELF_UNASSIGN_CMD,
            defaults.commands.self_unassign,
        ),
        assign_user: text_or(source, names::ASSIGN_USER_CMD, defaults.commands.assign_user),
        unassign_user: text_or(
            source,
            names::UNASSIGN_USER_CMD,
            defaults.commands.unassign_user,
        ),
    };
    let templates = ReplyTemplates {
        assigned: text_or(source, names::ASSIGNED_COMMENT, defaults.templates.assigned),
        already_assigned: text_or(
            source,
            names::ALREADY_ASSIGNED_COMMENT,
            defaults.templates.already_assigned,
        ),
        unassigned: text_or(
            source,
            names::UNASSIGNED_COMMENT,
            defaults.templates.unassigned,
        ),
        assignment_interest: text_or(
            source,
            names::ASSIGNMENT_SUGGESTION_COMMENT,
            defaults.templates.assignment_interest,
        ),
    };
    let enable_auto_suggestion = text(source, names::ENABLE_AUTO_SUGGESTION)
        .map(|raw| parse_boolean(names::ENABLE_AUTO_SUGGESTION, raw))
        .transpose()?
        .unwrap_or(defaults.enable_auto_suggestion);
    let days_until_unassign = text(source, names::DAYS_UNTIL_UNASSIGN)
        .map(|raw| parse_days(names::DAYS_UNTIL_UNASSIGN, raw))
        .transpose()?
        .unwrap_or(defaults.days_until_unassign);
    let maintainers = text(source, names::MAINTAINERS).unwrap_or_default();

    Ok(Configuration {
        required_label: text(source, names::REQUIRED_LABEL),
        commands,
        enable_auto_suggestion,
        days_until_unassign,
        assigned_label: text_or(source, names::ASSIGNED_LABEL, defaults.assigned_label),
        pin_label: text_or(source, names::PIN_LABEL, defaults.pin_label),
        templates,
        ..defaults
    }
    .with_maintainers(maintainers.split(',')))
}

fn text(source: &impl InputSource, name: &str) -> Option<String> {
    source
        .input(name)
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn text_or(source: &impl InputSource, name: &str, default: String) -> String {
    text(source, name).unwrap_or(default)
}

fn parse_boolean(name: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean { name, value: raw }),
    }
}

fn parse_days(name: &'static str, raw: String) -> Result<u32, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value: raw })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EnvInputs, InputSource, load_configuration, names};
    use crate::assignment::domain::{
        DEFAULT_ASSIGN_USER_CMD, DEFAULT_DAYS_UNTIL_UNASSIGN, DEFAULT_SELF_ASSIGN_CMD,
    };
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn inputs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_inputs_are_blank() {
        let source = inputs(&[(names::SELF_ASSIGN_CMD, "   "), (names::REQUIRED_LABEL, "")]);
        let config = load_configuration(&source).expect("defaults load");

        assert!(config.token.is_empty());
        assert_eq!(config.required_label, None);
        assert_eq!(config.commands.self_assign, DEFAULT_SELF_ASSIGN_CMD);
        assert_eq!(config.commands.assign_user, DEFAULT_ASSIGN_USER_CMD);
        assert_eq!(config.days_until_unassign, DEFAULT_DAYS_UNTIL_UNASSIGN);
        assert!(config.enable_auto_suggestion);
        assert!(config.maintainers.is_empty());
    }

    #[test]
    fn explicit_inputs_override_defaults() {
        let source = inputs(&[
            (names::GITHUB_TOKEN, " ghp_secret "),
            (names::REQUIRED_LABEL, "help wanted"),
            (names::SELF_ASSIGN_CMD, "/take"),
            (names::ENABLE_AUTO_SUGGESTION, "False"),
            (names::MAINTAINERS, " alice, ,bob ,"),
            (names::DAYS_UNTIL_UNASSIGN, "14"),
            (names::ASSIGNED_LABEL, "in progress"),
            (names::UNASSIGNED_COMMENT, "bye @{{ handle }}"),
        ]);
        let config = load_configuration(&source).expect("inputs load");

        assert_eq!(config.token.expose(), "ghp_secret");
        assert_eq!(config.required_label.as_deref(), Some("help wanted"));
        assert_eq!(config.commands.self_assign, "/take");
        assert!(!config.enable_auto_suggestion);
        assert_eq!(config.maintainers, ["alice", "bob"]);
        assert_eq!(config.days_until_unassign, 14);
        assert_eq!(config.assigned_label, "in progress");
        assert_eq!(config.templates.unassigned, "bye @{{ handle }}");
    }

    #[rstest]
    #[case("yes")]
    #[case("1")]
    #[case("tRUE")]
    fn rejects_non_yaml_booleans(#[case] raw: &str) {
        let source = inputs(&[(names::ENABLE_AUTO_SUGGESTION, raw)]);
        assert_eq!(
            load_configuration(&source),
            Err(ConfigError::InvalidBoolean {
                name: names::ENABLE_AUTO_SUGGESTION,
                value: raw.to_owned(),
            })
        );
    }

    #[rstest]
    #[case("-1")]
    #[case("seven")]
    #[case("2.5")]
    fn rejects_invalid_day_counts(#[case] raw: &str) {
        let source = inputs(&[(names::DAYS_UNTIL_UNASSIGN, raw)]);
        assert!(matches!(
            load_configuration(&source),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn env_variable_names_follow_actions_convention() {
        assert_eq!(
            EnvInputs::variable_name("days_until_unassign"),
            "INPUT_DAYS_UNTIL_UNASSIGN"
        );
        assert_eq!(EnvInputs::variable_name("pin label"), "INPUT_PIN_LABEL");
    }

    #[test]
    fn map_source_returns_raw_values() {
        let source = inputs(&[(names::PIN_LABEL, " Pinned ")]);
        assert_eq!(source.input(names::PIN_LABEL).as_deref(), Some(" Pinned "));
        assert_eq!(source.input(names::MAINTAINERS), None);
    }
}
