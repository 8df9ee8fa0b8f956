//! Ordered command rules.
//!
//! Rules are pure functions from a [`RuleContext`] to an optional
//! [`Decision`]. [`RULES`] lists them in priority order; the first rule that
//! returns a decision wins and later rules are never consulted. A comment no
//! rule claims resolves to `no-matching-command`.

use chrono::{DateTime, Days, Utc};

use crate::assignment::domain::{
    AlreadyAssignedVars, AssignedVars, CONTRIBUTION_PHRASES, CommandMatcher, CommentEvent,
    Configuration, Decision, DispatchOutcome, EffectPlan, FailureReason, HandleCommand, HandleVars,
    IgnoreReason, Reply, extract_handle, mentions_any,
};

const UNASSIGN_DATE_FORMAT: &str = "%d %B %Y";

/// Inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    event: &'a CommentEvent,
    config: &'a Configuration,
    now: DateTime<Utc>,
}

impl<'a> RuleContext<'a> {
    /// Creates a rule context for one event.
    #[must_use]
    pub const fn new(
        event: &'a CommentEvent,
        config: &'a Configuration,
        now: DateTime<Utc>,
    ) -> Self {
        Self { event, config, now }
    }

    fn matcher(&self) -> CommandMatcher<'a> {
        CommandMatcher::new(&self.config.commands)
    }

    fn body(&self) -> &'a str {
        self.event.comment_body()
    }

    fn commenter(&self) -> &'a str {
        self.event.commenter_handle()
    }

    /// Formats the date the assignment lapses, `now + days_until_unassign`.
    fn unassign_by(&self) -> String {
        let days = self.config.days_until_unassign;
        self.now
            .checked_add_days(Days::new(u64::from(days)))
            .map_or_else(
                || format!("in {days} days"),
                |date| date.format(UNASSIGN_DATE_FORMAT).to_string(),
            )
    }
}

/// A command rule.
pub type Rule = fn(&RuleContext<'_>) -> Option<Decision>;

/// A rule with the name used in logs.
#[derive(Debug, Clone, Copy)]
pub struct NamedRule {
    /// Rule name.
    pub name: &'static str,
    /// Rule body.
    pub apply: Rule,
}

/// Command rules in priority order.
pub const RULES: &[NamedRule] = &[
    NamedRule {
        name: "contribution-interest",
        apply: contribution_interest,
    },
    NamedRule {
        name: "self-assign",
        apply: self_assign,
    },
    NamedRule {
        name: "self-unassign",
        apply: self_unassign,
    },
    NamedRule {
        name: "maintainer-commands",
        apply: maintainer_commands,
    },
];

/// Name reported when no rule matched.
pub const FALLBACK_RULE: &str = "no-match";

/// Checks the gates that must pass before any rule runs.
///
/// Returns the failure reason of the first gate that fails.
#[must_use]
pub fn precheck(config: &Configuration, event: &CommentEvent) -> Option<FailureReason> {
    if config.token.is_empty() {
        return Some(FailureReason::MissingToken);
    }
    match config.required_label.as_deref() {
        Some(label) if !label.is_empty() && !event.has_label(label) => {
            Some(FailureReason::MissingRequiredLabel {
                label: label.to_owned(),
            })
        }
        _ => None,
    }
}

/// Evaluates [`RULES`] in order and returns the winning rule's name and
/// decision.
#[must_use]
pub fn evaluate(context: &RuleContext<'_>) -> (&'static str, Decision) {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(context).map(|decision| (rule.name, decision)))
        .unwrap_or_else(|| {
            (
                FALLBACK_RULE,
                Decision::quiet(DispatchOutcome::Ignored(IgnoreReason::NoMatchingCommand)),
            )
        })
}

/// Acknowledges comments that express interest in contributing.
#[must_use]
pub fn contribution_interest(context: &RuleContext<'_>) -> Option<Decision> {
    if !context.config.enable_auto_suggestion
        || !mentions_any(context.body(), CONTRIBUTION_PHRASES)
    {
        return None;
    }
    let reply = Reply::AssignmentInterest(HandleVars {
        handle: context.commenter().to_owned(),
    });
    Some(Decision::new(
        DispatchOutcome::Ignored(IgnoreReason::InterestAcknowledged),
        EffectPlan::reply(reply),
    ))
}

/// Assigns the commenter unless someone is already assigned.
#[must_use]
pub fn self_assign(context: &RuleContext<'_>) -> Option<Decision> {
    if !context.matcher().is_self_assign(context.body()) {
        return None;
    }
    let commenter = context.commenter();
    if let Some(assignee) = context.event.issue_assignee() {
        let reply = Reply::AlreadyAssigned(AlreadyAssignedVars {
            unassigned_date: context.config.days_until_unassign.to_string(),
            handle: commenter.to_owned(),
            assignee: assignee.to_owned(),
        });
        return Some(Decision::new(
            DispatchOutcome::Ignored(IgnoreReason::AlreadyAssigned {
                assignee: assignee.to_owned(),
            }),
            EffectPlan::reply(reply),
        ));
    }
    Some(assign(context, commenter))
}

/// Unassigns the commenter when they are the current assignee.
#[must_use]
pub fn self_unassign(context: &RuleContext<'_>) -> Option<Decision> {
    if !context.matcher().is_self_unassign(context.body()) {
        return None;
    }
    let commenter = context.commenter();
    if !context.event.is_assignee(commenter) {
        return Some(Decision::quiet(DispatchOutcome::Ignored(
            IgnoreReason::NotTheAssignee,
        )));
    }
    Some(unassign(context, commenter))
}

/// Runs the maintainer assign and unassign commands.
///
/// Once reached, this rule always decides: callers who are not maintainers,
/// or an empty maintainer list, end evaluation without any extraction.
#[must_use]
pub fn maintainer_commands(context: &RuleContext<'_>) -> Option<Decision> {
    let config = context.config;
    if config.maintainers.is_empty() {
        return Some(Decision::quiet(DispatchOutcome::Ignored(
            IgnoreReason::NoMaintainersConfigured,
        )));
    }
    if !config.is_maintainer(context.commenter()) {
        return Some(Decision::quiet(DispatchOutcome::Ignored(
            IgnoreReason::NotAMaintainer,
        )));
    }

    let matcher = context.matcher();
    if let Some(argument) = matcher.assign_user_argument(context.body()) {
        return Some(match extract_handle(argument) {
            Some(handle) => assign(context, handle),
            None => Decision::quiet(DispatchOutcome::Ignored(IgnoreReason::NoHandleFound(
                HandleCommand::AssignUser,
            ))),
        });
    }
    if let Some(argument) = matcher.unassign_user_argument(context.body()) {
        return Some(match extract_handle(argument) {
            Some(handle) if context.event.is_assignee(handle) => unassign(context, handle),
            Some(handle) => Decision::quiet(DispatchOutcome::Ignored(
                IgnoreReason::HandleNotAssignee {
                    handle: handle.to_owned(),
                },
            )),
            None => Decision::quiet(DispatchOutcome::Ignored(IgnoreReason::NoHandleFound(
                HandleCommand::UnassignUser,
            ))),
        });
    }
    None
}

fn assign(context: &RuleContext<'_>, handle: &str) -> Decision {
    let config = context.config;
    let reply = Reply::Assigned(AssignedVars {
        total_days: config.days_until_unassign,
        unassigned_date: context.unassign_by(),
        handle: handle.to_owned(),
        pin_label: config.pin_label.clone(),
    });
    Decision::new(
        DispatchOutcome::Assigned(handle.to_owned()),
        EffectPlan::assign(handle, config.assigned_label(), reply),
    )
}

fn unassign(context: &RuleContext<'_>, handle: &str) -> Decision {
    let reply = Reply::Unassigned(HandleVars {
        handle: handle.to_owned(),
    });
    Decision::new(
        DispatchOutcome::Unassigned(handle.to_owned()),
        EffectPlan::unassign(handle, context.config.assigned_label(), reply),
    )
}
