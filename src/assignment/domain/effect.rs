//! Planned side effects for a dispatch decision.
//!
//! Rules never talk to the tracker. They return a [`Decision`] whose
//! [`EffectPlan`] lists at most one assignee change, one label change and one
//! reply; the dispatcher executes the plan after the outcome is final.

use super::{DispatchOutcome, Reply};

/// Change to the issue's assignees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeChange {
    /// Add the handle as an assignee.
    Add(String),
    /// Remove the handle from the assignees.
    Remove(String),
}

/// Change to the issue's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelChange {
    /// Add the label.
    Add(String),
    /// Remove the label.
    Remove(String),
}

/// Tracker mutations and reply for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectPlan {
    /// Assignee mutation, if any.
    pub assignee: Option<AssigneeChange>,
    /// Label mutation, if any.
    pub label: Option<LabelChange>,
    /// Reply to post, if any.
    pub reply: Option<Reply>,
}

impl EffectPlan {
    /// A plan with no side effects.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            assignee: None,
            label: None,
            reply: None,
        }
    }

    /// A plan that only posts a reply.
    #[must_use]
    pub const fn reply(reply: Reply) -> Self {
        Self {
            assignee: None,
            label: None,
            reply: Some(reply),
        }
    }

    /// Adds `handle` as assignee, adds `label` when present, posts `reply`.
    #[must_use]
    pub fn assign(handle: impl Into<String>, label: Option<&str>, reply: Reply) -> Self {
        Self {
            assignee: Some(AssigneeChange::Add(handle.into())),
            label: label.map(|name| LabelChange::Add(name.to_owned())),
            reply: Some(reply),
        }
    }

    /// Removes `handle` as assignee, removes `label` when present, posts
    /// `reply`.
    #[must_use]
    pub fn unassign(handle: impl Into<String>, label: Option<&str>, reply: Reply) -> Self {
        Self {
            assignee: Some(AssigneeChange::Remove(handle.into())),
            label: label.map(|name| LabelChange::Remove(name.to_owned())),
            reply: Some(reply),
        }
    }

    /// Returns `true` when the plan has nothing to execute.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assignee.is_none() && self.label.is_none() && self.reply.is_none()
    }
}

/// A finalized outcome together with the side effects it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// The terminal outcome.
    pub outcome: DispatchOutcome,
    /// Side effects to execute for the outcome.
    pub effects: EffectPlan,
}

impl Decision {
    /// Creates a decision.
    #[must_use]
    pub const fn new(outcome: DispatchOutcome, effects: EffectPlan) -> Self {
        Self { outcome, effects }
    }

    /// A decision with no side effects.
    #[must_use]
    pub const fn quiet(outcome: DispatchOutcome) -> Self {
        Self::new(outcome, EffectPlan::none())
    }
}
