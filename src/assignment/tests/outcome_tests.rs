//! Outcome identifiers and status signal mapping.

use rstest::rstest;

use crate::assignment::domain::{
    DispatchOutcome, FailureReason, HandleCommand, IgnoreReason, StatusSignals,
};

#[rstest]
#[case(DispatchOutcome::Assigned("bob".to_owned()), Some(true), None)]
#[case(DispatchOutcome::Unassigned("bob".to_owned()), None, Some(true))]
#[case(
    DispatchOutcome::Ignored(IgnoreReason::AlreadyAssigned { assignee: "alice".to_owned() }),
    Some(false),
    None
)]
#[case(
    DispatchOutcome::Ignored(IgnoreReason::NoHandleFound(HandleCommand::AssignUser)),
    Some(false),
    None
)]
#[case(
    DispatchOutcome::Ignored(IgnoreReason::NoHandleFound(HandleCommand::UnassignUser)),
    None,
    Some(false)
)]
#[case(DispatchOutcome::Ignored(IgnoreReason::NotTheAssignee), None, Some(false))]
#[case(
    DispatchOutcome::Ignored(IgnoreReason::HandleNotAssignee { handle: "dave".to_owned() }),
    None,
    Some(false)
)]
#[case(DispatchOutcome::Ignored(IgnoreReason::NotAMaintainer), None, None)]
#[case(DispatchOutcome::Ignored(IgnoreReason::NoMatchingCommand), None, None)]
#[case(DispatchOutcome::Failed(FailureReason::MissingToken), None, None)]
fn status_signals_follow_branch(
    #[case] outcome: DispatchOutcome,
    #[case] assigned: Option<bool>,
    #[case] unassigned: Option<bool>,
) {
    assert_eq!(
        outcome.status(),
        StatusSignals {
            assigned,
            unassigned
        }
    );
}

#[test]
fn status_pairs_skip_unset_signals() {
    let assigned = DispatchOutcome::Assigned("bob".to_owned()).status();
    assert_eq!(assigned.pairs(), [("assigned", "yes")]);

    let refused = DispatchOutcome::Ignored(IgnoreReason::NotTheAssignee).status();
    assert_eq!(refused.pairs(), [("unassigned", "no")]);

    assert!(StatusSignals::default().pairs().is_empty());
}

#[rstest]
#[case(IgnoreReason::InterestAcknowledged, "interest-acknowledged")]
#[case(IgnoreReason::NoMaintainersConfigured, "no-maintainers-configured")]
#[case(IgnoreReason::NoHandleFound(HandleCommand::UnassignUser), "no-handle-found")]
#[case(IgnoreReason::NoMatchingCommand, "no-matching-command")]
fn ignore_reasons_have_stable_identifiers(#[case] reason: IgnoreReason, #[case] expected: &str) {
    assert_eq!(reason.as_str(), expected);
    assert_eq!(reason.to_string(), expected);
}

#[test]
fn failure_messages_name_the_problem() {
    let missing = FailureReason::MissingRequiredLabel {
        label: "bug".to_owned(),
    };
    assert_eq!(missing.as_str(), "missing-required-label");
    assert_eq!(missing.to_string(), "missing required label \"bug\"");
    assert_eq!(
        DispatchOutcome::Failed(FailureReason::MissingToken).to_string(),
        "failed (missing required input \"token\")"
    );
}
