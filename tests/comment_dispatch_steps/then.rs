//! Then steps for comment dispatch BDD scenarios.

use super::world::{DispatchWorld, issue_number};
use assignbot::assignment::domain::DispatchOutcome;
use rstest_bdd_macros::then;

#[then(r#"the outcome is an assignment of "{handle}""#)]
fn outcome_is_assignment(world: &DispatchWorld, handle: String) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    if *outcome != DispatchOutcome::Assigned(handle.clone()) {
        return Err(eyre::eyre!("expected assignment of @{handle}, got {outcome}"));
    }
    Ok(())
}

#[then(r#"the outcome is an unassignment of "{handle}""#)]
fn outcome_is_unassignment(world: &DispatchWorld, handle: String) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    if *outcome != DispatchOutcome::Unassigned(handle.clone()) {
        return Err(eyre::eyre!(
            "expected unassignment of @{handle}, got {outcome}"
        ));
    }
    Ok(())
}

#[then(r#"the comment is ignored because "{reason}""#)]
fn comment_is_ignored(world: &DispatchWorld, reason: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        DispatchOutcome::Ignored(actual) if actual.as_str() == reason => Ok(()),
        other => Err(eyre::eyre!("expected ignore reason {reason}, got {other}")),
    }
}

#[then(r#"the dispatch fails because "{reason}""#)]
fn dispatch_fails(world: &DispatchWorld, reason: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        DispatchOutcome::Failed(actual) if actual.as_str() == reason => Ok(()),
        other => Err(eyre::eyre!("expected failure {reason}, got {other}")),
    }
}

#[then(r#"issue #{number:u64} is assigned to "{handle}""#)]
fn issue_assigned_to(
    world: &DispatchWorld,
    number: u64,
    handle: String,
) -> Result<(), eyre::Report> {
    let record = world.tracker()?.issue(issue_number(number)?);
    if record.assignees.len() != 1 || !record.assignees.contains(&handle) {
        return Err(eyre::eyre!(
            "expected @{handle} as sole assignee, found {:?}",
            record.assignees
        ));
    }
    Ok(())
}

#[then("issue #{number:u64} has no assignee")]
fn issue_has_no_assignee(world: &DispatchWorld, number: u64) -> Result<(), eyre::Report> {
    let record = world.tracker()?.issue(issue_number(number)?);
    if !record.assignees.is_empty() {
        return Err(eyre::eyre!(
            "expected no assignees, found {:?}",
            record.assignees
        ));
    }
    Ok(())
}

#[then(r#"issue #{number:u64} has the label "{label}""#)]
fn issue_has_label(world: &DispatchWorld, number: u64, label: String) -> Result<(), eyre::Report> {
    let record = world.tracker()?.issue(issue_number(number)?);
    if !record.labels.contains(&label) {
        return Err(eyre::eyre!(
            "expected label {label}, found {:?}",
            record.labels
        ));
    }
    Ok(())
}

#[then(r#"issue #{number:u64} does not have the label "{label}""#)]
fn issue_lacks_label(
    world: &DispatchWorld,
    number: u64,
    label: String,
) -> Result<(), eyre::Report> {
    let record = world.tracker()?.issue(issue_number(number)?);
    if record.labels.contains(&label) {
        return Err(eyre::eyre!("expected label {label} to be removed"));
    }
    Ok(())
}

#[then(r#"a reply mentioning "{text}" is posted"#)]
fn reply_is_posted(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let issue = world
        .issue
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no issue seeded in scenario world"))?;
    let record = world.tracker()?.issue(issue.number);
    match record.comments.as_slice() {
        [reply] if reply.contains(&text) => Ok(()),
        comments => Err(eyre::eyre!(
            "expected a single reply containing {text:?}, found {comments:?}"
        )),
    }
}

#[then("the tracker receives no calls")]
fn tracker_untouched(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let calls = world.tracker()?.calls();
    if !calls.is_empty() {
        return Err(eyre::eyre!("expected no tracker calls, found {calls:?}"));
    }
    Ok(())
}

#[then(r#"the "{name}" output is "{value}""#)]
fn output_is(world: &DispatchWorld, name: String, value: String) -> Result<(), eyre::Report> {
    let pairs = world.outcome()?.status().pairs();
    if !pairs
        .iter()
        .any(|(key, flag)| *key == name && *flag == value)
    {
        return Err(eyre::eyre!("expected {name}={value}, found {pairs:?}"));
    }
    Ok(())
}

#[then("no step outputs are set")]
fn no_outputs(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let pairs = world.outcome()?.status().pairs();
    if !pairs.is_empty() {
        return Err(eyre::eyre!("expected no outputs, found {pairs:?}"));
    }
    Ok(())
}
