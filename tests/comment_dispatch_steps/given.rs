//! Given steps for comment dispatch BDD scenarios.

use super::world::{DispatchWorld, SeededIssue, issue_number};
use rstest_bdd_macros::given;

#[given(r#"a repository whose maintainers are "{maintainers}""#)]
fn repository_maintainers(world: &mut DispatchWorld, maintainers: String) {
    world.config = world.config.clone().with_maintainers(maintainers.split(','));
}

#[given(r#"the issue must carry the label "{label}""#)]
fn required_label(world: &mut DispatchWorld, label: String) {
    world.config = world.config.clone().with_required_label(label);
}

#[given("issue #{number:u64} is unassigned")]
fn unassigned_issue(world: &mut DispatchWorld, number: u64) -> Result<(), eyre::Report> {
    world.issue = Some(SeededIssue {
        number: issue_number(number)?,
        assignee: None,
        labels: Vec::new(),
    });
    Ok(())
}

#[given(r#"issue #{number:u64} is labelled "{label}""#)]
fn labelled_issue(
    world: &mut DispatchWorld,
    number: u64,
    label: String,
) -> Result<(), eyre::Report> {
    world.issue = Some(SeededIssue {
        number: issue_number(number)?,
        assignee: None,
        labels: vec![label],
    });
    Ok(())
}

#[given(r#"issue #{number:u64} is assigned to "{assignee}" with the label "{label}""#)]
fn assigned_issue(
    world: &mut DispatchWorld,
    number: u64,
    assignee: String,
    label: String,
) -> Result<(), eyre::Report> {
    world.issue = Some(SeededIssue {
        number: issue_number(number)?,
        assignee: Some(assignee),
        labels: vec![label],
    });
    Ok(())
}
