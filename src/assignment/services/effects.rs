//! Concurrent execution of an effect plan.

use std::slice;

use crate::assignment::domain::{AssigneeChange, EffectPlan, IssueNumber, LabelChange};
use crate::assignment::ports::{IssueTracker, IssueTrackerError, IssueTrackerResult};

/// Issues every tracker call in `plan` concurrently and waits for all of
/// them.
///
/// Every call is attempted even when a sibling fails. There is no rollback:
/// the returned errors describe the calls that failed, and any call not
/// listed has been applied.
///
/// # Errors
///
/// Returns the errors of every failed call, in assignee, label, comment
/// order.
pub async fn run_effects<T>(
    tracker: &T,
    issue: IssueNumber,
    plan: &EffectPlan,
    comment: Option<&str>,
) -> Result<(), Vec<IssueTrackerError>>
where
    T: IssueTracker + ?Sized,
{
    let assignee_call = async {
        match plan.assignee.as_ref() {
            Some(AssigneeChange::Add(handle)) => {
                tracker.add_assignees(issue, slice::from_ref(handle)).await
            }
            Some(AssigneeChange::Remove(handle)) => {
                tracker.remove_assignees(issue, slice::from_ref(handle)).await
            }
            None => Ok(()),
        }
    };
    let label_call = async {
        match plan.label.as_ref() {
            Some(LabelChange::Add(label)) => {
                tracker.add_labels(issue, slice::from_ref(label)).await
            }
            Some(LabelChange::Remove(label)) => tracker.remove_label(issue, label).await,
            None => Ok(()),
        }
    };
    let comment_call = async {
        match comment {
            Some(body) => tracker.create_comment(issue, body).await,
            None => Ok(()),
        }
    };

    let (assignee_result, label_result, comment_result) =
        tokio::join!(assignee_call, label_call, comment_call);
    collect_failures([assignee_result, label_result, comment_result])
}

fn collect_failures(
    results: impl IntoIterator<Item = IssueTrackerResult<()>>,
) -> Result<(), Vec<IssueTrackerError>> {
    let failures: Vec<_> = results.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
