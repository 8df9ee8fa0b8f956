//! In-memory issue tracker for tests and dry runs.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::assignment::domain::IssueNumber;
use crate::assignment::ports::{
    IssueTracker, IssueTrackerError, IssueTrackerResult, TrackerOperation,
};

/// Snapshot of one issue held by [`InMemoryIssueTracker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRecord {
    /// Current assignees.
    pub assignees: BTreeSet<String>,
    /// Current labels.
    pub labels: BTreeSet<String>,
    /// Posted comment bodies, oldest first.
    pub comments: Vec<String>,
}

/// A tracker call as it was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCall {
    /// Operation attempted.
    pub operation: TrackerOperation,
    /// Target issue.
    pub issue: IssueNumber,
}

/// Thread-safe in-memory issue tracker.
///
/// Every attempted call is recorded, including calls that were made to fail
/// with [`InMemoryIssueTracker::fail_on`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    issues: HashMap<IssueNumber, IssueRecord>,
    calls: Vec<TrackerCall>,
    failing: HashSet<TrackerOperation>,
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an issue with an assignee and labels.
    #[must_use]
    pub fn with_issue(
        self,
        issue: IssueNumber,
        assignee: Option<&str>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        if let Ok(mut state) = self.state.write() {
            let record = state.issues.entry(issue).or_default();
            record.assignees = assignee.map(ToOwned::to_owned).into_iter().collect();
            record.labels = labels.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Makes every future call of `operation` fail.
    #[must_use]
    pub fn fail_on(self, operation: TrackerOperation) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.failing.insert(operation);
        }
        self
    }

    /// Returns a snapshot of the issue, empty if it was never touched.
    #[must_use]
    pub fn issue(&self, issue: IssueNumber) -> IssueRecord {
        self.state
            .read()
            .map(|state| state.issues.get(&issue).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Returns every attempted call in order.
    #[must_use]
    pub fn calls(&self) -> Vec<TrackerCall> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    fn begin(
        &self,
        operation: TrackerOperation,
        issue: IssueNumber,
    ) -> IssueTrackerResult<RwLockWriteGuard<'_, InMemoryTrackerState>> {
        let mut state = self.state.write().map_err(|err| {
            IssueTrackerError::transport(operation, issue, std::io::Error::other(err.to_string()))
        })?;
        state.calls.push(TrackerCall { operation, issue });
        if state.failing.contains(&operation) {
            return Err(IssueTrackerError::Rejected {
                operation,
                issue,
                status: 500,
                message: "injected failure".to_owned(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn add_assignees(
        &self,
        issue: IssueNumber,
        handles: &[String],
    ) -> IssueTrackerResult<()> {
        let mut state = self.begin(TrackerOperation::AddAssignees, issue)?;
        let record = state.issues.entry(issue).or_default();
        record.assignees.extend(handles.iter().cloned());
        Ok(())
    }

    async fn remove_assignees(
        &self,
        issue: IssueNumber,
        handles: &[String],
    ) -> IssueTrackerResult<()> {
        let mut state = self.begin(TrackerOperation::RemoveAssignees, issue)?;
        let record = state.issues.entry(issue).or_default();
        record
            .assignees
            .retain(|assignee| !handles.contains(assignee));
        Ok(())
    }

    async fn add_labels(&self, issue: IssueNumber, labels: &[String]) -> IssueTrackerResult<()> {
        let mut state = self.begin(TrackerOperation::AddLabels, issue)?;
        let record = state.issues.entry(issue).or_default();
        record.labels.extend(labels.iter().cloned());
        Ok(())
    }

    async fn remove_label(&self, issue: IssueNumber, label: &str) -> IssueTrackerResult<()> {
        let mut state = self.begin(TrackerOperation::RemoveLabel, issue)?;
        let record = state.issues.entry(issue).or_default();
        record.labels.remove(label);
        Ok(())
    }

    async fn create_comment(&self, issue: IssueNumber, body: &str) -> IssueTrackerResult<()> {
        let mut state = self.begin(TrackerOperation::CreateComment, issue)?;
        let record = state.issues.entry(issue).or_default();
        record.comments.push(body.to_owned());
        Ok(())
    }
}
