use super::{ApiOutcome, TimeTrackerApi};
use crate::libs::messages::Message;
use crate::libs::worklog::{RemoteWorkLog, User, WorkLogEntry};
use crate::msg_info;
use anyhow::Result;
use chrono::NaiveDate;

/// Reads from the wrapped service, only pretends to write.
#[derive(Debug, Clone)]
pub struct DryRun<A> {
    inner: A,
}

impl<A: TimeTrackerApi> DryRun<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: TimeTrackerApi> TimeTrackerApi for DryRun<A> {
    async fn current_user(&self) -> Result<User> {
        self.inner.current_user().await
    }

    async fn work_logs(&self, date: NaiveDate) -> Result<Vec<RemoteWorkLog>> {
        self.inner.work_logs(date).await
    }

    async fn create_work_log(&self, entry: &WorkLogEntry) -> Result<ApiOutcome<Option<String>>> {
        msg_info!(Message::DryRunCreate {
            hours: entry.hours(),
            comment: entry.comment.clone(),
        });
        Ok(ApiOutcome::Done(None))
    }

    async fn delete_work_log(&self, id: &str) -> Result<ApiOutcome<()>> {
        msg_info!(Message::DryRunDelete(id.to_string()));
        Ok(ApiOutcome::Done(()))
    }
}
