#![allow(dead_code)]

use anyhow::Result;
use autolog::api::{ApiOutcome, TimeTrackerApi};
use autolog::libs::activity::ActivityType;
use autolog::libs::worklog::{RemoteWorkLog, User, WorkLogEntry, ONE_HOUR_IN_SECONDS};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const USER_ID: &str = "user-42";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CurrentUser,
    WorkLogs(NaiveDate),
    Create(WorkLogEntry),
    Delete(String),
}

/// Start or end of a write, keyed `create:<comment>` or `delete:<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Start(String),
    End(String),
}

/// In-memory time tracker recording every call it receives.
///
/// Writes yield to the runtime between their start and end, so writes
/// polled together overlap on the timeline.
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    timeline: Mutex<Vec<Step>>,
    existing: HashMap<NaiveDate, Vec<RemoteWorkLog>>,
    fail_user: bool,
    broken_days: HashSet<NaiveDate>,
    rejected_comments: HashSet<String>,
    rejected_deletes: HashSet<String>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, date: NaiveDate, logs: Vec<RemoteWorkLog>) -> Self {
        self.existing.insert(date, logs);
        self
    }

    pub fn failing_user(mut self) -> Self {
        self.fail_user = true;
        self
    }

    pub fn broken_day(mut self, date: NaiveDate) -> Self {
        self.broken_days.insert(date);
        self
    }

    pub fn rejecting_comment(mut self, comment: &str) -> Self {
        self.rejected_comments.insert(comment.to_string());
        self
    }

    pub fn rejecting_delete(mut self, id: &str) -> Self {
        self.rejected_deletes.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<WorkLogEntry> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Create(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn timeline(&self) -> Vec<Step> {
        self.timeline.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn write(&self, key: String) {
        self.timeline.lock().unwrap().push(Step::Start(key.clone()));
        tokio::task::yield_now().await;
        self.timeline.lock().unwrap().push(Step::End(key));
    }
}

impl TimeTrackerApi for MockApi {
    async fn current_user(&self) -> Result<User> {
        self.record(Call::CurrentUser);
        if self.fail_user {
            anyhow::bail!("401 - Unauthorized");
        }
        Ok(User { id: USER_ID.to_string() })
    }

    async fn work_logs(&self, date: NaiveDate) -> Result<Vec<RemoteWorkLog>> {
        self.record(Call::WorkLogs(date));
        if self.broken_days.contains(&date) {
            anyhow::bail!("malformed payload");
        }
        Ok(self.existing.get(&date).cloned().unwrap_or_default())
    }

    async fn create_work_log(&self, entry: &WorkLogEntry) -> Result<ApiOutcome<Option<String>>> {
        self.record(Call::Create(entry.clone()));
        self.write(format!("create:{}", entry.comment)).await;
        if self.rejected_comments.contains(&entry.comment) {
            return Ok(ApiOutcome::Rejected {
                status: 400,
                reason: "Bad Request".to_string(),
            });
        }
        Ok(ApiOutcome::Done(Some(format!("new-{}", entry.comment))))
    }

    async fn delete_work_log(&self, id: &str) -> Result<ApiOutcome<()>> {
        self.record(Call::Delete(id.to_string()));
        self.write(format!("delete:{}", id)).await;
        if self.rejected_deletes.contains(id) {
            return Ok(ApiOutcome::Rejected {
                status: 404,
                reason: "Not Found".to_string(),
            });
        }
        Ok(ApiOutcome::Done(()))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn remote(id: &str, activity: ActivityType, hours: u64, comment: &str) -> RemoteWorkLog {
    RemoteWorkLog {
        id: id.to_string(),
        activity,
        length_in_seconds: hours * ONE_HOUR_IN_SECONDS,
        comment: comment.to_string(),
        timestamp: None,
        user_id: Some(USER_ID.to_string()),
    }
}
