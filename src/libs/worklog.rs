//! Work-log records exchanged with the time-tracking service.

use super::activity::ActivityType;
use super::task::TaskTemplate;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const ONE_HOUR_IN_SECONDS: u64 = 3600;

/// Authenticated account the work logs are written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

/// A work log ready to be created on the remote service.
///
/// Built from a [`TaskTemplate`] once the day and the user are known. The
/// service assigns the id on creation, so an entry has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogEntry {
    #[serde(rename = "activityTypeId")]
    pub activity: ActivityType,
    #[serde(rename = "length")]
    pub length_in_seconds: u64,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    work_item_id: Option<String>,
}

impl WorkLogEntry {
    /// Binds a template to midnight UTC of `date` for `user_id`.
    pub fn from_template(template: &TaskTemplate, date: NaiveDate, user_id: &str) -> Self {
        Self {
            activity: template.activity.clone(),
            length_in_seconds: u64::from(template.hours) * ONE_HOUR_IN_SECONDS,
            comment: template.comment.clone(),
            timestamp: date.and_time(NaiveTime::MIN).and_utc(),
            user_id: user_id.to_string(),
            work_item_id: None,
        }
    }

    pub fn hours(&self) -> u64 {
        self.length_in_seconds / ONE_HOUR_IN_SECONDS
    }
}

/// A work log as it currently exists on the remote service.
///
/// `timestamp` and `user_id` are kept as the service reports them and are
/// `None` when a payload omits them.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteWorkLog {
    pub id: String,
    pub activity: ActivityType,
    pub length_in_seconds: u64,
    pub comment: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

impl RemoteWorkLog {
    pub fn is_day_off(&self) -> bool {
        self.activity.is_day_off()
    }

    /// Whether the log alone covers a whole day of `daily_hours`.
    pub fn is_full_day(&self, daily_hours: u32) -> bool {
        self.length_in_seconds == u64::from(daily_hours) * ONE_HOUR_IN_SECONDS
    }

    pub fn hours(&self) -> f64 {
        self.length_in_seconds as f64 / ONE_HOUR_IN_SECONDS as f64
    }
}
