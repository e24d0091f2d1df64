//! 7pace Timetracker REST client.
//!
//! Every request targets `<api_url>/<endpoint>?api-version=3.2-beta` and
//! carries the configured token as a bearer `Authorization` header.

use super::{ApiOutcome, TimeTrackerApi};
use crate::libs::activity::ActivityType;
use crate::libs::config::SevenPaceConfig;
use crate::libs::worklog::{RemoteWorkLog, User, WorkLogEntry};
use crate::msg_debug;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;

pub const API_VERSION: &str = "3.2-beta";
const ME_URL: &str = "me";
const WORK_LOGS_URL: &str = "workLogs";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{endpoint} answered {status} - {reason}")]
    Status { endpoint: String, status: u16, reason: String },
}

#[derive(Deserialize, Debug)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize, Debug)]
struct MeData {
    user: User,
}

#[derive(Deserialize, Debug)]
struct ActivityTypeRef {
    id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WorkLogPayload {
    id: String,
    #[serde(default)]
    length: u64,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    activity_type: Option<ActivityTypeRef>,
    #[serde(default)]
    activity_type_id: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    user_id: Option<String>,
}

/// Reads a timestamp with or without offset; offset-less values are UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc()))
        .ok()
}

impl From<WorkLogPayload> for RemoteWorkLog {
    fn from(payload: WorkLogPayload) -> Self {
        let activity_id = payload
            .activity_type
            .map(|activity| activity.id)
            .or(payload.activity_type_id)
            .unwrap_or_default();
        RemoteWorkLog {
            id: payload.id,
            activity: ActivityType::from_id(&activity_id),
            length_in_seconds: payload.length,
            comment: payload.comment.unwrap_or_default(),
            timestamp: payload.timestamp.as_deref().and_then(parse_timestamp),
            user_id: payload.user_id.or(payload.user.map(|user| user.id)),
        }
    }
}

#[derive(Deserialize, Debug)]
struct CreatedWorkLog {
    id: String,
}

#[derive(Debug, Clone)]
pub struct SevenPace {
    client: Client,
    config: SevenPaceConfig,
}

impl SevenPace {
    pub fn new(config: &SevenPaceConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .query(&[("api-version", API_VERSION)])
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.api_token))
    }

    async fn ensure_success(endpoint: &str, res: Response) -> Result<Response> {
        let status = res.status();
        msg_debug!(format!("GET {} answered {}", endpoint, status));
        if status.is_success() {
            return Ok(res);
        }
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            reason: Self::reason(res).await,
        }
        .into())
    }

    async fn reason(res: Response) -> String {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        match body.trim() {
            "" => status.canonical_reason().unwrap_or("Unknown status").to_string(),
            text => text.to_string(),
        }
    }
}

impl TimeTrackerApi for SevenPace {
    async fn current_user(&self) -> Result<User> {
        let res = self.authorize(self.client.get(self.url(ME_URL))).send().await?;
        let res = Self::ensure_success(ME_URL, res).await?;
        let me = res.json::<DataEnvelope<MeData>>().await?;
        Ok(me.data.user)
    }

    async fn work_logs(&self, date: NaiveDate) -> Result<Vec<RemoteWorkLog>> {
        let day = date.format("%Y-%m-%d");
        let from = format!("{}T00:00:00", day);
        let to = format!("{}T23:59:00", day);
        let res = self
            .authorize(self.client.get(self.url(WORK_LOGS_URL)))
            .query(&[("$fromTimestamp", from.as_str()), ("$toTimestamp", to.as_str())])
            .send()
            .await?;
        let res = Self::ensure_success(WORK_LOGS_URL, res).await?;
        let logs = res.json::<DataEnvelope<Vec<WorkLogPayload>>>().await?;
        Ok(logs.data.into_iter().map(RemoteWorkLog::from).collect())
    }

    async fn create_work_log(&self, entry: &WorkLogEntry) -> Result<ApiOutcome<Option<String>>> {
        let res = self
            .authorize(self.client.post(self.url(WORK_LOGS_URL)))
            .json(entry)
            .send()
            .await?;

        let status = res.status();
        msg_debug!(format!("POST {} answered {}", WORK_LOGS_URL, status));
        if !status.is_success() {
            return Ok(ApiOutcome::Rejected {
                status: status.as_u16(),
                reason: Self::reason(res).await,
            });
        }

        let created = res.json::<DataEnvelope<CreatedWorkLog>>().await.ok();
        Ok(ApiOutcome::Done(created.map(|created| created.data.id)))
    }

    async fn delete_work_log(&self, id: &str) -> Result<ApiOutcome<()>> {
        let endpoint = format!("{}/{}", WORK_LOGS_URL, id);
        let res = self.authorize(self.client.delete(self.url(&endpoint))).send().await?;

        let status = res.status();
        msg_debug!(format!("DELETE {} answered {}", endpoint, status));
        if !status.is_success() {
            return Ok(ApiOutcome::Rejected {
                status: status.as_u16(),
                reason: Self::reason(res).await,
            });
        }
        Ok(ApiOutcome::Done(()))
    }
}
