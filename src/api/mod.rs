//! Remote time-tracking service.
//!
//! The reconciliation engine only talks to the service through the
//! [`TimeTrackerApi`] trait, which exposes the four operations it needs.
//! [`SevenPace`] implements it over HTTP with `reqwest`; [`DryRun`] wraps
//! any implementation and turns writes into log lines.
//!
//! Reads fail with an error. Writes distinguish transport failures
//! (`Err`) from requests the service answered with a non-2xx status
//! ([`ApiOutcome::Rejected`]), which callers log and move past.

use crate::libs::worklog::{RemoteWorkLog, User, WorkLogEntry};
use anyhow::Result;
use chrono::NaiveDate;

pub mod dry_run;
pub mod sevenpace;

pub use dry_run::DryRun;
pub use sevenpace::SevenPace;

/// Result of a write the service received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Done(T),
    Rejected { status: u16, reason: String },
}

/// Operations the engine needs from the time-tracking service.
#[allow(async_fn_in_trait)]
pub trait TimeTrackerApi {
    /// Identity of the authenticated account.
    async fn current_user(&self) -> Result<User>;

    /// Work logs recorded between 00:00 and 23:59 of `date`.
    async fn work_logs(&self, date: NaiveDate) -> Result<Vec<RemoteWorkLog>>;

    /// Creates a work log; on success carries the id assigned by the service when it returns one.
    async fn create_work_log(&self, entry: &WorkLogEntry) -> Result<ApiOutcome<Option<String>>>;

    async fn delete_work_log(&self, id: &str) -> Result<ApiOutcome<()>>;
}
