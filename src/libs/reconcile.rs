//! Converges one day of remote work logs towards its plan.
//!
//! The decision is taken by [`decide`], a pure function of the plan, the
//! existing logs and the policies, in this order:
//!
//! 1. empty plan (weekend): nothing to do
//! 2. no existing logs: create the plan
//! 3. existing logs, [`OverridePolicy::Preserve`]: keep them
//! 4. existing logs, [`OverridePolicy::Force`]:
//!    - a lone full-day day off is kept untouched
//!    - a full-day day off next to other logs: delete the others only
//!    - a partial day off anywhere: keep the whole day untouched
//!    - no day off: delete everything, then refill per [`RefillPolicy`];
//!      a failed delete is reported and the refill still runs
//!
//! [`ReconciliationEngine`] then executes the decision. Creates run one
//! after the other in plan order; deletes are sent together and all of them
//! complete before the first create of the day.

use super::config::Schedule;
use super::messages::Message;
use super::plan::DayPlan;
use super::worklog::{RemoteWorkLog, WorkLogEntry};
use crate::api::{ApiOutcome, TimeTrackerApi};
use crate::{msg_error, msg_info, msg_success, msg_warning};
use clap::ValueEnum;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

/// What to do with a day that already has work logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OverridePolicy {
    /// Never touch existing work logs
    #[default]
    Preserve,
    /// Replace existing work logs, except protected days off
    Force,
}

/// What a forced run does once a day without day off has been cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RefillPolicy {
    /// Create the full plan again
    #[default]
    Recreate,
    /// Leave the day empty
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyPlan,
    AlreadyLogged,
    FullDayOff,
    PartialDayOff,
    LeftEmpty,
}

/// Remote call issued for a day, with its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Created { entry: WorkLogEntry, id: Option<String> },
    CreateFailed { entry: WorkLogEntry, reason: String },
    Deleted { id: String },
    DeleteFailed { id: String, reason: String },
    Skipped(SkipReason),
}

impl Operation {
    pub fn is_failure(&self) -> bool {
        matches!(self, Operation::CreateFailed { .. } | Operation::DeleteFailed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision<'a> {
    Skip(SkipReason),
    Create,
    /// Delete these logs, keep the day off next to them
    DeleteBesideDayOff(Vec<&'a RemoteWorkLog>),
    /// Delete every existing log, then create the plan when `refill` is set
    Replace { refill: bool },
}

pub fn decide<'a>(
    plan: &DayPlan,
    existing: &'a [RemoteWorkLog],
    policy: OverridePolicy,
    refill: RefillPolicy,
    daily_hours: u32,
) -> Decision<'a> {
    if plan.is_empty() {
        return Decision::Skip(SkipReason::EmptyPlan);
    }
    if existing.is_empty() {
        return Decision::Create;
    }
    if policy == OverridePolicy::Preserve {
        return Decision::Skip(SkipReason::AlreadyLogged);
    }

    let full_day_off = |log: &RemoteWorkLog| log.is_day_off() && log.is_full_day(daily_hours);

    if let [only] = existing {
        if full_day_off(only) {
            return Decision::Skip(SkipReason::FullDayOff);
        }
    }

    if existing.iter().any(full_day_off) {
        let others = existing.iter().filter(|log| !log.is_day_off()).collect::<Vec<_>>();
        if others.is_empty() {
            // Several day-off entries, at least one covering the day
            return Decision::Skip(SkipReason::FullDayOff);
        }
        return Decision::DeleteBesideDayOff(others);
    }

    if existing.iter().any(RemoteWorkLog::is_day_off) {
        return Decision::Skip(SkipReason::PartialDayOff);
    }

    Decision::Replace {
        refill: refill == RefillPolicy::Recreate,
    }
}

/// Executes reconciliation decisions against a [`TimeTrackerApi`].
pub struct ReconciliationEngine<'a, A: TimeTrackerApi> {
    api: &'a A,
    daily_hours: u32,
    refill: RefillPolicy,
}

impl<'a, A: TimeTrackerApi> ReconciliationEngine<'a, A> {
    pub fn new(api: &'a A, daily_hours: u32, refill: RefillPolicy) -> Self {
        Self {
            api,
            daily_hours,
            refill,
        }
    }

    pub fn from_schedule(api: &'a A, schedule: &Schedule, refill: RefillPolicy) -> Self {
        Self::new(api, schedule.daily_hours, refill)
    }

    /// Brings the day of `plan` in line with it and returns what was done.
    ///
    /// Failed creates and deletes are logged and reported as operations;
    /// they never stop the remaining calls of the day.
    pub async fn reconcile(
        &self,
        plan: &DayPlan,
        existing: &[RemoteWorkLog],
        user_id: &str,
        policy: OverridePolicy,
    ) -> Vec<Operation> {
        match decide(plan, existing, policy, self.refill, self.daily_hours) {
            Decision::Skip(reason) => {
                self.report_skip(reason, existing.len());
                vec![Operation::Skipped(reason)]
            }
            Decision::Create => self.create_all(plan, user_id).await,
            Decision::DeleteBesideDayOff(others) => {
                msg_info!(Message::DeletingAlongsideDayOff(others.len()));
                self.delete_all(&others).await
            }
            Decision::Replace { refill } => {
                msg_info!(Message::DeletingExisting(existing.len()));
                let mut operations = self.delete_all(&existing.iter().collect::<Vec<_>>()).await;

                if !refill {
                    self.report_skip(SkipReason::LeftEmpty, existing.len());
                    operations.push(Operation::Skipped(SkipReason::LeftEmpty));
                    return operations;
                }

                let failed = operations.iter().filter(|op| op.is_failure()).count();
                if failed > 0 {
                    msg_warning!(Message::RefillAfterFailedDeletes(failed));
                }
                operations.extend(self.create_all(plan, user_id).await);
                operations
            }
        }
    }

    async fn create_all(&self, plan: &DayPlan, user_id: &str) -> Vec<Operation> {
        let mut operations = Vec::with_capacity(plan.tasks.len());

        for task in &plan.tasks {
            let entry = WorkLogEntry::from_template(task, plan.date, user_id);
            msg_info!(Message::WorkLogAdding {
                hours: entry.hours(),
                comment: entry.comment.clone(),
            });

            let reason = match self.api.create_work_log(&entry).await {
                Ok(ApiOutcome::Done(id)) => {
                    operations.push(Operation::Created { entry, id });
                    continue;
                }
                Ok(ApiOutcome::Rejected { status, reason }) => format!("{} - {}", status, reason),
                Err(e) => e.to_string(),
            };

            msg_error!(Message::WorkLogCreateFailed {
                comment: entry.comment.clone(),
                reason: reason.clone(),
            });
            operations.push(Operation::CreateFailed { entry, reason });
        }

        operations
    }

    async fn delete_all(&self, logs: &[&RemoteWorkLog]) -> Vec<Operation> {
        let results = join_all(logs.iter().map(|log| async move { (*log, self.api.delete_work_log(&log.id).await) })).await;

        results
            .into_iter()
            .map(|(log, result)| {
                let reason = match result {
                    Ok(ApiOutcome::Done(())) => {
                        msg_success!(Message::WorkLogDeleted {
                            id: log.id.clone(),
                            hours: log.hours(),
                            comment: log.comment.clone(),
                        });
                        return Operation::Deleted { id: log.id.clone() };
                    }
                    Ok(ApiOutcome::Rejected { status, reason }) => format!("{} - {}", status, reason),
                    Err(e) => e.to_string(),
                };

                msg_error!(Message::WorkLogDeleteFailed {
                    id: log.id.clone(),
                    reason: reason.clone(),
                });
                Operation::DeleteFailed {
                    id: log.id.clone(),
                    reason,
                }
            })
            .collect()
    }

    fn report_skip(&self, reason: SkipReason, existing: usize) {
        match reason {
            SkipReason::EmptyPlan => {}
            SkipReason::AlreadyLogged => msg_info!(Message::WorkLogsAlreadyExist(existing)),
            SkipReason::FullDayOff => msg_info!(Message::FullDayOffKept),
            SkipReason::PartialDayOff => msg_info!(Message::PartialDayOffKept),
            SkipReason::LeftEmpty => msg_info!(Message::RefillLeftEmpty),
        }
    }
}
