//! Day-by-day processing of a date range.
//!
//! The user is resolved once before the first day; failing to do so aborts
//! the run. Days are then processed strictly one after the other. An error
//! while processing a day is logged and recorded in the [`RunReport`], and
//! the next day is processed as usual.

use super::config::Schedule;
use super::holidays::HolidayPredicate;
use super::messages::Message;
use super::plan::{DayKind, DayPlan, DayPlanBuilder};
use super::reconcile::{Operation, OverridePolicy, ReconciliationEngine, RefillPolicy, SkipReason};
use crate::api::TimeTrackerApi;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub policy: OverridePolicy,
    pub refill: RefillPolicy,
}

/// Outcome of one day of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub kind: Option<DayKind>,
    pub operations: Vec<Operation>,
    pub error: Option<String>,
}

impl DayReport {
    fn failed(date: NaiveDate, error: String) -> Self {
        Self {
            date,
            kind: None,
            operations: Vec::new(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub days: Vec<DayReport>,
}

impl RunReport {
    fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.days.iter().flat_map(|day| day.operations.iter())
    }

    pub fn created(&self) -> usize {
        self.operations().filter(|op| matches!(op, Operation::Created { .. })).count()
    }

    pub fn deleted(&self) -> usize {
        self.operations().filter(|op| matches!(op, Operation::Deleted { .. })).count()
    }

    pub fn skipped(&self) -> usize {
        self.operations().filter(|op| matches!(op, Operation::Skipped(_))).count()
    }

    /// Failed creates and deletes plus days that could not be processed.
    pub fn failures(&self) -> usize {
        let failed_operations = self.operations().filter(|op| op.is_failure()).count();
        let failed_days = self.days.iter().filter(|day| day.error.is_some()).count();
        failed_operations + failed_days
    }

    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}

pub struct RangeRunner<'a, A: TimeTrackerApi, H: HolidayPredicate> {
    api: &'a A,
    schedule: &'a Schedule,
    holidays: &'a H,
    settings: RunSettings,
}

impl<'a, A: TimeTrackerApi, H: HolidayPredicate> RangeRunner<'a, A, H> {
    pub fn new(api: &'a A, schedule: &'a Schedule, holidays: &'a H, settings: RunSettings) -> Self {
        Self {
            api,
            schedule,
            holidays,
            settings,
        }
    }

    /// Processes every day from `start` to `end`, both included.
    pub async fn run<R: Rng + ?Sized>(&self, start: NaiveDate, end: NaiveDate, rng: &mut R) -> Result<RunReport> {
        if start > end {
            msg_bail_anyhow!(Message::InvalidDateRange {
                from: start.to_string(),
                to: end.to_string(),
            });
        }

        msg_print!(Message::RunStarted {
            from: start.to_string(),
            to: end.to_string(),
        });

        let user = self
            .api
            .current_user()
            .await
            .map_err(|e| msg_error_anyhow!(Message::UserLookupFailed(e.to_string())))?;
        msg_info!(Message::UserResolved(user.id.clone()));

        let builder = DayPlanBuilder::new(self.schedule, self.holidays);
        let engine = ReconciliationEngine::from_schedule(self.api, self.schedule, self.settings.refill);
        let mut report = RunReport::default();

        for date in start.iter_days().take_while(|date| *date <= end) {
            msg_print!(Message::DayHeader(date.format("%A %d %B %Y").to_string()), true);

            let day = match self.run_day(date, &user.id, &builder, &engine, rng).await {
                Ok(day) => day,
                Err(e) => {
                    msg_error!(Message::DayFailed {
                        date: date.to_string(),
                        error: e.to_string(),
                    });
                    DayReport::failed(date, e.to_string())
                }
            };
            report.days.push(day);
        }

        Ok(report)
    }

    async fn run_day<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        user_id: &str,
        builder: &DayPlanBuilder<'_, H>,
        engine: &ReconciliationEngine<'_, A>,
        rng: &mut R,
    ) -> Result<DayReport> {
        let plan: DayPlan = builder.build(date, rng)?;

        if plan.kind == DayKind::Weekend {
            msg_print!(Message::WeekendSkipped(date.format("%A").to_string()));
            return Ok(DayReport {
                date,
                kind: Some(plan.kind),
                operations: vec![Operation::Skipped(SkipReason::EmptyPlan)],
                error: None,
            });
        }
        if plan.kind == DayKind::Holiday {
            msg_info!(Message::HolidayPlanned);
        }

        let existing = self.api.work_logs(date).await?;
        let operations = engine.reconcile(&plan, &existing, user_id, self.settings.policy).await;

        Ok(DayReport {
            date,
            kind: Some(plan.kind),
            operations,
            error: None,
        })
    }
}
