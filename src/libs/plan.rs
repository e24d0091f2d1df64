//! Target work logs for a single day.

use super::allocator::{allocate, AllocationError};
use super::activity::ActivityType;
use super::config::Schedule;
use super::holidays::HolidayPredicate;
use super::task::{TaskTemplate, TotalHours};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekend,
    Holiday,
    Working,
}

/// Ordered templates the remote service should hold for `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub tasks: Vec<TaskTemplate>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn total_hours(&self) -> u32 {
        self.tasks.total_hours()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Builds day plans from a schedule and a holiday calendar.
pub struct DayPlanBuilder<'a, H: HolidayPredicate> {
    schedule: &'a Schedule,
    holidays: &'a H,
}

impl<'a, H: HolidayPredicate> DayPlanBuilder<'a, H> {
    pub fn new(schedule: &'a Schedule, holidays: &'a H) -> Self {
        Self { schedule, holidays }
    }

    /// Weekends get an empty plan, holidays one full-day day-off entry and
    /// working days the static tasks followed by the non-zero random split.
    /// The split is skipped when the static tasks already fill the day.
    pub fn build<R: Rng + ?Sized>(&self, date: NaiveDate, rng: &mut R) -> Result<DayPlan, AllocationError> {
        if is_weekend(date) {
            return Ok(DayPlan {
                date,
                kind: DayKind::Weekend,
                tasks: Vec::new(),
            });
        }

        if self.holidays.is_public_holiday(date) {
            return Ok(DayPlan {
                date,
                kind: DayKind::Holiday,
                tasks: vec![TaskTemplate::new(
                    self.schedule.daily_hours,
                    ActivityType::DayOff,
                    &self.schedule.holiday_comment,
                )],
            });
        }

        let remaining = self.schedule.remaining_hours();
        let dynamic = match remaining {
            0 => Vec::new(),
            _ => allocate(rng, remaining, &self.schedule.dynamic_tasks)?,
        };
        let tasks = self
            .schedule
            .static_tasks
            .iter()
            .cloned()
            .chain(dynamic.into_iter().filter(|task| task.hours > 0))
            .collect();

        Ok(DayPlan {
            date,
            kind: DayKind::Working,
            tasks,
        })
    }
}
