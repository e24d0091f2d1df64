//! Display implementation for autolog messages.
//!
//! All message text is defined here, in one place, so wording stays
//! consistent between the console output and the tracing output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "Configuration file not found, nothing to delete".to_string(),
            Message::ConfigTokenMissing => {
                "No 7pace API token configured. Run `autolog init` or set AUTOLOG_API_TOKEN.".to_string()
            }
            Message::ConfigInvalid(reason) => format!("Invalid configuration: {}", reason),
            Message::ConfigSevenPaceHeader => "7pace Timetracker settings".to_string(),
            Message::ConfigScheduleHeader => "Schedule settings".to_string(),
            Message::PromptApiUrl => "Enter the 7pace REST API URL".to_string(),
            Message::PromptApiToken => "Enter your 7pace API token".to_string(),
            Message::PromptDailyHours => "Hours to log on a working day".to_string(),
            Message::PromptHolidayZone => "Public holidays to apply".to_string(),

            // === RUN MESSAGES ===
            Message::RunStarted { from, to } => format!("Start Time tracker from {} to {}", from, to),
            Message::RunDryRun => "Dry run: no work log will be created or deleted".to_string(),
            Message::RunFinished => "All days processed".to_string(),
            Message::RunFinishedWithFailures(count) => format!("Finished with {} failure(s), see the log above", count),
            Message::InvalidDateRange { from, to } => format!("Start date {} is after end date {}", from, to),
            Message::UserLookupFailed(error) => format!("Unable to identify the current user: {}", error),
            Message::UserResolved(id) => format!("Logging time for user {}", id),

            // === DAY MESSAGES ===
            Message::DayHeader(date) => date.clone(),
            Message::WeekendSkipped(day) => format!("--> Ignore {}s.", day.to_lowercase()),
            Message::HolidayPlanned => "Public holiday, logging a day off".to_string(),
            Message::WorkLogsAlreadyExist(count) => format!("Work logs already exist ({}), keeping them.", count),
            Message::FullDayOffKept => "Full day off already logged, nothing to do.".to_string(),
            Message::PartialDayOffKept => "Partial day off logged, leaving the day untouched.".to_string(),
            Message::DeletingAlongsideDayOff(count) => {
                format!("Day off already logged, removing {} other work log(s).", count)
            }
            Message::DeletingExisting(count) => format!("Replacing {} existing work log(s).", count),
            Message::RefillLeftEmpty => "Existing work logs removed, day left empty.".to_string(),
            Message::RefillAfterFailedDeletes(count) => {
                format!("{} work log(s) could not be deleted, refilling the day anyway.", count)
            }
            Message::DayFailed { date, error } => format!("Failed to process {}: {}", date, error),

            // === WORK LOG MESSAGES ===
            Message::WorkLogAdding { hours, comment } => format!("Add {} hour(s) with comment \"{}\"", hours, comment),
            Message::WorkLogCreateFailed { comment, reason } => {
                format!("Failed to add work log \"{}\": {}", comment, reason)
            }
            Message::WorkLogDeleted { id, hours, comment } => {
                format!("Deleted work log {} ({} hour(s), \"{}\")", id, hours, comment)
            }
            Message::WorkLogDeleteFailed { id, reason } => format!("Failed to delete work log {}: {}", id, reason),
            Message::DryRunCreate { hours, comment } => {
                format!("[dry run] would add {} hour(s) with comment \"{}\"", hours, comment)
            }
            Message::DryRunDelete(id) => format!("[dry run] would delete work log {}", id),

            // === PLAN MESSAGES ===
            Message::PlanHeader { from, to } => format!("Planned work logs from {} to {}", from, to),
            Message::PlanTotalHours(hours) => format!("Total: {} hour(s)", hours),
        };
        write!(f, "{}", text)
    }
}
