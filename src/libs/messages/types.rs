/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation (`display.rs`); call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigTokenMissing,
    ConfigInvalid(String), // reason
    ConfigSevenPaceHeader,
    ConfigScheduleHeader,
    PromptApiUrl,
    PromptApiToken,
    PromptDailyHours,
    PromptHolidayZone,

    // === RUN MESSAGES ===
    RunStarted { from: String, to: String },
    RunDryRun,
    RunFinished,
    RunFinishedWithFailures(usize), // failure count
    InvalidDateRange { from: String, to: String },
    UserLookupFailed(String), // error
    UserResolved(String),     // user id

    // === DAY MESSAGES ===
    DayHeader(String),      // display date
    WeekendSkipped(String), // weekday name
    HolidayPlanned,
    WorkLogsAlreadyExist(usize),
    FullDayOffKept,
    PartialDayOffKept,
    DeletingAlongsideDayOff(usize),
    DeletingExisting(usize),
    RefillLeftEmpty,
    RefillAfterFailedDeletes(usize), // failed deletions
    DayFailed { date: String, error: String },

    // === WORK LOG MESSAGES ===
    WorkLogAdding { hours: u64, comment: String },
    WorkLogCreateFailed { comment: String, reason: String },
    WorkLogDeleted { id: String, hours: f64, comment: String },
    WorkLogDeleteFailed { id: String, reason: String },
    DryRunCreate { hours: u64, comment: String },
    DryRunDelete(String), // id

    // === PLAN MESSAGES ===
    PlanHeader { from: String, to: String },
    PlanTotalHours(u32),
}
