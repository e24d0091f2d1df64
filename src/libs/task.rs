use super::activity::ActivityType;
use serde::{Deserialize, Serialize};

/// Blueprint of a work log: how long, which activity, what comment.
///
/// Static templates carry fixed hours from the configuration. Dynamic
/// templates are configured with zero hours and receive their share of the
/// day from the allocator, always on a fresh copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    #[serde(default)]
    pub hours: u32,
    pub activity: ActivityType,
    pub comment: String,
}

impl TaskTemplate {
    pub fn new(hours: u32, activity: ActivityType, comment: &str) -> Self {
        TaskTemplate {
            hours,
            activity,
            comment: comment.to_string(),
        }
    }

    /// Copy of this template carrying `hours`.
    pub fn with_hours(&self, hours: u32) -> Self {
        TaskTemplate { hours, ..self.clone() }
    }
}

/// Sum of hours over a set of templates.
pub trait TotalHours {
    fn total_hours(&self) -> u32;
}

impl TotalHours for [TaskTemplate] {
    fn total_hours(&self) -> u32 {
        self.iter().map(|task| task.hours).sum()
    }
}

impl TotalHours for Vec<TaskTemplate> {
    fn total_hours(&self) -> u32 {
        self.as_slice().total_hours()
    }
}
