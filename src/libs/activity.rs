//! Activity categories known to the time-tracking service.
//!
//! The service identifies activity types by opaque ids. The tool only ever
//! needs to tell them apart and to recognise the day-off category, so each
//! id the tool writes gets its own variant and everything else lands in
//! [`ActivityType::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

const PROJECT_MANAGEMENT_ID: &str = "d968a6e5-6d9f-4fa2-b248-5201bd9a3015";
const DEVELOPMENT_ID: &str = "c30c3a6d-aacd-46b2-833d-acd3d33d830d";
const SAAS_OPERATION_ID: &str = "6e00c587-525c-4c1d-880e-0e20fd815dd5";
const DAY_OFF_ID: &str = "61e63283-5eec-4853-9a1a-a15550da0d46";

/// Work classification attached to every work log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// "00. Project management and meetings"
    ProjectManagement,
    /// "03. Development"
    Development,
    /// "01. Deployment: SAAS Operations"
    SaasOperation,
    /// "17. OoB : Time off", holidays and leave
    DayOff,
    /// Any activity id the tool does not create itself
    Other(String),
}

impl ActivityType {
    /// Opaque id used by the remote service.
    pub fn id(&self) -> &str {
        match self {
            ActivityType::ProjectManagement => PROJECT_MANAGEMENT_ID,
            ActivityType::Development => DEVELOPMENT_ID,
            ActivityType::SaasOperation => SAAS_OPERATION_ID,
            ActivityType::DayOff => DAY_OFF_ID,
            ActivityType::Other(id) => id,
        }
    }

    pub fn from_id(id: &str) -> Self {
        match id {
            PROJECT_MANAGEMENT_ID => ActivityType::ProjectManagement,
            DEVELOPMENT_ID => ActivityType::Development,
            SAAS_OPERATION_ID => ActivityType::SaasOperation,
            DAY_OFF_ID => ActivityType::DayOff,
            other => ActivityType::Other(other.to_string()),
        }
    }

    pub fn is_day_off(&self) -> bool {
        matches!(self, ActivityType::DayOff)
    }
}

impl From<String> for ActivityType {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<ActivityType> for String {
    fn from(activity: ActivityType) -> Self {
        activity.id().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::ProjectManagement => write!(f, "Project management"),
            ActivityType::Development => write!(f, "Development"),
            ActivityType::SaasOperation => write!(f, "SaaS operations"),
            ActivityType::DayOff => write!(f, "Day off"),
            ActivityType::Other(id) => write!(f, "Other ({})", id),
        }
    }
}
