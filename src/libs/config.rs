//! Configuration management for autolog.
//!
//! Settings live in a pretty-printed `config.json` inside the platform data
//! directory (see [`DataStorage`]). The file has independent sections:
//!
//! - **sevenpace**: REST API URL and bearer token
//! - **schedule**: daily hour target, fixed tasks and randomly split tasks
//! - **holidays**: holiday zone and personal days off
//! - **refill**: what a forced run does after deleting a day's work logs
//!
//! A missing file yields the defaults. The API URL and token can be
//! overridden through `AUTOLOG_API_URL` / `AUTOLOG_API_TOKEN`, which
//! `main` also loads from a `.env` file.
//!
//! ```rust,no_run
//! use autolog::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! config.validate()?;
//! println!("{} hour(s) a day", config.schedule.daily_hours);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::activity::ActivityType;
use super::data_storage::DataStorage;
use super::holidays::{HolidayCalendar, HolidayZone};
use super::reconcile::RefillPolicy;
use super::task::{TaskTemplate, TotalHours};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "https://cegid.timehub.7pace.com/api/rest";
pub const API_URL_ENV: &str = "AUTOLOG_API_URL";
pub const API_TOKEN_ENV: &str = "AUTOLOG_API_TOKEN";

const DEFAULT_DAILY_HOURS: u32 = 7;
const DEFAULT_HOLIDAY_COMMENT: &str = "Jour férié";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("daily hours must be greater than zero")]
    ZeroDailyHours,
    #[error("static tasks take {static_hours} hour(s), more than the {daily_hours} hour(s) of a working day")]
    StaticHoursExceedDay { static_hours: u32, daily_hours: u32 },
    #[error("{0} hour(s) are left to split but no dynamic task is configured")]
    NoDynamicTasks(u32),
}

/// Connection settings of the 7pace Timetracker REST API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SevenPaceConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
}

impl Default for SevenPaceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
        }
    }
}

impl SevenPaceConfig {
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigSevenPaceHeader);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            api_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiToken.to_string())
                .default(config.api_token)
                .interact_text()?,
        })
    }
}

/// What a working day, a holiday and the hour budget look like.
///
/// Static tasks are logged as-is every working day. Whatever the static
/// tasks leave of `daily_hours` is split at random across `dynamic_tasks`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Schedule {
    pub daily_hours: u32,
    pub static_tasks: Vec<TaskTemplate>,
    pub dynamic_tasks: Vec<TaskTemplate>,
    pub holiday_comment: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            daily_hours: DEFAULT_DAILY_HOURS,
            static_tasks: vec![
                TaskTemplate::new(1, ActivityType::ProjectManagement, "Daily DevOps & Réunions diverses"),
                TaskTemplate::new(3, ActivityType::Development, "DevOps"),
            ],
            dynamic_tasks: vec![
                TaskTemplate::new(0, ActivityType::Development, "Dev + PRs"),
                TaskTemplate::new(0, ActivityType::SaasOperation, "Support Production"),
                TaskTemplate::new(0, ActivityType::SaasOperation, "Support Dev"),
            ],
            holiday_comment: DEFAULT_HOLIDAY_COMMENT.to_string(),
        }
    }
}

impl Schedule {
    /// Hours left for the dynamic tasks once the static tasks are logged.
    pub fn remaining_hours(&self) -> u32 {
        self.daily_hours.saturating_sub(self.static_tasks.total_hours())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.daily_hours == 0 {
            return Err(ConfigError::ZeroDailyHours);
        }
        let static_hours = self.static_tasks.total_hours();
        if static_hours > self.daily_hours {
            return Err(ConfigError::StaticHoursExceedDay {
                static_hours,
                daily_hours: self.daily_hours,
            });
        }
        let remaining = self.remaining_hours();
        if remaining > 0 && self.dynamic_tasks.is_empty() {
            return Err(ConfigError::NoDynamicTasks(remaining));
        }
        Ok(())
    }
}

/// Which days are off besides weekends.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HolidayConfig {
    #[serde(default)]
    pub zone: HolidayZone,
    #[serde(default)]
    pub extra_days_off: Vec<NaiveDate>,
}

impl HolidayConfig {
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.zone).with_extra_days_off(self.extra_days_off.iter().copied())
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sevenpace: Option<SevenPaceConfig>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub holidays: HolidayConfig,
    #[serde(default)]
    pub refill: RefillPolicy,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Applies `AUTOLOG_API_URL` and `AUTOLOG_API_TOKEN` on top of the file settings.
    pub fn with_env_overrides(mut self) -> Self {
        let url = env::var(API_URL_ENV).ok().filter(|value| !value.is_empty());
        let token = env::var(API_TOKEN_ENV).ok().filter(|value| !value.is_empty());
        if url.is_none() && token.is_none() {
            return self;
        }

        let mut sevenpace = self.sevenpace.take().unwrap_or_default();
        if let Some(url) = url {
            sevenpace.api_url = url;
        }
        if let Some(token) = token {
            sevenpace.api_token = token;
        }
        self.sevenpace = Some(sevenpace);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schedule.validate()
    }

    /// API settings usable for remote calls; a missing token is an error.
    pub fn sevenpace(&self) -> Result<&SevenPaceConfig> {
        match &self.sevenpace {
            Some(sevenpace) if !sevenpace.api_token.trim().is_empty() => Ok(sevenpace),
            _ => Err(msg_error_anyhow!(Message::ConfigTokenMissing)),
        }
    }

    /// Interactive setup wizard, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;

        config.sevenpace = Some(SevenPaceConfig::init(&config.sevenpace)?);

        msg_print!(Message::ConfigScheduleHeader);
        let current_schedule = config.schedule.clone();
        let daily_hours: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDailyHours.to_string())
            .default(current_schedule.daily_hours)
            .validate_with(|hours: &u32| -> Result<(), String> {
                let mut schedule = current_schedule.clone();
                schedule.daily_hours = *hours;
                schedule.validate().map_err(|e| e.to_string())
            })
            .interact_text()?;
        config.schedule.daily_hours = daily_hours;

        let zones = [HolidayZone::Metropole, HolidayZone::AlsaceMoselle];
        let current = zones.iter().position(|zone| *zone == config.holidays.zone).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHolidayZone.to_string())
            .items(&["Metropolitan France", "Alsace-Moselle"])
            .default(current)
            .interact()?;
        config.holidays.zone = zones[selection];

        Ok(config)
    }
}
