//! Core library modules for autolog.
//!
//! - **Domain**: activities, task templates, work logs
//! - **Planning**: holiday calendar, random hour split, day plans
//! - **Reconciliation**: per-day convergence and the range runner
//! - **Infrastructure**: configuration, data directory, messages, tables
//!
//! ```rust,no_run
//! use autolog::libs::config::Config;
//! use autolog::libs::plan::DayPlanBuilder;
//! use chrono::NaiveDate;
//!
//! let config = Config::read()?;
//! let calendar = config.holidays.calendar();
//! let builder = DayPlanBuilder::new(&config.schedule, &calendar);
//! let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let plan = builder.build(date, &mut rand::rng())?;
//! println!("{} hour(s) planned", plan.total_hours());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod activity;
pub mod allocator;
pub mod config;
pub mod data_storage;
pub mod holidays;
pub mod messages;
pub mod plan;
pub mod reconcile;
pub mod runner;
pub mod task;
pub mod view;
pub mod worklog;
