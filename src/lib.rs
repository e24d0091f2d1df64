//! # Autolog - automatic work-log filling
//!
//! A command-line utility that fills a 7pace Timetracker account with
//! daily work logs over a date range.
//!
//! ## Features
//!
//! - **Day plans**: fixed tasks plus a random split of the remaining hours
//! - **Holidays**: French public holidays and personal days off logged as day off
//! - **Reconciliation**: existing logs are kept, or replaced on demand,
//!   and full days off are never touched
//! - **Dry runs**: preview every create and delete without writing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use autolog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
