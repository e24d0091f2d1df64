use crate::{
    api::{DryRun, SevenPace, TimeTrackerApi},
    libs::{
        config::Config,
        messages::Message,
        reconcile::{OverridePolicy, RefillPolicy},
        runner::{RangeRunner, RunReport, RunSettings},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct FillArgs {
    /// First day to fill (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,
    /// Last day to fill, included (YYYY-MM-DD); defaults to --from
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Replace existing work logs, except full days off
    #[arg(long)]
    force: bool,
    /// After a forced deletion, recreate the plan or leave the day empty
    #[arg(long, value_enum)]
    refill: Option<RefillPolicy>,
    /// Log creates and deletes without sending them
    #[arg(long)]
    dry_run: bool,
}

pub async fn cmd(args: FillArgs) -> Result<()> {
    let config = Config::read()?.with_env_overrides();
    config
        .validate()
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;
    let api = SevenPace::new(config.sevenpace()?);

    let settings = RunSettings {
        policy: match args.force {
            true => OverridePolicy::Force,
            false => OverridePolicy::Preserve,
        },
        refill: args.refill.unwrap_or(config.refill),
    };
    let to = args.to.unwrap_or(args.from);

    let report = match args.dry_run {
        true => {
            msg_info!(Message::RunDryRun);
            run(&DryRun::new(api), &config, settings, args.from, to).await?
        }
        false => run(&api, &config, settings, args.from, to).await?,
    };

    View::summary(&report);
    if report.has_failures() {
        msg_bail_anyhow!(Message::RunFinishedWithFailures(report.failures()));
    }
    msg_success!(Message::RunFinished);
    Ok(())
}

async fn run<A: TimeTrackerApi>(
    api: &A,
    config: &Config,
    settings: RunSettings,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<RunReport> {
    let calendar = config.holidays.calendar();
    let runner = RangeRunner::new(api, &config.schedule, &calendar, settings);
    runner.run(from, to, &mut rand::rng()).await
}
