use crate::{
    libs::{config::Config, messages::Message, plan::DayPlanBuilder, view::View},
    msg_bail_anyhow, msg_error_anyhow, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// First day to plan (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,
    /// Last day to plan, included (YYYY-MM-DD); defaults to --from
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub fn cmd(args: PlanArgs) -> Result<()> {
    let config = Config::read()?;
    config
        .validate()
        .map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;

    let to = args.to.unwrap_or(args.from);
    if args.from > to {
        msg_bail_anyhow!(Message::InvalidDateRange {
            from: args.from.to_string(),
            to: to.to_string(),
        });
    }

    let calendar = config.holidays.calendar();
    let builder = DayPlanBuilder::new(&config.schedule, &calendar);
    let mut rng = rand::rng();
    let plans = args
        .from
        .iter_days()
        .take_while(|date| *date <= to)
        .map(|date| builder.build(date, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    msg_print!(
        Message::PlanHeader {
            from: args.from.to_string(),
            to: to.to_string(),
        },
        true
    );
    View::plans(&plans);
    msg_print!(Message::PlanTotalHours(plans.iter().map(|plan| plan.total_hours()).sum()));
    Ok(())
}
