use super::plan::{DayKind, DayPlan};
use super::runner::RunReport;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn plans(plans: &[DayPlan]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "HOURS", "ACTIVITY", "COMMENT"]);
        for plan in plans {
            let day = match plan.kind {
                DayKind::Weekend => "weekend",
                DayKind::Holiday => "holiday",
                DayKind::Working => "working",
            };
            if plan.is_empty() {
                table.add_row(row![plan.date.format("%a %Y-%m-%d"), day, "", "", ""]);
                continue;
            }
            for task in &plan.tasks {
                table.add_row(row![plan.date.format("%a %Y-%m-%d"), day, task.hours, task.activity, task.comment]);
            }
        }
        table.printstd();
    }

    pub fn summary(report: &RunReport) {
        let mut table = Table::new();

        table.add_row(row!["DAYS", "CREATED", "DELETED", "SKIPPED", "FAILURES"]);
        table.add_row(row![
            report.days.len(),
            report.created(),
            report.deleted(),
            report.skipped(),
            report.failures()
        ]);
        table.printstd();
    }
}
