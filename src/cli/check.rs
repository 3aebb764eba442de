//! Health check command
//!
//! Loads the bill table, reconciles it against the paycheck schedule for the
//! evaluation date and prints the summary.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::debug;

use super::overrides::{parse_date, ScheduleOverrides};
use crate::config::Settings;
use crate::error::PaycheckResult;
use crate::reports::HealthCheckReport;
use crate::services::Reconciler;
use crate::storage::BillLedger;

/// Arguments for the health check
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Evaluation date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Path to the bill table CSV
    #[arg(short, long)]
    pub bills: Option<PathBuf>,

    /// Also show the paychecks and bills behind each figure
    #[arg(long)]
    pub breakdown: bool,

    #[command(flatten)]
    pub schedule: ScheduleOverrides,
}

/// Run the health check and return the rendered output
///
/// Without `--date` the evaluation date is the local date at the time of
/// this call.
pub fn run_check(settings: &Settings, args: &CheckArgs) -> PaycheckResult<String> {
    let settings = args.schedule.apply(settings)?;
    let today = match &args.date {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };
    let bills_file = args.bills.as_ref().unwrap_or(&settings.bills_file);

    debug!(%today, bills_file = %bills_file.display(), "running health check");

    let ledger = BillLedger::load(bills_file)?;
    debug!(total = %ledger.total(), "bill table total");
    render_check(&settings, &ledger, today, args.breakdown)
}

/// Reconcile an already-loaded ledger and render the report
pub fn render_check(
    settings: &Settings,
    ledger: &BillLedger,
    today: NaiveDate,
    breakdown: bool,
) -> PaycheckResult<String> {
    let schedule = settings.schedule()?;
    let reconciler = Reconciler::new(&schedule, settings.paycheck_value);
    let check = reconciler.reconcile(today, ledger.bills())?;

    let report = HealthCheckReport::new(&check, &settings.currency_symbol);
    let mut output = report.format_terminal();
    if breakdown {
        output.push('\n');
        output.push_str(&report.format_breakdown());
    }

    Ok(output)
}

/// Handle the check command
pub fn handle_check_command(settings: &Settings, args: CheckArgs) -> PaycheckResult<()> {
    print!("{}", run_check(settings, &args)?);
    Ok(())
}
