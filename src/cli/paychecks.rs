//! Paycheck listing command

use chrono::Local;
use clap::Args;

use super::overrides::{parse_date, ScheduleOverrides};
use crate::config::Settings;
use crate::error::{PaycheckError, PaycheckResult};
use crate::services::{first_day_of_month, last_day_of_month};

/// Arguments for listing paycheck dates
#[derive(Args, Debug, Clone, Default)]
pub struct PaychecksArgs {
    /// First date of the range (YYYY-MM-DD); defaults to the start of this month
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last date of the range (YYYY-MM-DD); defaults to the end of the start's month
    #[arg(short, long)]
    pub end: Option<String>,

    #[command(flatten)]
    pub schedule: ScheduleOverrides,
}

/// List paycheck dates in the requested range, one per line
pub fn run_paychecks(settings: &Settings, args: &PaychecksArgs) -> PaycheckResult<String> {
    let settings = args.schedule.apply(settings)?;
    let schedule = settings.schedule()?;

    let start = match &args.start {
        Some(s) => parse_date(s)?,
        None => first_day_of_month(Local::now().date_naive()),
    };
    let end = match &args.end {
        Some(e) => parse_date(e)?,
        None => last_day_of_month(start),
    };

    if end < start {
        return Err(PaycheckError::Validation(format!(
            "End date {} is before start date {}",
            end, start
        )));
    }

    let dates = schedule.paychecks_in_range(start, end);
    let mut output = String::new();

    if dates.is_empty() {
        output.push_str(&format!("No paychecks between {} and {}.\n", start, end));
        return Ok(output);
    }

    for date in &dates {
        output.push_str(&format!(
            "{}  {}\n",
            date.format("%a %Y-%m-%d"),
            settings
                .paycheck_value
                .format_with_symbol(&settings.currency_symbol)
        ));
    }
    output.push_str(&format!(
        "{} paycheck(s), {} total\n",
        dates.len(),
        (settings.paycheck_value * dates.len()).format_with_symbol(&settings.currency_symbol)
    ));

    Ok(output)
}

/// Handle the paychecks command
pub fn handle_paychecks_command(settings: &Settings, args: PaychecksArgs) -> PaycheckResult<()> {
    print!("{}", run_paychecks(settings, &args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_month() {
        let args = PaychecksArgs {
            start: Some("2023-09-01".into()),
            ..Default::default()
        };

        let output = run_paychecks(&Settings::default(), &args).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Fri 2023-09-01  $2581.00");
        assert_eq!(lines[1], "Fri 2023-09-15  $2581.00");
        assert_eq!(lines[2], "Fri 2023-09-29  $2581.00");
        assert_eq!(lines[3], "3 paycheck(s), $7743.00 total");
    }

    #[test]
    fn test_empty_range() {
        let args = PaychecksArgs {
            start: Some("2023-09-02".into()),
            end: Some("2023-09-10".into()),
            ..Default::default()
        };

        let output = run_paychecks(&Settings::default(), &args).unwrap();
        assert_eq!(output, "No paychecks between 2023-09-02 and 2023-09-10.\n");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let args = PaychecksArgs {
            start: Some("2023-09-10".into()),
            end: Some("2023-09-01".into()),
            ..Default::default()
        };

        assert!(run_paychecks(&Settings::default(), &args).is_err());
    }
}
