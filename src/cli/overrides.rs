//! Per-invocation overrides of the persisted settings
//!
//! Flags shared by every command that builds a paycheck schedule. Overrides
//! apply to a single run and are never written back to the settings file.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{PaycheckError, PaycheckResult};
use crate::models::Money;

/// Schedule flags that take precedence over the settings file
#[derive(Args, Debug, Clone, Default)]
pub struct ScheduleOverrides {
    /// A known paycheck date to anchor the schedule (YYYY-MM-DD)
    #[arg(long)]
    pub anchor: Option<String>,

    /// Days between paychecks
    #[arg(long)]
    pub cadence: Option<i64>,

    /// Amount of one paycheck (e.g., "2581" or "2581.50")
    #[arg(long)]
    pub paycheck: Option<String>,
}

impl ScheduleOverrides {
    /// Return a copy of `settings` with these overrides applied and validated
    pub fn apply(&self, settings: &Settings) -> PaycheckResult<Settings> {
        let mut settings = settings.clone();

        if let Some(anchor) = &self.anchor {
            settings.anchor_date = parse_date(anchor)?;
        }

        if let Some(cadence) = self.cadence {
            settings.cadence_days = cadence;
        }

        if let Some(paycheck) = &self.paycheck {
            settings.paycheck_value = Money::parse(paycheck).map_err(|e| {
                PaycheckError::Validation(format!("Invalid paycheck amount: {}", e))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> PaycheckResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        PaycheckError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s.trim()))
    })
}
