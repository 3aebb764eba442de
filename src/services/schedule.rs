//! Paycheck schedule
//!
//! Paychecks arrive on a fixed cadence from an anchor date with no holiday
//! shifts or skipped periods, so every paycheck date is `anchor + cadence * k`
//! for some `k >= 0`.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{PaycheckError, PaycheckResult};

/// Longest supported gap between paychecks
pub const MAX_CADENCE_DAYS: i64 = 366;

/// Fixed-cadence paycheck sequence anchored at a known first paycheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaycheckSchedule {
    anchor: NaiveDate,
    cadence_days: i64,
}

impl PaycheckSchedule {
    /// Create a schedule; the cadence must be between one day and a year
    pub fn new(anchor: NaiveDate, cadence_days: i64) -> PaycheckResult<Self> {
        if !(1..=MAX_CADENCE_DAYS).contains(&cadence_days) {
            return Err(PaycheckError::Config(format!(
                "Paycheck cadence must be between 1 and {} days, got {}",
                MAX_CADENCE_DAYS, cadence_days
            )));
        }

        Ok(Self {
            anchor,
            cadence_days,
        })
    }

    /// The first paycheck date of the sequence
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Days between consecutive paychecks
    pub fn cadence_days(&self) -> i64 {
        self.cadence_days
    }

    fn cadence(&self) -> Duration {
        Duration::days(self.cadence_days)
    }

    /// All paycheck dates within `[start_date, end_date]`, both inclusive, ascending
    ///
    /// Ranges that start before the anchor are fine; a range ending before the
    /// anchor, or an inverted range, yields nothing.
    pub fn paychecks_in_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> Vec<NaiveDate> {
        if end_date < self.anchor || start_date > end_date {
            return Vec::new();
        }

        let first = if start_date <= self.anchor {
            Some(self.anchor)
        } else {
            let offset = (start_date - self.anchor).num_days();
            // Round up to the first whole cadence at or after start_date
            let periods = (offset + self.cadence_days - 1) / self.cadence_days;
            self.anchor
                .checked_add_signed(Duration::days(periods * self.cadence_days))
        };

        // Stepping stops at the end of chrono's calendar as well as at end_date
        std::iter::successors(first, |date| date.checked_add_signed(self.cadence()))
            .take_while(|date| *date <= end_date)
            .collect()
    }

    /// The first paycheck strictly after `date`
    ///
    /// Looks one cadence ahead. With an unbroken cadence that window always
    /// holds exactly one paycheck once the anchor is near, so an empty window
    /// means the anchor is misconfigured (it lies further in the future than
    /// one full cadence).
    pub fn next_paycheck_after(&self, date: NaiveDate) -> PaycheckResult<NaiveDate> {
        let window_start = date.succ_opt().ok_or_else(|| {
            PaycheckError::Schedule(format!("no paycheck can follow {}", date))
        })?;
        let window_end = date
            .checked_add_signed(self.cadence())
            .unwrap_or(NaiveDate::MAX);

        self.paychecks_in_range(window_start, window_end)
            .first()
            .copied()
            .ok_or_else(|| {
                PaycheckError::Schedule(format!(
                    "no paycheck between {} and {} (anchor {}, every {} days)",
                    window_start, window_end, self.anchor, self.cadence_days
                ))
            })
    }

    /// All paychecks in the calendar month containing `date`
    pub fn paychecks_in_month(&self, date: NaiveDate) -> Vec<NaiveDate> {
        self.paychecks_in_range(first_day_of_month(date), last_day_of_month(date))
    }
}

/// First day of the month containing `date`
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // The first of the following month always exists for any valid NaiveDate
    // short of chrono's upper bound, which a paycheck never reaches.
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| next - Duration::days(1))
        .unwrap_or(date)
}
