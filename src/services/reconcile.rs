//! Pay period reconciliation
//!
//! Buckets the bill table around "today" and the paycheck schedule, then
//! derives how much money should be on hand now and how much of the coming
//! paychecks is free to use.
//!
//! All bucketing compares days of the month only. A bill is never tied to a
//! particular month, so the comparisons ignore which month the next paycheck
//! falls in, apart from the explicit spillover rule for future bills.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::PaycheckResult;
use crate::models::{Bill, Money};
use crate::services::schedule::{first_day_of_month, last_day_of_month, PaycheckSchedule};

/// Bills sorted into the buckets a health check reports on
///
/// A bill may land in more than one bucket: when the next paycheck falls in
/// the following month, bills due before its day are counted as future bills
/// as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillBuckets {
    /// Due after the first paycheck of the month and on or before today
    pub past: Vec<Bill>,
    /// Due after today and before the next paycheck's day
    pub imminent: Vec<Bill>,
    /// To be covered by the paychecks still to come
    pub future: Vec<Bill>,
    /// No fixed due day; always counted
    pub leftover: Vec<Bill>,
}

impl BillBuckets {
    fn sum(bills: &[Bill]) -> Money {
        bills.iter().map(|b| b.amount).sum()
    }

    pub fn past_total(&self) -> Money {
        Self::sum(&self.past)
    }

    pub fn imminent_total(&self) -> Money {
        Self::sum(&self.imminent)
    }

    pub fn future_total(&self) -> Money {
        Self::sum(&self.future)
    }

    pub fn leftover_total(&self) -> Money {
        Self::sum(&self.leftover)
    }
}

/// Result of reconciling the bill table against the paycheck schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    /// Evaluation date
    pub today: NaiveDate,
    /// Paychecks received so far this month (on or before today)
    pub past_paychecks: Vec<NaiveDate>,
    /// First paycheck strictly after today
    pub next_paycheck: NaiveDate,
    /// Paychecks still to come this month (after today)
    pub remaining_paychecks: Vec<NaiveDate>,
    /// The bills behind each figure
    pub buckets: BillBuckets,
    /// Bills already paid this pay period
    pub past_bills: Money,
    /// Paychecks received this month minus bills paid
    pub current_balance: Money,
    /// Bills due before the next paycheck
    pub imminent_bills: Money,
    /// Bills the remaining paychecks have to cover
    pub future_bills: Money,
    /// Remaining paychecks this month minus future bills
    pub incoming_balance: Money,
    /// Living expenses with no due day
    pub leftover_bills: Money,
}

/// Service that reconciles bills against a paycheck schedule
pub struct Reconciler<'a> {
    schedule: &'a PaycheckSchedule,
    paycheck_value: Money,
}

impl<'a> Reconciler<'a> {
    /// Create a new reconciler
    pub fn new(schedule: &'a PaycheckSchedule, paycheck_value: Money) -> Self {
        Self {
            schedule,
            paycheck_value,
        }
    }

    /// Run the health check for `today`
    ///
    /// Fails only when the schedule yields no next paycheck, which means the
    /// anchor date is misconfigured.
    pub fn reconcile(&self, today: NaiveDate, bills: &[Bill]) -> PaycheckResult<HealthCheck> {
        let month_end = last_day_of_month(today);

        let past_paychecks = self
            .schedule
            .paychecks_in_range(first_day_of_month(today), today);
        let next_paycheck = self.schedule.next_paycheck_after(today)?;
        // Nothing is paid between tomorrow and the next paycheck
        let remaining_paychecks = self.schedule.paychecks_in_range(next_paycheck, month_end);

        let first_paycheck = past_paychecks.first().copied();
        let buckets = self.bucket_bills(today, first_paycheck, next_paycheck, bills);

        let past_bills = buckets.past_total();
        let imminent_bills = buckets.imminent_total();
        let future_bills = buckets.future_total();
        let leftover_bills = buckets.leftover_total();

        let current_balance = self.paycheck_value * past_paychecks.len() - past_bills;
        let incoming_balance = self.paycheck_value * remaining_paychecks.len() - future_bills;

        debug!(
            %today,
            %next_paycheck,
            past_paychecks = past_paychecks.len(),
            remaining_paychecks = remaining_paychecks.len(),
            %past_bills,
            %imminent_bills,
            %future_bills,
            %leftover_bills,
            "reconciled pay period"
        );

        Ok(HealthCheck {
            today,
            past_paychecks,
            next_paycheck,
            remaining_paychecks,
            buckets,
            past_bills,
            current_balance,
            imminent_bills,
            future_bills,
            incoming_balance,
            leftover_bills,
        })
    }

    /// Sort bills into buckets in a single pass
    ///
    /// `first_paycheck` is the earliest paycheck this month; without one no
    /// bill counts as paid yet.
    fn bucket_bills(
        &self,
        today: NaiveDate,
        first_paycheck: Option<NaiveDate>,
        next_paycheck: NaiveDate,
        bills: &[Bill],
    ) -> BillBuckets {
        let today_day = today.day();
        let next_day = next_paycheck.day();
        let spills_into_next_month = next_paycheck > last_day_of_month(today);

        let mut buckets = BillBuckets::default();

        for bill in bills {
            let Some(day) = bill.recurrence_day else {
                buckets.leftover.push(bill.clone());
                continue;
            };

            if let Some(first) = first_paycheck {
                if day > first.day() && day <= today_day {
                    buckets.past.push(bill.clone());
                }
            }

            if day > today_day && day < next_day {
                buckets.imminent.push(bill.clone());
            }

            // Past the month end, bills before the next paycheck's day are next
            // month's and fall to the coming paychecks too
            if day >= next_day || spills_into_next_month {
                buckets.future.push(bill.clone());
            }
        }

        buckets
    }
}
