//! Health Check Report
//!
//! Renders a reconciled pay period as the five-line summary, and optionally
//! a breakdown of the paychecks and bills behind each figure.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Bill, Money};
use crate::services::HealthCheck;

/// One bill in the breakdown table
#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "Bucket")]
    bucket: &'static str,
    #[tabled(rename = "Bill")]
    name: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Terminal rendering of a health check
pub struct HealthCheckReport<'a> {
    check: &'a HealthCheck,
    currency_symbol: &'a str,
}

impl<'a> HealthCheckReport<'a> {
    pub fn new(check: &'a HealthCheck, currency_symbol: &'a str) -> Self {
        Self {
            check,
            currency_symbol,
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency_symbol)
    }

    /// The five figures, one per line, in fixed order
    pub fn format_terminal(&self) -> String {
        let check = self.check;
        let mut output = String::new();

        output.push_str(&format!("Bills paid: {}\n", self.money(check.past_bills)));
        output.push_str(&format!(
            "You should have this much money: {}\n",
            self.money(check.current_balance)
        ));
        output.push_str(&format!(
            "Minimum for Imminent Bills: {}\n",
            self.money(check.imminent_bills)
        ));
        output.push_str(&format!(
            "Usable incoming money: {}\n",
            self.money(check.incoming_balance)
        ));
        output.push_str(&format!(
            "Living expenses: {}\n",
            self.money(check.leftover_bills)
        ));

        output
    }

    /// Paychecks and per-bucket bills behind the summary
    pub fn format_breakdown(&self) -> String {
        let check = self.check;
        let mut output = String::new();

        output.push_str(&format!("Pay Period Breakdown for {}\n", check.today));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Paychecks so far this month: {}\n",
            format_dates(&check.past_paychecks)
        ));
        output.push_str(&format!("Next paycheck:               {}\n", check.next_paycheck));
        output.push_str(&format!(
            "Paychecks left this month:   {}\n",
            format_dates(&check.remaining_paychecks)
        ));
        output.push_str(&format!(
            "Future bills:                {}\n",
            self.money(check.future_bills)
        ));
        output.push('\n');

        let buckets = &check.buckets;
        let rows: Vec<BillRow> = [
            ("paid", &buckets.past),
            ("imminent", &buckets.imminent),
            ("future", &buckets.future),
            ("living", &buckets.leftover),
        ]
        .into_iter()
        .flat_map(|(bucket, bills)| bills.iter().map(move |bill| self.row(bucket, bill)))
        .collect();

        if rows.is_empty() {
            output.push_str("No bills.\n");
        } else {
            output.push_str(&Table::new(rows).with(Style::psql()).to_string());
            output.push('\n');
        }

        output
    }

    fn row(&self, bucket: &'static str, bill: &Bill) -> BillRow {
        BillRow {
            bucket,
            name: bill.label().to_string(),
            day: bill
                .recurrence_day
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            amount: self.money(bill.amount),
        }
    }
}

fn format_dates(dates: &[chrono::NaiveDate]) -> String {
    if dates.is_empty() {
        "none".to_string()
    } else {
        dates
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
