//! Recurring monthly bill
//!
//! A bill is either due on a fixed day of the month or, when no day is given,
//! treated as a flat living expense that is always counted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Highest day number a monthly bill may recur on
pub const MAX_RECURRENCE_DAY: u32 = 31;

/// A single row of the bill table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Optional label from the bill table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Amount due each month
    pub amount: Money,

    /// Day of the month the bill is due (1-31), or None for a living expense
    #[serde(default)]
    pub recurrence_day: Option<u32>,
}

impl Bill {
    /// Create a bill due on a given day of the month
    pub fn due_on(amount: Money, day: u32) -> Self {
        Self {
            name: None,
            amount,
            recurrence_day: Some(day),
        }
    }

    /// Create a living expense with no fixed due day
    pub fn leftover(amount: Money) -> Self {
        Self {
            name: None,
            amount,
            recurrence_day: None,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this bill has no fixed due day
    pub fn is_leftover(&self) -> bool {
        self.recurrence_day.is_none()
    }

    /// Label for display, falling back to a dash
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.recurrence_day {
            Some(day) => write!(f, "{} {} (day {})", self.label(), self.amount, day),
            None => write!(f, "{} {} (living expense)", self.label(), self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftover() {
        let rent = Bill::due_on(Money::from_dollars(1200), 1);
        let food = Bill::leftover(Money::from_dollars(400)).with_name("Groceries");

        assert!(!rent.is_leftover());
        assert!(food.is_leftover());
        assert_eq!(rent.label(), "-");
        assert_eq!(food.label(), "Groceries");
    }

    #[test]
    fn test_display() {
        let bill = Bill::due_on(Money::from_dollars(50), 20).with_name("Phone");
        assert_eq!(bill.to_string(), "Phone $50.00 (day 20)");

        let bill = Bill::leftover(Money::from_dollars(30));
        assert_eq!(bill.to_string(), "- $30.00 (living expense)");
    }
}
