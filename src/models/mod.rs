//! Core data models for paycheck-cli
//!
//! Bills and the money amounts they carry. Paycheck dates are derived from the
//! schedule and never stored, so they have no model of their own.

pub mod bill;
pub mod money;

pub use bill::{Bill, MAX_RECURRENCE_DAY};
pub use money::{Money, MoneyParseError};
