//! Input storage for paycheck-cli
//!
//! The only persistent input is the flat bill table; computed figures are
//! never written back.

pub mod bills;

pub use bills::{BillLedger, AMOUNT_COLUMN, DAY_COLUMN};
