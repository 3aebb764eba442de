//! paycheck-cli - biweekly paycheck health check
//!
//! Given a fixed paycheck cadence and a table of recurring monthly bills, works
//! out for any day how much of this pay period's bills are paid, how much
//! money should be left, which bills fall before the next paycheck and what
//! the rest of the month's paychecks leave free.
//!
//! # Architecture
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Bills and money
//! - `storage`: Bill table loading
//! - `services`: Paycheck schedule and reconciliation
//! - `reports`: Terminal rendering
//! - `cli`: Command handlers for the `paycheck` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use paycheck::models::{Bill, Money};
//! use paycheck::services::{PaycheckSchedule, Reconciler};
//!
//! let anchor = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
//! let schedule = PaycheckSchedule::new(anchor, 14).unwrap();
//! let bills = vec![Bill::due_on(Money::from_dollars(100), 5)];
//!
//! let today = NaiveDate::from_ymd_opt(2023, 9, 15).unwrap();
//! let check = Reconciler::new(&schedule, Money::from_dollars(2581))
//!     .reconcile(today, &bills)
//!     .unwrap();
//! assert_eq!(check.current_balance, Money::from_dollars(5062));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaycheckError, PaycheckResult};
