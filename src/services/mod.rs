//! Service layer for paycheck-cli
//!
//! The paycheck schedule and the reconciliation of bills against it. Both are
//! pure: they read their inputs and return fresh figures.

pub mod reconcile;
pub mod schedule;

pub use reconcile::{BillBuckets, HealthCheck, Reconciler};
pub use schedule::{first_day_of_month, last_day_of_month, PaycheckSchedule, MAX_CADENCE_DAYS};
