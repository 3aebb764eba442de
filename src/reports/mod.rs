//! Reports module for paycheck-cli
//!
//! Human-readable rendering of a reconciled pay period.

pub mod health_check;

pub use health_check::HealthCheckReport;
