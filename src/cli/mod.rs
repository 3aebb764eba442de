//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod check;
pub mod config;
pub mod overrides;
pub mod paychecks;

pub use check::{handle_check_command, run_check, CheckArgs};
pub use config::{handle_config_command, handle_init_command};
pub use overrides::ScheduleOverrides;
pub use paychecks::{handle_paychecks_command, run_paychecks, PaychecksArgs};
