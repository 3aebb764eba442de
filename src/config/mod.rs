//! Configuration module for paycheck-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Persisted paycheck schedule and bill table location

pub mod paths;
pub mod settings;

pub use paths::PaycheckPaths;
pub use settings::Settings;
