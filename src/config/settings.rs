//! User settings for paycheck-cli
//!
//! The paycheck schedule (anchor date, cadence, amount per paycheck), where to
//! find the bill table, and display preferences.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::PaycheckPaths;
use crate::error::PaycheckError;
use crate::models::Money;
use crate::services::{PaycheckSchedule, MAX_CADENCE_DAYS};

/// User settings for paycheck-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// A known paycheck date; the cadence is exact from here on
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,

    /// Days between paychecks
    #[serde(default = "default_cadence_days")]
    pub cadence_days: i64,

    /// Take-home amount of a single paycheck, in cents
    #[serde(default = "default_paycheck_value")]
    pub paycheck_value: Money,

    /// Bill table location; relative paths resolve against the working directory
    #[serde(default = "default_bills_file")]
    pub bills_file: PathBuf,

    /// Currency symbol used in the report
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, 1).unwrap_or_default()
}

fn default_cadence_days() -> i64 {
    14
}

fn default_paycheck_value() -> Money {
    Money::from_dollars(2581)
}

fn default_bills_file() -> PathBuf {
    PathBuf::from("monthly_bills.csv")
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            anchor_date: default_anchor_date(),
            cadence_days: default_cadence_days(),
            paycheck_value: default_paycheck_value(),
            bills_file: default_bills_file(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PaycheckPaths) -> Result<Self, PaycheckError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PaycheckError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaycheckError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaycheckPaths) -> Result<(), PaycheckError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PaycheckError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PaycheckError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check the settings describe a usable schedule
    pub fn validate(&self) -> Result<(), PaycheckError> {
        if !(1..=MAX_CADENCE_DAYS).contains(&self.cadence_days) {
            return Err(PaycheckError::Config(format!(
                "cadence_days must be between 1 and {}, got {}",
                MAX_CADENCE_DAYS, self.cadence_days
            )));
        }

        if self.paycheck_value.is_negative() {
            return Err(PaycheckError::Config(format!(
                "paycheck_value must not be negative, got {}",
                self.paycheck_value
            )));
        }

        Ok(())
    }

    /// Build the paycheck schedule these settings describe
    pub fn schedule(&self) -> Result<PaycheckSchedule, PaycheckError> {
        self.validate()?;
        PaycheckSchedule::new(self.anchor_date, self.cadence_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.anchor_date,
            NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()
        );
        assert_eq!(settings.cadence_days, 14);
        assert_eq!(settings.paycheck_value, Money::from_dollars(2581));
        assert_eq!(settings.bills_file, PathBuf::from("monthly_bills.csv"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            anchor_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            paycheck_value: Money::from_cents(312_550),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "paycheck_value": 200000 }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.paycheck_value, Money::from_dollars(2000));
        assert_eq!(loaded.cadence_days, 14);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PaycheckError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_schedule() {
        let settings = Settings {
            cadence_days: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(settings.schedule().is_err());

        let settings = Settings {
            cadence_days: 200_000_000_000_000,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(PaycheckError::Config(_))));
        assert!(settings.schedule().is_err());

        let settings = Settings {
            paycheck_value: Money::from_cents(-1),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
