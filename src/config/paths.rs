//! Path management for paycheck-cli
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `PAYCHECK_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/paycheck-cli` or `~/.config/paycheck-cli`
//! 3. Windows: `%APPDATA%\paycheck-cli`

use std::path::PathBuf;

use crate::error::PaycheckError;

/// Environment variable overriding the config directory
pub const DATA_DIR_ENV: &str = "PAYCHECK_CLI_DATA_DIR";

/// Manages all paths used by paycheck-cli
#[derive(Debug, Clone)]
pub struct PaycheckPaths {
    base_dir: PathBuf,
}

impl PaycheckPaths {
    /// Create a new PaycheckPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PaycheckError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PaycheckPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaycheckError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaycheckError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PaycheckError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                PaycheckError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("paycheck-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PaycheckError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PaycheckError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("paycheck-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("paycheck-cli");
        let paths = PaycheckPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.is_dir());
    }
}
