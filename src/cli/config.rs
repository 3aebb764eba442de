//! Configuration commands
//!
//! Show the effective settings and write the defaults to disk.

use crate::config::{PaycheckPaths, Settings};
use crate::error::PaycheckResult;

/// Describe where settings live and what they currently are
pub fn format_config(paths: &PaycheckPaths, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("paycheck-cli Configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!(
        "Settings file:  {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (not created, using defaults)"
        }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Anchor date:    {}\n", settings.anchor_date));
    output.push_str(&format!("  Cadence:        {} days\n", settings.cadence_days));
    output.push_str(&format!(
        "  Paycheck value: {}\n",
        settings
            .paycheck_value
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Bills file:     {}\n", settings.bills_file.display()));

    output
}

/// Handle the config command
pub fn handle_config_command(paths: &PaycheckPaths, settings: &Settings) -> PaycheckResult<()> {
    print!("{}", format_config(paths, settings));
    Ok(())
}

/// Handle the init command: persist the current settings
pub fn handle_init_command(paths: &PaycheckPaths, settings: &Settings) -> PaycheckResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Settings written to: {}", paths.settings_file().display());
    println!("Edit anchor_date, cadence_days and paycheck_value (in cents) to match your pay.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_config_uninitialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let output = format_config(&paths, &Settings::default());
        assert!(output.contains("(not created, using defaults)"));
        assert!(output.contains("Anchor date:    2023-09-01"));
        assert!(output.contains("Cadence:        14 days"));
        assert!(output.contains("Paycheck value: $2581.00"));
    }

    #[test]
    fn test_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycheckPaths::with_base_dir(temp_dir.path().join("cfg"));

        handle_init_command(&paths, &Settings::default()).unwrap();
        assert!(paths.is_initialized());

        let written = std::fs::read_to_string(paths.settings_file()).unwrap();
        let custom = Settings {
            cadence_days: 7,
            ..Settings::default()
        };
        handle_init_command(&paths, &custom).unwrap();
        assert_eq!(std::fs::read_to_string(paths.settings_file()).unwrap(), written);
    }
}
