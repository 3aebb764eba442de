use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use paycheck::cli::{
    handle_check_command, handle_config_command, handle_init_command, handle_paychecks_command,
    CheckArgs, PaychecksArgs,
};
use paycheck::config::{PaycheckPaths, Settings};

#[derive(Parser)]
#[command(
    name = "paycheck",
    version,
    about = "Biweekly paycheck health check against recurring monthly bills",
    long_about = "paycheck compares a fixed biweekly paycheck schedule with a CSV \
                  of recurring monthly bills and reports what has been paid this \
                  pay period, what should be left, what is due before the next \
                  paycheck and what the rest of the month leaves free."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the health check (default)
    Check(CheckArgs),

    /// List paycheck dates in a range
    #[command(alias = "pay")]
    Paychecks(PaychecksArgs),

    /// Show current configuration and paths
    Config,

    /// Write default settings to the config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let paths = PaycheckPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Check(args)) => handle_check_command(&settings, args)?,
        None => handle_check_command(&settings, CheckArgs::default())?,
        Some(Commands::Paychecks(args)) => handle_paychecks_command(&settings, args)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
    }

    Ok(())
}
