//! CLI Adapter.

mod input;

pub use input::spawn_input_reader;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, SettingsOverrides, load_settings};

#[derive(Parser)]
#[command(name = "cliplog")]
#[command(version)]
#[command(
    about = "Log every new clipboard text with a timestamp and save the log on demand",
    long_about = None
)]
struct Cli {
    /// TOML settings file (history_dir, poll_interval_ms)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory for saved history files [default: clip_history]
    #[arg(long)]
    history_dir: Option<PathBuf>,
    /// Clipboard poll interval in milliseconds [default: 500]
    #[arg(short, long)]
    interval_ms: Option<u64>,
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides =
        SettingsOverrides { history_dir: cli.history_dir, poll_interval_ms: cli.interval_ms };
    let result: Result<(), AppError> =
        load_settings(cli.config.as_deref(), overrides).and_then(crate::watch);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init();
}
