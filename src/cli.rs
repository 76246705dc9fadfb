//! Command-line interface for scribe-pad.
//!
//! This module handles CLI argument parsing; everything here runs before
//! logging is initialised, so subcommand-style errors go to stderr directly.

use std::path::PathBuf;

use clap::Parser;
use scribe_pad_config::LogLevel;

/// scribe-pad - application shell for a predictive text-entry tool
#[derive(Parser)]
#[command(name = "scribe-pad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity for the session log file (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Override the configured font pixel size
    #[arg(long, value_name = "PIXELS")]
    pub font_size: Option<f32>,

    /// Exit after the specified number of seconds (smoke-testing aid)
    #[arg(long, value_name = "SECONDS")]
    pub exit_after: Option<f64>,

    /// Load configuration from this directory instead of the default location
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Session log level override
    pub log_level: Option<LogLevel>,
    /// Font pixel size override
    pub font_size: Option<f32>,
    /// Exit after this many seconds
    pub exit_after: Option<f64>,
    /// Config directory override
    pub config_dir: Option<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code
    Exit(i32),
}

/// Process CLI arguments
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    if let Some(size) = cli.font_size
        && (!size.is_finite() || size <= 0.0)
    {
        eprintln!("scribe-pad: --font-size must be a positive number, got {size}");
        return CliResult::Exit(2);
    }

    CliResult::Continue(RuntimeOptions {
        log_level: cli.log_level,
        font_size: cli.font_size,
        exit_after: cli.exit_after,
        config_dir: cli.config_dir,
    })
}
