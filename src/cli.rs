// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `eventgate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "eventgate",
    version,
    about = "Hold records back until a filesystem event fires or a timeout elapses, then route them.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Eventgate.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Eventgate.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EVENTGATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the watch description, but don't consume any
    /// records.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
