//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use lastmile_uber::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for last-mile ride estimates.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "lastmile")]
#[command(about = "Estimate the last leg of a transit journey by ride-hailing")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Base URL of the ride estimates API
    #[arg(
        long = "base-url",
        global = true,
        env = "UBER_API_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        global = true,
        env = "LASTMILE_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
