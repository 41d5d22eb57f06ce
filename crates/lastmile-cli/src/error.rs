//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from port and domain errors to exit codes and user-facing messages.

use lastmile_core::{CoordinateError, RidePortError, TransitPortError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provider or other core error.
    #[error("{0}")]
    Core(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error (missing token, bad base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider could not be reached.
    #[error("Network error: {0}")]
    Network(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Network(_) => 69,  // EX_UNAVAILABLE
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<RidePortError> for CliError {
    fn from(err: RidePortError) -> Self {
        match err {
            RidePortError::Configuration { message } => CliError::Config(message),
            RidePortError::Network { message } => CliError::Network(message),
            other => CliError::Core(other.to_string()),
        }
    }
}

impl From<TransitPortError> for CliError {
    fn from(err: TransitPortError) -> Self {
        match err {
            TransitPortError::Configuration { message } => CliError::Config(message),
            TransitPortError::Network { message } => CliError::Network(message),
            other => CliError::Core(other.to_string()),
        }
    }
}

impl From<CoordinateError> for CliError {
    fn from(err: CoordinateError) -> Self {
        CliError::Arguments(err.to_string())
    }
}
