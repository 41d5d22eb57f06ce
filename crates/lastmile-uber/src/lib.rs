#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultUberClient is meant to be used
// through the RideEstimatePort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultUberClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, UberClientConfig};

// Errors
pub use error::{UberError, UberResult};

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use axum as _;
