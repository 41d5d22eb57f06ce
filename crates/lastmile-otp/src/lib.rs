#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultOtpClient is meant to be used
// through the TransitPlanPort trait, not its internal generic structure
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

pub use client::DefaultOtpClient;
pub use config::{DEFAULT_BASE_URL, OtpClientConfig};
pub use error::{OtpError, OtpResult};

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use axum as _;
