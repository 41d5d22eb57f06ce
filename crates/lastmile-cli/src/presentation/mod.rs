//! Shared CLI presentation utilities.
//!
//! This module provides reusable formatting functions for consistent CLI
//! output across commands. Everything here returns strings; handlers decide
//! where they go.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Fare math and fallbacks belong in the core service

pub mod tables;

// Re-export commonly used items
pub use tables::{format_distance_km, format_minutes, separator, truncate_string};
