//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - Adapters map their own errors to the port error at the boundary

pub mod ride_estimates;
pub mod transit_plan;

pub use ride_estimates::{RideEstimatePort, RidePortError, RidePortResult};
pub use transit_plan::{TransitPlanPort, TransitPortError, TransitPortResult};
