#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    BusFare, Coordinate, CoordinateError, FareComparison, Itinerary, LastMileQuote, Leg, Place,
    PriceEstimate, QuoteStatus, RawResponse, RideFare, TrainFare, TrainType, TripEstimateRequest,
    TripPlan, apply_last_mile, calculate_bus_fare, calculate_ride_fare, calculate_train_fare,
    compare_fares, identify_train_type, mock_estimates,
};
pub use ports::{
    RideEstimatePort, RidePortError, RidePortResult, TransitPlanPort, TransitPortError,
    TransitPortResult,
};
pub use services::{LastMileService, RoutePlannerService};

// Silence unused dev-dependency warnings; tokio only drives async tests
#[cfg(test)]
use tokio as _;
