//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! HTTP or terminal concerns.
//!
//! # Structure
//!
//! - `coordinate` - Latitude/longitude pairs and distance
//! - `trip` - The trip estimate request payload
//! - `estimate` - Provider estimates and last-mile quotes
//! - `fare` - Local ride fare calculation and fare comparison
//! - `transit_fare` - Distance-banded bus and train fares
//! - `route` - Transit itineraries and the last-mile rewrite

mod coordinate;
mod estimate;
mod fare;
mod route;
mod transit_fare;
mod trip;

pub use coordinate::{Coordinate, CoordinateError, EARTH_RADIUS_M};
pub use estimate::{LastMileQuote, PriceEstimate, QuoteStatus, RawResponse, mock_estimates};
pub use fare::{
    AUTO_TARIFF, AVERAGE_RIDE_SPEED_MPS, CAR_TARIFF, FareComparison, MOTO_TARIFF, RideFare,
    Tariff, calculate_ride_fare, compare_fares,
};
pub use route::{
    FAST_TRAIN_MIN_SPEED_KMH, Itinerary, Leg, MAX_WALK_DISTANCE_M, MODE_BUS, MODE_RAIL,
    MODE_UBER, MODE_WALK, Place, TrainType, TripPlan, apply_last_mile, identify_train_type,
};
pub use transit_fare::{BusFare, TrainFare, calculate_bus_fare, calculate_train_fare};
pub use trip::{DEFAULT_DROPOFF, DEFAULT_PICKUP, TripEstimateRequest};
