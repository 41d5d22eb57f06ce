//! Trip estimate request payload.

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, CoordinateError};

/// Default pickup point (latitude, longitude).
pub const DEFAULT_PICKUP: (f64, f64) = (19.167_705_3, 72.960_964);

/// Default dropoff point (latitude, longitude).
pub const DEFAULT_DROPOFF: (f64, f64) = (19.172_099_9, 72.956_671);

/// Body of a trip estimate request.
///
/// Serializes to `{"pickup": {...}, "dropoff": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripEstimateRequest {
    /// Where the rider is collected
    pub pickup: Coordinate,
    /// Where the rider is dropped off
    pub dropoff: Coordinate,
}

impl TripEstimateRequest {
    /// Create a request, validating both endpoints.
    pub fn new(pickup: Coordinate, dropoff: Coordinate) -> Result<Self, CoordinateError> {
        pickup.validate()?;
        dropoff.validate()?;
        Ok(Self { pickup, dropoff })
    }

    /// Serialize the request body as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Straight-line distance between pickup and dropoff in meters.
    pub fn distance_m(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }
}

impl Default for TripEstimateRequest {
    fn default() -> Self {
        Self {
            pickup: Coordinate {
                latitude: DEFAULT_PICKUP.0,
                longitude: DEFAULT_PICKUP.1,
            },
            dropoff: Coordinate {
                latitude: DEFAULT_DROPOFF.0,
                longitude: DEFAULT_DROPOFF.1,
            },
        }
    }
}
