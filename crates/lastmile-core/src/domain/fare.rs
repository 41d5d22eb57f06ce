//! Local fare estimation for short rides.
//!
//! Used when a rough fare is enough and no provider call should be made.
//! Distance is the great-circle distance between the two points and duration
//! assumes a constant average ride speed.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::transit_fare::{BusFare, TrainFare, calculate_bus_fare, calculate_train_fare};

/// Average ride speed in meters per second (~30 km/h).
pub const AVERAGE_RIDE_SPEED_MPS: f64 = 8.3;

/// Tariff for one vehicle class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// Flat charge per ride
    pub base: f64,
    /// Charge per kilometer
    pub per_km: f64,
    /// Charge per minute
    pub per_minute: f64,
}

impl Tariff {
    /// Fare for a ride of `distance_m` meters taking `duration_s` seconds.
    ///
    /// Halves round up, so `x.5` becomes `x + 1`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // fares are small and non-negative
    pub fn fare(&self, distance_m: f64, duration_s: f64) -> u32 {
        let raw = self.base
            + (distance_m / 1000.0) * self.per_km
            + (duration_s / 60.0) * self.per_minute;
        (raw + 0.5).floor().max(0.0) as u32
    }
}

/// Auto-rickshaw tariff.
pub const AUTO_TARIFF: Tariff = Tariff {
    base: 30.0,
    per_km: 10.0,
    per_minute: 2.0,
};

/// Car tariff.
pub const CAR_TARIFF: Tariff = Tariff {
    base: 50.0,
    per_km: 15.0,
    per_minute: 3.0,
};

/// Motorbike tariff.
pub const MOTO_TARIFF: Tariff = Tariff {
    base: 20.0,
    per_km: 8.0,
    per_minute: 1.5,
};

/// Locally computed fares for each vehicle class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideFare {
    /// Auto-rickshaw fare
    pub auto: u32,
    /// Car fare
    pub car: u32,
    /// Motorbike fare
    pub moto: u32,
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: f64,
}

/// Estimate fares between two points without calling any provider.
pub fn calculate_ride_fare(pickup: &Coordinate, dropoff: &Coordinate) -> RideFare {
    let distance = pickup.distance_to(dropoff);
    let duration = distance / AVERAGE_RIDE_SPEED_MPS;

    RideFare {
        auto: AUTO_TARIFF.fare(distance, duration),
        car: CAR_TARIFF.fare(distance, duration),
        moto: MOTO_TARIFF.fare(distance, duration),
        distance,
        duration,
    }
}

/// Ride, bus and train fares over the same straight-line distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareComparison {
    /// Ride-hailing fares by vehicle class
    pub ride: RideFare,
    /// Bus fares
    pub bus: BusFare,
    /// Suburban train fares
    pub train: TrainFare,
}

/// Compare local fares for every mode between two points.
pub fn compare_fares(pickup: &Coordinate, dropoff: &Coordinate, ac_bus: bool) -> FareComparison {
    let ride = calculate_ride_fare(pickup, dropoff);
    let distance_km = ride.distance / 1000.0;

    FareComparison {
        bus: calculate_bus_fare(distance_km, ac_bus),
        train: calculate_train_fare(distance_km),
        ride,
    }
}
