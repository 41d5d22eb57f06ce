//! Geographic coordinate type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Errors raised when building or parsing a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Which component was invalid
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Latitude or longitude lies outside its valid range.
    #[error("{field} {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Which component was invalid
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// The textual form could not be parsed.
    #[error("Invalid coordinate '{input}', expected LAT,LON")]
    Malformed {
        /// The raw input
        input: String,
    },
}

/// A latitude/longitude pair in decimal degrees (WGS84).
///
/// Serializes as `{"latitude": .., "longitude": ..}`, which is the shape the
/// ride-hailing estimate endpoints expect for `pickup` and `dropoff`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check that both components are finite and within range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        check_component("latitude", self.latitude, 90.0)?;
        check_component("longitude", self.longitude, 180.0)
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);

        EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

fn check_component(field: &'static str, value: f64, bound: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite { field, value });
    }
    if !(-bound..=bound).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min: -bound,
            max: bound,
        });
    }
    Ok(())
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse `LAT,LON`, e.g. `19.1677053,72.960964`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed {
            input: s.to_string(),
        };

        let (lat, lon) = s.split_once(',').ok_or_else(malformed)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| malformed())?;

        Self::new(latitude, longitude)
    }
}
