//! Transit itineraries and the last-mile rewrite.
//!
//! A trip plan comes from a transit journey planner as itineraries made of
//! legs. Walking legs that are too long to walk are turned into ride-hailing
//! legs with a local fare estimate, and transit legs are annotated with their
//! fares. Fields this crate does not model are kept in `extra` and written
//! back out unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coordinate::Coordinate;
use super::fare::{RideFare, calculate_ride_fare};
use super::transit_fare::{BusFare, TrainFare, calculate_bus_fare, calculate_train_fare};

/// Leg mode for walking.
pub const MODE_WALK: &str = "WALK";
/// Leg mode for buses.
pub const MODE_BUS: &str = "BUS";
/// Leg mode for suburban rail.
pub const MODE_RAIL: &str = "RAIL";
/// Leg mode for a ride-hailing leg that replaced a walk.
pub const MODE_UBER: &str = "UBER";

/// Walks longer than this (meters) become ride-hailing legs.
pub const MAX_WALK_DISTANCE_M: f64 = 750.0;

/// Average speed (km/h) at or above which a train that skipped stops is fast.
pub const FAST_TRAIN_MIN_SPEED_KMH: f64 = 35.0;

/// Start or end of a leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Stop or street name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Position of the stop along the trip's pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<i64>,
    /// Index of the stop within the pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_index: Option<i64>,
    /// Planner fields not modeled here
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Validated coordinate of this place, if it has a usable one.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.lat, self.lon).ok()
    }

    /// Stop position along the route. A zero sequence falls back to the index.
    fn stop_position(&self) -> Option<i64> {
        self.stop_sequence.filter(|&s| s != 0).or(self.stop_index)
    }
}

/// Whether a suburban train skips stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainType {
    /// Skips intermediate stations
    Fast,
    /// Stops at (almost) every station
    Slow,
    /// Not a rail leg, or the leg has no endpoints
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "Fast"),
            Self::Slow => write!(f, "Slow"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// `WALK`, `BUS`, `RAIL`, `UBER`, ...
    pub mode: String,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Duration in seconds
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Place>,
    /// Route short name for transit legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Ride-hailing fares, set on `UBER` legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fares: Option<RideFare>,
    /// Set on `BUS` legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_fare: Option<BusFare>,
    /// Set on `RAIL` legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_fare: Option<TrainFare>,
    /// Set on `RAIL` legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_type: Option<TrainType>,
    /// Planner fields not modeled here (times, geometry, agency, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Leg {
    fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        let from = self.from.as_ref()?.coordinate()?;
        let to = self.to.as_ref()?.coordinate()?;
        Some((from, to))
    }
}

/// One way of making the journey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Total duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// All itineraries the planner found for a journey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Classify a rail leg as fast or slow.
///
/// A train is fast when it crossed at most one stop between boarding and
/// alighting at an average of at least [`FAST_TRAIN_MIN_SPEED_KMH`]. Missing
/// stop positions or a zero duration leave the leg slow.
pub fn identify_train_type(leg: &Leg) -> TrainType {
    if leg.mode != MODE_RAIL {
        return TrainType::Unknown;
    }
    let (Some(from), Some(to)) = (&leg.from, &leg.to) else {
        return TrainType::Unknown;
    };

    let distance_km = leg.distance / 1000.0;
    let duration_h = leg.duration / 3600.0;
    let avg_speed_kmh = distance_km / duration_h;

    let stops_crossed = to
        .stop_position()
        .zip(from.stop_position())
        .map(|(to, from)| to - from);

    if stops_crossed.is_some_and(|n| n <= 1) && avg_speed_kmh >= FAST_TRAIN_MIN_SPEED_KMH {
        TrainType::Fast
    } else {
        TrainType::Slow
    }
}

/// Rewrite a trip plan for the last mile.
///
/// - `WALK` legs longer than [`MAX_WALK_DISTANCE_M`] with usable endpoints
///   become `UBER` legs carrying [`RideFare`] estimates
/// - `BUS` legs get a [`BusFare`]; `ac_bus` picks the selected fare
/// - `RAIL` legs get a [`TrainFare`] and a [`TrainType`]
///
/// Everything else passes through untouched.
pub fn apply_last_mile(mut plan: TripPlan, ac_bus: bool) -> TripPlan {
    for leg in plan
        .itineraries
        .iter_mut()
        .flat_map(|itinerary| itinerary.legs.iter_mut())
    {
        annotate_leg(leg, ac_bus);
    }
    plan
}

fn annotate_leg(leg: &mut Leg, ac_bus: bool) {
    let distance_km = leg.distance / 1000.0;

    match leg.mode.as_str() {
        MODE_WALK if leg.distance > MAX_WALK_DISTANCE_M => {
            if let Some((from, to)) = leg.endpoints() {
                leg.mode = MODE_UBER.to_string();
                leg.fares = Some(calculate_ride_fare(&from, &to));
            }
        }
        MODE_BUS => leg.bus_fare = Some(calculate_bus_fare(distance_km, ac_bus)),
        MODE_RAIL => {
            let train_type = identify_train_type(leg);
            leg.train_fare = Some(calculate_train_fare(distance_km));
            leg.train_type = Some(train_type);
        }
        _ => {}
    }
}
