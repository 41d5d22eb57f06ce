//! Distance-banded public transport fares.
//!
//! Bus and suburban rail fares are flat within each distance band. Past the
//! last band the fare grows by a fixed step per started stretch.

use serde::{Deserialize, Serialize};

/// Bus fare bands: upper bound in km (inclusive), non-AC fare, AC fare.
const BUS_FARE_BANDS: [(f64, u32, u32); 10] = [
    (5.0, 10, 12),
    (10.0, 15, 20),
    (15.0, 20, 30),
    (20.0, 30, 35),
    (25.0, 35, 40),
    (30.0, 40, 45),
    (35.0, 45, 50),
    (40.0, 50, 55),
    (45.0, 55, 60),
    (50.0, 60, 65),
];

/// Past 50 km the bus fare rises by 5 for every started 5 km.
const BUS_EXTRA_STEP_KM: f64 = 5.0;
const BUS_EXTRA_PER_STEP: u32 = 5;

/// Train fare bands: upper bound in km (inclusive), second class, first class.
const TRAIN_FARE_BANDS: [(f64, u32, u32); 7] = [
    (5.0, 5, 25),
    (10.0, 10, 50),
    (20.0, 15, 75),
    (30.0, 20, 100),
    (40.0, 25, 130),
    (50.0, 30, 160),
    (60.0, 40, 190),
];

/// Past 60 km each started 10 km adds 10 (second) and 30 (first).
const TRAIN_EXTRA_STEP_KM: f64 = 10.0;
const TRAIN_EXTRA_SECOND_CLASS: u32 = 10;
const TRAIN_EXTRA_FIRST_CLASS: u32 = 30;

/// Bus fares for one ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusFare {
    /// Ordinary (non-AC) bus fare
    #[serde(rename = "nonAC")]
    pub non_ac: u32,
    /// Air-conditioned bus fare
    pub ac: u32,
    /// The fare for the requested bus type
    pub selected: u32,
}

/// Suburban train fares for one ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainFare {
    /// Second-class ticket
    pub second_class: u32,
    /// First-class ticket
    pub first_class: u32,
}

/// Number of started `step_km` stretches beyond `limit_km`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // small, non-negative
fn extra_steps(distance_km: f64, limit_km: f64, step_km: f64) -> u32 {
    ((distance_km - limit_km) / step_km).ceil().max(0.0) as u32
}

/// Bus fare for a ride of `distance_km`.
///
/// `selected` is the AC fare when `is_ac` is set, the non-AC fare otherwise.
pub fn calculate_bus_fare(distance_km: f64, is_ac: bool) -> BusFare {
    let distance_km = distance_km.max(0.0);

    let (non_ac, ac) = BUS_FARE_BANDS
        .iter()
        .find(|(limit, _, _)| distance_km <= *limit)
        .map_or_else(
            || {
                let (limit, non_ac, ac) = BUS_FARE_BANDS[BUS_FARE_BANDS.len() - 1];
                let extra =
                    extra_steps(distance_km, limit, BUS_EXTRA_STEP_KM) * BUS_EXTRA_PER_STEP;
                (non_ac + extra, ac + extra)
            },
            |&(_, non_ac, ac)| (non_ac, ac),
        );

    BusFare {
        non_ac,
        ac,
        selected: if is_ac { ac } else { non_ac },
    }
}

/// Train fare for a ride of `distance_km`.
pub fn calculate_train_fare(distance_km: f64) -> TrainFare {
    let distance_km = distance_km.max(0.0);

    let (second_class, first_class) = TRAIN_FARE_BANDS
        .iter()
        .find(|(limit, _, _)| distance_km <= *limit)
        .map_or_else(
            || {
                let (limit, second, first) = TRAIN_FARE_BANDS[TRAIN_FARE_BANDS.len() - 1];
                let steps = extra_steps(distance_km, limit, TRAIN_EXTRA_STEP_KM);
                (
                    second + steps * TRAIN_EXTRA_SECOND_CLASS,
                    first + steps * TRAIN_EXTRA_FIRST_CLASS,
                )
            },
            |&(_, second, first)| (second, first),
        );

    TrainFare {
        second_class,
        first_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_fare_first_band_boundary() {
        assert_eq!(
            calculate_bus_fare(5.0, false),
            BusFare {
                non_ac: 10,
                ac: 12,
                selected: 10
            }
        );
        let just_over = calculate_bus_fare(5.01, false);
        assert_eq!((just_over.non_ac, just_over.ac), (15, 20));
    }

    #[test]
    fn test_bus_fare_selected_follows_ac_flag() {
        assert_eq!(calculate_bus_fare(12.0, true).selected, 30);
        assert_eq!(calculate_bus_fare(12.0, false).selected, 20);
    }

    #[test]
    fn test_bus_fare_fifty_km_boundary() {
        let at_limit = calculate_bus_fare(50.0, false);
        assert_eq!((at_limit.non_ac, at_limit.ac), (60, 65));

        // Each started 5 km past 50 adds 5
        let just_over = calculate_bus_fare(50.1, false);
        assert_eq!((just_over.non_ac, just_over.ac), (65, 70));
        let step_end = calculate_bus_fare(55.0, false);
        assert_eq!((step_end.non_ac, step_end.ac), (65, 70));
        let next_step = calculate_bus_fare(55.1, true);
        assert_eq!((next_step.non_ac, next_step.ac), (70, 75));
        assert_eq!(next_step.selected, 75);
    }

    #[test]
    fn test_bus_fare_zero_and_negative_distance() {
        assert_eq!(calculate_bus_fare(0.0, false).non_ac, 10);
        assert_eq!(calculate_bus_fare(-3.0, true).ac, 12);
    }

    #[test]
    fn test_train_fare_five_km_boundary() {
        assert_eq!(
            calculate_train_fare(5.0),
            TrainFare {
                second_class: 5,
                first_class: 25
            }
        );
        assert_eq!(calculate_train_fare(5.01).second_class, 10);
    }

    #[test]
    fn test_train_fare_fifty_km_boundary() {
        assert_eq!(calculate_train_fare(50.0).first_class, 160);
        assert_eq!(calculate_train_fare(50.5).first_class, 190);
    }

    #[test]
    fn test_train_fare_sixty_km_boundary() {
        assert_eq!(
            calculate_train_fare(60.0),
            TrainFare {
                second_class: 40,
                first_class: 190
            }
        );
        // Each started 10 km past 60 adds 10 and 30
        assert_eq!(
            calculate_train_fare(60.1),
            TrainFare {
                second_class: 50,
                first_class: 220
            }
        );
        assert_eq!(calculate_train_fare(70.0).second_class, 50);
        assert_eq!(
            calculate_train_fare(70.5),
            TrainFare {
                second_class: 60,
                first_class: 250
            }
        );
    }

    #[test]
    fn test_fare_json_field_names() {
        let bus = serde_json::to_value(calculate_bus_fare(1.0, true)).unwrap();
        assert_eq!(bus, serde_json::json!({"nonAC": 10, "ac": 12, "selected": 12}));

        let train = serde_json::to_value(calculate_train_fare(1.0)).unwrap();
        assert_eq!(
            train,
            serde_json::json!({"secondClass": 5, "firstClass": 25})
        );
    }
}
