//! Test fixtures for trip-planner.
//!
//! Provides:
//! - Real Russian city coordinates (the built-in fallback list plus a few extras)
//! - Points laid out along the equator, where one degree of longitude
//!   is a fixed hop length

#![allow(dead_code)]

pub mod russian_cities;

pub use russian_cities::*;

use trip_planner::haversine::haversine_km;
use trip_planner::{Point, TripBudget};

/// Kilometers between two points one degree of longitude apart on the equator.
pub fn equator_hop_km() -> f64 {
    haversine_km((0.0, 0.0), (0.0, 1.0))
}

/// Points at 0°N, longitudes 0, 1, 2, ... with the given priorities.
pub fn equator_points(priorities: &[f64]) -> Vec<Point> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &priority)| Point::new(0.0, i as f64, priority, format!("Stop {}", i)))
        .collect()
}

/// Budget whose speed makes every equator hop take exactly one hour.
pub fn hourly_hops(max_time_hours: f64) -> TripBudget {
    TripBudget::new(equator_hop_km(), max_time_hours).expect("valid budget")
}
