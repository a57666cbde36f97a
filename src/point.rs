//! Points of interest to be visited.

use serde::{Deserialize, Serialize};

/// Positional wire form: `[latitude, longitude, priority, name]`.
type PointRecord = (f64, f64, f64, String);

/// A sightseeing point with a desirability weight.
///
/// Points are identified by their index in the input list; the planner
/// only ever passes indices around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PointRecord", into = "PointRecord")]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    pub priority: f64,
    pub name: String,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64, priority: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            priority,
            name: name.into(),
        }
    }

    /// Location coordinates (lat, lng).
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Check coordinate ranges, priority and name.
    pub fn validate(&self) -> Result<(), String> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!(
                "invalid latitude {} for '{}' (must be between -90 and 90)",
                self.latitude, self.name
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "invalid longitude {} for '{}' (must be between -180 and 180)",
                self.longitude, self.name
            ));
        }
        // Zero and negative priorities are allowed.
        if !self.priority.is_finite() {
            return Err(format!(
                "invalid priority {} for '{}' (must be a finite number)",
                self.priority, self.name
            ));
        }
        if self.name.trim().is_empty() {
            return Err("point name must not be empty".to_string());
        }
        Ok(())
    }
}

impl From<PointRecord> for Point {
    fn from((latitude, longitude, priority, name): PointRecord) -> Self {
        Self {
            latitude,
            longitude,
            priority,
            name,
        }
    }
}

impl From<Point> for PointRecord {
    fn from(point: Point) -> Self {
        (point.latitude, point.longitude, point.priority, point.name)
    }
}

/// Locations of all points, in index order.
pub fn locations(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(Point::location).collect()
}
