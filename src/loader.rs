//! Loading point lists from JSON files, with a built-in fallback.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::point::Point;

/// Read a JSON array of `[lat, lon, priority, name]` records.
///
/// Every record is validated; the first bad one fails the whole load.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, LoadError> {
    let raw = fs::read_to_string(path.as_ref())?;
    parse_points(&raw)
}

pub fn parse_points(raw: &str) -> Result<Vec<Point>, LoadError> {
    let points: Vec<Point> = serde_json::from_str(raw)?;
    for (index, point) in points.iter().enumerate() {
        point
            .validate()
            .map_err(|reason| LoadError::Invalid { index, reason })?;
    }
    Ok(points)
}

/// Like [`load_points`], but falls back to [`default_points`] on any error.
pub fn load_points_or_default(path: impl AsRef<Path>) -> Vec<Point> {
    let path = path.as_ref();
    match load_points(path) {
        Ok(points) => {
            tracing::info!(path = %path.display(), count = points.len(), "loaded points");
            points
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "Failed to load points: {}. Falling back to built-in list.",
                err
            );
            default_points()
        }
    }
}

/// Nine Russian cities used when no points file is available.
pub fn default_points() -> Vec<Point> {
    vec![
        Point::new(55.1599, 61.4029, 7.0, "Chelyabinsk"),
        Point::new(55.8304, 49.0661, 9.0, "Kazan"),
        Point::new(59.9343, 30.3351, 2.0, "Saint Petersburg"),
        Point::new(47.2355, 39.7078, 6.0, "Rostov-on-Don"),
        Point::new(54.9803, 73.3757, 5.0, "Novosibirsk"),
        Point::new(53.2005, 50.1000, 4.0, "Samara"),
        Point::new(56.8389, 60.6057, 8.0, "Yekaterinburg"),
        Point::new(55.7558, 37.6176, 1.0, "Moscow"),
        Point::new(56.2965, 43.9361, 3.0, "Nizhny Novgorod"),
    ]
}
