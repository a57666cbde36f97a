//! Plain-text summary of a selected route.

use std::fmt::{self, Write};

use crate::point::Point;
use crate::selector::SelectedRoute;

/// Split fractional hours into whole hours, minutes and seconds.
/// Leftover fractions of a second are dropped.
pub fn split_duration(hours: f64) -> (u64, u64, u64) {
    let total_seconds = (hours * 3600.0) as u64;
    let (h, remainder) = (total_seconds / 3600, total_seconds % 3600);
    (h, remainder / 60, remainder % 60)
}

pub fn format_report(points: &[Point], route: &SelectedRoute) -> String {
    if route.is_empty() {
        return "No feasible route found within the time budget.\n".to_string();
    }

    let mut out = String::new();
    // fmt::Write for String never returns an error.
    write_report(&mut out, points, route).unwrap_or_default();
    out
}

fn write_report<W: Write>(out: &mut W, points: &[Point], route: &SelectedRoute) -> fmt::Result {
    let (h, m, s) = split_duration(route.total_time_hours);

    writeln!(out, "Optimal route:")?;
    for point in route.points(points) {
        writeln!(out, "- {} (priority: {})", point.name, point.priority)?;
    }
    writeln!(out)?;
    writeln!(out, "Total route length: {:.2} km", route.total_distance_km)?;
    writeln!(out, "Travel time: {} h {} min {} s", h, m, s)?;
    writeln!(out, "Total priority: {}", route.total_priority)
}
