//! Time-budgeted prefix selection over a tour order.
//!
//! Given a visiting order over all points, every prefix of length two or
//! more is scored and the one collecting the most priority without
//! exceeding the travel-time budget wins. Only prefixes of the one order
//! are considered; this is not a subset search.

use rayon::prelude::*;

use crate::config::TripBudget;
use crate::error::{PlannerError, Result};
use crate::matrix::DistanceMatrix;
use crate::point::Point;

/// The chosen route: point indices in visiting order plus totals.
///
/// An empty route means no prefix fit into the budget (or there were
/// fewer than two points); callers cannot tell these apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectedRoute {
    pub indices: Vec<usize>,
    pub total_distance_km: f64,
    pub total_time_hours: f64,
    pub total_priority: f64,
}

impl SelectedRoute {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected points in visiting order.
    pub fn points<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = &'a Point> + 'a {
        self.indices.iter().map(move |&idx| &points[idx])
    }
}

/// Check that `permutation` visits every index in `0..n` exactly once.
pub fn validate_permutation(permutation: &[usize], n: usize) -> Result<()> {
    if permutation.len() != n {
        return Err(PlannerError::InvalidPermutation(format!(
            "expected {} indices, got {}",
            n,
            permutation.len()
        )));
    }

    let mut seen = vec![false; n];
    for &idx in permutation {
        if idx >= n {
            return Err(PlannerError::InvalidPermutation(format!(
                "index {} out of range for {} points",
                idx, n
            )));
        }
        if seen[idx] {
            return Err(PlannerError::InvalidPermutation(format!("index {} repeated", idx)));
        }
        seen[idx] = true;
    }

    Ok(())
}

/// Pick the prefix of `permutation` with the highest total priority whose
/// travel time stays within the budget.
///
/// Prefixes are scanned from longest to shortest and a later prefix only
/// replaces the current best when strictly better, so among equal
/// priorities the longest prefix wins.
pub fn select(
    points: &[Point],
    permutation: &[usize],
    matrix: &DistanceMatrix,
    budget: TripBudget,
) -> Result<SelectedRoute> {
    let n = points.len();
    if matrix.size() != n {
        return Err(PlannerError::MatrixSizeMismatch {
            expected: n,
            actual: matrix.size(),
        });
    }
    validate_permutation(permutation, n)?;

    let mut best: Option<SelectedRoute> = None;

    for route_length in (2..=n).rev() {
        let Some(candidate) = evaluate_prefix(points, &permutation[..route_length], matrix, budget)
        else {
            continue;
        };

        let improves = best
            .as_ref()
            .is_none_or(|current| candidate.total_priority > current.total_priority);
        if improves {
            best = Some(candidate);
        }
    }

    let route = best.unwrap_or_default();
    tracing::debug!(
        points = n,
        selected = route.len(),
        priority = route.total_priority,
        hours = route.total_time_hours,
        "selected route prefix"
    );
    Ok(route)
}

/// Run [`select`] for several budgets in parallel, keeping input order.
pub fn select_many(
    points: &[Point],
    permutation: &[usize],
    matrix: &DistanceMatrix,
    budgets: &[TripBudget],
) -> Result<Vec<SelectedRoute>> {
    budgets
        .par_iter()
        .map(|budget| select(points, permutation, matrix, *budget))
        .collect()
}

/// Walk one prefix edge by edge. Each edge credits the priority of the
/// point being left; the last point is credited once the whole prefix
/// fits. Returns `None` as soon as an edge would overrun the budget.
fn evaluate_prefix(
    points: &[Point],
    prefix: &[usize],
    matrix: &DistanceMatrix,
    budget: TripBudget,
) -> Option<SelectedRoute> {
    let mut distance = 0.0;
    let mut time = 0.0;
    let mut priority = 0.0;

    for edge in prefix.windows(2) {
        let (from, to) = (edge[0], edge[1]);
        let leg_km = matrix.get(from, to);
        let leg_hours = budget.travel_hours(leg_km);

        if time + leg_hours > budget.max_time_hours() {
            return None;
        }

        distance += leg_km;
        time += leg_hours;
        priority += points[from].priority;
    }

    let &last = prefix.last()?;
    priority += points[last].priority;

    Some(SelectedRoute {
        indices: prefix.to_vec(),
        total_distance_km: distance,
        total_time_hours: time,
        total_priority: priority,
    })
}
