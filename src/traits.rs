//! Seams between the route selector and its collaborators.
//!
//! The selector itself only needs a distance matrix and a tour order.
//! Everything else (where distances come from, how the tour is built,
//! what happens to the chosen route) sits behind these traits.

use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::point::Point;
use crate::selector::SelectedRoute;

/// Provides a distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix;
}

/// Produces a visiting order over all points of a distance matrix.
///
/// The returned vector must contain every index in `0..matrix.size()`
/// exactly once. Near-optimality is a quality property only.
pub trait TourOrderer {
    fn order(&self, matrix: &DistanceMatrix) -> Vec<usize>;
}

/// One-way consumer of a selected route, producing a map artifact.
pub trait RouteRenderer {
    fn render(&self, points: &[Point], route: &SelectedRoute) -> Result<String>;
}

impl<T: DistanceMatrixProvider + ?Sized> DistanceMatrixProvider for &T {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix {
        (**self).matrix_for(locations)
    }
}

impl<T: TourOrderer + ?Sized> TourOrderer for &T {
    fn order(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        (**self).order(matrix)
    }
}
