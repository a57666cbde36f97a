//! Great-circle distances and the haversine distance matrix provider.
//!
//! Distances ignore roads; they are straight-line kilometers on a sphere.

use rayon::prelude::*;

use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (lat, lng) points in kilometers.
///
/// Inputs are not validated; out-of-range or NaN coordinates give
/// meaningless results.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
///
/// Rows are computed in parallel; the result does not depend on the
/// thread count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix {
        let n = locations.len();
        let mut matrix = DistanceMatrix::new(n);

        let rows: Vec<Vec<f64>> = locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0.0 } else { haversine_km(*from, *to) })
                    .collect()
            })
            .collect();

        for (i, row) in rows.into_iter().enumerate() {
            for (j, km) in row.into_iter().enumerate() {
                matrix.set(i, j, km);
            }
        }

        tracing::debug!(points = n, "built haversine distance matrix");
        matrix
    }
}
