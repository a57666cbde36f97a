//! End-to-end planning: distances, tour order, prefix selection.

use crate::config::TripBudget;
use crate::error::{PlannerError, Result};
use crate::matrix::DistanceMatrix;
use crate::point::{Point, locations};
use crate::selector::{self, SelectedRoute};
use crate::traits::{DistanceMatrixProvider, TourOrderer};

/// Everything computed for one run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub matrix: DistanceMatrix,
    pub tour: Vec<usize>,
    pub route: SelectedRoute,
}

impl PlanOutcome {
    /// True when no prefix of the tour fit into the budget.
    pub fn is_infeasible(&self) -> bool {
        self.route.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Planner<M, O> {
    matrix_provider: M,
    orderer: O,
}

impl<M, O> Planner<M, O>
where
    M: DistanceMatrixProvider,
    O: TourOrderer,
{
    pub fn new(matrix_provider: M, orderer: O) -> Self {
        Self {
            matrix_provider,
            orderer,
        }
    }

    /// Validate the points, then build the matrix, order the tour and
    /// select the best prefix.
    pub fn plan(&self, points: &[Point], budget: TripBudget) -> Result<PlanOutcome> {
        for (index, point) in points.iter().enumerate() {
            point
                .validate()
                .map_err(|reason| PlannerError::InvalidInput(format!("point #{}: {}", index, reason)))?;
        }

        let matrix = self.matrix_provider.matrix_for(&locations(points));
        if matrix.size() != points.len() {
            return Err(PlannerError::MatrixSizeMismatch {
                expected: points.len(),
                actual: matrix.size(),
            });
        }

        let tour = self.orderer.order(&matrix);
        // Logging below indexes the matrix with the tour.
        selector::validate_permutation(&tour, points.len())?;
        tracing::info!(
            points = points.len(),
            tour_km = matrix.tour_length(&tour),
            "tour ordered"
        );

        let route = selector::select(points, &tour, &matrix, budget)?;
        if route.is_empty() {
            tracing::info!(
                max_hours = budget.max_time_hours(),
                speed_kmh = budget.speed_kmh(),
                "no feasible route under the time budget"
            );
        } else {
            tracing::info!(
                stops = route.len(),
                priority = route.total_priority,
                km = route.total_distance_km,
                "route selected"
            );
        }

        Ok(PlanOutcome { matrix, tour, route })
    }
}
