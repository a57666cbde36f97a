//! Prefix selection tests
//!
//! Scenarios on equator points (one hop per hour), boundaries, tie-breaking,
//! and properties over real city data.

mod fixtures;

use fixtures::{equator_points, hourly_hops};
use trip_planner::annealing::SimulatedAnnealing;
use trip_planner::haversine::{HaversineMatrix, haversine_km};
use trip_planner::point::locations;
use trip_planner::selector::{select, select_many};
use trip_planner::traits::{DistanceMatrixProvider, TourOrderer};
use trip_planner::{DistanceMatrix, PlannerError, Point, TripBudget};

fn matrix_for(points: &[Point]) -> DistanceMatrix {
    HaversineMatrix.matrix_for(&locations(points))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn full_line_fits_in_budget() {
    let points = equator_points(&[1.0, 5.0, 1.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[0, 1, 2], &matrix, hourly_hops(2.5)).unwrap();

    assert_eq!(route.indices, vec![0, 1, 2]);
    assert_eq!(route.total_priority, 7.0);
    assert!(
        route.total_time_hours >= 2.0 - 1e-9 && route.total_time_hours <= 2.2,
        "time was {}",
        route.total_time_hours
    );
    assert!((route.total_distance_km - 2.0 * fixtures::equator_hop_km()).abs() < 1e-6);
}

#[test]
fn budget_below_one_hop_gives_empty_route() {
    let points = equator_points(&[1.0, 5.0, 1.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[0, 1, 2], &matrix, hourly_hops(0.5)).unwrap();

    assert!(route.is_empty());
    assert_eq!(route.total_priority, 0.0);
    assert_eq!(route.total_distance_km, 0.0);
    assert_eq!(route.total_time_hours, 0.0);
}

#[test]
fn single_hop_budget_selects_two_point_prefix() {
    let points = equator_points(&[10.0, 1.0, 1.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[0, 1, 2], &matrix, hourly_hops(1.5)).unwrap();

    assert_eq!(route.indices, vec![0, 1]);
    assert_eq!(route.total_priority, 11.0);
}

#[test]
fn equal_priority_prefers_longer_prefix() {
    // Length 3: 3 + 4 + 0 = 7; length 2: 3 + 4 = 7.
    let points = equator_points(&[3.0, 4.0, 0.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[0, 1, 2], &matrix, hourly_hops(2.5)).unwrap();

    assert_eq!(route.indices, vec![0, 1, 2]);
    assert_eq!(route.total_priority, 7.0);
}

#[test]
fn follows_permutation_not_input_order() {
    let points = equator_points(&[1.0, 2.0, 3.0, 4.0]);
    let matrix = matrix_for(&points);

    // 3 -> 2 -> 1 -> 0 takes three hours; only two are allowed.
    let route = select(&points, &[3, 2, 1, 0], &matrix, hourly_hops(2.0)).unwrap();

    assert_eq!(route.indices, vec![3, 2, 1]);
    assert_eq!(route.total_priority, 9.0);
}

#[test]
fn long_jump_truncates_route() {
    // Jumping from longitude 1 back to 0 and then out to 3 is expensive.
    let points = equator_points(&[1.0, 1.0, 1.0, 100.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[1, 0, 3, 2], &matrix, hourly_hops(3.5)).unwrap();

    assert_eq!(route.indices, vec![1, 0]);
    assert_eq!(route.total_priority, 2.0);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn no_points_gives_empty_route() {
    let route = select(&[], &[], &DistanceMatrix::new(0), hourly_hops(10.0)).unwrap();
    assert!(route.is_empty());
}

#[test]
fn single_point_gives_empty_route() {
    let points = equator_points(&[100.0]);
    let matrix = matrix_for(&points);

    let route = select(&points, &[0], &matrix, hourly_hops(10.0)).unwrap();
    assert!(route.is_empty());
}

#[test]
fn invalid_permutation_is_rejected() {
    let points = equator_points(&[1.0, 1.0, 1.0]);
    let matrix = matrix_for(&points);

    let err = select(&points, &[0, 2], &matrix, hourly_hops(10.0)).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidPermutation(_)));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn selection_is_deterministic_and_leaves_inputs_untouched() {
    let points = fixtures::points(fixtures::VOLGA_URALS);
    let matrix = matrix_for(&points);
    let tour = SimulatedAnnealing::with_seed(11).order(&matrix);
    let budget = TripBudget::new(90.0, 12.0).unwrap();

    let matrix_before = matrix.clone();
    let tour_before = tour.clone();

    let first = select(&points, &tour, &matrix, budget).unwrap();
    let second = select(&points, &tour, &matrix, budget).unwrap();

    assert_eq!(first, second);
    assert_eq!(matrix, matrix_before);
    assert_eq!(tour, tour_before);
}

#[test]
fn more_time_never_lowers_priority() {
    let points = fixtures::points(fixtures::GOLDEN_RING);
    let matrix = matrix_for(&points);
    let tour = SimulatedAnnealing::with_seed(5).order(&matrix);

    let budgets: Vec<TripBudget> = (1..=40)
        .map(|step| TripBudget::new(12.0, step as f64 * 0.5).unwrap())
        .collect();
    let routes = select_many(&points, &tour, &matrix, &budgets).unwrap();

    for pair in routes.windows(2) {
        assert!(
            pair[1].total_priority >= pair[0].total_priority,
            "priority dropped from {} to {}",
            pair[0].total_priority,
            pair[1].total_priority
        );
    }
}

#[test]
fn selected_route_respects_budget() {
    let points = fixtures::points(fixtures::GOLDEN_RING);
    let matrix = matrix_for(&points);
    let tour = SimulatedAnnealing::with_seed(9).order(&matrix);

    for hours in [2.0, 5.0, 8.0, 15.0] {
        let budget = TripBudget::new(12.0, hours).unwrap();
        let route = select(&points, &tour, &matrix, budget).unwrap();

        assert!(route.total_time_hours <= hours);
        if !route.is_empty() {
            assert_eq!(route.indices[..], tour[..route.len()], "route must be a tour prefix");

            let km: f64 = route
                .indices
                .windows(2)
                .map(|pair| haversine_km(points[pair[0]].location(), points[pair[1]].location()))
                .sum();
            assert!((route.total_distance_km - km).abs() < 1e-6);
        }
    }
}
