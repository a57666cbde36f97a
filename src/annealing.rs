//! Tour orderers: simulated annealing plus fixed orders for callers that
//! already know the visiting sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::matrix::DistanceMatrix;
use crate::traits::TourOrderer;

const EPSILON: f64 = 1e-9;

/// Number of random moves sampled to pick the starting temperature.
const TEMPERATURE_SAMPLES: usize = 100;

#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Geometric cooling factor applied after each temperature level.
    pub alpha: f64,
    /// Random 2-opt moves tried at each temperature level.
    pub moves_per_temperature: usize,
    /// Stop after this many consecutive levels without a new best tour.
    pub max_non_improvements: usize,
    /// Hard cap on temperature levels.
    pub max_temperature_levels: usize,
    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            moves_per_temperature: 200,
            max_non_improvements: 3,
            max_temperature_levels: 1000,
            seed: None,
        }
    }
}

/// Closed-tour simulated annealing over 2-opt segment reversals.
///
/// The tour always starts at index 0. The best tour found is finished off
/// with a deterministic 2-opt pass. Moves assume a symmetric matrix.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    pub config: AnnealingConfig,
}

impl SimulatedAnnealing {
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(AnnealingConfig {
            seed: Some(seed),
            ..AnnealingConfig::default()
        })
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl TourOrderer for SimulatedAnnealing {
    fn order(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        let n = matrix.size();
        // Every closed tour over three or fewer points has the same length.
        if n <= 3 {
            return (0..n).collect();
        }

        let mut rng = self.rng();
        let mut tour: Vec<usize> = (0..n).collect();
        tour[1..].shuffle(&mut rng);

        let mut cost = matrix.tour_length(&tour);
        let mut best = tour.clone();
        let mut best_cost = cost;
        let mut temperature = initial_temperature(&tour, matrix, &mut rng);

        let mut non_improvements = 0;
        let mut levels = 0;
        while non_improvements < self.config.max_non_improvements
            && levels < self.config.max_temperature_levels
        {
            let mut improved = false;

            for _ in 0..self.config.moves_per_temperature {
                let (i, j) = random_move(n, &mut rng);
                let delta = two_opt_delta(&tour, matrix, i, j);

                let accept = delta <= 0.0
                    || rng.gen_range(0.0..1.0) < (-delta / temperature).exp();
                if !accept {
                    continue;
                }

                tour[i..=j].reverse();
                cost += delta;
                if cost + EPSILON < best_cost {
                    best.copy_from_slice(&tour);
                    best_cost = cost;
                    improved = true;
                }
            }

            non_improvements = if improved { 0 } else { non_improvements + 1 };
            temperature *= self.config.alpha;
            levels += 1;
        }

        two_opt_polish(&mut best, matrix);

        tracing::debug!(
            points = n,
            levels,
            tour_km = matrix.tour_length(&best),
            "simulated annealing finished"
        );
        best
    }
}

/// Returns a caller-supplied order unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOrder(pub Vec<usize>);

impl TourOrderer for FixedOrder {
    fn order(&self, _matrix: &DistanceMatrix) -> Vec<usize> {
        self.0.clone()
    }
}

/// Visits points in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOrder;

impl TourOrderer for IdentityOrder {
    fn order(&self, matrix: &DistanceMatrix) -> Vec<usize> {
        (0..matrix.size()).collect()
    }
}

/// Segment bounds `1 <= i < j <= n - 1`; position 0 stays fixed.
fn random_move(n: usize, rng: &mut StdRng) -> (usize, usize) {
    let i = rng.gen_range(1..n - 1);
    let j = rng.gen_range(i + 1..n);
    (i, j)
}

/// Change in closed-tour length from reversing `tour[i..=j]`.
fn two_opt_delta(tour: &[usize], matrix: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let prev = tour[i - 1];
    let next = tour[(j + 1) % n];
    let (first, last) = (tour[i], tour[j]);

    matrix.get(prev, last) + matrix.get(first, next)
        - matrix.get(prev, first)
        - matrix.get(last, next)
}

/// Temperature at which an average uphill move is accepted half the time.
fn initial_temperature(tour: &[usize], matrix: &DistanceMatrix, rng: &mut StdRng) -> f64 {
    let n = tour.len();
    let total: f64 = (0..TEMPERATURE_SAMPLES)
        .map(|_| {
            let (i, j) = random_move(n, rng);
            two_opt_delta(tour, matrix, i, j).abs()
        })
        .sum();
    let mean = total / TEMPERATURE_SAMPLES as f64;

    if mean > EPSILON {
        mean / std::f64::consts::LN_2
    } else {
        1.0
    }
}

/// First-improvement 2-opt until no reversal shortens the tour.
fn two_opt_polish(tour: &mut [usize], matrix: &DistanceMatrix) {
    let n = tour.len();
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(tour, matrix, i, j) < -EPSILON {
                    tour[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }
}
