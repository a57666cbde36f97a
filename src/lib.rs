//! trip-planner: time-budgeted sightseeing routes
//!
//! Orders all points into a short tour, then keeps the prefix of that tour
//! that collects the most priority within the traveler's time budget.

pub mod annealing;
pub mod config;
pub mod error;
pub mod haversine;
pub mod loader;
pub mod matrix;
pub mod planner;
pub mod point;
pub mod render;
pub mod report;
pub mod selector;
pub mod traits;

pub use config::{TravelMode, TripBudget};
pub use error::{LoadError, PlannerError, Result};
pub use matrix::DistanceMatrix;
pub use planner::{PlanOutcome, Planner};
pub use point::Point;
pub use selector::{SelectedRoute, select};
