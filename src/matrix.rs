//! Dense distance matrix in kilometers.

use crate::error::{PlannerError, Result};

/// A square n×n matrix stored in row-major order.
///
/// `get(i, j)` is the distance in kilometers from point `i` to point `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a zero-filled matrix of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a matrix from explicit rows. Every row must have `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(PlannerError::InvalidInput(format!(
                    "distance matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points covered.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of an open path visiting `order` in sequence.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|pair| self.get(pair[0], pair[1])).sum()
    }

    /// Length of the closed tour visiting `order` and returning to its start.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        match (order.first(), order.last()) {
            (Some(&first), Some(&last)) if order.len() > 1 => {
                self.path_length(order) + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}
