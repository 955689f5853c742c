//! Straight-line distance matrix over the map plane.
//!
//! Ignores obstacles and orbital motion; every leg is a straight segment.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::PlannerError;
use crate::map::LocationTable;
use crate::traits::DistanceMatrixProvider;

/// Euclidean distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMatrix;

impl EuclideanMatrix {
    fn distance(from: (f64, f64), to: (f64, f64)) -> f64 {
        (to.0 - from.0).hypot(to.1 - from.1)
    }
}

impl DistanceMatrixProvider for EuclideanMatrix {
    fn matrix_for(&self, positions: &[(f64, f64)]) -> Vec<Vec<f64>> {
        positions
            .par_iter()
            .enumerate()
            .map(|(i, &from)| {
                positions
                    .iter()
                    .enumerate()
                    .map(|(j, &to)| if i == j { 0.0 } else { Self::distance(from, to) })
                    .collect::<Vec<f64>>()
            })
            .collect()
    }
}

/// Read-only (name, name) -> distance lookup, built once per planning run.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMap {
    index: HashMap<String, usize>,
    matrix: Vec<Vec<f64>>,
}

impl DistanceMap {
    /// Builds the lookup for every location in `locations` using `provider`.
    pub fn build<M: DistanceMatrixProvider>(locations: &LocationTable, provider: &M) -> Self {
        let positions: Vec<(f64, f64)> = locations.iter().map(|l| l.position()).collect();
        let index = locations
            .iter()
            .enumerate()
            .map(|(i, l)| (l.name.clone(), i))
            .collect();
        let matrix = provider.matrix_for(&positions);

        Self { index, matrix }
    }

    /// Distance between two named locations.
    ///
    /// An unknown name means an event references a location the map never had.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64, PlannerError> {
        let from_idx = self.position_of(from)?;
        let to_idx = self.position_of(to)?;
        Ok(self.matrix[from_idx][to_idx])
    }

    /// Whether `name` has a row in the matrix.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn position_of(&self, name: &str) -> Result<usize, PlannerError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| PlannerError::UnknownLocation(name.to_string()))
    }
}
