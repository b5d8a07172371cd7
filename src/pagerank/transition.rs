//! Transition matrix construction
//!
//! Builds the damped column-stochastic transition matrix from a raw
//! adjacency matrix. Columns are source nodes, rows destinations, so
//! normalization runs per column. The order is fixed: column-normalize
//! (with dangling correction) first, then damp — with dangling columns
//! present, damping first would produce a different distribution.

use rayon::prelude::*;

use crate::error::{Result, WebRankError};
use crate::matrix::dense::DenseMatrix;

/// Below this dimension the matrix–vector product runs sequentially;
/// the per-row work is too small to pay for fork/join.
const PARALLEL_DIM_CUTOFF: usize = 256;

/// Column-normalize an adjacency matrix.
///
/// Every zero-sum column (a dangling node) becomes a uniform `1/dim`
/// column; every other column is divided by its sum, so all columns sum
/// to exactly 1.
pub fn to_column_stochastic(adjacency: &DenseMatrix) -> Result<DenseMatrix> {
    let dim = adjacency.dim;
    if dim == 0 {
        return Err(WebRankError::InvalidDimension(0));
    }

    let sums = adjacency.column_sums();
    let uniform = 1.0 / dim as f64;

    let mut stochastic = DenseMatrix::zeros(dim);
    for row in 0..dim {
        for col in 0..dim {
            let value = if sums[col] == 0.0 {
                uniform
            } else {
                adjacency.get(row, col) / sums[col]
            };
            stochastic.set(row, col, value);
        }
    }
    Ok(stochastic)
}

/// A damped column-stochastic transition matrix.
///
/// Each entry is `p * stochastic[r][c] + (1 - p) / dim`: the random walker
/// follows a link with probability `p` and teleports uniformly otherwise.
/// Every column sums to 1, the matrix is irreducible and aperiodic, and
/// power iteration on it converges to a unique stationary distribution.
#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    matrix: DenseMatrix,
}

impl TransitionMatrix {
    /// Build the transition matrix for `adjacency` with damping factor
    /// `damping`.
    pub fn from_adjacency(adjacency: &DenseMatrix, damping: f64) -> Result<Self> {
        let mut matrix = to_column_stochastic(adjacency)?;
        let teleport = (1.0 - damping) / matrix.dim as f64;

        for value in &mut matrix.data {
            *value = damping * *value + teleport;
        }
        Ok(Self { matrix })
    }

    /// Matrix dimension (number of nodes).
    pub fn dim(&self) -> usize {
        self.matrix.dim
    }

    /// Per-column sums; each should be 1.0 within floating-point tolerance.
    pub fn column_sums(&self) -> Vec<f64> {
        self.matrix.column_sums()
    }

    /// Multiply the transition matrix by `rank`, producing the next iterate.
    ///
    /// Rows are independent, so large matrices split the product across
    /// the rayon pool; the sequential dependency between successive
    /// iterates is untouched because each call consumes a fully-computed
    /// input vector.
    pub fn apply(&self, rank: &[f64]) -> Vec<f64> {
        debug_assert_eq!(rank.len(), self.matrix.dim);

        let dot = |row: &[f64]| -> f64 {
            row.iter().zip(rank).map(|(&t, &r)| t * r).sum()
        };

        if self.matrix.dim < PARALLEL_DIM_CUTOFF {
            self.matrix.rows().map(dot).collect()
        } else {
            self.matrix
                .data
                .par_chunks_exact(self.matrix.dim)
                .map(dot)
                .collect()
        }
    }
}
