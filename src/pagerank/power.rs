//! Power-iteration PageRank solver
//!
//! Runs a fixed number of matrix–vector products against the damped
//! transition matrix, then normalizes the result to a probability vector.
//! The iteration count is a literal bound, not a convergence test.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::dense::DenseMatrix;
use crate::pagerank::transition::TransitionMatrix;
use crate::pagerank::RankResult;

fn default_damping() -> f64 {
    0.85
}

fn default_iterations() -> usize {
    100
}

/// Fixed-count power-iteration PageRank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerIteration {
    /// Probability of following a link rather than teleporting.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Number of iterations to run, always in full.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            iterations: default_iterations(),
        }
    }
}

impl PowerIteration {
    /// Create a solver with the standard settings (p = 0.85, 100 iterations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Rank an adjacency matrix: build the damped transition matrix, then
    /// iterate.
    pub fn run(&self, adjacency: &DenseMatrix) -> Result<RankResult> {
        let transition = TransitionMatrix::from_adjacency(adjacency, self.damping)?;
        Ok(self.iterate(&transition))
    }

    /// Run the fixed iteration count against a pre-built transition matrix.
    ///
    /// The rank vector starts as all ones; the final vector is divided by
    /// its sum to yield a probability distribution.
    pub fn iterate(&self, transition: &TransitionMatrix) -> RankResult {
        let mut rank = vec![1.0; transition.dim()];
        let mut delta = 0.0;

        for _ in 0..self.iterations {
            let next = transition.apply(&rank);
            delta = rank
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .sum();
            rank = next;
        }

        normalize(&mut rank);
        RankResult::new(rank, self.iterations, delta)
    }
}

/// Scale `ranks` so its entries sum to 1. A zero-sum vector is left as is.
pub fn normalize(ranks: &mut [f64]) {
    let sum: f64 = ranks.iter().sum();
    if sum > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= sum;
        }
    }
}
