//! PageRank over dense connectivity matrices
//!
//! The solver turns an adjacency matrix into a damped column-stochastic
//! transition matrix and runs a fixed number of power-iteration steps.

pub mod power;
pub mod transition;

pub use power::PowerIteration;
pub use transition::TransitionMatrix;

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Stationary-distribution estimate, one probability per node
    /// (0-based index), summing to 1.
    pub ranks: Vec<f64>,
    /// Number of power-iteration steps performed.
    pub iterations: usize,
    /// L1 change between the final two iterates, before normalization.
    /// Diagnostic only; iteration never stops on it.
    pub delta: f64,
}

impl RankResult {
    pub fn new(ranks: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            ranks,
            iterations,
            delta,
        }
    }

    /// Number of ranked nodes.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank of a node by 0-based index, 0.0 if out of range.
    pub fn rank(&self, node: usize) -> f64 {
        self.ranks.get(node).copied().unwrap_or(0.0)
    }

    /// Top `n` nodes by rank, highest first.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.ranks.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_accessor_in_and_out_of_range() {
        let result = RankResult::new(vec![0.6, 0.4], 100, 1e-9);
        assert_eq!(result.rank(0), 0.6);
        assert_eq!(result.rank(1), 0.4);
        assert_eq!(result.rank(2), 0.0);
    }

    #[test]
    fn test_top_n_orders_by_rank() {
        let result = RankResult::new(vec![0.2, 0.5, 0.3], 100, 0.0);
        let top = result.top_n(2);
        assert_eq!(top, vec![(1, 0.5), (2, 0.3)]);
    }

    #[test]
    fn test_len_and_empty() {
        let result = RankResult::new(vec![], 0, 0.0);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }
}
