//! Rank table — the presentation boundary.
//!
//! Everything upstream works with 0-based node indices; the table switches
//! to the 1-based numbering of the input file's rows and columns, which is
//! what reports show to people. Rows stay in node order; rank-ordered
//! access goes through [`RankResult::top_n`].

use std::fmt;

use serde::Serialize;

use crate::pagerank::RankResult;

/// One node's rank, with 1-based node numbering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub node: usize,
    pub rank: f64,
}

/// The computed ranks of every node, in node order.
#[derive(Debug, Clone, Serialize)]
pub struct RankTable {
    pub rows: Vec<RankRow>,
}

impl RankTable {
    /// Build a table from a solver result.
    pub fn from_result(result: &RankResult) -> Self {
        let rows = result
            .ranks
            .iter()
            .enumerate()
            .map(|(node, &rank)| RankRow {
                node: node + 1,
                rank,
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tab-separated `NODE / RANK` table with six-decimal ranks.
impl fmt::Display for RankTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NODE\tRANK")?;
        writeln!(f, "---\t----")?;
        for row in &self.rows {
            writeln!(f, "{}\t{:.6}", row.node, row.rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RankTable {
        RankTable::from_result(&RankResult::new(vec![0.649123, 0.350877], 100, 1e-9))
    }

    #[test]
    fn test_nodes_are_one_based() {
        let table = sample_table();
        assert_eq!(table.rows[0].node, 1);
        assert_eq!(table.rows[1].node, 2);
    }

    #[test]
    fn test_display_renders_header_and_rows() {
        let rendered = sample_table().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "NODE\tRANK");
        assert_eq!(lines[1], "---\t----");
        assert_eq!(lines[2], "1\t0.649123");
        assert_eq!(lines[3], "2\t0.350877");
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample_table()).unwrap();
        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["node"], 1);
        assert!((rows[0]["rank"].as_f64().unwrap() - 0.649123).abs() < 1e-12);
    }

    #[test]
    fn test_empty_result_gives_empty_table() {
        let table = RankTable::from_result(&RankResult::new(vec![], 0, 0.0));
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
