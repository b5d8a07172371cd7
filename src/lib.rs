//! # webrank
//!
//! Dense-matrix PageRank over digit-encoded web connectivity files.
//!
//! The input is a plain-text file where each of the first N lines holds N
//! decimal digits — entry `(r, c)` is an edge from node `c+1` to node `r+1`.
//! The crate parses that file into a dense matrix, builds the damped
//! column-stochastic transition matrix (dangling columns redirect
//! uniformly), runs a fixed number of power-iteration steps, and exposes
//! the normalized rank vector.
//!
//! ```rust,ignore
//! use webrank::{run_path, NoopObserver, PowerIteration};
//!
//! let solver = PowerIteration::new(); // p = 0.85, 100 iterations
//! let table = run_path("web.txt", &solver, &mut NoopObserver)?;
//! print!("{table}");
//! ```
//!
//! The library stops at the rank table: opening terminals, pausing, and
//! process control belong to the host program.

pub mod error;
pub mod matrix;
pub mod pagerank;
pub mod pipeline;
pub mod report;

pub use error::{Result, WebRankError};
pub use matrix::dense::DenseMatrix;
pub use matrix::loader::{load_adjacency, load_adjacency_path};
pub use pagerank::{PowerIteration, RankResult, TransitionMatrix};
pub use pipeline::{run_path, run_source, NoopObserver, PipelineObserver};
pub use report::{RankRow, RankTable};
