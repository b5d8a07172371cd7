//! Dense matrix storage and the connectivity-file loader.

pub mod dense;
pub mod loader;

pub use dense::DenseMatrix;
pub use loader::{load_adjacency, load_adjacency_path};
