//! Linear ranking pipeline: Load → Transition → Rank → Format.

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{run_path, run_source};
