//! Pipeline runner — executes the linear ranking pipeline.
//!
//! Data flows one way: raw text → dense adjacency matrix → damped transition
//! matrix → rank vector → rank table. There is no branching control state
//! and no retry; the first failing stage propagates its error.
//!
//! The observer receives callbacks at each stage boundary. Pass
//! [`NoopObserver`](super::observer::NoopObserver) for zero-overhead
//! execution.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::error::Result;
use crate::matrix::loader::load_adjacency;
use crate::pagerank::{PowerIteration, TransitionMatrix};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FORMAT, STAGE_LOAD,
    STAGE_RANK, STAGE_TRANSITION,
};
use crate::report::RankTable;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Rank a connectivity matrix read from `source`.
///
/// Stages run in order:
/// 1. Load — infer the dimension, rewind, parse the full matrix
/// 2. Transition — dangling correction + damping
/// 3. Rank — fixed-count power iteration + normalization
/// 4. Format — 1-based rank table
pub fn run_source<R: BufRead + Seek>(
    mut source: R,
    solver: &PowerIteration,
    observer: &mut impl PipelineObserver,
) -> Result<RankTable> {
    // Stage 1: Load
    trace_stage!(STAGE_LOAD);
    observer.on_stage_start(STAGE_LOAD);
    let clock = StageClock::start();
    let adjacency = load_adjacency(&mut source)?;
    let report = StageReportBuilder::new(clock.elapsed())
        .dimension(adjacency.dim)
        .build();
    observer.on_stage_end(STAGE_LOAD, &report);
    observer.on_matrix(&adjacency);

    // Stage 2: Transition
    trace_stage!(STAGE_TRANSITION);
    observer.on_stage_start(STAGE_TRANSITION);
    let clock = StageClock::start();
    let transition = TransitionMatrix::from_adjacency(&adjacency, solver.damping)?;
    let report = StageReportBuilder::new(clock.elapsed())
        .dimension(transition.dim())
        .build();
    observer.on_stage_end(STAGE_TRANSITION, &report);

    // Stage 3: Rank
    trace_stage!(STAGE_RANK);
    observer.on_stage_start(STAGE_RANK);
    let clock = StageClock::start();
    let result = solver.iterate(&transition);
    let report = StageReportBuilder::new(clock.elapsed())
        .iterations(result.iterations)
        .residual(result.delta)
        .build();
    observer.on_stage_end(STAGE_RANK, &report);
    observer.on_rank(&result);

    // Stage 4: Format
    trace_stage!(STAGE_FORMAT);
    observer.on_stage_start(STAGE_FORMAT);
    let clock = StageClock::start();
    let table = RankTable::from_result(&result);
    let report = StageReport::new(clock.elapsed());
    observer.on_stage_end(STAGE_FORMAT, &report);

    Ok(table)
}

/// Rank a connectivity matrix stored in a file.
pub fn run_path(
    path: impl AsRef<Path>,
    solver: &PowerIteration,
    observer: &mut impl PipelineObserver,
) -> Result<RankTable> {
    let reader = BufReader::new(File::open(path)?);
    run_source(reader, solver, observer)
}
