//! Multi-threaded back-end of the yield accumulation

use crate::{event::Event, scheduling::EVENT_BATCH_SIZE, yields::YieldAccumulator};
use rayon::prelude::*;

/// Process events in multi-threaded mode
///
/// Batches are processed in parallel, but their results are merged in batch
/// order, so that the output does not depend on thread scheduling.
///
pub fn run_batches(
    events: &[Event],
    process_batch: impl Send + Sync + Fn(&[Event]) -> YieldAccumulator,
) -> YieldAccumulator {
    let batch_results = events
        .par_chunks(EVENT_BATCH_SIZE)
        .map(process_batch)
        .collect::<Vec<_>>();
    tracing::debug!(num_batches = batch_results.len(), "Merging batch results");
    batch_results
        .into_iter()
        .fold(YieldAccumulator::new(), |mut accumulator, batch| {
            accumulator.merge(batch);
            accumulator
        })
}
