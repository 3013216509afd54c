//! Sequential back-end of the yield accumulation

use crate::{event::Event, scheduling::EVENT_BATCH_SIZE, yields::YieldAccumulator};

/// Process events in sequential mode
///
/// We use batched logic even in sequential mode, in order to achieve
/// reproducibility with respect to multi-threaded runs.
///
pub fn run_batches(
    events: &[Event],
    process_batch: impl Fn(&[Event]) -> YieldAccumulator,
) -> YieldAccumulator {
    events
        .chunks(EVENT_BATCH_SIZE)
        .map(process_batch)
        .fold(YieldAccumulator::new(), |mut accumulator, batch| {
            accumulator.merge(batch);
            accumulator
        })
}
