//! This module takes care of scheduling the yield accumulation work,
//! encapsulating use of multiple threads

#[cfg(feature = "multi-threading")]
mod multi_threading;
#[cfg(not(feature = "multi-threading"))]
mod sequential;

use crate::{event::Event, evcut::EventCut, trkcut::TrackCut, yields::YieldAccumulator};

/// Size of the processed event batches
///
/// Events are grouped in batches of a certain size, which are accumulated
/// independently and then merged in order. This is what makes parallel runs
/// produce the same results as sequential ones.
///
pub const EVENT_BATCH_SIZE: usize = 10_000;

/// Apply the cuts to a set of events and accumulate the yields of those which
/// pass them, in the manner that was configured at build time.
pub fn accumulate_yields(
    events: &[Event],
    event_cut: &EventCut,
    track_cut: &TrackCut,
) -> YieldAccumulator {
    // This kernel processes one batch of events
    let process_batch = |batch: &[Event]| -> YieldAccumulator {
        let mut accumulator = YieldAccumulator::new();
        for event in batch {
            accumulator.process(event, event_cut, track_cut);
        }
        accumulator
    };

    // Integrate the batches...
    let accumulator = {
        // ...in sequential mode
        #[cfg(not(feature = "multi-threading"))]
        {
            sequential::run_batches(events, process_batch)
        }

        // ...in multi-threaded mode
        #[cfg(feature = "multi-threading")]
        {
            multi_threading::run_batches(events, process_batch)
        }
    };

    tracing::debug!(
        num_events = events.len(),
        selected = accumulator.cutflow().selected(),
        "Accumulated yields"
    );
    accumulator
}
