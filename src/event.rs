//! This module defines the properties and storage of recorded events

use crate::track::Tracks;
use std::fmt::Display;

/// Number of timing scintillator channels
pub const NUM_TIMING_CHANNELS: usize = 4;

/// Per-event information used by the data quality cuts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventInfo {
    /// Run number
    pub run: u32,

    /// Event time (UNIX timestamp, in seconds)
    pub event_time: i64,

    /// Status words of the timing scintillator channels
    pub timing_status: [u32; NUM_TIMING_CHANNELS],

    /// Distance to the closest colliding bunch crossing
    pub distance_to_colliding_bcid: i32,

    /// Trigger bits after prescale
    pub tap: u32,
}

/// Storage for a recorded event
///
/// Encapsulates the event-level information and the reconstructed tracks.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    /// Event-level information
    pub info: EventInfo,

    /// Reconstructed tracks
    pub tracks: Tracks,
}
//
impl Event {
    /// Build an event from its parts
    pub fn new(info: EventInfo, tracks: Tracks) -> Self {
        Self { info, tracks }
    }
}

impl Display for Event {
    /// Dump the event header and track momenta
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            fmt,
            "Run {} at {}: {} track(s)",
            self.info.run,
            self.info.event_time,
            self.tracks.len()
        )?;
        let tracks = &self.tracks;
        for trk in 0..tracks.len() {
            writeln!(
                fmt,
                "{}\t{}\t{}\t{}\t{}",
                trk, tracks.charge[trk], tracks.px0[trk], tracks.py0[trk], tracks.pz0[trk]
            )?;
        }
        Ok(())
    }
}
