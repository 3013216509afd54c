//! This module allows integrating track yields across recorded events

use crate::{
    event::Event,
    evcut::{Cut, EventCut},
    numeric::Float,
    track::Tracks,
    trkcut::TrackCut,
};
use std::{
    collections::BTreeMap,
    fmt::Display,
    ops::AddAssign,
};
use tracing::warn;

/// Track counts of one event, or sums thereof over several events
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrackYields {
    /// All tracks
    pub tracks: usize,

    /// Positively charged tracks
    pub positive: usize,

    /// Negatively charged tracks
    pub negative: usize,

    /// Good tracks
    pub good: usize,

    /// Positively charged good tracks
    pub good_positive: usize,

    /// Negatively charged good tracks
    pub good_negative: usize,
}
//
impl TrackYields {
    /// Count the tracks of an event, given the good track mask
    pub fn new(tracks: &Tracks, good: &[bool]) -> Self {
        let good = &good[..tracks.len()];
        let count_good = |charge_ok: fn(Float) -> bool| {
            tracks
                .charge
                .iter()
                .zip(good)
                .filter(|&(&q, &is_good)| is_good && charge_ok(q))
                .count()
        };
        Self {
            tracks: tracks.len(),
            positive: tracks.n_positive(),
            negative: tracks.n_negative(),
            good: count_good(|_| true),
            good_positive: count_good(|q| q > 0.),
            good_negative: count_good(|q| q < 0.),
        }
    }
}

impl AddAssign for TrackYields {
    fn add_assign(&mut self, other: Self) {
        self.tracks += other.tracks;
        self.positive += other.positive;
        self.negative += other.negative;
        self.good += other.good;
        self.good_positive += other.good_positive;
        self.good_negative += other.good_negative;
    }
}

/// Yields of one run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunYields {
    /// Number of selected events
    pub events: usize,

    /// Summed track counts of the selected events
    pub tracks: TrackYields,
}
//
impl RunYields {
    /// Per-event weight which normalizes the run to its luminosity
    ///
    /// A run without events is treated as if it had one, with a warning.
    ///
    pub fn lumi_weight(&self, lumi: Float) -> Float {
        let events = if self.events == 0 {
            warn!("Run has no selected events, normalizing as if it had one");
            1
        } else {
            self.events
        };
        lumi / events as Float
    }
}

impl AddAssign for RunYields {
    fn add_assign(&mut self, other: Self) {
        self.events += other.events;
        self.tracks += other.tracks;
    }
}

/// Number of events which passed each successive data quality cut
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cutflow {
    /// Events which were submitted to the cuts
    pub all: usize,

    /// Events which passed each cut and all cuts before it
    pub passed: [usize; Cut::COUNT],
}
//
impl Cutflow {
    /// Account for an event, given the first cut which rejected it (if any)
    pub fn record(&mut self, rejected_by: Option<Cut>) {
        self.all += 1;
        let num_passed = rejected_by.map_or(Cut::COUNT, Cut::index);
        for passed in &mut self.passed[..num_passed] {
            *passed += 1;
        }
    }

    /// Number of events which passed all cuts
    pub fn selected(&self) -> usize {
        self.passed[Cut::COUNT - 1]
    }

    /// Integrate the cutflow of another set of events
    pub fn merge(&mut self, other: &Self) {
        self.all += other.all;
        for (passed, other_passed) in self.passed.iter_mut().zip(other.passed) {
            *passed += other_passed;
        }
    }
}

impl Display for Cutflow {
    /// Cutflow report, with individual and cumulative efficiencies
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = |num: usize, denom: usize| {
            if denom == 0 {
                0.
            } else {
                100. * num as Float / denom as Float
            }
        };
        let mut previous = self.all;
        for cut in Cut::ALL {
            let passed = self.passed[cut.index()];
            writeln!(
                fmt,
                "{:<20}: pass={:<10} all={:<10} -- eff={:.2} % cumulative eff={:.2} %",
                cut.name(),
                passed,
                previous,
                percent(passed, previous),
                percent(passed, self.all),
            )?;
            previous = passed;
        }
        Ok(())
    }
}

/// This struct accumulates the cutflow and the per-run track yields of the
/// events which it is fed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YieldAccumulator {
    /// Data quality cutflow
    cutflow: Cutflow,

    /// Yields of each run, for the events which passed all cuts
    runs: BTreeMap<u32, RunYields>,
}
//
impl YieldAccumulator {
    /// Prepare for yields integration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the cuts to one event and integrate it if it passes them
    pub fn process(&mut self, event: &Event, event_cut: &EventCut, track_cut: &TrackCut) {
        let rejected_by = event_cut.rejecting_cut(&event.info);
        self.cutflow.record(rejected_by);
        if rejected_by.is_none() {
            let good = track_cut.select(&event.tracks);
            self.integrate(event.info.run, TrackYields::new(&event.tracks, &good));
        }
    }

    /// Integrate the track yields of one selected event
    pub fn integrate(&mut self, run: u32, yields: TrackYields) {
        *self.runs.entry(run).or_default() += RunYields {
            events: 1,
            tracks: yields,
        };
    }

    /// Integrate results from another YieldAccumulator
    #[allow(clippy::needless_pass_by_value)]
    pub fn merge(&mut self, other: Self) {
        self.cutflow.merge(&other.cutflow);
        for (run, yields) in other.runs {
            *self.runs.entry(run).or_default() += yields;
        }
    }

    /// Data quality cutflow
    pub fn cutflow(&self) -> &Cutflow {
        &self.cutflow
    }

    /// Yields of each run, sorted by run number
    pub fn runs(&self) -> &BTreeMap<u32, RunYields> {
        &self.runs
    }

    /// Yields of a single run
    pub fn run(&self, run: u32) -> Option<&RunYields> {
        self.runs.get(&run)
    }

    /// Yields summed over all runs
    pub fn total(&self) -> RunYields {
        self.runs
            .values()
            .fold(RunYields::default(), |mut total, &yields| {
                total += yields;
                total
            })
    }
}
