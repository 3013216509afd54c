//! Mechanism to apply data quality cuts to recorded events

use crate::event::EventInfo;
use std::{collections::BTreeMap, fmt::Display};

/// Bit of a timing channel status word which flags saturation
const TIMING_SATURATION_BIT: u32 = 4;

/// Bit of the trigger word which flags the timing trigger
const TIMING_TRIGGER_BIT: u32 = 4;

/// Individual data quality cuts, in the order where they are applied
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cut {
    /// Event lies in a period of stable running
    GoodTimes,

    /// Event does not lie in a period which was excluded from a good run
    ExcludedTimes,

    /// No timing scintillator channel is saturated
    NoTimingSaturation,

    /// Event comes from a colliding bunch crossing
    Colliding,

    /// Timing trigger fired
    TimingTrigger,
}
//
impl Cut {
    /// Number of cuts
    pub const COUNT: usize = 5;

    /// All cuts, in application order
    pub const ALL: [Cut; Self::COUNT] = [
        Cut::GoodTimes,
        Cut::ExcludedTimes,
        Cut::NoTimingSaturation,
        Cut::Colliding,
        Cut::TimingTrigger,
    ];

    /// Position of this cut in the application order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name of the cut
    pub fn name(self) -> &'static str {
        match self {
            Cut::GoodTimes => "Good times",
            Cut::ExcludedTimes => "Excluded times",
            Cut::NoTimingSaturation => "No timing saturation",
            Cut::Colliding => "Colliding",
            Cut::TimingTrigger => "Timing Trigger",
        }
    }
}

impl Display for Cut {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.write_str(self.name())
    }
}

/// Time period, including both ends (UNIX timestamps, in seconds)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// Start of the period
    pub start: i64,

    /// End of the period
    pub stop: i64,
}
//
impl Period {
    /// Truth that a time lies in this period
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time <= self.stop
    }
}

/// Stable and excluded running periods of each run, from a good run list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunPeriods {
    /// Periods of stable running
    stable: BTreeMap<u32, Vec<Period>>,

    /// Periods to be excluded from otherwise good runs
    excluded: BTreeMap<u32, Vec<Period>>,
}
//
impl RunPeriods {
    /// Start without any period, which keeps every event
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a period of stable running
    pub fn add_stable(&mut self, run: u32, start: i64, stop: i64) {
        self.stable.entry(run).or_default().push(Period { start, stop });
    }

    /// Record a period to be excluded
    pub fn add_excluded(&mut self, run: u32, start: i64, stop: i64) {
        self.excluded.entry(run).or_default().push(Period { start, stop });
    }

    /// Truth that an event lies in a stable period of its run
    ///
    /// If no stable period was recorded at all, there is no good times
    /// selection and every event passes.
    ///
    pub fn is_stable(&self, run: u32, time: i64) -> bool {
        self.stable.is_empty() || Self::any_contains(&self.stable, run, time)
    }

    /// Truth that an event lies in an excluded period of its run
    pub fn is_excluded(&self, run: u32, time: i64) -> bool {
        Self::any_contains(&self.excluded, run, time)
    }

    /// Number of recorded excluded periods
    pub fn num_excluded(&self) -> usize {
        self.excluded.values().map(Vec::len).sum()
    }

    fn any_contains(periods: &BTreeMap<u32, Vec<Period>>, run: u32, time: i64) -> bool {
        periods
            .get(&run)
            .map_or(false, |periods| periods.iter().any(|p| p.contains(time)))
    }
}

/// Data quality cuts on recorded events
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCut {
    /// Whether events must come from a colliding bunch crossing
    pub require_colliding: bool,

    /// Good run list periods
    pub periods: RunPeriods,
}
//
impl EventCut {
    /// Setup the cuts on recorded events
    pub fn new(require_colliding: bool, periods: RunPeriods) -> Self {
        Self {
            require_colliding,
            periods,
        }
    }

    /// First cut which rejects an event, if any
    pub fn rejecting_cut(&self, info: &EventInfo) -> Option<Cut> {
        let passes = |cut: Cut| match cut {
            Cut::GoodTimes => self.periods.is_stable(info.run, info.event_time),
            Cut::ExcludedTimes => !self.periods.is_excluded(info.run, info.event_time),
            Cut::NoTimingSaturation => info
                .timing_status
                .iter()
                .all(|&status| status & TIMING_SATURATION_BIT == 0),
            Cut::Colliding => !self.require_colliding || info.distance_to_colliding_bcid == 0,
            Cut::TimingTrigger => info.tap & TIMING_TRIGGER_BIT != 0,
        };
        Cut::ALL.into_iter().find(|&cut| !passes(cut))
    }

    /// Decide whether an event passes the cuts or should be rejected
    pub fn keep(&self, info: &EventInfo) -> bool {
        self.rejecting_cut(info).is_none()
    }
}
