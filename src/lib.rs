//! Kinematics helpers for data quality monitoring
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate gathers the numerical helpers which a columnar event analysis
//! needs on top of plain arithmetic: invariant mass of particle pairs from
//! either 4-momentum parametrization, wrapped angle differences, azimuthal
//! angles, radii, elementwise maxima and removal of duplicated candidates.
//!
//! On top of those, it implements the per-event quantities of the FASER data
//! quality monitoring: derived track kinematics, good track selection, data
//! quality cuts on events and per-run track yields.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Every helper is a pure function of its inputs. Sequences are taken as
//! slices and returned as freshly allocated vectors. Paired sequences must
//! have the same length; that is not validated beyond Rust's bounds checks.
//!
//! The numerical helpers deliberately reproduce some quirks that existing
//! analyses depend on:
//!
//! * [`max4`] takes zero into account, so the maximum of negative values is 0
//! * [`phi`] takes π to be 3.1415 and does not follow `atan2` conventions. It
//!   is NaN when `py == 0`
//! * [`delta_theta`] wraps polar angle differences as if they were azimuthal
//!
//! Floating-point precision is selected at build time via the `f32` feature.
//! The `multi-threading` feature parallelizes yield accumulation.

#![warn(missing_docs)]

pub mod angles;
pub mod config;
pub mod duplicates;
pub mod elementwise;
pub mod evcut;
pub mod event;
pub mod kinematics;
pub mod momentum;
pub mod numeric;
pub mod scheduling;
pub mod track;
pub mod trkcut;
pub mod yields;

pub use crate::{
    angles::{delta_phi, delta_phi_vec, delta_theta, phi, phi_vec},
    config::Configuration,
    duplicates::{remove_duplicates, remove_duplicates_within},
    elementwise::{masked, max4, max_from, radius, radius_vec, Max4},
    evcut::{EventCut, RunPeriods},
    event::{Event, EventInfo},
    kinematics::{invariant_mass, invariant_mass_alt},
    momentum::FourMomentum,
    numeric::Float,
    scheduling::accumulate_yields,
    track::{Track, Tracks},
    trkcut::TrackCut,
    yields::{TrackYields, YieldAccumulator},
};

/// We'll use eyre's type-erased result type throughout the crate
pub type Result<T> = eyre::Result<T>;
