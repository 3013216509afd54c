//! Columnar storage of the reconstructed tracks of an event, and the derived
//! track quantities used by data quality monitoring
//!
//! Unless stated otherwise, quantities refer to the first track state (index
//! 0), at the upstream end of the spectrometer. The second state (index 1)
//! lies at its downstream end. Momenta are in MeV and positions in mm.

use crate::{
    angles,
    elementwise::{masked, radius_vec},
    numeric::Float,
};
use prefix_num_ops::real::*;

/// Number of hits which a track has on top of its degrees of freedom
pub const HITS_MINUS_DOF: i32 = 5;

/// One reconstructed track
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Track {
    /// Number of tracker layers with hits
    pub n_layers: i32,

    /// Electric charge (sign only matters)
    pub charge: Float,

    /// χ² of the track fit
    pub chi2: Float,

    /// Degrees of freedom of the track fit
    pub n_dof: i32,

    /// Position along X
    pub x0: Float,

    /// Position along Y
    pub y0: Float,

    /// Momentum along X
    pub px0: Float,

    /// Momentum along Y
    pub py0: Float,

    /// Momentum along Z (the beam axis)
    pub pz0: Float,

    /// Momentum norm
    pub p0: Float,

    /// Momentum along X at the second state
    pub px1: Float,

    /// Momentum along Y at the second state
    pub py1: Float,

    /// Momentum norm at the second state
    pub p1: Float,
}

/// Tracks of an event, stored as one column per track property
///
/// All columns must have the same length, this is only checked in debug
/// builds.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tracks {
    /// See [`Track::n_layers`]
    pub n_layers: Vec<i32>,

    /// See [`Track::charge`]
    pub charge: Vec<Float>,

    /// See [`Track::chi2`]
    pub chi2: Vec<Float>,

    /// See [`Track::n_dof`]
    pub n_dof: Vec<i32>,

    /// See [`Track::x0`]
    pub x0: Vec<Float>,

    /// See [`Track::y0`]
    pub y0: Vec<Float>,

    /// See [`Track::px0`]
    pub px0: Vec<Float>,

    /// See [`Track::py0`]
    pub py0: Vec<Float>,

    /// See [`Track::pz0`]
    pub pz0: Vec<Float>,

    /// See [`Track::p0`]
    pub p0: Vec<Float>,

    /// See [`Track::px1`]
    pub px1: Vec<Float>,

    /// See [`Track::py1`]
    pub py1: Vec<Float>,

    /// See [`Track::p1`]
    pub p1: Vec<Float>,
}
//
impl Tracks {
    /// Create an empty track collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track
    pub fn push(&mut self, track: Track) {
        self.n_layers.push(track.n_layers);
        self.charge.push(track.charge);
        self.chi2.push(track.chi2);
        self.n_dof.push(track.n_dof);
        self.x0.push(track.x0);
        self.y0.push(track.y0);
        self.px0.push(track.px0);
        self.py0.push(track.py0);
        self.pz0.push(track.pz0);
        self.p0.push(track.p0);
        self.px1.push(track.px1);
        self.py1.push(track.py1);
        self.p1.push(track.p1);
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        let len = self.n_layers.len();
        debug_assert!(
            [
                self.charge.len(),
                self.chi2.len(),
                self.n_dof.len(),
                self.x0.len(),
                self.y0.len(),
                self.px0.len(),
                self.py0.len(),
                self.pz0.len(),
                self.p0.len(),
                self.px1.len(),
                self.py1.len(),
                self.p1.len(),
            ]
            .iter()
            .all(|&col_len| col_len == len),
            "All track columns should have the same length"
        );
        len
    }

    /// Truth that there are no tracks
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ### TRACK COUNTS ###

    /// Number of positively charged tracks
    pub fn n_positive(&self) -> usize {
        self.charge.iter().filter(|&&q| q > 0.).count()
    }

    /// Number of negatively charged tracks
    pub fn n_negative(&self) -> usize {
        self.charge.iter().filter(|&&q| q < 0.).count()
    }

    /// Mask of positively charged tracks
    pub fn positive(&self) -> Vec<bool> {
        self.charge.iter().map(|&q| q > 0.).collect()
    }

    /// Mask of negatively charged tracks
    pub fn negative(&self) -> Vec<bool> {
        self.charge.iter().map(|&q| q < 0.).collect()
    }

    /// Split a per-track column into its positive and negative track entries
    ///
    /// Neutral tracks appear in neither output.
    ///
    pub fn split_by_charge<T: Copy>(&self, column: &[T]) -> (Vec<T>, Vec<T>) {
        (
            masked(column, &self.positive()),
            masked(column, &self.negative()),
        )
    }

    // ### FIT QUALITY ###

    /// Number of hits of each track
    pub fn n_hits(&self) -> Vec<i32> {
        self.n_dof.iter().map(|&n_dof| n_dof + HITS_MINUS_DOF).collect()
    }

    /// Fit χ² per degree of freedom
    ///
    /// Tracks without degrees of freedom get an infinite or NaN value.
    ///
    pub fn chi2_per_dof(&self) -> Vec<Float> {
        self.chi2
            .iter()
            .zip(&self.n_dof)
            .map(|(&chi2, &n_dof)| chi2 / n_dof as Float)
            .collect()
    }

    // ### KINEMATICS ###

    /// Transverse momentum
    pub fn pt0(&self) -> Vec<Float> {
        radius_vec(&self.px0, &self.py0)
    }

    /// Polar angle with respect to the beam axis
    pub fn theta0(&self) -> Vec<Float> {
        self.pt0()
            .iter()
            .zip(&self.p0)
            .map(|(&pt, &p)| asin(pt / p))
            .collect()
    }

    /// Azimuthal angle, in [0, π] since it is computed as acos(px/pt)
    pub fn phi0(&self) -> Vec<Float> {
        self.px0
            .iter()
            .zip(self.pt0())
            .map(|(&px, pt)| acos(px / pt))
            .collect()
    }

    /// Azimuthal angle, following the sign conventions of [`angles::phi`]
    pub fn signed_phi0(&self) -> Vec<Float> {
        angles::phi_vec(&self.px0, &self.py0)
    }

    /// Pseudorapidity
    pub fn eta0(&self) -> Vec<Float> {
        self.theta0()
            .into_iter()
            .map(|theta| -ln(tan(theta / 2.)))
            .collect()
    }

    /// Angle of the track in the XZ plane
    pub fn theta_x0(&self) -> Vec<Float> {
        self.px0
            .iter()
            .zip(&self.p0)
            .map(|(&px, &p)| asin(px / p))
            .collect()
    }

    /// Angle of the track in the YZ plane
    pub fn theta_y0(&self) -> Vec<Float> {
        self.py0
            .iter()
            .zip(&self.p0)
            .map(|(&py, &p)| asin(py / p))
            .collect()
    }

    /// Angle of the track in the XZ plane, at the second state
    pub fn theta_x1(&self) -> Vec<Float> {
        self.px1
            .iter()
            .zip(&self.p1)
            .map(|(&px, &p)| asin(px / p))
            .collect()
    }

    /// Angle of the track in the YZ plane, at the second state
    pub fn theta_y1(&self) -> Vec<Float> {
        self.py1
            .iter()
            .zip(&self.p1)
            .map(|(&py, &p)| asin(py / p))
            .collect()
    }

    /// Longitudinal momentum signed by the track charge
    pub fn pz_charge0(&self) -> Vec<Float> {
        self.pz0
            .iter()
            .zip(&self.charge)
            .map(|(&pz, &q)| pz * q)
            .collect()
    }

    // ### POSITIONS ###

    /// X positions of the positive and negative tracks
    pub fn x0_by_charge(&self) -> (Vec<Float>, Vec<Float>) {
        self.split_by_charge(&self.x0)
    }

    /// Y positions of the positive and negative tracks
    pub fn y0_by_charge(&self) -> (Vec<Float>, Vec<Float>) {
        self.split_by_charge(&self.y0)
    }
}

impl FromIterator<Track> for Tracks {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut tracks = Self::new();
        for track in iter {
            tracks.push(track);
        }
        tracks
    }
}
