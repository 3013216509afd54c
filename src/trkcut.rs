//! Mechanism to select good quality tracks

use crate::{
    duplicates::{remove_duplicates_within, DEFAULT_TOLERANCE},
    numeric::Float,
    track::Tracks,
};

/// Cuts defining a good track
#[derive(Clone, Debug, PartialEq)]
pub struct TrackCut {
    /// Minimal number of tracker layers with hits
    pub min_layers: i32,

    /// Fit χ² per degree of freedom must be below this
    pub max_chi2_per_dof: Float,

    /// Minimal number of hits
    pub min_hits: i32,

    /// Longitudinal momentum must be above this (MeV)
    pub min_pz: Float,

    /// Tracks whose momentum norm is this close to an earlier track's are
    /// considered to be duplicates of it
    pub duplicate_tolerance: Float,
}
//
impl TrackCut {
    /// Setup the cuts on tracks
    pub fn new(
        min_layers: i32,
        max_chi2_per_dof: Float,
        min_hits: i32,
        min_pz: Float,
        duplicate_tolerance: Float,
    ) -> Self {
        Self {
            min_layers,
            max_chi2_per_dof,
            min_hits,
            min_pz,
            duplicate_tolerance,
        }
    }

    /// Flag the tracks of an event which pass the cuts
    ///
    /// Duplicate removal considers all tracks, not only those which pass the
    /// other cuts, so a bad track can shadow a later good one.
    ///
    pub fn select(&self, tracks: &Tracks) -> Vec<bool> {
        let n_hits = tracks.n_hits();
        let chi2_per_dof = tracks.chi2_per_dof();
        let unique = remove_duplicates_within(&tracks.p0, self.duplicate_tolerance);
        (0..tracks.len())
            .map(|trk| {
                tracks.n_layers[trk] >= self.min_layers
                    && chi2_per_dof[trk] < self.max_chi2_per_dof
                    && n_hits[trk] >= self.min_hits
                    && tracks.pz0[trk] > self.min_pz
                    && unique[trk]
            })
            .collect()
    }
}

impl Default for TrackCut {
    /// Cuts of the electron neutrino analysis
    fn default() -> Self {
        Self::new(7, 25., 12, 20_000., DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{tests::good_track, Track};

    fn select_one(track: Track) -> bool {
        let tracks: Tracks = [track].into_iter().collect();
        TrackCut::default().select(&tracks)[0]
    }

    #[test]
    fn good_track_passes() {
        assert!(select_one(good_track(1., 100_000.)));
    }

    #[test]
    fn each_cut_rejects() {
        let good = good_track(-1., 100_000.);
        assert!(!select_one(Track {
            n_layers: 6,
            ..good
        }));
        assert!(!select_one(Track {
            chi2: 250.,
            ..good
        }));
        // 6 degrees of freedom pass the χ² cut but only make 11 hits
        assert!(!select_one(Track {
            n_dof: 6,
            chi2: 6.,
            ..good
        }));
        assert!(!select_one(Track {
            pz0: 20_000.,
            ..good
        }));
        assert!(select_one(Track {
            pz0: 20_000.5,
            ..good
        }));
    }

    #[test]
    fn duplicates_are_rejected() {
        let tracks: Tracks = [
            good_track(1., 100_000.),
            good_track(-1., 100_000.),
            good_track(1., 90_000.),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            TrackCut::default().select(&tracks),
            vec![true, false, true]
        );
    }

    #[test]
    fn bad_track_shadows_its_duplicates() {
        let bad = Track {
            n_layers: 3,
            ..good_track(1., 100_000.)
        };
        let tracks: Tracks = [bad, good_track(1., 100_000.)].into_iter().collect();
        assert_eq!(TrackCut::default().select(&tracks), vec![false, false]);
    }

    #[test]
    fn no_tracks_no_selection() {
        assert!(TrackCut::default().select(&Tracks::new()).is_empty());
    }
}
