//! Angular quantities: wrapped angle differences and the azimuthal angle of a
//! transverse momentum

use crate::{elementwise::zip_map, numeric::Float};
use num_traits::FloatConst;
use prefix_num_ops::real::*;

/// Difference phi2 - phi1 between two azimuthal angles, wrapped to ]-π, π]
pub fn delta_phi<T: num_traits::Float + FloatConst>(phi1: T, phi2: T) -> T {
    let pi = T::PI();
    let two_pi = pi + pi;
    let diff = (phi2 - phi1) % two_pi;
    if diff <= -pi {
        diff + two_pi
    } else if diff > pi {
        diff - two_pi
    } else {
        diff
    }
}

/// Elementwise version of [`delta_phi`]
///
/// # Panics
///
/// If `phi2` is shorter than `phi1`.
///
pub fn delta_phi_vec<T: num_traits::Float + FloatConst>(phi1: &[T], phi2: &[T]) -> Vec<T> {
    zip_map(phi1, phi2, delta_phi::<T>)
}

/// Elementwise difference between two sequences of polar angles
///
/// This simply reuses the azimuthal wrapping of [`delta_phi_vec`], which
/// treats theta-like angles as if they were periodic. That's an approximation
/// which is only good for small angular differences.
///
pub fn delta_theta<T: num_traits::Float + FloatConst>(theta1: &[T], theta2: &[T]) -> Vec<T> {
    delta_phi_vec(theta1, theta2)
}

/// Value of π used by [`phi`]
///
/// Analyses were calibrated against this truncated constant, and [`phi`] must
/// reproduce their numbers exactly.
///
pub const TRUNCATED_PI: Float = 3.1415;

/// Azimuthal angle of a transverse momentum
///
/// This is `-(π/2)·sign(py) + atan(-px/py) + π`, with `sign(py) = py/|py|`
/// and π taken to be [`TRUNCATED_PI`]. It does not follow the `atan2`
/// conventions, and since the sign is computed by division, `py == 0` yields
/// NaN. Existing analyses rely on all of these quirks.
///
pub fn phi(px: Float, py: Float) -> Float {
    -(TRUNCATED_PI / 2.) * (py / abs(py)) + atan(-px / py) + TRUNCATED_PI
}

/// Elementwise version of [`phi`]
///
/// # Panics
///
/// If `py` is shorter than `px`.
///
pub fn phi_vec(px: &[Float], py: &[Float]) -> Vec<Float> {
    zip_map(px, py, phi)
}
