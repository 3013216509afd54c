//! This module implements the minimal 4-momentum handling logic needed to
//! compute invariant masses: construction, addition, and mass extraction.

use crate::numeric::Float;
use nalgebra::SVector;
use prefix_num_ops::real::*;
use std::ops::Add;
use tracing::warn;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Relativistic 4-momentum, stored in (Px, Py, Pz, E) order
///
/// Only the operations which invariant mass computations need are exposed.
/// Whatever parametrization it was built from, the sum of two 4-momenta is
/// carried out in cartesian coordinates.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourMomentum(SVector<Float, MOMENTUM_DIM>);
//
impl FourMomentum {
    /// Build a 4-momentum from its cartesian momentum and energy
    pub fn from_px_py_pz_e(px: Float, py: Float, pz: Float, e: Float) -> Self {
        Self(SVector::<Float, MOMENTUM_DIM>::new(px, py, pz, e))
    }

    /// Build a 4-momentum from transverse momentum, pseudorapidity,
    /// azimuthal angle and mass
    ///
    /// Negative masses follow the signed mass convention, where they
    /// contribute -m² to the squared energy. The squared energy is floored at
    /// zero, so that rounding errors on such inputs cannot make it negative.
    ///
    pub fn from_pt_eta_phi_m(pt: Float, eta: Float, phi: Float, mass: Float) -> Self {
        let p = pt * cosh(eta);
        let e2 = p * p + mass * abs(mass);
        let e = sqrt(if e2 > 0. { e2 } else { 0. });
        Self::from_px_py_pz_e(pt * cos(phi), pt * sin(phi), pt * sinh(eta), e)
    }

    /// Squared invariant mass, E² - |p|²
    pub fn mass_squared(&self) -> Float {
        self.0[E] * self.0[E] - self.0.xyz().norm_squared()
    }

    /// Invariant mass
    ///
    /// Spacelike 4-momenta get a negative mass, -sqrt(|p|² - E²), and are
    /// reported as a warning, but the value is not masked.
    ///
    pub fn mass(&self) -> Float {
        let mass_2 = self.mass_squared();
        if mass_2 >= 0. {
            sqrt(mass_2)
        } else {
            warn!(
                mass_squared = mass_2,
                "Tachyonic 4-momentum: spacelike vector with negative mass squared"
            );
            -sqrt(-mass_2)
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
