//! Invariant mass of particle pairs, from either 4-momentum parametrization

use crate::{momentum::FourMomentum, numeric::Float};

/// Invariant mass of a pair of particles given as (pt, eta, phi, mass)
#[allow(clippy::too_many_arguments)]
pub fn invariant_mass(
    pt1: Float,
    eta1: Float,
    phi1: Float,
    mass1: Float,
    pt2: Float,
    eta2: Float,
    phi2: Float,
    mass2: Float,
) -> Float {
    let p1 = FourMomentum::from_pt_eta_phi_m(pt1, eta1, phi1, mass1);
    let p2 = FourMomentum::from_pt_eta_phi_m(pt2, eta2, phi2, mass2);
    (p1 + p2).mass()
}

/// Invariant mass of a pair of particles given as (px, py, pz, E)
#[allow(clippy::too_many_arguments)]
pub fn invariant_mass_alt(
    px1: Float,
    py1: Float,
    pz1: Float,
    e1: Float,
    px2: Float,
    py2: Float,
    pz2: Float,
    e2: Float,
) -> Float {
    let p1 = FourMomentum::from_px_py_pz_e(px1, py1, pz1, e1);
    let p2 = FourMomentum::from_px_py_pz_e(px2, py2, pz2, e2);
    (p1 + p2).mass()
}
