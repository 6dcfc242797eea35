//! Newtonian (non-relativistic) right-hand side

use std::f64::consts::PI;

use crate::eos;
use crate::physics::StellarState;

/// Newtonian hydrostatic-equilibrium derivatives (dP/dr, dm/dr).
///
/// ```text
/// dm/dr = 4π r² ρ(P)
/// dP/dr = -(m ρ) / (2 r²)
/// ```
///
/// Well-behaved for every r > 0.
pub fn derivative(r: f64, state: &StellarState) -> StellarState {
    let p = state.pressure();
    let m = state.mass();
    let rho = eos::density(p);

    let dm_dr = 4.0 * PI * r.powi(2) * rho;
    let dp_dr = -(m * rho) / (2.0 * r.powi(2));

    StellarState::new(dp_dr, dm_dr)
}
