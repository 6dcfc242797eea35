//! Relativistic (TOV) right-hand side

use std::f64::consts::PI;

use crate::eos;
use crate::physics::StellarState;

/// TOV derivatives (dP/dr, dm/dr) at the given radius and state.
///
/// ```text
/// dm/dr = 4π r² ρ(P)
/// dP/dr = -(m ρ / 2) · (1 + P/ρ) · (1 + 4π r³ P / m) · 1/(r² − m r)
/// ```
///
/// The denominator `r² − m·r` vanishes at r = m, the Schwarzschild radius in
/// these units. Physically admissible trajectories never approach that
/// condition inside the star, so the division is left unguarded; should a
/// pathological input drive the state across it, the resulting non-finite
/// values are caught by the integrator's per-step state validation.
pub fn derivative(r: f64, state: &StellarState) -> StellarState {
    let p = state.pressure();
    let m = state.mass();
    let rho = eos::density(p);

    let dm_dr = 4.0 * PI * r.powi(2) * rho;
    let dp_dr = -(m * rho / 2.0)
        * (1.0 + p / rho)
        * (1.0 + 4.0 * PI * r.powi(3) * p / m)
        * (1.0 / (r.powi(2) - m * r));

    StellarState::new(dp_dr, dm_dr)
}
