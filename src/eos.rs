//! Fermi-gas equation of state
//!
//! Closes the structure equations by relating the adimensional energy
//! density to the adimensional pressure. The two-term power-law form is a
//! fit to the cold ideal-neutron Fermi gas: the `P^(3/5)` term dominates in
//! the non-relativistic regime and the linear term toward the
//! ultra-relativistic one.

/// Pressure floor applied before evaluating the fit.
///
/// Near the surface the intermediate RK stages probe slightly negative
/// pressures, where the fractional power is undefined. The floor keeps the
/// evaluation real without altering any stored trajectory sample, and its
/// exact value is part of the numerical contract: changing it shifts the
/// surface location at the last few steps.
pub const PRESSURE_FLOOR: f64 = 1e-8;

/// Coefficient of the non-relativistic `P^(3/5)` term.
pub const FIT_NON_RELATIVISTIC: f64 = 0.871;

/// Coefficient of the ultra-relativistic linear term.
pub const FIT_RELATIVISTIC: f64 = 2.867;

/// Adimensional energy density at the given adimensional pressure.
///
/// Total function: any finite input yields a finite, strictly positive
/// density because the pressure is floored at [`PRESSURE_FLOOR`] first.
///
/// # Example
///
/// ```rust
/// let rho = tov_rs::eos::density(0.001);
/// assert!(rho > 0.0);
/// ```
pub fn density(pressure: f64) -> f64 {
    let p = pressure.max(PRESSURE_FLOOR);
    FIT_NON_RELATIVISTIC * p.powf(3.0 / 5.0) + FIT_RELATIVISTIC * p
}

// =================================================================================================
// Tests
// =================================================================================================
