//! Initial-condition builder
//!
//! Integration cannot start at the true origin: both right-hand sides divide
//! by r. A solve therefore starts at a small radius `r_delta` with the mass
//! already enclosed in the uniform-density sphere below it.

use std::f64::consts::PI;

use crate::constants::PhysicalConstants;

/// Mass enclosed in a uniform sphere of radius `r_delta` (Schwarzschild-
/// radius units) at central density `rho_c` (adimensional), rescaled back
/// into solar-mass units.
///
/// Pure function; no error conditions for physically sensible (positive)
/// inputs. Scales as `r_delta³` for fixed `rho_c`.
pub fn initial_mass(r_delta: f64, rho_c: f64, constants: &PhysicalConstants) -> f64 {
    let radius_km = r_delta * constants.schwarzschild_radius_km;
    let density_si = rho_c * constants.mass_scale / constants.speed_of_light.powi(2);

    (4.0 / 3.0) * PI * radius_km.powi(3) * density_si / constants.solar_mass
}
