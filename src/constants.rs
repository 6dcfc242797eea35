//! Physical constants and numerical run parameters
//!
//! Two immutable bundles configure every solve:
//!
//! - [`PhysicalConstants`]: CODATA values plus the derived scales of the
//!   adimensionalization (Schwarzschild radius of one solar mass, energy
//!   density scale)
//! - [`NumericalParameters`]: initial radius, step size, step budget and
//!   the sampled central-pressure range
//!
//! Both are plain data: construct once, share by reference everywhere,
//! including across the parallel sweep.

// =================================================================================================
// Physical Constants
// =================================================================================================

/// Physical constants of the adimensionalization.
///
/// Lengths are measured in Schwarzschild radii of one solar mass, masses in
/// solar masses, and pressure and energy density in units of the
/// characteristic scale `mass_scale = M_sun c² / R_S³`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    /// Solar mass (kg)
    pub solar_mass: f64,

    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
    pub gravitational_constant: f64,

    /// Speed of light in vacuum (m/s)
    pub speed_of_light: f64,

    /// Schwarzschild radius of one solar mass, `2 G M_sun / c²` (m)
    pub schwarzschild_radius: f64,

    /// The same radius in kilometers, for reporting stellar radii
    pub schwarzschild_radius_km: f64,

    /// Energy-density scale of the adimensionalization,
    /// `M_sun c² / R_S³` (J/m³)
    pub mass_scale: f64,
}

impl PhysicalConstants {
    /// Build the constant bundle, deriving the scales from the CODATA values.
    pub fn new() -> Self {
        let solar_mass = 1.989e30;
        let gravitational_constant = 6.67430e-11;
        let speed_of_light: f64 = 2.99792458e8;

        let schwarzschild_radius =
            2.0 * gravitational_constant * solar_mass / speed_of_light.powi(2);
        let mass_scale =
            solar_mass * speed_of_light.powi(2) / schwarzschild_radius.powi(3);

        Self {
            solar_mass,
            gravitational_constant,
            speed_of_light,
            schwarzschild_radius,
            schwarzschild_radius_km: schwarzschild_radius / 1000.0,
            mass_scale,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Numerical Parameters
// =================================================================================================

/// Numerical parameters of a solve and of the central-pressure sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalParameters {
    /// Radius where integration starts, in Schwarzschild-radius units.
    /// Must be strictly positive: both right-hand sides divide by r.
    pub initial_radius: f64,

    /// Number of central pressures sampled by a sweep
    pub pressure_samples: usize,

    /// Natural log of the smallest sampled central pressure
    pub log_first_pressure: f64,

    /// Natural log of the largest sampled central pressure
    pub log_last_pressure: f64,

    /// Step budget of one integration run
    pub max_steps: usize,

    /// Radial step size, in Schwarzschild-radius units
    pub step: f64,
}

impl Default for NumericalParameters {
    fn default() -> Self {
        Self {
            initial_radius: 1e-6,
            pressure_samples: 100,
            log_first_pressure: 4e-7_f64.ln(),
            log_last_pressure: 4e2_f64.ln(),
            max_steps: 10_000_000,
            step: 5e-3,
        }
    }
}

impl NumericalParameters {
    /// Validate that the parameters describe a runnable configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_radius.is_finite() || self.initial_radius <= 0.0 {
            return Err("Initial radius must be finite and strictly positive".to_string());
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("Step size must be finite and strictly positive".to_string());
        }
        if self.max_steps == 0 {
            return Err("Maximum step count must be greater than 0".to_string());
        }
        if self.pressure_samples == 0 {
            return Err("Pressure sample count must be greater than 0".to_string());
        }
        if !self.log_first_pressure.is_finite() || !self.log_last_pressure.is_finite() {
            return Err("Pressure range bounds must be finite".to_string());
        }
        if self.log_first_pressure >= self.log_last_pressure {
            return Err(
                "The first sampled pressure must be smaller than the last".to_string()
            );
        }
        Ok(())
    }

    /// The sampled central pressures, ascending.
    ///
    /// Log-uniform grid over `[exp(log_first), exp(log_last)]`, with the
    /// interpolation parameter raised to `power` first. `power = 1.0` gives
    /// the plain log grid; larger powers concentrate samples toward the low
    /// end of the range, where the mass-radius relation bends fastest.
    pub fn central_pressures(&self, power: f64) -> Vec<f64> {
        if self.pressure_samples == 1 {
            return vec![self.log_first_pressure.exp()];
        }

        let span = self.log_last_pressure - self.log_first_pressure;
        (0..self.pressure_samples)
            .map(|i| {
                let t = i as f64 / (self.pressure_samples - 1) as f64;
                (self.log_first_pressure + t.powf(power) * span).exp()
            })
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        let constants = PhysicalConstants::new();

        // R_S of one solar mass is about 2.95 km
        assert!((constants.schwarzschild_radius - 2953.7).abs() < 1.0);
        assert!(
            (constants.schwarzschild_radius_km - constants.schwarzschild_radius / 1000.0)
                .abs()
                < 1e-12
        );

        // mass_scale = M_sun c² / R_S³
        let expected = constants.solar_mass * constants.speed_of_light.powi(2)
            / constants.schwarzschild_radius.powi(3);
        assert!((constants.mass_scale - expected).abs() / expected < 1e-15);
    }

    #[test]
    fn test_default_parameters() {
        let params = NumericalParameters::default();

        assert_eq!(params.initial_radius, 1e-6);
        assert_eq!(params.pressure_samples, 100);
        assert_eq!(params.max_steps, 10_000_000);
        assert_eq!(params.step, 5e-3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let good = NumericalParameters::default();

        let mut bad = good.clone();
        bad.initial_radius = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = good.clone();
        bad.step = -1e-3;
        assert!(bad.validate().is_err());

        let mut bad = good.clone();
        bad.max_steps = 0;
        assert!(bad.validate().is_err());

        let mut bad = good.clone();
        bad.pressure_samples = 0;
        assert!(bad.validate().is_err());

        let mut bad = good.clone();
        bad.log_first_pressure = bad.log_last_pressure;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_pressure_grid_spans_the_range() {
        let params = NumericalParameters::default();
        let pressures = params.central_pressures(1.0);

        assert_eq!(pressures.len(), 100);
        assert!((pressures[0] - 4e-7).abs() / 4e-7 < 1e-12);
        assert!((pressures[99] - 4e2).abs() / 4e2 < 1e-12);

        for pair in pressures.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_power_skews_toward_low_pressures() {
        let params = NumericalParameters {
            pressure_samples: 11,
            ..NumericalParameters::default()
        };

        let plain = params.central_pressures(1.0);
        let skewed = params.central_pressures(2.0);

        // Endpoints are fixed, interior samples shift toward the low end
        assert!((skewed[0] - plain[0]).abs() / plain[0] < 1e-12);
        assert!((skewed[10] - plain[10]).abs() / plain[10] < 1e-12);
        for i in 1..10 {
            assert!(skewed[i] < plain[i]);
        }
    }

    #[test]
    fn test_single_sample_grid() {
        let params = NumericalParameters {
            pressure_samples: 1,
            ..NumericalParameters::default()
        };
        let pressures = params.central_pressures(1.0);

        assert_eq!(pressures.len(), 1);
        assert!((pressures[0] - 4e-7).abs() / 4e-7 < 1e-12);
    }
}
