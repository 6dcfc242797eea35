//! Adaptive Runge-Kutta 45 integrator with zero-crossing event detection
//!
//! # Mathematical Background
//!
//! Embedded Dormand-Prince 5(4) pair: seven stages per step produce both a
//! fifth-order solution and a fourth-order error estimate at no extra
//! derivative evaluations. The step size is adjusted with an I-controller,
//!
//! ```text
//! h_next = h · clamp(safety · err^(-1/5), min_factor, max_factor)
//! ```
//!
//! where `err` is the tolerance-scaled error norm
//!
//! ```text
//! err = max_i |y5_i - y4_i| / (atol + rtol·|y5_i|)
//! ```
//!
//! and the step is accepted when `err ≤ 1`.
//!
//! # Surface event
//!
//! The stellar surface is the zero crossing of the pressure component.
//! Unlike the fixed-step backend, which detects it only on the step grid,
//! this backend localizes it by bisection on the step length: once an
//! accepted step brackets the crossing, the sub-step whose endpoint lands on
//! P = 0 (to within machine-limited resolution) is found and its endpoint
//! becomes the last trajectory sample.
//!
//! # Role
//!
//! This is the reference backend: it validates the fixed-step integrator
//! (same termination semantics, same output shape) and offers local error
//! control to callers who need it. Both backends span the identical radius
//! interval `[r0, r0 + max_steps·step]`, so the truncation classification is
//! comparable between them.

use crate::physics::{DerivativeModel, StellarState};
use crate::solver::{
    validate_state, IntegrationConfig, IntegrationResult, Integrator, Termination, Trajectory,
};

// =================================================================================================
// Dormand-Prince 5(4) coefficients
// =================================================================================================

const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order weights (also the seventh stage node, FSAL property unused)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Error weights: b5 - b4 rows of the embedded pair
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

// Step controller
const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;
const ERROR_EXPONENT: f64 = -1.0 / 5.0;

// Bisection iteration cap for the surface event. 64 halvings exhaust the
// resolution of an f64 step length.
const EVENT_BISECTIONS: usize = 64;

const INITIAL_CAPACITY: usize = 1024;

// =================================================================================================
// RK45 Integrator
// =================================================================================================

/// Adaptive Dormand-Prince 5(4) integrator with pressure-surface event.
///
/// # Tolerances
///
/// `abs_tolerance` and `rel_tolerance` scale the embedded error estimate.
/// The defaults (1e-12, 1e-6) resolve the pressure down to well below the
/// EOS floor while keeping mid-range solves to a few hundred steps.
///
/// # Example
///
/// ```rust
/// use tov_rs::models::{initial_mass, StructureEquations};
/// use tov_rs::constants::PhysicalConstants;
/// use tov_rs::physics::StellarState;
/// use tov_rs::solver::{IntegrationConfig, Integrator, Rk45Integrator};
/// use tov_rs::eos;
///
/// # fn main() -> Result<(), String> {
/// let constants = PhysicalConstants::new();
/// let central_pressure = 0.001;
/// let m0 = initial_mass(1e-6, eos::density(central_pressure), &constants);
///
/// let integrator = Rk45Integrator::new();
/// let config = IntegrationConfig::new(5e-3, 10_000_000);
/// let result = integrator.integrate(
///     &StructureEquations::Newtonian,
///     1e-6,
///     StellarState::new(central_pressure, m0),
///     &config,
/// )?;
///
/// assert!(result.is_converged());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rk45Integrator {
    /// Absolute tolerance of the error norm
    pub abs_tolerance: f64,
    /// Relative tolerance of the error norm
    pub rel_tolerance: f64,
    /// Smallest step length before the run is declared stalled
    pub min_step: f64,
}

impl Default for Rk45Integrator {
    fn default() -> Self {
        Self {
            abs_tolerance: 1e-12,
            rel_tolerance: 1e-6,
            min_step: 1e-14,
        }
    }
}

impl Rk45Integrator {
    /// Create an adaptive integrator with the default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adaptive integrator with explicit tolerances.
    pub fn with_tolerances(abs_tolerance: f64, rel_tolerance: f64) -> Self {
        Self {
            abs_tolerance,
            rel_tolerance,
            ..Self::default()
        }
    }

    /// One Dormand-Prince step from `(r, y)` with length `h`.
    ///
    /// Returns the fifth-order endpoint and the tolerance-scaled error norm.
    fn step(
        &self,
        model: &dyn DerivativeModel,
        r: f64,
        y: &StellarState,
        h: f64,
    ) -> (StellarState, f64) {
        let y = *y;

        let k1 = model.derivative(r, &y);
        let k2 = model.derivative(r + C2 * h, &(y + k1 * (A21 * h)));
        let k3 = model.derivative(r + C3 * h, &(y + k1 * (A31 * h) + k2 * (A32 * h)));
        let k4 = model.derivative(
            r + C4 * h,
            &(y + k1 * (A41 * h) + k2 * (A42 * h) + k3 * (A43 * h)),
        );
        let k5 = model.derivative(
            r + C5 * h,
            &(y + k1 * (A51 * h) + k2 * (A52 * h) + k3 * (A53 * h) + k4 * (A54 * h)),
        );
        let k6 = model.derivative(
            r + h,
            &(y + k1 * (A61 * h)
                + k2 * (A62 * h)
                + k3 * (A63 * h)
                + k4 * (A64 * h)
                + k5 * (A65 * h)),
        );

        let y_next =
            y + (k1 * B1 + k3 * B3 + k4 * B4 + k5 * B5 + k6 * B6) * h;

        let k7 = model.derivative(r + h, &y_next);

        let error =
            (k1 * E1 + k3 * E3 + k4 * E4 + k5 * E5 + k6 * E6 + k7 * E7) * h;

        // Tolerance-scaled infinity norm over the two components
        let scale_p = self.abs_tolerance + self.rel_tolerance * y_next.pressure().abs();
        let scale_m = self.abs_tolerance + self.rel_tolerance * y_next.mass().abs();
        let norm = (error.pressure().abs() / scale_p).max(error.mass().abs() / scale_m);

        (y_next, norm)
    }

    /// Localize the pressure zero crossing inside an accepted step.
    ///
    /// On entry, the pressure is non-negative at `(r, y)` and negative at
    /// the endpoint of the step of length `h`. Bisection on the step length
    /// finds the largest sub-step whose endpoint still has non-negative
    /// pressure; that endpoint is the surface sample.
    ///
    /// Returns `None` when the crossing sits closer to `r` than the step
    /// resolution allows, in which case the state at `r` itself is the last
    /// valid sample.
    fn locate_surface(
        &self,
        model: &dyn DerivativeModel,
        r: f64,
        y: &StellarState,
        h: f64,
    ) -> Option<(f64, StellarState)> {
        let mut lo = 0.0_f64;
        let mut hi = h;
        let mut at_lo: Option<StellarState> = None;

        for _ in 0..EVENT_BISECTIONS {
            let mid = 0.5 * (lo + hi);
            if mid <= lo || mid >= hi {
                break;
            }
            let (y_mid, _) = self.step(model, r, y, mid);
            if y_mid.pressure() < 0.0 {
                hi = mid;
            } else {
                lo = mid;
                at_lo = Some(y_mid);
            }
        }

        at_lo.map(|state| (r + lo, state))
    }
}

impl Integrator for Rk45Integrator {
    fn integrate(
        &self,
        model: &dyn DerivativeModel,
        r0: f64,
        initial: StellarState,
        config: &IntegrationConfig,
    ) -> Result<IntegrationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        if !r0.is_finite() || r0 <= 0.0 {
            return Err("Initial radius must be finite and strictly positive".to_string());
        }
        if !initial.is_finite() {
            return Err("Initial state must be finite".to_string());
        }
        if self.abs_tolerance <= 0.0 || self.rel_tolerance <= 0.0 {
            return Err("Tolerances must be strictly positive".to_string());
        }

        // ====== Step 2: Setup ======

        // Same outer radius bound as the fixed-step backend would reach.
        let r_end = r0 + config.max_steps as f64 * config.step;

        let mut r = r0;
        let mut y = initial;
        let mut h = config.step;
        let mut trajectory = Trajectory::with_capacity(INITIAL_CAPACITY);
        let mut termination = Termination::Truncated;
        let mut evaluations: usize = 0;

        if y.pressure() >= 0.0 {
            trajectory.push(r, &y);
        } else {
            // Already below the surface: empty trajectory, same as RK4.
            termination = Termination::Surface;
        }

        // ====== Step 3: Adaptive Integration ======

        let mut attempts: usize = 0;
        while termination != Termination::Surface && r < r_end {
            if attempts >= config.max_steps {
                // Same diagnostic classification as the fixed-step budget.
                break;
            }
            attempts += 1;

            let h_trial = h.min(r_end - r);
            let (y_next, error) = self.step(model, r, &y, h_trial);
            evaluations += 7;

            if error <= 1.0 {
                // Accepted step
                validate_state(&y_next, attempts, r + h_trial)?;

                if y_next.pressure() < 0.0 {
                    // The step brackets the surface: refine the crossing.
                    if let Some((r_event, y_event)) =
                        self.locate_surface(model, r, &y, h_trial)
                    {
                        trajectory.push(r_event, &y_event);
                    }
                    termination = Termination::Surface;
                    break;
                }

                r += h_trial;
                y = y_next;
                trajectory.push(r, &y);
            }

            // Step-size update (applies after acceptance and rejection)
            let factor = if error == 0.0 {
                MAX_FACTOR
            } else {
                (SAFETY * error.powf(ERROR_EXPONENT)).clamp(MIN_FACTOR, MAX_FACTOR)
            };
            h = (h_trial * factor).max(self.min_step);

            if h <= self.min_step && error > 1.0 {
                return Err(format!(
                    "Adaptive step size underflow at r = {:e}: cannot meet the requested \
                     tolerance",
                    r
                ));
            }
        }

        // ====== Step 4: Build Result ======

        let steps = trajectory.len();
        let mut result = IntegrationResult::new(trajectory, termination);
        result.add_metadata("solver", self.name());
        result.add_metadata("model", model.name());
        result.add_metadata("steps", &steps.to_string());
        result.add_metadata("step attempts", &attempts.to_string());
        result.add_metadata("function evaluations", &evaluations.to_string());
        result.add_metadata("abs tolerance", &self.abs_tolerance.to_string());
        result.add_metadata("rel tolerance", &self.rel_tolerance.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Runge-Kutta 45 (adaptive)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
