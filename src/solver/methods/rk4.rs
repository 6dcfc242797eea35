//! Fixed-step Runge-Kutta 4 integrator with surface detection
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method for dy/dr = f(r, y):
//!
//! ```text
//! k₀ = h·f(rₙ, yₙ)
//! k₁ = h·f(rₙ + h/2, yₙ + k₀/2)
//! k₂ = h·f(rₙ + h/2, yₙ + k₁/2)
//! k₃ = h·f(rₙ + h, yₙ + k₂)
//!
//! yₙ₊₁ = yₙ + (k₀ + 2k₁ + 2k₂ + k₃)/6
//! ```
//!
//! # Termination
//!
//! Stellar-structure integration does not run to a fixed endpoint: it runs
//! until the pressure crosses zero (the surface of the star). At the top of
//! each iteration the current pressure is tested; a negative value stops the
//! run *without* appending that state, so the returned trajectory ends at
//! the last state with non-negative pressure.
//!
//! The step budget bounds the worst case. Exhausting it without a crossing
//! is reported as [`Termination::Truncated`] so that downstream consumers
//! can tell a truncation artifact from a genuine surface.
//!
//! # Characteristics
//!
//! - **Order**: fourth-order accurate (global error ~ O(h⁴))
//! - **Cost**: 4 derivative evaluations per step
//! - **Memory**: O(1) working state plus the stored trajectory
//! - **Tuning**: none — step size and budget are configuration, not derived
//!   adaptively. Callers needing local error control use the
//!   [`Rk45Integrator`](crate::solver::Rk45Integrator) backend instead.

use crate::physics::{DerivativeModel, StellarState};
use crate::solver::{
    validate_state, IntegrationConfig, IntegrationResult, Integrator, Termination, Trajectory,
};

// Initial trajectory allocation. The step budget is a worst-case bound (1e7
// by default), not a size estimate, so the buffer starts at a modest
// capacity and grows geometrically instead of pre-sizing to the budget.
const INITIAL_CAPACITY: usize = 4096;

// =================================================================================================
// RK4 Integrator
// =================================================================================================

/// Fixed-step classical Runge-Kutta integrator.
///
/// # Algorithm
///
/// For up to `max_steps` iterations, at radius `r = r0 + i·h`:
///
/// 1. If the current pressure is negative, stop: the surface was crossed
///    during the previous step. The negative-pressure state is not stored.
/// 2. Append the current (r, P, m) sample.
/// 3. Compute the four RK4 stages and advance the state.
/// 4. Validate the advanced state for NaN/Inf and report instead of
///    continuing on garbage.
///
/// The radius is computed directly from the step index rather than
/// accumulated, so rounding error does not build up over millions of steps.
///
/// # Example
///
/// ```rust
/// use tov_rs::models::{initial_mass, StructureEquations};
/// use tov_rs::constants::PhysicalConstants;
/// use tov_rs::physics::StellarState;
/// use tov_rs::solver::{IntegrationConfig, Integrator, Rk4Integrator};
/// use tov_rs::eos;
///
/// # fn main() -> Result<(), String> {
/// let constants = PhysicalConstants::new();
/// let central_pressure = 0.001;
/// let m0 = initial_mass(1e-6, eos::density(central_pressure), &constants);
///
/// let integrator = Rk4Integrator::new();
/// let config = IntegrationConfig::new(5e-3, 10_000_000);
/// let result = integrator.integrate(
///     &StructureEquations::Relativistic,
///     1e-6,
///     StellarState::new(central_pressure, m0),
///     &config,
/// )?;
///
/// assert!(result.is_converged());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4Integrator;

impl Rk4Integrator {
    /// Create a new fixed-step RK4 integrator.
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for Rk4Integrator {
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

        // ====== Step 2: Setup ======

        let h = config.step;
        let mut state = initial;
        let mut trajectory = Trajectory::with_capacity(INITIAL_CAPACITY.min(config.max_steps));
        let mut termination = Termination::Truncated;

        // ====== Step 3: Radial Integration ======

        for step in 0..config.max_steps {
            // Surface reached: the previous update drove the pressure below
            // zero. That state is never stored.
            if state.pressure() < 0.0 {
                termination = Termination::Surface;
                break;
            }

            // Radius directly from the index to avoid accumulating rounding
            // error across up to 1e7 additions.
            let r = r0 + step as f64 * h;
            trajectory.push(r, &state);

            // ====== RK4 Stages ======

            let k0 = model.derivative(r, &state) * h;
            let k1 = model.derivative(r + h / 2.0, &(state + k0 * 0.5)) * h;
            let k2 = model.derivative(r + h / 2.0, &(state + k1 * 0.5)) * h;
            let k3 = model.derivative(r + h, &(state + k2)) * h;

            state = state + (k0 + k1 * 2.0 + k2 * 2.0 + k3) * (1.0 / 6.0);

            validate_state(&state, step, r)?;
        }

        // The budget can run out on the very update that crossed the
        // surface; that is still a surface, not a truncation.
        if termination == Termination::Truncated && state.pressure() < 0.0 {
            termination = Termination::Surface;
        }

        // ====== Step 4: Build Result ======

        let steps = trajectory.len();
        let mut result = IntegrationResult::new(trajectory, termination);
        result.add_metadata("solver", self.name());
        result.add_metadata("model", model.name());
        result.add_metadata("step", &h.to_string());
        result.add_metadata("steps", &steps.to_string());
        result.add_metadata("function evaluations", &(4 * steps).to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Runge-Kutta 4 (fixed step)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Mock Models for Testing ======

    /// Linear pressure drain: dP/dr = -c, dm/dr = g.
    ///
    /// Analytical solution: P(r) = P₀ - c·(r - r₀), m(r) = m₀ + g·(r - r₀).
    /// RK4 is exact for it, and the surface sits at r = r₀ + P₀/c.
    struct LinearDrain {
        drain_rate: f64,
        growth_rate: f64,
    }

    impl DerivativeModel for LinearDrain {
        fn derivative(&self, _r: f64, _state: &StellarState) -> StellarState {
            StellarState::new(-self.drain_rate, self.growth_rate)
        }

        fn name(&self) -> &str {
            "Linear Drain"
        }
    }

    /// Exponential pressure decay: dP/dr = -k·P, dm/dr = 0.
    ///
    /// The pressure never crosses zero, so integration always exhausts the
    /// step budget. Analytical solution: P(r) = P₀·exp(-k·(r - r₀)).
    struct ExponentialDecay {
        decay_rate: f64,
    }

    impl DerivativeModel for ExponentialDecay {
        fn derivative(&self, _r: f64, state: &StellarState) -> StellarState {
            StellarState::new(-self.decay_rate * state.pressure(), 0.0)
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    /// A model that immediately poisons the state.
    struct NanModel;

    impl DerivativeModel for NanModel {
        fn derivative(&self, _r: f64, _state: &StellarState) -> StellarState {
            StellarState::new(f64::NAN, 0.0)
        }

        fn name(&self) -> &str {
            "NaN Model"
        }
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_rejects_invalid_config() {
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 1.0, growth_rate: 1.0 };

        let bad_step = IntegrationConfig::new(0.0, 100);
        assert!(integrator
            .integrate(&model, 0.1, StellarState::new(1.0, 0.0), &bad_step)
            .is_err());

        let good = IntegrationConfig::new(0.01, 100);
        assert!(integrator
            .integrate(&model, -0.1, StellarState::new(1.0, 0.0), &good)
            .is_err());
    }

    // ====== Termination Tests ======

    #[test]
    fn test_surface_termination() {
        // P₀ = 1, dP/dr = -1: surface at r = r₀ + 1, i.e. after 100 steps
        // of h = 0.01 the pressure reaches exactly 0, and one step later it
        // goes negative.
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 1.0, growth_rate: 0.5 };
        let config = IntegrationConfig::new(0.01, 1000);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        assert_eq!(result.termination, Termination::Surface);
        assert!(result.is_converged());

        // The last stored pressure is non-negative
        assert!(result.trajectory.final_pressure().unwrap() >= 0.0);

        // The surface sits at r = 2.0; stored states run up to it
        let final_radius = result.trajectory.final_radius().unwrap();
        assert!((final_radius - 2.0).abs() <= 0.01 + 1e-12);
    }

    #[test]
    fn test_budget_exhaustion_is_tagged_truncated() {
        let integrator = Rk4Integrator::new();
        let model = ExponentialDecay { decay_rate: 0.1 };
        let config = IntegrationConfig::new(0.01, 500);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        assert_eq!(result.termination, Termination::Truncated);
        assert!(!result.is_converged());
        assert_eq!(result.trajectory.len(), 500);
    }

    #[test]
    fn test_surface_crossed_on_final_budgeted_step() {
        // P₀ = 1, dP/dr = -1, h = 0.4: the third and last budgeted update
        // drives the pressure to -0.2. The run found the surface, it just
        // had no iteration left to observe it at the top of the loop.
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 1.0, growth_rate: 0.0 };
        let config = IntegrationConfig::new(0.4, 3);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        assert_eq!(result.termination, Termination::Surface);
        assert!(result.is_converged());
        assert_eq!(result.trajectory.len(), 3);
        assert!(result.trajectory.final_pressure().unwrap() >= 0.0);
    }

    #[test]
    fn test_negative_initial_pressure_yields_empty_surface() {
        // An already-negative central pressure terminates before any sample
        // is stored.
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 1.0, growth_rate: 0.0 };
        let config = IntegrationConfig::new(0.01, 100);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(-0.5, 0.0), &config)
            .unwrap();

        assert_eq!(result.termination, Termination::Surface);
        assert!(result.trajectory.is_empty());
    }

    // ====== Numerical Accuracy Tests ======

    #[test]
    fn test_exact_for_constant_derivatives() {
        // RK4 reproduces linear solutions to machine precision.
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 0.25, growth_rate: 2.0 };
        let config = IntegrationConfig::new(0.01, 10_000);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        let trajectory = &result.trajectory;
        for i in 0..trajectory.len() {
            let r = trajectory.radii()[i];
            let expected_p = 1.0 - 0.25 * (r - 1.0);
            let expected_m = 2.0 * (r - 1.0);
            assert!((trajectory.pressures()[i] - expected_p).abs() < 1e-10);
            assert!((trajectory.masses()[i] - expected_m).abs() < 1e-10);
        }
    }

    #[test]
    fn test_fourth_order_accuracy_on_exponential() {
        // With h = 0.01 and k = 0.5 over one radial unit the local error
        // of RK4 is far below 1e-8.
        let integrator = Rk4Integrator::new();
        let model = ExponentialDecay { decay_rate: 0.5 };
        let config = IntegrationConfig::new(0.01, 100);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        let final_radius = result.trajectory.final_radius().unwrap();
        let final_pressure = result.trajectory.final_pressure().unwrap();
        let exact = (-0.5 * (final_radius - 1.0)).exp();

        assert!((final_pressure - exact).abs() < 1e-8);
    }

    #[test]
    fn test_radius_grid_is_uniform() {
        let integrator = Rk4Integrator::new();
        let model = ExponentialDecay { decay_rate: 0.1 };
        let config = IntegrationConfig::new(0.05, 200);

        let result = integrator
            .integrate(&model, 1e-6, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        let radii = result.trajectory.radii();
        assert!((radii[0] - 1e-6).abs() < 1e-18);
        for pair in radii.windows(2) {
            assert!((pair[1] - pair[0] - 0.05).abs() < 1e-9);
        }
    }

    // ====== Validation Tests ======

    #[test]
    fn test_nan_is_reported() {
        let integrator = Rk4Integrator::new();
        let config = IntegrationConfig::new(0.01, 100);

        let err = integrator
            .integrate(&NanModel, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap_err();

        assert!(err.contains("NaN"));
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_metadata() {
        let integrator = Rk4Integrator::new();
        let model = LinearDrain { drain_rate: 1.0, growth_rate: 0.0 };
        let config = IntegrationConfig::new(0.01, 1000);

        let result = integrator
            .integrate(&model, 1.0, StellarState::new(1.0, 0.0), &config)
            .unwrap();

        assert_eq!(
            result.metadata.get("solver"),
            Some(&"Runge-Kutta 4 (fixed step)".to_string())
        );
        assert_eq!(result.metadata.get("model"), Some(&"Linear Drain".to_string()));

        let steps: usize = result.metadata.get("steps").unwrap().parse().unwrap();
        let evals: usize = result
            .metadata
            .get("function evaluations")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(evals, 4 * steps);
        assert_eq!(steps, result.trajectory.len());
    }
}
