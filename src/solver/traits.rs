//! Integrator trait and configuration
//!
//! # Design Philosophy
//!
//! The backend is a polymorphic strategy, not a boolean flag: a single
//! interface — "integrate(model, r0, initial, config) → result" — with two
//! concrete implementations (fixed-step RK4, adaptive RK45 with a
//! zero-crossing event), selected by explicit configuration.
//!
//! Any consumer of an [`IntegrationResult`](crate::solver::IntegrationResult)
//! must be indifferent to which backend produced it.

use crate::physics::{DerivativeModel, StellarState};
use crate::solver::methods::{Rk45Integrator, Rk4Integrator};
use crate::solver::IntegrationResult;

// =================================================================================================
// Integration configuration
// =================================================================================================

/// Numerical parameters of one integration run.
///
/// For the fixed-step backend, `step` is the step actually taken and
/// `max_steps` the iteration budget. The adaptive backend uses `step` as its
/// initial step guess and `r0 + max_steps · step` as the outer radius bound,
/// so both backends span the same radius interval.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationConfig {
    /// Step size, in Schwarzschild-radius units
    pub step: f64,

    /// Maximum number of steps before the run is classified as truncated
    pub max_steps: usize,
}

impl IntegrationConfig {
    /// Create a configuration.
    pub fn new(step: f64, max_steps: usize) -> Self {
        Self { step, max_steps }
    }

    /// Validate that the parameters are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("Step size must be finite and strictly positive".to_string());
        }
        if self.max_steps == 0 {
            return Err("Maximum step count must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Integrator trait
// =================================================================================================

/// A radial ODE integrator with pressure-surface termination.
///
/// # Contract
///
/// Starting from `(r0, initial)`, march the state outward and return the
/// trajectory of states with non-negative pressure, tagged with the reason
/// the run stopped:
///
/// - [`Termination::Surface`](crate::solver::Termination) when the pressure
///   component crossed zero
/// - [`Termination::Truncated`](crate::solver::Termination) when the step
///   budget ran out first
///
/// The state that first exhibits a negative pressure is never part of the
/// returned trajectory.
///
/// # Errors
///
/// Returns `Err` for invalid configurations and when the state stops being
/// finite mid-run (for the TOV model this is how proximity to the r = m
/// coordinate singularity surfaces).
pub trait Integrator: Send + Sync {
    /// Run one integration.
    fn integrate(
        &self,
        model: &dyn DerivativeModel,
        r0: f64,
        initial: StellarState,
        config: &IntegrationConfig,
    ) -> Result<IntegrationResult, String>;

    /// Name of the method (used for display and result metadata).
    fn name(&self) -> &str;
}

// =================================================================================================
// Backend selection
// =================================================================================================

/// Which integration backend to use.
///
/// # Example
///
/// ```rust
/// use tov_rs::solver::Backend;
///
/// let integrator = Backend::FixedStep.integrator();
/// assert_eq!(integrator.name(), "Runge-Kutta 4 (fixed step)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Custom fixed-step RK4 (the production integrator)
    FixedStep,
    /// Adaptive RK45 with zero-crossing event detection (the reference
    /// backend, higher accuracy, fewer forced parameters)
    Adaptive,
}

impl Backend {
    /// Instantiate the selected integrator.
    pub fn integrator(&self) -> Box<dyn Integrator> {
        match self {
            Backend::FixedStep => Box::new(Rk4Integrator::new()),
            Backend::Adaptive => Box::new(Rk45Integrator::new()),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
