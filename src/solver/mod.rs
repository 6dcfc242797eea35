//! Numerical integration backends
//!
//! This module provides the radial ODE integrators and their shared output
//! types.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Derivative model** ([`DerivativeModel`](crate::physics::DerivativeModel))
//!    — WHAT to integrate: the right-hand side (dP/dr, dm/dr)
//! 2. **Configuration** ([`IntegrationConfig`]) — HOW to integrate: step
//!    size, step budget
//! 3. **Integrator** ([`Integrator`] trait) — the numerical method itself,
//!    independent of the physics
//!
//! This separation allows the same model to run under either backend, and
//! either backend to be validated against mock models with analytical
//! solutions.
//!
//! # Module Organization
//!
//! - **`traits`**: `Integrator` trait, `IntegrationConfig`, `Backend`
//! - **`trajectory`**: `Trajectory`, `Termination`, `IntegrationResult`
//! - **`methods`**: concrete integrators
//!   - [`Rk4Integrator`]: fixed-step classical RK4 with surface detection
//!   - [`Rk45Integrator`]: adaptive embedded RK45 with a zero-crossing event
//!
//! # Termination semantics
//!
//! Both backends stop in exactly one of two ways and say which:
//!
//! - [`Termination::Surface`] — the pressure crossed zero; the trajectory
//!   ends at the last state with non-negative pressure
//! - [`Termination::Truncated`] — the step budget ran out first; the
//!   trajectory is an artifact, not a star
//!
//! # Error Handling
//!
//! Solver entry points return `Result<IntegrationResult, String>`. Common
//! errors: invalid configuration (zero step, empty budget) and non-finite
//! state mid-run (numerical overflow, or the TOV coordinate singularity at
//! r = m).

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod trajectory;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::{Rk45Integrator, Rk4Integrator};
pub use trajectory::{IntegrationResult, Termination, Trajectory};
pub use traits::{Backend, IntegrationConfig, Integrator};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::StellarState;

/// Validate a state for numerical issues.
///
/// NaN can arise from 0/0 or Inf − Inf (the TOV denominator crossing zero),
/// Inf from overflow or a plain division by zero. Either one means the rest
/// of the run would be garbage, so it is reported instead of marched on.
pub(crate) fn validate_state(state: &StellarState, step: usize, radius: f64) -> Result<(), String> {
    if state.pressure().is_nan() || state.mass().is_nan() {
        return Err(format!(
            "NaN detected at step {} (r = {:e}). This indicates numerical instability \
             or proximity to the r = m coordinate singularity of the TOV equations.",
            step, radius
        ));
    }
    if state.pressure().is_infinite() || state.mass().is_infinite() {
        return Err(format!(
            "Infinity detected at step {} (r = {:e}). This indicates numerical overflow \
             or a division by zero in the derivative model.",
            step, radius
        ));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_state_accepts_finite() {
        assert!(validate_state(&StellarState::new(0.5, 0.1), 3, 0.015).is_ok());
    }

    #[test]
    fn test_validate_state_reports_nan() {
        let err = validate_state(&StellarState::new(f64::NAN, 0.1), 7, 0.035).unwrap_err();
        assert!(err.contains("NaN"));
        assert!(err.contains("step 7"));
    }

    #[test]
    fn test_validate_state_reports_infinity() {
        let err =
            validate_state(&StellarState::new(0.5, f64::INFINITY), 2, 0.01).unwrap_err();
        assert!(err.contains("Infinity"));
    }
}
