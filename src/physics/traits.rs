//! Derivative-model trait
//!
//! This is the seam between physics and numerics. Every right-hand side —
//! the two hydrostatic-equilibrium models, and any mock model used in
//! tests — implements [`DerivativeModel`], and every integrator backend
//! consumes it through a `&dyn DerivativeModel`.

use crate::physics::StellarState;

/// Right-hand side of the structure ODE system.
///
/// # Responsibility
///
/// Computes the derivative vector (dP/dr, dm/dr) at a given radius and
/// state. Does NOT integrate it — that is the solver's job.
///
/// # Contract
///
/// Implementations must be pure, side-effect-free and deterministic: given
/// identical `(radius, state)` they must return identical derivatives.
/// Reproducible trajectories and the cross-backend consistency tests both
/// depend on this.
///
/// `Send + Sync` is required so that independent solves can run on worker
/// threads during a parallel central-pressure sweep.
pub trait DerivativeModel: Send + Sync {
    /// Evaluate (dP/dr, dm/dr) at the given radius and state.
    fn derivative(&self, radius: f64, state: &StellarState) -> StellarState;

    /// Name of the model (used for display and result metadata).
    fn name(&self) -> &str;
}
