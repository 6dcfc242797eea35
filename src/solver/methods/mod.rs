//! Concrete integration methods
//!
//! # Available Methods
//!
//! - **[`Rk4Integrator`]**: classical fourth-order Runge-Kutta with a fixed
//!   step. Order O(h⁴), 4 evaluations per step, no tuning parameters. The
//!   production integrator.
//!
//! - **[`Rk45Integrator`]**: embedded Dormand-Prince 5(4) pair with
//!   automatic step-size control and explicit root-finding of the pressure
//!   zero-crossing. The reference backend, used to cross-check the
//!   fixed-step results and for callers that need local error control.
//!
//! Both implement the [`Integrator`](crate::solver::Integrator) trait and
//! honor the same termination contract, so they are fully substitutable.
//!
//! Each method is self-contained and stateless: an integrator value can be
//! reused across any number of runs, including concurrently.

mod rk4;
mod rk45;

// Re-exports for convenience
pub use rk4::Rk4Integrator;
pub use rk45::Rk45Integrator;
