//! Physical state and the derivative-model seam
//!
//! This module provides the two abstractions every other part of the crate
//! is written against:
//!
//! - **[`StellarState`]**: the (pressure, enclosed mass) 2-vector that the
//!   integrators march outward in radius
//! - **[`DerivativeModel`]**: the trait a right-hand side must satisfy —
//!   "given (radius, state), produce the derivative vector"
//!
//! # Architecture
//!
//! Physical models are separate from numerical solvers:
//! - the model provides the **equations** (physics)
//! - the solver provides the **method** to integrate them (numerics)
//!
//! This separation allows the same model to run under the fixed-step and the
//! adaptive backend, and both backends to be tested against mock models with
//! known analytical solutions.

// module declaration
pub mod state;
pub mod traits;

// re-export commonly used types for convenience
pub use state::StellarState;
pub use traits::DerivativeModel;
