//! Hydrostatic-equilibrium models
//!
//! Both models implement the [`DerivativeModel`](crate::physics::DerivativeModel)
//! trait. The solver calls `derivative` four (or seven) times per step —
//! models are responsible for the physics, the solver for the radial
//! integration.
//!
//! # Available models
//!
//! ## [`StructureEquations::Relativistic`] — TOV equations
//!
//! The Tolman-Oppenheimer-Volkoff equations for a spherically symmetric
//! self-gravitating fluid in general relativity. The pressure gradient
//! carries the three relativistic correction factors and a genuine
//! coordinate singularity at r = m (the Schwarzschild radius in these
//! units).
//!
//! ## [`StructureEquations::Newtonian`] — non-relativistic limit
//!
//! Classical hydrostatic equilibrium, numerically well-behaved for every
//! r > 0. The two models agree in the limit of vanishing central pressure.
//!
//! The variants form a closed set: adding a third model extends the enum and
//! the compiler enforces exhaustive handling at every dispatch site.

use crate::physics::{DerivativeModel, StellarState};

// =================================================================================================
// Module Declarations
// =================================================================================================

mod initial;
mod newtonian;
mod relativistic;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use initial::initial_mass;

// =================================================================================================
// Model Selection
// =================================================================================================

/// The two hydrostatic-equilibrium right-hand sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureEquations {
    /// Fully relativistic TOV equations
    Relativistic,
    /// Newtonian approximation
    Newtonian,
}

impl DerivativeModel for StructureEquations {
    fn derivative(&self, radius: f64, state: &StellarState) -> StellarState {
        match self {
            StructureEquations::Relativistic => relativistic::derivative(radius, state),
            StructureEquations::Newtonian => newtonian::derivative(radius, state),
        }
    }

    fn name(&self) -> &str {
        match self {
            StructureEquations::Relativistic => "Relativistic (TOV)",
            StructureEquations::Newtonian => "Newtonian",
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
