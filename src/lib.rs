//! tov-rs: Compact-Star Structure Solver
//!
//! Computes interior structure profiles (pressure and enclosed mass as
//! functions of radius) of a self-gravitating compact star, under both the
//! fully relativistic Tolman-Oppenheimer-Volkoff equations and their
//! Newtonian approximation, and sweeps central pressures to produce
//! mass-radius relations.
//!
//! # Architecture
//!
//! The crate is built on two core principles:
//!
//! 1. **Separation of physics and numerics**
//!    - Derivative models define the equations (what to integrate)
//!    - Integrator backends provide the methods (how to integrate)
//!
//! 2. **Substitutable backends**
//!    - A fixed-step RK4 integrator (the production path)
//!    - An adaptive RK45 integrator with surface-event root finding
//!      (the reference path)
//!    - Identical termination semantics; consumers never need to know
//!      which one produced a trajectory
//!
//! # Quick Start
//!
//! ```rust
//! use tov_rs::constants::{NumericalParameters, PhysicalConstants};
//! use tov_rs::pipeline::solve;
//! use tov_rs::solver::Backend;
//! use tov_rs::eos;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Build the immutable configuration bundles
//! let constants = PhysicalConstants::new();
//! let params = NumericalParameters::default();
//!
//! // 2. Pick a central pressure; the EOS closes the system
//! let central_pressure = 0.001;
//! let central_density = eos::density(central_pressure);
//!
//! // 3. Solve both models with the fixed-step backend
//! let solution = solve(central_pressure, central_density,
//!                      Backend::FixedStep, &constants, &params)?;
//!
//! // 4. Read off the star
//! let star = &solution.relativistic.trajectory;
//! assert!(solution.is_converged());
//! println!("R = {:.2} R_S, M = {:.3} M_sun",
//!          star.final_radius().unwrap(),
//!          star.final_mass().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`constants`]: physical constants and numerical run parameters
//! - [`eos`]: the Fermi-gas equation of state
//! - [`physics`]: state vector and the derivative-model trait
//! - [`models`]: TOV and Newtonian right-hand sides, initial conditions
//! - [`solver`]: integrator backends and trajectory types
//! - [`pipeline`]: per-pressure solves and the central-pressure sweep
//! - [`output`]: CSV export and static plots (strictly downstream)
//!
//! # Features
//!
//! - `parallel`: run the central-pressure sweep on the Rayon thread pool.
//!   Safe by construction — solves share only read-only configuration.

// Core modules
pub mod constants;
pub mod eos;
pub mod physics;

pub mod models;
pub mod pipeline;
pub mod solver;

// Downstream consumers
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use tov_rs::prelude::*;
    //! ```
    pub use crate::constants::{NumericalParameters, PhysicalConstants};
    pub use crate::models::{initial_mass, StructureEquations};
    pub use crate::physics::{DerivativeModel, StellarState};
    pub use crate::pipeline::{solve, sweep, MassRadiusRelation, StellarSolution};
    pub use crate::solver::{
        Backend, IntegrationConfig, IntegrationResult, Integrator, Rk45Integrator,
        Rk4Integrator, Termination, Trajectory,
    };
}
