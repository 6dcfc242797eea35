//! Solution pipeline
//!
//! One [`solve`] call turns a central pressure into a pair of interior
//! profiles: it derives the central density through the EOS, builds the
//! initial enclosed mass, and runs the chosen backend once per derivative
//! model with identical initial conditions. The two runs are logically and
//! computationally independent — no cross-talk.
//!
//! [`sweep`] repeats this across the sampled central-pressure range. Every
//! sample owns its inputs and outputs and the constant bundles are
//! read-only, so the sweep is embarrassingly parallel; with the `parallel`
//! feature enabled it runs on the Rayon thread pool, one solve per task.

use crate::constants::{NumericalParameters, PhysicalConstants};
use crate::eos;
use crate::models::{initial_mass, StructureEquations};
use crate::physics::StellarState;
use crate::solver::{Backend, IntegrationConfig, IntegrationResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Stellar Solution
// =================================================================================================

/// The paired trajectories produced by one solve.
#[derive(Debug, Clone)]
pub struct StellarSolution {
    /// The central pressure that produced this solution
    pub central_pressure: f64,

    /// Profile under the relativistic (TOV) equations
    pub relativistic: IntegrationResult,

    /// Profile under the Newtonian approximation
    pub newtonian: IntegrationResult,
}

impl StellarSolution {
    /// The profile for the requested model.
    pub fn result(&self, model: StructureEquations) -> &IntegrationResult {
        match model {
            StructureEquations::Relativistic => &self.relativistic,
            StructureEquations::Newtonian => &self.newtonian,
        }
    }

    /// Both profiles terminated at a genuine surface.
    pub fn is_converged(&self) -> bool {
        self.relativistic.is_converged() && self.newtonian.is_converged()
    }
}

// =================================================================================================
// Single Solve
// =================================================================================================

/// Solve the structure equations for one central pressure.
///
/// Builds `m0 = initial_mass(r0, rho_c)`, constructs the initial state
/// `(P_c, m0)`, and integrates both derivative models with the chosen
/// backend under identical step size and step budget.
///
/// # Example
///
/// ```rust
/// use tov_rs::constants::{NumericalParameters, PhysicalConstants};
/// use tov_rs::pipeline::solve;
/// use tov_rs::solver::Backend;
/// use tov_rs::eos;
///
/// # fn main() -> Result<(), String> {
/// let constants = PhysicalConstants::new();
/// let params = NumericalParameters::default();
///
/// let central_pressure = 0.001;
/// let central_density = eos::density(central_pressure);
/// let solution = solve(central_pressure, central_density, Backend::FixedStep,
///                      &constants, &params)?;
///
/// assert!(solution.is_converged());
/// # Ok(())
/// # }
/// ```
pub fn solve(
    central_pressure: f64,
    central_density: f64,
    backend: Backend,
    constants: &PhysicalConstants,
    params: &NumericalParameters,
) -> Result<StellarSolution, String> {
    params.validate()?;

    let m0 = initial_mass(params.initial_radius, central_density, constants);
    let initial = StellarState::new(central_pressure, m0);
    let config = IntegrationConfig::new(params.step, params.max_steps);
    let integrator = backend.integrator();

    let relativistic = integrator.integrate(
        &StructureEquations::Relativistic,
        params.initial_radius,
        initial,
        &config,
    )?;
    let newtonian = integrator.integrate(
        &StructureEquations::Newtonian,
        params.initial_radius,
        initial,
        &config,
    )?;

    Ok(StellarSolution {
        central_pressure,
        relativistic,
        newtonian,
    })
}

// =================================================================================================
// Central-Pressure Sweep
// =================================================================================================

/// Solve across the whole sampled central-pressure range.
///
/// Sequential by default; parallel over the Rayon pool when the crate is
/// compiled with the `parallel` feature. In either case the returned
/// solutions are ordered by increasing central pressure.
pub fn sweep(
    backend: Backend,
    constants: &PhysicalConstants,
    params: &NumericalParameters,
) -> Result<Vec<StellarSolution>, String> {
    params.validate()?;
    let pressures = params.central_pressures(1.0);

    #[cfg(feature = "parallel")]
    {
        pressures
            .par_iter()
            .map(|&p| solve(p, eos::density(p), backend, constants, params))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pressures
            .iter()
            .map(|&p| solve(p, eos::density(p), backend, constants, params))
            .collect()
    }
}

// =================================================================================================
// Mass-Radius Relation
// =================================================================================================

/// Final (surface) values of a sweep for one model, with the radius scaled
/// back into kilometers.
///
/// Only converged solutions contribute: a truncated run has no physical
/// surface to read off, so it is skipped rather than plotted as a star.
#[derive(Debug, Clone, Default)]
pub struct MassRadiusRelation {
    /// Central pressures of the contributing solutions
    pub central_pressures: Vec<f64>,

    /// Stellar radii (km)
    pub radii_km: Vec<f64>,

    /// Stellar masses (solar masses)
    pub masses: Vec<f64>,
}

impl MassRadiusRelation {
    /// Extract the relation for one model from a finished sweep.
    pub fn from_solutions(
        solutions: &[StellarSolution],
        model: StructureEquations,
        constants: &PhysicalConstants,
    ) -> Self {
        let mut relation = Self::default();

        for solution in solutions {
            let result = solution.result(model);
            if !result.is_converged() {
                continue;
            }
            let (radius, mass) = match (
                result.trajectory.final_radius(),
                result.trajectory.final_mass(),
            ) {
                (Some(radius), Some(mass)) => (radius, mass),
                _ => continue,
            };

            relation.central_pressures.push(solution.central_pressure);
            relation
                .radii_km
                .push(radius * constants.schwarzschild_radius_km);
            relation.masses.push(mass);
        }

        relation
    }

    /// Number of contributing solutions.
    pub fn len(&self) -> usize {
        self.radii_km.len()
    }

    /// True when no solution contributed.
    pub fn is_empty(&self) -> bool {
        self.radii_km.is_empty()
    }

    /// The heaviest star of the relation, as (radius_km, mass), if any.
    pub fn maximum_mass(&self) -> Option<(f64, f64)> {
        self.masses
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, &mass)| (self.radii_km[i], mass))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
