//! Integration output types
//!
//! A [`Trajectory`] holds the three aligned sequences a run produces:
//! radius, pressure, enclosed mass. An [`IntegrationResult`] wraps the
//! trajectory with the termination classification and solver metadata, so
//! that downstream consumers can distinguish a genuine stellar surface from
//! a step-budget truncation artifact.

use std::collections::HashMap;

use crate::physics::StellarState;

// =================================================================================================
// Termination Classification
// =================================================================================================

/// Why an integration run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Pressure crossed zero: the physical surface of the star was reached.
    /// This is the expected, successful outcome.
    Surface,

    /// The step budget was exhausted with the pressure still non-negative.
    /// The trajectory is truncated, not a physical surface; the final radius
    /// and mass must not be read as stellar properties.
    Truncated,
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Ordered sequence of (radius, pressure, mass) triples from one run.
///
/// # Invariants
///
/// - the three vectors always have the same length
/// - radii are strictly increasing
/// - every stored pressure is non-negative (the first negative-pressure
///   state is never appended)
///
/// Owned solely by the run that produced it; immutable once returned.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    radii: Vec<f64>,
    pressures: Vec<f64>,
    masses: Vec<f64>,
}

impl Trajectory {
    /// Create an empty trajectory with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            radii: Vec::with_capacity(capacity),
            pressures: Vec::with_capacity(capacity),
            masses: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample.
    pub(crate) fn push(&mut self, radius: f64, state: &StellarState) {
        self.radii.push(radius);
        self.pressures.push(state.pressure());
        self.masses.push(state.mass());
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// True when no sample was stored.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Radii, strictly increasing.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Pressures, aligned 1:1 with [`radii`](Self::radii).
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// Enclosed masses, aligned 1:1 with [`radii`](Self::radii).
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Last stored radius, if any.
    pub fn final_radius(&self) -> Option<f64> {
        self.radii.last().copied()
    }

    /// Last stored pressure, if any.
    pub fn final_pressure(&self) -> Option<f64> {
        self.pressures.last().copied()
    }

    /// Last stored enclosed mass, if any.
    pub fn final_mass(&self) -> Option<f64> {
        self.masses.last().copied()
    }
}

// =================================================================================================
// Integration Result
// =================================================================================================

/// Output of one integration run: the trajectory, the termination
/// classification, and string metadata describing how it was produced.
///
/// Consumers must be indifferent to which backend produced the result —
/// both backends fill the same shape.
#[derive(Debug, Clone)]
pub struct IntegrationResult {
    /// The (radius, pressure, mass) samples.
    pub trajectory: Trajectory,

    /// Why the run stopped.
    pub termination: Termination,

    /// Solver metadata (name, step counts, evaluations, ...).
    pub metadata: HashMap<String, String>,
}

impl IntegrationResult {
    /// Wrap a finished trajectory.
    pub fn new(trajectory: Trajectory, termination: Termination) -> Self {
        Self {
            trajectory,
            termination,
            metadata: HashMap::new(),
        }
    }

    /// The run found the stellar surface rather than running out of steps.
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Surface
    }

    /// Add a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Tests
// =================================================================================================
