//! Stellar state vector
//!
//! The integrated state is the pair (pressure, enclosed mass), both
//! adimensional. It is backed by a `nalgebra::Vector2` so that the RK
//! stage arithmetic is plain vector arithmetic.

use nalgebra::Vector2;

/// State of the stellar fluid at one radius: pressure and enclosed mass.
///
/// # Invariants along a valid trajectory
///
/// - pressure ≥ 0 — enforced by the integrator's termination rule, never by
///   clamping the state itself
/// - mass ≥ 0 and non-decreasing with radius (mass only accretes outward)
///
/// # Operator overloads
///
/// `Add` and `Mul<f64>` are provided so that integrators can write the RK
/// stage combinations directly:
///
/// ```rust
/// use tov_rs::physics::StellarState;
///
/// let y = StellarState::new(1.0, 0.5);
/// let k = StellarState::new(-0.1, 0.2);
/// let advanced = y + k * 0.5;
/// assert!((advanced.pressure() - 0.95).abs() < 1e-15);
/// assert!((advanced.mass() - 0.6).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarState {
    y: Vector2<f64>,
}

impl StellarState {
    /// Create a state from pressure and enclosed mass.
    pub fn new(pressure: f64, mass: f64) -> Self {
        Self {
            y: Vector2::new(pressure, mass),
        }
    }

    /// Adimensional pressure component.
    pub fn pressure(&self) -> f64 {
        self.y[0]
    }

    /// Adimensional enclosed-mass component.
    pub fn mass(&self) -> f64 {
        self.y[1]
    }

    /// Both components are finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.y[0].is_finite() && self.y[1].is_finite()
    }

    /// View the state as the underlying 2-vector.
    pub fn as_vector(&self) -> &Vector2<f64> {
        &self.y
    }
}

// Operator overloading for the RK stage arithmetic

impl std::ops::Add for StellarState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { y: self.y + rhs.y }
    }
}

impl std::ops::Mul<f64> for StellarState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self { y: self.y * scalar }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let state = StellarState::new(0.001, 1.4);
        assert_eq!(state.pressure(), 0.001);
        assert_eq!(state.mass(), 1.4);
    }

    #[test]
    fn test_addition() {
        let a = StellarState::new(1.0, 2.0);
        let b = StellarState::new(0.5, -1.0);
        let sum = a + b;
        assert_eq!(sum.pressure(), 1.5);
        assert_eq!(sum.mass(), 1.0);
    }

    #[test]
    fn test_scalar_multiplication() {
        let state = StellarState::new(2.0, 3.0) * 0.5;
        assert_eq!(state.pressure(), 1.0);
        assert_eq!(state.mass(), 1.5);
    }

    #[test]
    fn test_finiteness_check() {
        assert!(StellarState::new(1.0, 2.0).is_finite());
        assert!(!StellarState::new(f64::NAN, 2.0).is_finite());
        assert!(!StellarState::new(1.0, f64::INFINITY).is_finite());
    }
}
