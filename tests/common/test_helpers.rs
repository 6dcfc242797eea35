//! Helper functions for integration tests

use tov_rs::constants::{NumericalParameters, PhysicalConstants};
use tov_rs::eos;
use tov_rs::pipeline::{solve, StellarSolution};
use tov_rs::solver::{Backend, IntegrationResult};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Solve one central pressure with the documented default parameters.
pub fn solve_default(central_pressure: f64, backend: Backend) -> StellarSolution {
    let constants = PhysicalConstants::new();
    let params = NumericalParameters::default();
    solve(
        central_pressure,
        eos::density(central_pressure),
        backend,
        &constants,
        &params,
    )
    .expect("default-parameter solve must succeed")
}

/// Assert that two runs agree on the final radius and final mass within a
/// relative tolerance.
pub fn assert_final_state_close(
    a: &IntegrationResult,
    b: &IntegrationResult,
    tolerance: f64,
    message: &str,
) {
    let (ra, ma) = (
        a.trajectory.final_radius().expect("empty trajectory"),
        a.trajectory.final_mass().expect("empty trajectory"),
    );
    let (rb, mb) = (
        b.trajectory.final_radius().expect("empty trajectory"),
        b.trajectory.final_mass().expect("empty trajectory"),
    );

    let radius_error = relative_error(ra, rb);
    let mass_error = relative_error(ma, mb);

    assert!(
        radius_error < tolerance,
        "{}: final radii differ by {:.3e} (tolerance {:.0e}): {} vs {}",
        message,
        radius_error,
        tolerance,
        ra,
        rb
    );
    assert!(
        mass_error < tolerance,
        "{}: final masses differ by {:.3e} (tolerance {:.0e}): {} vs {}",
        message,
        mass_error,
        tolerance,
        ma,
        mb
    );
}
