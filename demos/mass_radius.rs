//! Full mass-radius survey
//!
//! Sweeps the default grid of central pressures, solves both structure
//! models at each one, exports the relations to CSV and renders a
//! comparison plot plus the interior profiles of one reference star.
//!
//! Run with: cargo run --example mass_radius --release
//! (add --features parallel to sweep on all cores)

use tov_rs::constants::{NumericalParameters, PhysicalConstants};
use tov_rs::eos;
use tov_rs::output::csv::{export_mass_radius_csv, export_profile_csv};
use tov_rs::output::plot::{plot_mass_radius, plot_profiles, ProfileQuantity};
use tov_rs::pipeline::{solve, sweep, MassRadiusRelation};
use tov_rs::models::StructureEquations;
use tov_rs::solver::Backend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let constants = PhysicalConstants::new();
    let params = NumericalParameters::default();

    println!("Compact-star structure survey");
    println!(
        "  {} central pressures in [{:.1e}, {:.1e}]",
        params.pressure_samples,
        params.log_first_pressure.exp(),
        params.log_last_pressure.exp()
    );
    println!("  R_S = {:.1} m\n", constants.schwarzschild_radius);

    // One reference star in detail
    let central_pressure = 0.001;
    let solution = solve(
        central_pressure,
        eos::density(central_pressure),
        Backend::FixedStep,
        &constants,
        &params,
    )?;

    let star = &solution.relativistic.trajectory;
    println!("Reference star at P_c = {:.1e}:", central_pressure);
    println!(
        "  R = {:.3} R_S = {:.2} km",
        star.final_radius().unwrap_or(f64::NAN),
        star.final_radius().unwrap_or(f64::NAN) * constants.schwarzschild_radius_km
    );
    println!("  M = {:.4} M_sun", star.final_mass().unwrap_or(f64::NAN));

    export_profile_csv(&solution.relativistic, "profile_relativistic.csv", None)?;
    export_profile_csv(&solution.newtonian, "profile_newtonian.csv", None)?;
    plot_profiles(&solution, ProfileQuantity::Pressure, "pressure_profile.png", None)?;
    plot_profiles(&solution, ProfileQuantity::Mass, "mass_profile.png", None)?;

    // The sweep
    println!("\nSweeping central pressures...");
    let solutions = sweep(Backend::FixedStep, &constants, &params)?;
    let converged = solutions.iter().filter(|s| s.is_converged()).count();
    println!("  {}/{} solutions converged", converged, solutions.len());

    let relativistic = MassRadiusRelation::from_solutions(
        &solutions,
        StructureEquations::Relativistic,
        &constants,
    );
    let newtonian = MassRadiusRelation::from_solutions(
        &solutions,
        StructureEquations::Newtonian,
        &constants,
    );

    if let Some((radius_km, mass)) = relativistic.maximum_mass() {
        println!(
            "  maximum relativistic mass: {:.4} M_sun at R = {:.2} km",
            mass, radius_km
        );
    }

    export_mass_radius_csv(&relativistic, "mass_radius_relativistic.csv", None)?;
    export_mass_radius_csv(&newtonian, "mass_radius_newtonian.csv", None)?;
    plot_mass_radius(&relativistic, Some(&newtonian), "mass_radius.png", None)?;

    println!("\nWrote CSV tables and PNG plots to the working directory.");
    Ok(())
}
