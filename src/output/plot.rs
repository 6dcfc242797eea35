//! Static plot generation for solver results
//!
//! Uses the `plotters` library to render PNG images: interior profiles
//! (pressure or mass against radius, relativistic and Newtonian overlaid)
//! and the mass-radius relation of a sweep.
//!
//! # Example
//!
//! ```rust,ignore
//! use tov_rs::output::plot::{plot_profiles, plot_mass_radius, PlotConfig, ProfileQuantity};
//!
//! // Pressure profile of one solve, both models overlaid
//! plot_profiles(&solution, ProfileQuantity::Pressure, "pressure.png", None)?;
//!
//! // Mass-radius relation, relativistic vs Newtonian
//! plot_mass_radius(&relativistic_relation, Some(&newtonian_relation),
//!                  "mass_radius.png", None)?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::pipeline::{MassRadiusRelation, StellarSolution};
use crate::solver::Trajectory;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing plots.
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default chosen per plot kind)
    pub title: Option<String>,

    /// Color of the first (relativistic) series (default: RED)
    pub primary_color: RGBColor,

    /// Color of the second (Newtonian) series (default: BLUE)
    pub secondary_color: RGBColor,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: None,
            primary_color: RED,
            secondary_color: BLUE,
            line_width: 2,
        }
    }
}

/// Which profile column to plot against radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileQuantity {
    /// Adimensional pressure
    Pressure,
    /// Enclosed mass (solar masses)
    Mass,
}

impl ProfileQuantity {
    fn label(&self) -> &'static str {
        match self {
            ProfileQuantity::Pressure => "Pressure (adimensional)",
            ProfileQuantity::Mass => "Enclosed mass (M_sun)",
        }
    }

    fn column<'a>(&self, trajectory: &'a Trajectory) -> &'a [f64] {
        match self {
            ProfileQuantity::Pressure => trajectory.pressures(),
            ProfileQuantity::Mass => trajectory.masses(),
        }
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let margin = 0.05 * (max - min).max(f64::MIN_POSITIVE);
    (min - margin, max + margin)
}

// =================================================================================================
// Profile Plots
// =================================================================================================

/// Plot one quantity of a solution against radius, both models overlaid.
pub fn plot_profiles(
    solution: &StellarSolution,
    quantity: ProfileQuantity,
    path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let rel = &solution.relativistic.trajectory;
    let newt = &solution.newtonian.trajectory;
    if rel.is_empty() && newt.is_empty() {
        return Err("Cannot plot empty trajectories".into());
    }

    let title = config.title.clone().unwrap_or_else(|| {
        format!(
            "{} profile, P_c = {:.3e}",
            quantity.label(),
            solution.central_pressure
        )
    });

    let x_range = axis_range(rel.radii().iter().chain(newt.radii()).copied());
    let y_range = axis_range(
        quantity
            .column(rel)
            .iter()
            .chain(quantity.column(newt))
            .copied(),
    );

    let root = BitMapBackend::new(path.as_ref(), (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc("Radius (R_S)")
        .y_desc(quantity.label())
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rel.radii()
                .iter()
                .zip(quantity.column(rel))
                .map(|(&r, &v)| (r, v)),
            config.primary_color.stroke_width(config.line_width),
        ))?
        .label("Relativistic (TOV)")
        .legend({
            let color = config.primary_color;
            move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color)
        });

    chart
        .draw_series(LineSeries::new(
            newt.radii()
                .iter()
                .zip(quantity.column(newt))
                .map(|(&r, &v)| (r, v)),
            config.secondary_color.stroke_width(config.line_width),
        ))?
        .label("Newtonian")
        .legend({
            let color = config.secondary_color;
            move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color)
        });

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Mass-Radius Plot
// =================================================================================================

/// Plot a mass-radius relation, optionally overlaying a second one
/// (typically relativistic vs Newtonian).
pub fn plot_mass_radius(
    relation: &MassRadiusRelation,
    comparison: Option<&MassRadiusRelation>,
    path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    if relation.is_empty() {
        return Err("Cannot plot an empty mass-radius relation".into());
    }

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "Mass-radius relation".to_string());

    let empty: &[f64] = &[];
    let (extra_radii, extra_masses) = match comparison {
        Some(c) => (c.radii_km.as_slice(), c.masses.as_slice()),
        None => (empty, empty),
    };
    let x_range = axis_range(relation.radii_km.iter().chain(extra_radii).copied());
    let y_range = axis_range(relation.masses.iter().chain(extra_masses).copied());

    let root = BitMapBackend::new(path.as_ref(), (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc("Radius (km)")
        .y_desc("Mass (M_sun)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            relation
                .radii_km
                .iter()
                .zip(&relation.masses)
                .map(|(&r, &m)| (r, m)),
            config.primary_color.stroke_width(config.line_width),
        ))?
        .label("Relativistic (TOV)")
        .legend({
            let color = config.primary_color;
            move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color)
        });

    if let Some(comparison) = comparison {
        chart
            .draw_series(LineSeries::new(
                comparison
                    .radii_km
                    .iter()
                    .zip(&comparison.masses)
                    .map(|(&r, &m)| (r, m)),
                config.secondary_color.stroke_width(config.line_width),
            ))?
            .label("Newtonian")
            .legend({
                let color = config.secondary_color;
                move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color)
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
