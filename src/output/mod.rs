//! Output module for solver results
//!
//! Strictly downstream of the core: nothing here feeds back into the
//! integration. Two concerns, two sub-modules:
//!
//! - **`csv`**: CSV export of interior profiles and mass-radius relations,
//!   for external analysis tools
//! - **`plot`**: static PNG/SVG plots (profiles for one central pressure,
//!   mass-radius relation for a sweep) using `plotters`
//!
//! Both accept the core's result types directly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tov_rs::output::{export_profile_csv, plot_mass_radius};
//!
//! export_profile_csv(&solution.relativistic, "profile.csv", None)?;
//! plot_mass_radius(&relation, None, "mass_radius.png", None)?;
//! ```

pub mod csv;
pub mod plot;

// Re-export commonly used items for convenience
pub use csv::{export_mass_radius_csv, export_profile_csv, CsvConfig};
pub use plot::{plot_mass_radius, plot_profiles, PlotConfig, ProfileQuantity};
