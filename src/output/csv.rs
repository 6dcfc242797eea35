//! CSV export of solver results
//!
//! Plain comma-separated output, readable by spreadsheets, pandas, MATLAB
//! and friends.
//!
//! # Quick Examples
//!
//! ```rust,ignore
//! use tov_rs::output::csv::{export_profile_csv, CsvConfig};
//!
//! // Interior profile of one run
//! export_profile_csv(&result, "profile.csv", None)?;
//!
//! // Narrower columns
//! let config = CsvConfig { precision: 4, ..CsvConfig::default() };
//! export_profile_csv(&result, "profile.csv", Some(&config))?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! radius (R_S),pressure,mass (M_sun)
//! 1.000000e-6,1.000000e-3,6.981275e-29
//! 5.001000e-3,9.999999e-4,8.742125e-9
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::MassRadiusRelation;
use crate::solver::IntegrationResult;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column separator (default: ',')
    pub delimiter: char,

    /// Significant digits of the scientific-notation values (default: 6)
    pub precision: usize,

    /// Write the header row (default: true)
    pub header: bool,

    /// Prefix comment lines with run metadata (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            header: true,
            include_metadata: false,
        }
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the interior profile of one run: radius, pressure, enclosed mass.
pub fn export_profile_csv(
    result: &IntegrationResult,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    let trajectory = &result.trajectory;
    if trajectory.is_empty() {
        return Err("Cannot export an empty trajectory".into());
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if config.include_metadata {
        let mut keys: Vec<&String> = result.metadata.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(writer, "# {}: {}", key, result.metadata[key])?;
        }
        writeln!(writer, "# termination: {:?}", result.termination)?;
    }

    if config.header {
        writeln!(
            writer,
            "radius (R_S){}pressure{}mass (M_sun)",
            config.delimiter, config.delimiter
        )?;
    }

    for i in 0..trajectory.len() {
        writeln!(
            writer,
            "{:.p$e}{}{:.p$e}{}{:.p$e}",
            trajectory.radii()[i],
            config.delimiter,
            trajectory.pressures()[i],
            config.delimiter,
            trajectory.masses()[i],
            p = config.precision
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a mass-radius relation: central pressure, radius (km), mass.
pub fn export_mass_radius_csv(
    relation: &MassRadiusRelation,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if relation.is_empty() {
        return Err("Cannot export an empty mass-radius relation".into());
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if config.header {
        writeln!(
            writer,
            "central pressure{}radius (km){}mass (M_sun)",
            config.delimiter, config.delimiter
        )?;
    }

    for i in 0..relation.len() {
        writeln!(
            writer,
            "{:.p$e}{}{:.p$e}{}{:.p$e}",
            relation.central_pressures[i],
            config.delimiter,
            relation.radii_km[i],
            config.delimiter,
            relation.masses[i],
            p = config.precision
        )?;
    }

    writer.flush()?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NumericalParameters, PhysicalConstants};
    use crate::eos;
    use crate::pipeline::solve;
    use crate::solver::Backend;

    fn sample_result() -> IntegrationResult {
        let constants = PhysicalConstants::new();
        let params = NumericalParameters::default();
        solve(0.001, eos::density(0.001), Backend::FixedStep, &constants, &params)
            .unwrap()
            .relativistic
    }

    #[test]
    fn test_profile_export_roundtrip() {
        let result = sample_result();
        let path = std::env::temp_dir().join("tov_rs_test_profile.csv");

        export_profile_csv(&result, &path, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "radius (R_S),pressure,mass (M_sun)");
        assert_eq!(lines.len(), result.trajectory.len() + 1);

        // First data row carries the central pressure
        let first: Vec<&str> = lines[1].split(',').collect();
        let pressure: f64 = first[1].parse().unwrap();
        assert!((pressure - 0.001).abs() < 1e-9);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_metadata_prefix() {
        let result = sample_result();
        let path = std::env::temp_dir().join("tov_rs_test_profile_meta.csv");

        let config = CsvConfig {
            include_metadata: true,
            ..CsvConfig::default()
        };
        export_profile_csv(&result, &path, Some(&config)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('#'));
        assert!(content.contains("# solver: Runge-Kutta 4 (fixed step)"));
        assert!(content.contains("# termination: Surface"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_trajectory_is_an_error() {
        use crate::solver::{Termination, Trajectory};

        let empty = IntegrationResult::new(Trajectory::default(), Termination::Surface);
        let path = std::env::temp_dir().join("tov_rs_test_empty.csv");

        assert!(export_profile_csv(&empty, &path, None).is_err());
    }

    #[test]
    fn test_custom_delimiter() {
        let result = sample_result();
        let path = std::env::temp_dir().join("tov_rs_test_profile_semi.csv");

        let config = CsvConfig {
            delimiter: ';',
            ..CsvConfig::default()
        };
        export_profile_csv(&result, &path, Some(&config)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().next().unwrap().contains(';'));

        std::fs::remove_file(&path).ok();
    }
}
