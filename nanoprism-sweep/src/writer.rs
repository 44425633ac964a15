//! Output files of a sweep.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nanoprism::{Spectrum, SpectrumPoint};

/// Column extracted from each point into its own two-column file.
type Column = fn(&SpectrumPoint) -> f64;

const DAT_FILES: [(&str, Column); 4] = [
    ("polarizability_re", |p| p.polarizability.re),
    ("polarizability_im", |p| p.polarizability.im),
    ("scattering_cs", |p| p.scattering),
    ("extinction_cs", |p| p.extinction),
];

/// Writes `<prefix>-<quantity>.dat` files, one `wavelength value` row per
/// point, and returns their paths.
pub fn write_dat_files(spectrum: &Spectrum, directory: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("creating output directory {}", directory.display()))?;

    DAT_FILES
        .iter()
        .map(|(quantity, column)| {
            let path = directory.join(format!("{prefix}-{quantity}.dat"));
            write_column(spectrum, *column, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

fn write_column(spectrum: &Spectrum, column: Column, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for point in &spectrum.points {
        writeln!(out, "{} {:e}", point.wavelength, column(point))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the whole spectrum, including the permittivity, as pretty JSON.
pub fn write_spectrum_json(spectrum: &Spectrum, directory: &Path, prefix: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(format!("{prefix}-spectrum.json"));
    let json = serde_json::to_string_pretty(spectrum)?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nanoprism::{Metal, SweepParams, compute_spectrum};

    fn small_spectrum() -> Spectrum {
        compute_spectrum(&SweepParams {
            metal: Metal::Gold,
            wavelength_min: 500.0,
            wavelength_max: 600.0,
            wavelength_step: 10.0,
            ..SweepParams::default()
        })
        .unwrap()
    }

    fn read_rows(path: &Path) -> Vec<(f64, f64)> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| {
                let mut cols = line.split_whitespace().map(|c| c.parse::<f64>().unwrap());
                (cols.next().unwrap(), cols.next().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_writes_four_dat_files() {
        let dir = tempfile::tempdir().unwrap();
        let spectrum = small_spectrum();
        let paths = write_dat_files(&spectrum, dir.path(), "analytic_model").unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            [
                "analytic_model-polarizability_re.dat",
                "analytic_model-polarizability_im.dat",
                "analytic_model-scattering_cs.dat",
                "analytic_model-extinction_cs.dat",
            ]
        );

        let ext = read_rows(&paths[3]);
        assert_eq!(ext.len(), 11);
        for (row, point) in ext.iter().zip(&spectrum.points) {
            assert_eq!(row.0, point.wavelength);
            assert_relative_eq!(row.1, point.extinction, max_relative = 1e-12);
        }
        let re = read_rows(&paths[0]);
        assert_relative_eq!(re[0].1, spectrum.points[0].polarizability.re, max_relative = 1e-12);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("gold");
        let paths = write_dat_files(&small_spectrum(), &nested, "au").unwrap();
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let spectrum = small_spectrum();
        let path = write_spectrum_json(&spectrum, dir.path(), "run").unwrap();
        assert!(path.ends_with("run-spectrum.json"));

        let back: Spectrum =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.points.len(), spectrum.points.len());
        assert_eq!(back.metal, Metal::Gold);
    }
}
