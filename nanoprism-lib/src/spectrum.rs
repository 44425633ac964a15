//! Wavelength sweeps: the effective diameter is computed once, then every
//! wavelength is evaluated independently.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::cross_section::CrossSections;
use crate::dielectric::{photon_energy, size_corrected_permittivity};
use crate::error::{NanoprismError, Result, check_host_permittivity};
use crate::geometry::{FitCoefficients, PrismGeometry};
use crate::material::{MaterialModel, Metal};
use crate::polarizability::polarizability_with_fit;
use crate::tables::{OpticalConstantTable, RangePolicy};

/// Inputs of a wavelength sweep. Wavelengths are in nm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepParams {
    pub metal: Metal,
    pub geometry: PrismGeometry,
    pub host_permittivity: f64,
    pub wavelength_min: f64,
    pub wavelength_max: f64,
    pub wavelength_step: f64,
    #[serde(default)]
    pub range_policy: RangePolicy,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            metal: Metal::Silver,
            geometry: PrismGeometry {
                edge_length: 50.0,
                thickness: 20.0,
                corner_radius: 2.0,
            },
            host_permittivity: 1.0,
            wavelength_min: 300.0,
            wavelength_max: 800.0,
            wavelength_step: 2.0,
            range_policy: RangePolicy::Extrapolate,
        }
    }
}

impl SweepParams {
    /// The grid `min + i * step` for `i` in `0..=floor((max - min) / step)`.
    pub fn wavelengths(&self) -> Result<Vec<f64>> {
        wavelength_grid(self.wavelength_min, self.wavelength_max, self.wavelength_step)
    }

    pub fn model(&self) -> MaterialModel<'static> {
        self.metal.model().with_range_policy(self.range_policy)
    }
}

/// Largest number of wavelengths a single sweep may hold.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// Evenly spaced wavelengths from `min` up to at most `max`.
///
/// Grids with more than [`MAX_SWEEP_POINTS`] points are rejected.
pub fn wavelength_grid(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(min.is_finite() && min > 0.0) {
        return Err(NanoprismError::InvalidSweep(format!(
            "minimum wavelength must be positive, got {min} nm"
        )));
    }
    if !(max.is_finite() && max >= min) {
        return Err(NanoprismError::InvalidSweep(format!(
            "maximum wavelength {max} nm is below minimum {min} nm"
        )));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(NanoprismError::InvalidSweep(format!(
            "wavelength step must be positive, got {step} nm"
        )));
    }

    let intervals = ((max - min) / step * (1.0 + 1e-9)).floor();
    if !(intervals.is_finite() && intervals < MAX_SWEEP_POINTS as f64) {
        return Err(NanoprismError::InvalidSweep(format!(
            "step {step} nm over {min}-{max} nm exceeds {MAX_SWEEP_POINTS} points"
        )));
    }
    let intervals = intervals as usize;
    Ok((0..=intervals).map(|i| min + i as f64 * step).collect())
}

/// Number of wavelengths whose photon energy lies outside `table`.
pub fn wavelengths_outside_table(table: &OpticalConstantTable, wavelengths: &[f64]) -> usize {
    wavelengths
        .iter()
        .filter(|&&wl| !table.contains(photon_energy(wl)))
        .count()
}

/// Model output at one wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Wavelength (nm)
    pub wavelength: f64,
    /// Size-corrected metal permittivity
    pub permittivity: Complex64,
    /// Dipole polarizability (nm³)
    pub polarizability: Complex64,
    /// Scattering cross-section (cm²)
    pub scattering: f64,
    /// Extinction cross-section (cm²)
    pub extinction: f64,
}

impl SpectrumPoint {
    pub fn cross_sections(&self) -> CrossSections {
        CrossSections {
            scattering: self.scattering,
            extinction: self.extinction,
        }
    }
}

/// A computed sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub metal: Metal,
    pub geometry: PrismGeometry,
    pub host_permittivity: f64,
    /// Size parameter of the dielectric correction (nm)
    pub effective_diameter: f64,
    pub points: Vec<SpectrumPoint>,
}

impl Spectrum {
    /// Point of maximum extinction, i.e. the plasmon resonance.
    pub fn peak_extinction(&self) -> Option<&SpectrumPoint> {
        self.points
            .iter()
            .filter(|p| p.extinction.is_finite())
            .max_by(|a, b| a.extinction.total_cmp(&b.extinction))
    }

    pub fn wavelengths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.wavelength).collect()
    }
}

/// Evaluates one wavelength of a sweep.
pub fn spectrum_point(
    model: &MaterialModel<'_>,
    geometry: &PrismGeometry,
    fit: &FitCoefficients,
    eps_h: f64,
    diameter_nm: f64,
    wavelength_nm: f64,
) -> Result<SpectrumPoint> {
    let permittivity = size_corrected_permittivity(model, wavelength_nm, diameter_nm)?;
    let polarizability = polarizability_with_fit(wavelength_nm, permittivity, eps_h, geometry, fit);
    let cs = CrossSections::from_polarizability(wavelength_nm, eps_h, polarizability);
    log::trace!(
        "{wavelength_nm} nm: eps = {permittivity}, alpha = {polarizability}, ext = {:e} cm^2",
        cs.extinction
    );

    Ok(SpectrumPoint {
        wavelength: wavelength_nm,
        permittivity,
        polarizability,
        scattering: cs.scattering,
        extinction: cs.extinction,
    })
}

/// Runs a full sweep.
///
/// With the `parallel` feature the wavelengths are evaluated on the rayon
/// thread pool. The output order and values match the serial run.
pub fn compute_spectrum(params: &SweepParams) -> Result<Spectrum> {
    params.geometry.validate()?;
    check_host_permittivity(params.host_permittivity)?;
    let wavelengths = params.wavelengths()?;

    let model = params.model();
    let geometry = params.geometry;
    let fit = geometry.fit_coefficients();
    let diameter = geometry.effective_diameter();
    let eps_h = params.host_permittivity;

    log::debug!(
        "sweeping {} wavelengths for {} prism L={} H={} R={} nm, D = {diameter:.4} nm",
        wavelengths.len(),
        params.metal,
        geometry.edge_length,
        geometry.thickness,
        geometry.corner_radius
    );

    if model.range_policy() == RangePolicy::Extrapolate {
        let outside = wavelengths_outside_table(model.table(), &wavelengths);
        if outside > 0 {
            log::warn!(
                "{outside} of {} wavelengths lie outside the {} table and are extrapolated",
                wavelengths.len(),
                model.table().name()
            );
        }
    }

    let evaluate = |&wl: &f64| spectrum_point(&model, &geometry, &fit, eps_h, diameter, wl);

    #[cfg(feature = "parallel")]
    let points = {
        use rayon::prelude::*;
        wavelengths.par_iter().map(evaluate).collect::<Result<Vec<_>>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let points = wavelengths.iter().map(evaluate).collect::<Result<Vec<_>>>()?;

    let spectrum = Spectrum {
        metal: params.metal,
        geometry,
        host_permittivity: eps_h,
        effective_diameter: diameter,
        points,
    };
    if let Some(peak) = spectrum.peak_extinction() {
        log::debug!(
            "extinction peak {:e} cm^2 at {} nm",
            peak.extinction,
            peak.wavelength
        );
    }
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grid() {
        let grid = wavelength_grid(300.0, 800.0, 2.0).unwrap();
        assert_eq!(grid.len(), 251);
        assert_eq!(grid[0], 300.0);
        assert_eq!(grid[250], 800.0);
    }

    #[test]
    fn test_grid_tolerates_inexact_steps() {
        let grid = wavelength_grid(400.0, 401.0, 0.1).unwrap();
        assert_eq!(grid.len(), 11);
        let grid = wavelength_grid(400.0, 401.05, 0.1).unwrap();
        assert_eq!(grid.len(), 11);
        let grid = wavelength_grid(500.0, 500.0, 1.0).unwrap();
        assert_eq!(grid, vec![500.0]);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(wavelength_grid(0.0, 800.0, 2.0).is_err());
        assert!(wavelength_grid(800.0, 300.0, 2.0).is_err());
        assert!(wavelength_grid(300.0, 800.0, 0.0).is_err());
        assert!(wavelength_grid(300.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_counts_wavelengths_outside_table() {
        // silver data ends at 6.60 eV, i.e. 187.85 nm
        let grid = wavelength_grid(150.0, 300.0, 10.0).unwrap();
        assert_eq!(wavelengths_outside_table(Metal::Silver.table(), &grid), 4);
        // gold data ends at 4.13281 eV, just below 300 nm
        assert_eq!(wavelengths_outside_table(Metal::Gold.table(), &grid), 15);

        let visible = SweepParams::default().wavelengths().unwrap();
        assert_eq!(wavelengths_outside_table(Metal::Silver.table(), &visible), 0);
    }

    #[test]
    fn test_sweep_equals_serial_evaluation() {
        for metal in Metal::ALL {
            let params = SweepParams {
                metal,
                host_permittivity: 1.77,
                ..SweepParams::default()
            };
            let spectrum = compute_spectrum(&params).unwrap();

            let model = params.model();
            let fit = params.geometry.fit_coefficients();
            let diameter = params.geometry.effective_diameter();
            let pointwise: Vec<SpectrumPoint> = params
                .wavelengths()
                .unwrap()
                .into_iter()
                .map(|wl| {
                    spectrum_point(&model, &params.geometry, &fit, 1.77, diameter, wl).unwrap()
                })
                .collect();
            assert_eq!(spectrum.points, pointwise);
        }
    }

    #[test]
    fn test_grid_point_cap() {
        let err = wavelength_grid(300.0, 800.0, 1e-300).unwrap_err();
        assert!(matches!(err, NanoprismError::InvalidSweep(_)));
        assert!(wavelength_grid(300.0, 800.0, 5e-6).is_err());

        let grid = wavelength_grid(300.0, 800.0, 1e-3).unwrap();
        assert_eq!(grid.len(), 500_001);
        assert!(grid.len() <= MAX_SWEEP_POINTS);
    }
}
