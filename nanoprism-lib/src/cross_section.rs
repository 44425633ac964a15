//! Dipole scattering and extinction cross-sections.
//!
//! Polarizabilities are in nm³ and wavenumbers in nm⁻¹, so the raw
//! cross-sections come out in nm² and are scaled to cm² before returning.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::constants::NM2_TO_CM2;
use crate::error::Result;
use crate::geometry::PrismGeometry;
use crate::polarizability::dipole_polarizability;

/// Scattering and extinction cross-sections at one wavelength (cm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSections {
    pub scattering: f64,
    pub extinction: f64,
}

impl CrossSections {
    /// Derives both cross-sections from a polarizability already computed
    /// for these inputs.
    pub fn from_polarizability(wavelength_nm: f64, eps_h: f64, alpha: Complex64) -> Self {
        let k = wavenumber(wavelength_nm, eps_h);
        Self {
            scattering: scattering_from_polarizability(k, alpha),
            extinction: extinction_from_polarizability(k, alpha),
        }
    }

    /// Absorption, `extinction − scattering` (cm²).
    pub fn absorption(&self) -> f64 {
        self.extinction - self.scattering
    }
}

/// Wavenumber in the host medium, `k = 2π √εh / λ` (nm⁻¹).
#[inline]
pub fn wavenumber(wavelength_nm: f64, eps_h: f64) -> f64 {
    2.0 * PI * eps_h.sqrt() / wavelength_nm
}

/// Scattering cross-section in cm².
pub fn scattering_cross_section(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    geometry: &PrismGeometry,
) -> Result<f64> {
    let alpha = dipole_polarizability(wavelength_nm, eps_m, eps_h, geometry)?;
    Ok(scattering_from_polarizability(wavenumber(wavelength_nm, eps_h), alpha))
}

/// Extinction cross-section in cm².
pub fn extinction_cross_section(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    geometry: &PrismGeometry,
) -> Result<f64> {
    let alpha = dipole_polarizability(wavelength_nm, eps_m, eps_h, geometry)?;
    Ok(extinction_from_polarizability(wavenumber(wavelength_nm, eps_h), alpha))
}

/// Both cross-sections from a single polarizability evaluation.
pub fn cross_sections(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    geometry: &PrismGeometry,
) -> Result<CrossSections> {
    let alpha = dipole_polarizability(wavelength_nm, eps_m, eps_h, geometry)?;
    Ok(CrossSections::from_polarizability(wavelength_nm, eps_h, alpha))
}

#[inline]
fn scattering_from_polarizability(k: f64, alpha: Complex64) -> f64 {
    8.0 * PI * k.powi(4) * alpha.norm_sqr() * NM2_TO_CM2 / 3.0
}

#[inline]
fn extinction_from_polarizability(k: f64, alpha: Complex64) -> f64 {
    4.0 * PI * k * alpha.im * NM2_TO_CM2
}
