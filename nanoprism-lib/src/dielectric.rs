//! Bulk and size-corrected dielectric functions.
//!
//! The bulk permittivity comes from interpolated optical constants,
//! `ε = (n² − k²) + i·2nk`. The size correction replaces the bulk Drude
//! damping with one broadened by electron scattering at the particle surface.

use num_complex::Complex64;

use crate::constants::PHOTON_ENERGY_NM;
use crate::error::{NanoprismError, Result, check_wavelength};
use crate::material::{MaterialModel, Metal};

/// Photon energy in eV for a wavelength in nm.
#[inline]
pub fn photon_energy(wavelength_nm: f64) -> f64 {
    PHOTON_ENERGY_NM / wavelength_nm
}

/// Bulk complex permittivity at a wavelength in nm.
pub fn bulk_permittivity(model: &MaterialModel<'_>, wavelength_nm: f64) -> Result<Complex64> {
    check_wavelength(wavelength_nm)?;
    let energy = photon_energy(wavelength_nm);
    let (n, k) = model
        .table()
        .refractive_index_with(energy, model.range_policy())?;
    Ok(Complex64::new(n * n - k * k, 2.0 * n * k))
}

/// Size-corrected complex permittivity for a particle of effective diameter
/// `diameter_nm`.
pub fn size_corrected_permittivity(
    model: &MaterialModel<'_>,
    wavelength_nm: f64,
    diameter_nm: f64,
) -> Result<Complex64> {
    if !(diameter_nm.is_finite() && diameter_nm > 0.0) {
        return Err(NanoprismError::InvalidGeometry(format!(
            "effective diameter must be positive, got {diameter_nm} nm"
        )));
    }
    let bulk = bulk_permittivity(model, wavelength_nm)?;
    let omega = photon_energy(wavelength_nm);
    Ok(bulk + model.drude().correction(omega, diameter_nm))
}

impl Metal {
    /// Bulk permittivity from the embedded table (see [`bulk_permittivity`]).
    pub fn permittivity(&self, wavelength_nm: f64) -> Result<Complex64> {
        bulk_permittivity(&self.model(), wavelength_nm)
    }

    /// Size-corrected permittivity (see [`size_corrected_permittivity`]).
    pub fn size_corrected_permittivity(
        &self,
        wavelength_nm: f64,
        diameter_nm: f64,
    ) -> Result<Complex64> {
        size_corrected_permittivity(&self.model(), wavelength_nm, diameter_nm)
    }
}
