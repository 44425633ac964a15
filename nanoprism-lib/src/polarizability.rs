//! Dipole polarizability of the nanoprism in the modified long-wavelength
//! approximation.
//!
//! ```text
//! α = (1/4π) V1 / [ 1/(εm/εh − 1) − 1/(εc − 1) − A(s) ]
//! A(s) = a2 s² + i (4π²/3)(V1/L³) s³ + a4 s⁴,   s = √εh L / λ
//! ```
//!
//! `V1 = β V0` is the effective volume and `β`, `εc`, `a2`, `a4` are the
//! empirical shape fits. The `s³` term is the radiative damping. Near an
//! undamped resonance the denominator approaches zero and the result grows
//! without bound; that is a property of the model and is not trapped.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{Result, check_host_permittivity, check_wavelength};
use crate::geometry::{FitCoefficients, PrismGeometry};

/// Dimensionless size parameter `s = √εh L / λ`.
#[inline]
pub fn size_parameter(wavelength_nm: f64, eps_h: f64, edge_length: f64) -> f64 {
    eps_h.sqrt() * edge_length / wavelength_nm
}

/// Complex dipole polarizability in nm³.
///
/// # Arguments
/// * `wavelength_nm` - Vacuum wavelength in nm
/// * `eps_m` - Permittivity of the metal (usually size-corrected)
/// * `eps_h` - Permittivity of the host medium
/// * `geometry` - Prism dimensions in nm
pub fn dipole_polarizability(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    geometry: &PrismGeometry,
) -> Result<Complex64> {
    check_wavelength(wavelength_nm)?;
    check_host_permittivity(eps_h)?;
    let fit = geometry.fit_coefficients();
    Ok(polarizability_with_fit(wavelength_nm, eps_m, eps_h, geometry, &fit))
}

/// Same as [`dipole_polarizability`] with precomputed shape coefficients and
/// no input checks.
pub fn polarizability_with_fit(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    geometry: &PrismGeometry,
    fit: &FitCoefficients,
) -> Complex64 {
    let l = geometry.edge_length;
    let s = size_parameter(wavelength_nm, eps_h, l);
    let v1 = geometry.volume() * fit.beta;

    let retardation = Complex64::new(
        s * s * fit.a2 + s.powi(4) * fit.a4,
        4.0 * PI * PI * v1 * s.powi(3) / (3.0 * l * l * l),
    );
    let one = Complex64::new(1.0, 0.0);
    let denominator = (eps_m / eps_h - one).inv() - one / (fit.eps_c - 1.0) - retardation;

    (v1 / (4.0 * PI)) / denominator
}
