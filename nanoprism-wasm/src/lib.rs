//! WASM bindings for the nanoprism model.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p nanoprism-wasm
//! ```
//!
//! Complex numbers cross the boundary as `[re, im]` arrays. Lengths are in
//! nm and cross-sections in cm².

use wasm_bindgen::prelude::*;

use nanoprism::{Complex64, Metal, PrismGeometry, SweepParams};

fn parse_metal(material: &str) -> Result<Metal, JsError> {
    material.parse().map_err(to_js)
}

fn prism(edge_length: f64, thickness: f64, corner_radius: f64) -> Result<PrismGeometry, JsError> {
    PrismGeometry::new(edge_length, thickness, corner_radius).map_err(to_js)
}

fn to_js(e: nanoprism::NanoprismError) -> JsError {
    JsError::new(&e.to_string())
}

fn pair(z: Complex64) -> Vec<f64> {
    vec![z.re, z.im]
}

// ── Materials ──

#[wasm_bindgen]
pub fn materials() -> Vec<String> {
    Metal::ALL.iter().map(|m| m.to_string()).collect()
}

/// Returns `[min, max]` photon energy (eV) covered by a material's table.
#[wasm_bindgen]
pub fn tabulated_energy_range(material: &str) -> Result<Vec<f64>, JsError> {
    let (min, max) = parse_metal(material)?.table().energy_range();
    Ok(vec![min, max])
}

// ── Dielectric function ──

/// Returns `[re, im]` of the bulk permittivity.
///
/// `material` is "silver"/"ag" or "gold"/"au".
#[wasm_bindgen]
pub fn bulk_permittivity(material: &str, wavelength: f64) -> Result<Vec<f64>, JsError> {
    parse_metal(material)?
        .permittivity(wavelength)
        .map(pair)
        .map_err(to_js)
}

/// Returns `[re, im]` of the permittivity corrected for a particle of
/// effective diameter `diameter` (nm).
#[wasm_bindgen]
pub fn size_corrected_permittivity(
    material: &str,
    wavelength: f64,
    diameter: f64,
) -> Result<Vec<f64>, JsError> {
    parse_metal(material)?
        .size_corrected_permittivity(wavelength, diameter)
        .map(pair)
        .map_err(to_js)
}

// ── Geometry ──

#[wasm_bindgen]
pub fn effective_diameter(edge_length: f64, thickness: f64) -> f64 {
    nanoprism::effective_diameter(edge_length, thickness)
}

// ── Polarizability and cross-sections ──

/// Returns `[re, im]` of the in-plane dipole polarizability (nm³).
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn dipole_polarizability(
    wavelength: f64,
    eps_re: f64,
    eps_im: f64,
    eps_h: f64,
    edge_length: f64,
    thickness: f64,
    corner_radius: f64,
) -> Result<Vec<f64>, JsError> {
    let geometry = prism(edge_length, thickness, corner_radius)?;
    nanoprism::dipole_polarizability(wavelength, Complex64::new(eps_re, eps_im), eps_h, &geometry)
        .map(pair)
        .map_err(to_js)
}

/// Returns `[scattering, extinction, absorption]` cross-sections (cm²).
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn cross_sections(
    wavelength: f64,
    eps_re: f64,
    eps_im: f64,
    eps_h: f64,
    edge_length: f64,
    thickness: f64,
    corner_radius: f64,
) -> Result<Vec<f64>, JsError> {
    let geometry = prism(edge_length, thickness, corner_radius)?;
    let cs = nanoprism::cross_sections(
        wavelength,
        Complex64::new(eps_re, eps_im),
        eps_h,
        &geometry,
    )
    .map_err(to_js)?;
    Ok(vec![cs.scattering, cs.extinction, cs.absorption()])
}

// ── Spectra ──

/// Runs a sweep and returns the rows flattened as
/// `[wavelength, alpha_re, alpha_im, scattering, extinction, ...]`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn spectrum(
    material: &str,
    edge_length: f64,
    thickness: f64,
    corner_radius: f64,
    eps_h: f64,
    wavelength_min: f64,
    wavelength_max: f64,
    wavelength_step: f64,
) -> Result<Vec<f64>, JsError> {
    let params = SweepParams {
        metal: parse_metal(material)?,
        geometry: prism(edge_length, thickness, corner_radius)?,
        host_permittivity: eps_h,
        wavelength_min,
        wavelength_max,
        wavelength_step,
        ..SweepParams::default()
    };
    let spectrum = nanoprism::compute_spectrum(&params).map_err(to_js)?;
    Ok(spectrum
        .points
        .iter()
        .flat_map(|p| {
            [
                p.wavelength,
                p.polarizability.re,
                p.polarizability.im,
                p.scattering,
                p.extinction,
            ]
        })
        .collect())
}

/// Returns the wavelength (nm) of maximum extinction over a sweep.
#[wasm_bindgen]
pub fn resonance_wavelength(
    material: &str,
    edge_length: f64,
    thickness: f64,
    corner_radius: f64,
    eps_h: f64,
) -> Result<f64, JsError> {
    let params = SweepParams {
        metal: parse_metal(material)?,
        geometry: prism(edge_length, thickness, corner_radius)?,
        host_permittivity: eps_h,
        ..SweepParams::default()
    };
    let spectrum = nanoprism::compute_spectrum(&params).map_err(to_js)?;
    spectrum
        .peak_extinction()
        .map(|p| p.wavelength)
        .ok_or_else(|| JsError::new("empty spectrum"))
}
