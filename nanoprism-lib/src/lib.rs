//! Optical response of rounded-corner triangular silver and gold nanoprisms.
//!
//! The model combines a size-corrected dielectric function, interpolated
//! from tabulated optical constants, with a closed-form dipole polarizability
//! whose shape dependence comes from fitted power laws. Every operation is a
//! pure function; the only shared state is the two read-only tables.
//!
//! ```no_run
//! use nanoprism::{Metal, PrismGeometry, dipole_polarizability, extinction_cross_section};
//!
//! let prism = PrismGeometry::new(50.0, 20.0, 2.0)?;
//! let d = prism.effective_diameter();
//! let eps_m = Metal::Silver.size_corrected_permittivity(400.0, d)?;
//! let alpha = dipole_polarizability(400.0, eps_m, 1.0, &prism)?;
//! let sigma_ext = extinction_cross_section(400.0, eps_m, 1.0, &prism)?;
//! # let _ = (alpha, sigma_ext);
//! # Ok::<(), nanoprism::NanoprismError>(())
//! ```

pub mod constants;
pub mod cross_section;
pub mod dielectric;
pub mod error;
pub mod geometry;
pub mod interp;
pub mod material;
pub mod polarizability;
pub mod spectrum;
pub mod tables;

pub use cross_section::{
    CrossSections, cross_sections, extinction_cross_section, scattering_cross_section,
};
pub use dielectric::{bulk_permittivity, photon_energy, size_corrected_permittivity};
pub use error::{NanoprismError, Result};
pub use geometry::{FitCoefficients, PrismGeometry, effective_diameter};
pub use material::{DrudeParameters, MaterialModel, Metal};
pub use num_complex::Complex64;
pub use polarizability::dipole_polarizability;
pub use spectrum::{Spectrum, SpectrumPoint, SweepParams, compute_spectrum};
pub use tables::{OpticalConstantTable, RangePolicy};
pub use nanoprism_data;
