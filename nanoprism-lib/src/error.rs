use thiserror::Error;

use crate::material::Metal;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NanoprismError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
    #[error("photon energy {energy} eV out of tabulated range [{min}, {max}]")]
    EnergyOutOfRange { energy: f64, min: f64, max: f64 },
    #[error("wavelength must be positive and finite, got {0} nm")]
    InvalidWavelength(f64),
    #[error("host permittivity must be positive and finite, got {0}")]
    InvalidHostPermittivity(f64),
    #[error("invalid prism geometry: {0}")]
    InvalidGeometry(String),
    #[error("table '{table}' holds {metal} data and needs the {metal} Drude constants")]
    MismatchedMaterial { table: String, metal: Metal },
    #[error("invalid optical constant table: {0}")]
    InvalidTable(String),
    #[error("invalid wavelength sweep: {0}")]
    InvalidSweep(String),
}

pub type Result<T> = std::result::Result<T, NanoprismError>;

pub(crate) fn check_wavelength(wavelength: f64) -> Result<()> {
    if wavelength.is_finite() && wavelength > 0.0 {
        Ok(())
    } else {
        Err(NanoprismError::InvalidWavelength(wavelength))
    }
}

pub(crate) fn check_host_permittivity(eps_h: f64) -> Result<()> {
    if eps_h.is_finite() && eps_h > 0.0 {
        Ok(())
    } else {
        Err(NanoprismError::InvalidHostPermittivity(eps_h))
    }
}
