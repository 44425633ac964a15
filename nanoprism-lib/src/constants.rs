/// Photon energy times wavelength (eV·nm) used by the model: `E = 1239.8 / λ`.
pub const PHOTON_ENERGY_NM: f64 = 1239.8;

/// Reduced Planck constant (eV·s)
pub const HBAR_EV_S: f64 = 6.582e-16;

/// Nanometres per centimetre
pub const NM_PER_CM: f64 = 1.0e7;

/// Converts an area in nm² to cm².
pub const NM2_TO_CM2: f64 = 1.0e-14;
