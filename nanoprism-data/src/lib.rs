#![no_std]

//! Embedded optical-constant tables for the nanoprism model.
//!
//! Each table is a `static` slice of [`OpticalConstantRecord`] sorted by
//! ascending photon energy. The library crate wraps them in validated
//! lookup tables; nothing here is mutated after compilation.

use serde::{Deserialize, Serialize};

pub mod gold;
pub mod silver;

pub use gold::GOLD_OLMON;
pub use silver::SILVER_JOHNSON_CHRISTY;

/// One tabulated sample of the complex refractive index `n + ik`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalConstantRecord {
    /// Photon energy in eV.
    pub energy: f64,
    /// Refractive index.
    pub n: f64,
    /// Extinction coefficient.
    pub k: f64,
}

impl OpticalConstantRecord {
    pub const fn new(energy: f64, n: f64, k: f64) -> Self {
        Self { energy, n, k }
    }
}

const fn r(energy: f64, n: f64, k: f64) -> OpticalConstantRecord {
    OpticalConstantRecord::new(energy, n, k)
}
