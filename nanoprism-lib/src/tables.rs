use std::sync::OnceLock;

use nanoprism_data::{GOLD_OLMON, OpticalConstantRecord, SILVER_JOHNSON_CHRISTY};
use serde::{Deserialize, Serialize};

use crate::error::{NanoprismError, Result};
use crate::interp::interp_local;

/// What to do with a photon energy outside the tabulated grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Extrapolate with the clamped 4-point window (reference model output).
    #[default]
    Extrapolate,
    /// Fail with [`NanoprismError::EnergyOutOfRange`].
    Reject,
}

/// Optical constants `n(E)`, `k(E)` tabulated on an ascending energy grid.
#[derive(Debug, Clone)]
pub struct OpticalConstantTable {
    name: String,
    energy: Vec<f64>,
    n: Vec<f64>,
    k: Vec<f64>,
}

static SILVER: OnceLock<OpticalConstantTable> = OnceLock::new();
static GOLD: OnceLock<OpticalConstantTable> = OnceLock::new();

impl OpticalConstantTable {
    /// Builds a table from records sorted by strictly ascending energy.
    ///
    /// At least 4 records are required by the local cubic interpolation.
    pub fn new(name: impl Into<String>, records: &[OpticalConstantRecord]) -> Result<Self> {
        let name = name.into();
        if records.len() < 4 {
            return Err(NanoprismError::InvalidTable(format!(
                "'{name}' has {} points, at least 4 are required",
                records.len()
            )));
        }
        if let Some(bad) = records
            .iter()
            .position(|r| !(r.energy.is_finite() && r.n.is_finite() && r.k.is_finite()))
        {
            return Err(NanoprismError::InvalidTable(format!(
                "'{name}' has a non-finite value at index {bad}"
            )));
        }
        if let Some(i) = records.windows(2).position(|w| w[1].energy <= w[0].energy) {
            return Err(NanoprismError::InvalidTable(format!(
                "'{name}' energies must be strictly ascending at index {}",
                i + 1
            )));
        }

        Ok(Self {
            name,
            energy: records.iter().map(|r| r.energy).collect(),
            n: records.iter().map(|r| r.n).collect(),
            k: records.iter().map(|r| r.k).collect(),
        })
    }

    /// Johnson & Christy silver data, 0.64–6.60 eV.
    pub fn silver() -> &'static Self {
        SILVER.get_or_init(|| {
            Self::new("Ag (Johnson & Christy 1972)", &SILVER_JOHNSON_CHRISTY)
                .expect("embedded silver table is valid")
        })
    }

    /// Olmon et al. gold data, 0.05–4.13 eV.
    pub fn gold() -> &'static Self {
        GOLD.get_or_init(|| {
            Self::new("Au (Olmon et al. 2012)", &GOLD_OLMON).expect("embedded gold table is valid")
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Tabulated photon energies in eV.
    pub fn energies(&self) -> &[f64] {
        &self.energy
    }

    /// `(min, max)` photon energy in eV.
    pub fn energy_range(&self) -> (f64, f64) {
        (self.energy[0], self.energy[self.energy.len() - 1])
    }

    /// True when both tables hold the same samples, whatever their names.
    pub fn same_data(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.energy == other.energy && self.n == other.n && self.k == other.k)
    }

    /// True when `energy` lies inside the tabulated grid.
    pub fn contains(&self, energy: f64) -> bool {
        let (min, max) = self.energy_range();
        energy >= min && energy <= max
    }

    /// Interpolated `(n, k)` at a photon energy in eV, extrapolating outside
    /// the grid.
    pub fn refractive_index(&self, energy: f64) -> (f64, f64) {
        (
            interp_local(energy, &self.energy, &self.n),
            interp_local(energy, &self.energy, &self.k),
        )
    }

    /// Interpolated `(n, k)` with an explicit out-of-range policy.
    pub fn refractive_index_with(&self, energy: f64, policy: RangePolicy) -> Result<(f64, f64)> {
        if !self.contains(energy) {
            let (min, max) = self.energy_range();
            match policy {
                RangePolicy::Reject => {
                    return Err(NanoprismError::EnergyOutOfRange { energy, min, max });
                }
                RangePolicy::Extrapolate => {
                    log::debug!(
                        "{}: extrapolating to {energy} eV outside [{min}, {max}] eV",
                        self.name
                    );
                }
            }
        }
        Ok(self.refractive_index(energy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(energy: f64) -> OpticalConstantRecord {
        OpticalConstantRecord::new(energy, 1.0, 2.0)
    }

    #[test]
    fn test_embedded_tables() {
        let ag = OpticalConstantTable::silver();
        assert_eq!(ag.len(), 49);
        assert_eq!(ag.energy_range(), (0.64, 6.60));

        let au = OpticalConstantTable::gold();
        assert_eq!(au.len(), 448);
        assert_eq!(au.energy_range(), (0.0497329, 4.13281));
    }

    #[test]
    fn test_rejects_short_table() {
        let err = OpticalConstantTable::new("short", &[rec(1.0), rec(2.0), rec(3.0)]).unwrap_err();
        assert!(matches!(err, NanoprismError::InvalidTable(_)));
    }

    #[test]
    fn test_rejects_non_ascending() {
        let records = [rec(1.0), rec(2.0), rec(2.0), rec(3.0), rec(4.0)];
        let err = OpticalConstantTable::new("flat", &records).unwrap_err();
        assert!(matches!(err, NanoprismError::InvalidTable(_)));

        let records = [rec(1.0), rec(3.0), rec(2.0), rec(4.0)];
        assert!(OpticalConstantTable::new("unsorted", &records).is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let records = [rec(1.0), rec(f64::NAN), rec(3.0), rec(4.0)];
        assert!(OpticalConstantTable::new("nan", &records).is_err());
    }

    #[test]
    fn test_range_policy() {
        let ag = OpticalConstantTable::silver();
        assert!(ag.contains(3.0));
        assert!(!ag.contains(0.5));
        assert!(!ag.contains(7.0));

        let err = ag.refractive_index_with(7.0, RangePolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            NanoprismError::EnergyOutOfRange {
                energy: 7.0,
                min: 0.64,
                max: 6.60
            }
        );
        let (n, k) = ag.refractive_index_with(7.0, RangePolicy::Extrapolate).unwrap();
        assert!(n.is_finite() && k.is_finite());
    }
}
