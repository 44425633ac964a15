//! Material descriptors: an optical-constant table paired with the Drude
//! constants of the same metal.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::constants::{HBAR_EV_S, NM_PER_CM};
use crate::error::{NanoprismError, Result};
use crate::tables::{OpticalConstantTable, RangePolicy};

/// Metals with embedded optical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Silver,
    Gold,
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Silver, Metal::Gold];

    pub fn symbol(&self) -> &'static str {
        match self {
            Metal::Silver => "Ag",
            Metal::Gold => "Au",
        }
    }

    pub fn table(&self) -> &'static OpticalConstantTable {
        match self {
            Metal::Silver => OpticalConstantTable::silver(),
            Metal::Gold => OpticalConstantTable::gold(),
        }
    }

    pub fn drude(&self) -> DrudeParameters {
        match self {
            Metal::Silver => DrudeParameters::SILVER,
            Metal::Gold => DrudeParameters::GOLD,
        }
    }

    /// The embedded table together with its matching Drude constants.
    pub fn model(&self) -> MaterialModel<'static> {
        MaterialModel::paired(self.table(), self.drude())
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metal::Silver => write!(f, "silver"),
            Metal::Gold => write!(f, "gold"),
        }
    }
}

impl FromStr for Metal {
    type Err = NanoprismError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silver" | "ag" => Ok(Metal::Silver),
            "gold" | "au" => Ok(Metal::Gold),
            _ => Err(NanoprismError::UnknownMaterial(s.to_string())),
        }
    }
}

/// Free-electron constants for the size-dependent damping correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrudeParameters {
    /// Fermi velocity (cm/s)
    pub fermi_velocity: f64,
    /// Bulk electron mean free path (cm)
    pub mean_free_path: f64,
    /// Plasma energy ħωp (eV)
    pub plasma_energy: f64,
    /// Empirical surface-scattering coefficient `A`
    pub surface_scattering: f64,
}

impl DrudeParameters {
    pub const SILVER: Self = Self {
        fermi_velocity: 1.39e8,
        mean_free_path: 5.2e-6,
        plasma_energy: 9.1,
        surface_scattering: 2.5,
    };

    pub const GOLD: Self = Self {
        fermi_velocity: 1.38e8,
        mean_free_path: 1.28e-6,
        plasma_energy: 9.0,
        surface_scattering: 2.0,
    };

    /// Bulk damping `γ∞ = ħ vF / λ∞` in eV.
    pub fn bulk_damping(&self) -> f64 {
        HBAR_EV_S * self.fermi_velocity / self.mean_free_path
    }

    /// Size-broadened damping `γr = γ∞ + A ħ vF (2 / D)` in eV, with `D` in nm.
    pub fn size_damping(&self, diameter_nm: f64) -> f64 {
        self.bulk_damping()
            + self.surface_scattering * HBAR_EV_S * self.fermi_velocity * NM_PER_CM * (2.0 / diameter_nm)
    }

    /// Permittivity correction `ωp² [1/(ω² + iωγ∞) − 1/(ω² + iωγr)]` at photon
    /// energy `omega` (eV).
    pub fn correction(&self, omega: f64, diameter_nm: f64) -> Complex64 {
        let wp2 = self.plasma_energy * self.plasma_energy;
        let bulk = Complex64::new(omega * omega, omega * self.bulk_damping());
        let sized = Complex64::new(omega * omega, omega * self.size_damping(diameter_nm));
        wp2 * (bulk.inv() - sized.inv())
    }
}

/// A dielectric-function pipeline: one table, the Drude constants that belong
/// to it, and the out-of-range policy for table lookups.
#[derive(Debug, Clone, Copy)]
pub struct MaterialModel<'a> {
    table: &'a OpticalConstantTable,
    drude: DrudeParameters,
    range_policy: RangePolicy,
}

impl<'a> MaterialModel<'a> {
    /// Pairs a custom table with its Drude constants. Use [`Metal::model`]
    /// for the embedded metals.
    ///
    /// A table holding the embedded data of a metal, renamed or not, only
    /// accepts that metal's constants; anything else is
    /// [`NanoprismError::MismatchedMaterial`].
    pub fn new(table: &'a OpticalConstantTable, drude: DrudeParameters) -> Result<Self> {
        let embedded = Metal::ALL
            .into_iter()
            .find(|m| table.same_data(m.table()));
        match embedded {
            Some(metal) if drude != metal.drude() => Err(NanoprismError::MismatchedMaterial {
                table: table.name().to_string(),
                metal,
            }),
            _ => Ok(Self::paired(table, drude)),
        }
    }

    fn paired(table: &'a OpticalConstantTable, drude: DrudeParameters) -> Self {
        Self {
            table,
            drude,
            range_policy: RangePolicy::default(),
        }
    }

    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    pub fn table(&self) -> &'a OpticalConstantTable {
        self.table
    }

    pub fn drude(&self) -> &DrudeParameters {
        &self.drude
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metal() {
        assert_eq!("silver".parse::<Metal>().unwrap(), Metal::Silver);
        assert_eq!("Ag".parse::<Metal>().unwrap(), Metal::Silver);
        assert_eq!(" GOLD ".parse::<Metal>().unwrap(), Metal::Gold);
        assert_eq!("au".parse::<Metal>().unwrap(), Metal::Gold);
        assert!(matches!(
            "copper".parse::<Metal>(),
            Err(NanoprismError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for metal in Metal::ALL {
            assert_eq!(metal.to_string().parse::<Metal>().unwrap(), metal);
        }
    }

    #[test]
    fn test_damping_rates() {
        let ag = DrudeParameters::SILVER;
        // 6.582e-16 * 1.39e8 / 5.2e-6
        assert!((ag.bulk_damping() - 0.017_594_19).abs() < 1e-7);
        assert!(ag.size_damping(20.0) > ag.size_damping(40.0));
        assert!(ag.size_damping(40.0) > ag.bulk_damping());
    }

    #[test]
    fn test_embedded_tables_keep_their_constants() {
        let err = MaterialModel::new(OpticalConstantTable::silver(), DrudeParameters::GOLD)
            .unwrap_err();
        assert_eq!(
            err,
            NanoprismError::MismatchedMaterial {
                table: OpticalConstantTable::silver().name().to_string(),
                metal: Metal::Silver,
            }
        );

        // a renamed copy of the gold table is still gold data
        let gold_copy = OpticalConstantTable::new("Au copy", &nanoprism_data::GOLD_OLMON).unwrap();
        assert!(MaterialModel::new(&gold_copy, DrudeParameters::SILVER).is_err());
        assert!(MaterialModel::new(&gold_copy, DrudeParameters::GOLD).is_ok());
    }

    #[test]
    fn test_correction_vanishes_for_large_particles() {
        let c = DrudeParameters::GOLD.correction(2.0, 1.0e12);
        assert!(c.norm() < 1e-9, "correction = {c}");
    }
}
