//! TOML job files. Every field is optional and falls back to the reference
//! prism: a 50 nm silver prism, 20 nm thick with 2 nm corners, in vacuum,
//! swept from 300 to 800 nm.

use std::path::{Path, PathBuf};

use anyhow::Context;
use nanoprism::{Metal, NanoprismError, PrismGeometry, RangePolicy, SweepParams};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    pub particle: ParticleConfig,
    pub host: HostConfig,
    pub wavelengths: WavelengthConfig,
    pub output: OutputConfig,
}

/// Particle material and shape. Lengths in nm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// "silver", "ag", "gold" or "au"
    pub material: String,
    pub edge_length: f64,
    pub thickness: f64,
    pub corner_radius: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            material: Metal::Silver.to_string(),
            edge_length: 50.0,
            thickness: 20.0,
            corner_radius: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Real relative permittivity of the surrounding medium.
    pub permittivity: f64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { permittivity: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WavelengthConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// "extrapolate" or "reject" for energies outside the optical table.
    pub range_policy: RangePolicy,
}

impl Default for WavelengthConfig {
    fn default() -> Self {
        Self {
            min: 300.0,
            max: 800.0,
            step: 2.0,
            range_policy: RangePolicy::Extrapolate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// File name prefix of the `.dat` outputs.
    pub prefix: String,
    /// Also write the whole spectrum as JSON.
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: "analytic_model".into(),
            save_json: false,
        }
    }
}

impl JobConfig {
    /// Checks every section and builds the sweep inputs.
    pub fn to_sweep_params(&self) -> nanoprism::Result<SweepParams> {
        let metal: Metal = self.particle.material.parse()?;
        let geometry = PrismGeometry::new(
            self.particle.edge_length,
            self.particle.thickness,
            self.particle.corner_radius,
        )?;
        let eps_h = self.host.permittivity;
        if !(eps_h.is_finite() && eps_h > 0.0) {
            return Err(NanoprismError::InvalidHostPermittivity(eps_h));
        }

        let params = SweepParams {
            metal,
            geometry,
            host_permittivity: eps_h,
            wavelength_min: self.wavelengths.min,
            wavelength_max: self.wavelengths.max,
            wavelength_step: self.wavelengths.step,
            range_policy: self.wavelengths.range_policy,
        };
        params.wavelengths()?;
        Ok(params)
    }
}

/// Load and parse a TOML job file.
pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading job file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing job file {}", path.display()))
}

pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    Ok(toml::from_str(content)?)
}
