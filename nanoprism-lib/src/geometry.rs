//! Prism geometry, its volume-equivalent sphere and the empirical shape fits.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{NanoprismError, Result};

/// A prism with an equilateral-triangle base and rounded base corners.
///
/// All lengths are in nm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrismGeometry {
    /// Edge length `L` of the triangular base.
    pub edge_length: f64,
    /// Thickness `H`.
    pub thickness: f64,
    /// Corner radius `R` of the triangular base.
    pub corner_radius: f64,
}

impl PrismGeometry {
    /// Validated constructor (see [`PrismGeometry::validate`]).
    pub fn new(edge_length: f64, thickness: f64, corner_radius: f64) -> Result<Self> {
        let geometry = Self {
            edge_length,
            thickness,
            corner_radius,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks that every length is positive and finite, and that the corner
    /// radius is below both the thickness and the inradius `L / (2√3)` of the
    /// base triangle.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("edge length", self.edge_length),
            ("thickness", self.thickness),
            ("corner radius", self.corner_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(NanoprismError::InvalidGeometry(format!(
                    "{label} must be positive, got {value} nm"
                )));
            }
        }
        if self.corner_radius >= self.thickness {
            return Err(NanoprismError::InvalidGeometry(format!(
                "corner radius {} nm must be smaller than thickness {} nm",
                self.corner_radius, self.thickness
            )));
        }
        let inradius = self.edge_length / (2.0 * 3.0_f64.sqrt());
        if self.corner_radius >= inradius {
            return Err(NanoprismError::InvalidGeometry(format!(
                "corner radius {} nm must be smaller than the base inradius {inradius:.3} nm",
                self.corner_radius
            )));
        }
        Ok(())
    }

    /// Volume of the sharp-cornered prism, `(√3/4) L² H`, in nm³.
    pub fn volume(&self) -> f64 {
        0.25 * 3.0_f64.sqrt() * self.edge_length * self.edge_length * self.thickness
    }

    /// Diameter of the sphere with the same volume, in nm.
    pub fn effective_diameter(&self) -> f64 {
        effective_diameter(self.edge_length, self.thickness)
    }

    pub fn fit_coefficients(&self) -> FitCoefficients {
        FitCoefficients::for_geometry(self)
    }
}

/// `D = 2 (3√3 L² H / 16π)^(1/3)`, the volume-equivalent sphere diameter in nm.
pub fn effective_diameter(edge_length: f64, thickness: f64) -> f64 {
    2.0 * (3.0 * 3.0_f64.sqrt() * edge_length * edge_length * thickness / (16.0 * PI)).cbrt()
}

/// Shape-dependent coefficients of the polarizability model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitCoefficients {
    /// Effective volume fraction `β`.
    pub beta: f64,
    /// Shifted resonance permittivity `εc`.
    pub eps_c: f64,
    /// Second-order retardation coefficient.
    pub a2: f64,
    /// Fourth-order retardation coefficient.
    pub a4: f64,
}

/// `c1 (L/H)^p1 + c2 (L/R)^p2 + c3 (H/R)^p3 + c0`, each term as `(c, p)`.
struct PowerLawFit {
    aspect: (f64, f64),
    edge_rounding: (f64, f64),
    thickness_rounding: (f64, f64),
    offset: f64,
}

impl PowerLawFit {
    fn eval(&self, l_over_h: f64, l_over_r: f64, h_over_r: f64) -> f64 {
        self.aspect.0 * l_over_h.powf(self.aspect.1)
            + self.edge_rounding.0 * l_over_r.powf(self.edge_rounding.1)
            + self.thickness_rounding.0 * h_over_r.powf(self.thickness_rounding.1)
            + self.offset
    }
}

const BETA_FIT: PowerLawFit = PowerLawFit {
    aspect: (-0.649487, -1.27802),
    edge_rounding: (1.87718, -0.928178),
    thickness_rounding: (0.0784606, -0.619604),
    offset: 0.617065,
};

const EPS_C_FIT: PowerLawFit = PowerLawFit {
    aspect: (-1.73983, 0.904851),
    edge_rounding: (23.7005, -9.71985),
    thickness_rounding: (3.73666, -0.416187),
    offset: -4.23387,
};

const A2_FIT: PowerLawFit = PowerLawFit {
    aspect: (1.35181, -0.556507),
    edge_rounding: (1.13818, -0.483608),
    thickness_rounding: (-0.287856, -0.468685),
    offset: -0.0564038,
};

const A4_FIT: PowerLawFit = PowerLawFit {
    aspect: (-2.58813, -0.447242),
    edge_rounding: (-2.62882, -2.97322),
    thickness_rounding: (-0.254773, -0.125501),
    offset: 0.702526,
};

impl FitCoefficients {
    pub fn for_geometry(geometry: &PrismGeometry) -> Self {
        let l_over_h = geometry.edge_length / geometry.thickness;
        let l_over_r = geometry.edge_length / geometry.corner_radius;
        let h_over_r = geometry.thickness / geometry.corner_radius;

        Self {
            beta: BETA_FIT.eval(l_over_h, l_over_r, h_over_r),
            eps_c: EPS_C_FIT.eval(l_over_h, l_over_r, h_over_r),
            a2: A2_FIT.eval(l_over_h, l_over_r, h_over_r),
            a4: A4_FIT.eval(l_over_h, l_over_r, h_over_r),
        }
    }
}
