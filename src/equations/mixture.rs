//! Density of the oil phase and of the oil/water mixture inside a cylinder.

use serde::{Deserialize, Serialize};

/// Oil density as a linear function of temperature.
///
/// ρ_oil(T) = ρ_ref · (1 − c_T · (T − T_ref))
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OilDensity {
    /// Density at the reference temperature (kg/m³)
    pub rho_ref: f64,
    /// Reference temperature (°C)
    pub t_ref: f64,
    /// Volumetric expansion coefficient (1/°C)
    pub expansion: f64,
}

impl OilDensity {
    pub fn new(rho_ref: f64, t_ref: f64, expansion: f64) -> Self {
        Self {
            rho_ref,
            t_ref,
            expansion,
        }
    }

    /// Oil density at temperature `t`.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        self.rho_ref * (1.0 - self.expansion * (t - self.t_ref))
    }
}

/// Density of a mixture with oil mass fraction `c`.
///
/// Volumes add: 1/ρ = c/ρ_oil + (1 − c)/ρ_w, written without the reciprocals.
#[inline]
pub fn mixture_density(rho_oil: f64, rho_w: f64, c: f64) -> f64 {
    rho_oil * rho_w / (rho_oil * (1.0 - c) + rho_w * c)
}
