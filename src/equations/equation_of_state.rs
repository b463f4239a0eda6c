//! Equation of state for the water fraction of the plume and for ambient water.
//!
//! Computes seawater density ρ(T, S, p) from temperature, salinity and
//! pressure with the UNESCO EOS-80 formulation, plus a linearised variant for
//! idealised runs.
//!
//! # References
//!
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Millero & Poisson (1981): International one-atmosphere equation of state of seawater.
//!
//! # Units
//!
//! - Temperature: °C
//! - Salinity: PSU
//! - Pressure: dbar (1 dbar ≈ 1 m of water)
//! - Density: kg/m³
//!
//! The plume model evaluates water density at a fixed 1 dbar, the same
//! reference used when ambient density profiles are derived from
//! temperature and salinity.
//!
//! EOS-80 reads practical salinity and in-situ temperature. TEOS-10 density
//! from the same (S, T) pair at 1 dbar is about 0.1 kg/m³ higher in typical
//! ocean water, so a diluted cylinder reaches neutral buoyancy slightly
//! deeper or shallower than a TEOS-10 run would place it. Profiles carrying
//! their own `rhoa` column keep whatever reference they were computed with.

use serde::{Deserialize, Serialize};

/// Pressure (dbar) at which plume and ambient water densities are evaluated.
pub const REFERENCE_PRESSURE_DBAR: f64 = 1.0;

/// UNESCO EOS-80 seawater density.
#[derive(Clone, Debug)]
pub struct EquationOfState {
    /// Include the secant bulk modulus pressure correction.
    pub include_pressure: bool,
}

impl Default for EquationOfState {
    fn default() -> Self {
        Self::with_pressure()
    }
}

impl EquationOfState {
    /// One-atmosphere density only; pressure arguments are ignored.
    pub fn surface_only() -> Self {
        Self {
            include_pressure: false,
        }
    }

    /// Density including the pressure correction.
    pub fn with_pressure() -> Self {
        Self {
            include_pressure: true,
        }
    }

    /// Seawater density at p = 0.
    ///
    /// # Example
    /// ```
    /// use plume_rs::equations::EquationOfState;
    ///
    /// let eos = EquationOfState::with_pressure();
    ///
    /// // Standard seawater
    /// let rho = eos.density_surface(10.0, 35.0);
    /// assert!((rho - 1026.97).abs() < 0.1);
    /// ```
    pub fn density_surface(&self, temperature: f64, salinity: f64) -> f64 {
        let t = temperature;
        let s = salinity;

        // Pure water (Bigg)
        let rho_w = 999.842594 + 6.793952e-2 * t - 9.095290e-3 * t.powi(2)
            + 1.001685e-4 * t.powi(3)
            - 1.120083e-6 * t.powi(4)
            + 6.536336e-9 * t.powi(5);

        let a = 8.24493e-1 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
            + 5.3875e-9 * t.powi(4);
        let b = -5.72466e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2);
        let c = 4.8314e-4;

        // Negative salinities only come from bad input; keep s^1.5 real.
        let s = s.max(0.0);
        rho_w + a * s + b * s.powf(1.5) + c * s.powi(2)
    }

    /// Seawater density at pressure `pressure` (dbar).
    pub fn density(&self, temperature: f64, salinity: f64, pressure: f64) -> f64 {
        let rho_0 = self.density_surface(temperature, salinity);
        if !self.include_pressure || pressure.abs() < 1e-6 {
            return rho_0;
        }
        // K(S, T, p) is tabulated in bar
        let p_bar = pressure / 10.0;
        let k = self.secant_bulk_modulus(temperature, salinity.max(0.0), p_bar);
        rho_0 / (1.0 - p_bar / k)
    }

    /// Secant bulk modulus K(S, T, p), with `p` and the result in bar.
    fn secant_bulk_modulus(&self, t: f64, s: f64, p: f64) -> f64 {
        let kw = 19652.21 + 148.4206 * t - 2.327105 * t.powi(2) + 1.360477e-2 * t.powi(3)
            - 5.155288e-5 * t.powi(4);

        let k0 = kw
            + s * (54.6746 - 0.603459 * t + 1.09987e-2 * t.powi(2) - 6.1670e-5 * t.powi(3))
            + s.powf(1.5) * (7.944e-2 + 1.6483e-2 * t - 5.3009e-4 * t.powi(2));

        let aw = 3.239908 + 1.43713e-3 * t + 1.16092e-4 * t.powi(2) - 5.77905e-7 * t.powi(3);
        let a =
            aw + s * (2.2838e-3 - 1.0981e-5 * t - 1.6078e-6 * t.powi(2)) + s.powf(1.5) * 1.91075e-4;

        let bw = 8.50935e-5 - 6.12293e-6 * t + 5.2787e-8 * t.powi(2);
        let b = bw + s * (-9.9348e-7 + 2.0816e-8 * t + 9.1697e-10 * t.powi(2));

        k0 + p * (a + b * p)
    }
}

/// Linear equation of state.
///
/// ρ = ρ₀ · (1 − α(T − T₀) + β(S − S₀))
///
/// Handy for idealised profiles where the plume should reach exactly the
/// ambient density once fully diluted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearEquationOfState {
    pub rho_0: f64,
    pub t_0: f64,
    pub s_0: f64,
    /// Thermal expansion (1/°C)
    pub alpha: f64,
    /// Haline contraction (1/PSU)
    pub beta: f64,
}

impl Default for LinearEquationOfState {
    fn default() -> Self {
        Self {
            rho_0: 1027.0,
            t_0: 10.0,
            s_0: 35.0,
            alpha: 1.7e-4,
            beta: 7.6e-4,
        }
    }
}

impl LinearEquationOfState {
    pub fn density(&self, temperature: f64, salinity: f64) -> f64 {
        self.rho_0
            * (1.0 - self.alpha * (temperature - self.t_0) + self.beta * (salinity - self.s_0))
    }
}

/// Runtime-selectable water equation of state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeawaterEos {
    /// UNESCO EOS-80 at [`REFERENCE_PRESSURE_DBAR`].
    #[default]
    Unesco,
    Linear(LinearEquationOfState),
}

impl SeawaterEos {
    /// Water density used by the plume model for temperature `t` and salinity `s`.
    pub fn density(&self, t: f64, s: f64) -> f64 {
        match self {
            SeawaterEos::Unesco => {
                EquationOfState::with_pressure().density(t, s, REFERENCE_PRESSURE_DBAR)
            }
            SeawaterEos::Linear(eos) => eos.density(t, s),
        }
    }
}
