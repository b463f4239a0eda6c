//! Namelist structures, one per YAML file.
//!
//! Keys keep the namelist spelling (`c_T`, `T0`, `SEA_AREA`, ...). Missing
//! keys take the documented defaults.

use serde::{Deserialize, Serialize};

use crate::ambient::CurrentRotation;
use crate::equations::SeawaterEos;
use crate::time::StandardIntegrator;

// =============================================================================
// NaturalConstants.yaml
// =============================================================================

/// Physical constants of the run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalConstants {
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Thermal expansion coefficient of the oil (1/°C)
    #[serde(rename = "c_T")]
    pub c_t: f64,
    /// Oil concentration of the ambient water
    pub c_a: f64,
    /// Equation of state of the water fraction inside the plume
    pub water_eos: SeawaterEos,
}

impl Default for NaturalConstants {
    fn default() -> Self {
        Self {
            g: 9.81,
            c_t: 7.0e-4,
            c_a: 0.0,
            water_eos: SeawaterEos::Unesco,
        }
    }
}

// =============================================================================
// NumericalSimulation.yaml
// =============================================================================

/// Entrainment closure parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrainmentParams {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    /// 0: Qe = max(Qs, Qf); 1: Qe = Qs + Qf
    pub total_entrain: i64,
}

impl Default for EntrainmentParams {
    fn default() -> Self {
        Self {
            a1: 0.057,
            a2: 0.554,
            a3: 5.0,
            total_entrain: 0,
        }
    }
}

/// Time stepping and release schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalConfig {
    /// Time step (s)
    pub dt: f64,
    /// Simulated time (min)
    pub time_max: f64,
    /// Number of cylinders; cylinder k is released at step k
    pub ncyl: usize,
    pub entrain_params: EntrainmentParams,
    pub integrator: StandardIntegrator,
}

impl Default for NumericalConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            time_max: 10.0,
            ncyl: 1,
            entrain_params: EntrainmentParams::default(),
            integrator: StandardIntegrator::Rk4,
        }
    }
}

impl NumericalConfig {
    /// Step budget of every cylinder, `floor(time_max·60/dt)`.
    pub fn tmax(&self) -> usize {
        let steps = (self.time_max * 60.0 / self.dt).floor();
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }
}

// =============================================================================
// Release.yaml
// =============================================================================

/// Initial conditions of every released cylinder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    pub x0: f64,
    pub y0: f64,
    /// Release elevation, negative below the surface (m)
    pub z0: f64,
    pub u0: f64,
    pub v0: f64,
    pub w0: f64,
    /// Initial oil mass fraction
    pub c0: f64,
    #[serde(rename = "T0")]
    pub t0: f64,
    #[serde(rename = "S0")]
    pub s0: f64,
    /// Initial radius (m)
    pub b0: f64,
    /// Oil density at `T_oil_0` (kg/m³)
    pub rho_oil_0: f64,
    #[serde(rename = "T_oil_0")]
    pub t_oil_0: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spill_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spill_lon: Option<f64>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        // Troll crude (API 35.8): 843 kg/m³ at 15.5 °C
        Self {
            x0: 0.0,
            y0: 0.0,
            z0: -100.0,
            u0: 0.0,
            v0: 0.0,
            w0: 0.5,
            c0: 1.0,
            t0: 10.0,
            s0: 35.0,
            b0: 0.1,
            rho_oil_0: 843.0,
            t_oil_0: 15.5,
            spill_lat: None,
            spill_lon: None,
        }
    }
}

impl ReleaseConfig {
    pub fn velocity(&self) -> [f64; 3] {
        [self.u0, self.v0, self.w0]
    }
}

// =============================================================================
// Ambient.yaml
// =============================================================================

/// Ambient profile handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// Sea area of the profile; selects the default current rotation
    #[serde(rename = "SEA_AREA")]
    pub sea_area: String,
    /// Explicit current rotation (degrees, counter-clockwise)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rotation_deg: Option<f64>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            sea_area: "GLOBAL".to_string(),
            current_rotation_deg: None,
        }
    }
}

impl AmbientConfig {
    /// Rotation applied to the profile currents.
    pub fn rotation(&self) -> CurrentRotation {
        match self.current_rotation_deg {
            Some(deg) => CurrentRotation::degrees(deg),
            None => CurrentRotation::for_sea_area(&self.sea_area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namelist_spelling() {
        let release: ReleaseConfig =
            serde_yaml::from_str("z0: -50\nT0: 4.5\nS0: 34\nT_oil_0: 20\nb0: 1").unwrap();
        assert_eq!(release.z0, -50.0);
        assert_eq!(release.t0, 4.5);
        assert_eq!(release.s0, 34.0);
        assert_eq!(release.t_oil_0, 20.0);
        // untouched keys keep defaults
        assert_eq!(release.rho_oil_0, 843.0);
        assert_eq!(release.w0, 0.5);

        let constants: NaturalConstants = serde_yaml::from_str("g: 9.8\nc_T: 0.001").unwrap();
        assert_eq!(constants.c_t, 0.001);
        assert_eq!(constants.water_eos, SeawaterEos::Unesco);
    }

    #[test]
    fn test_nested_entrainment_params() {
        let yaml = "dt: 2\ntime_max: 1\nentrain_params:\n  a1: 0.1\n  total_entrain: 1\n";
        let numerical: NumericalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(numerical.entrain_params.a1, 0.1);
        assert_eq!(numerical.entrain_params.a2, 0.554);
        assert_eq!(numerical.entrain_params.total_entrain, 1);
        assert_eq!(numerical.tmax(), 30);
        assert_eq!(numerical.integrator, StandardIntegrator::Rk4);
    }

    #[test]
    fn test_integrator_and_eos_selection() {
        let numerical: NumericalConfig = serde_yaml::from_str("integrator: forward-euler").unwrap();
        assert_eq!(numerical.integrator, StandardIntegrator::ForwardEuler);

        let yaml = "water_eos: !linear\n  rho_0: 1025\n  t_0: 10\n  s_0: 35\n  alpha: 0.0002\n  beta: 0.0008\n";
        let constants: NaturalConstants = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(constants.water_eos, SeawaterEos::Linear(_)));
    }

    #[test]
    fn test_tmax_floors() {
        let numerical = NumericalConfig {
            dt: 7.0,
            time_max: 1.0,
            ..Default::default()
        };
        assert_eq!(numerical.tmax(), 8);
    }

    #[test]
    fn test_rotation_selection() {
        let mut ambient = AmbientConfig {
            sea_area: "NORTHSEA".into(),
            current_rotation_deg: None,
        };
        assert!((ambient.rotation().angle_degrees() - 90.0).abs() < 1e-12);
        ambient.current_rotation_deg = Some(0.0);
        assert!(ambient.rotation().is_identity());
        assert!(AmbientConfig::default().rotation().is_identity());
    }
}
