//! Entrainment closure of the plume model.
//!
//! Ambient water enters a cylinder through two mechanisms:
//!
//! - **Shear entrainment** `Qs`: turbulent mixing driven by the velocity
//!   difference between the cylinder and the ambient current, proportional
//!   to the lateral surface and to an empirical coefficient α.
//! - **Forced entrainment** `Qf`: the ambient current pushing water onto the
//!   windward face of the deforming cylinder.
//!
//! The total flux `Qe` is either the larger of the two or their sum,
//! selected once per run by [`EntrainmentMode`].
//!
//! # References
//!
//! - Yapa, P. D. & Zheng, L. (1997): Simulation of oil spills from underwater
//!   accidents I: Model development. J. Hydraulic Research 35(5).
//! - Lee, J. H. W. & Cheung, V. (1990): Generalized Lagrangian model for
//!   buoyant jets in current. J. Environ. Eng. 116(6).

mod forced;
mod kinematics;
mod shear;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver::StepContext;

pub use forced::forced_entrainment;
pub use kinematics::{projected_velocity, reduced_gravity, velocity_difference};
pub use shear::{entrainment_coefficient, shear_entrainment};

/// Speeds and velocity differences below this are treated as zero (m/s).
pub const SINGULARITY_EPS: f64 = 1e-10;

/// Numerical singularities of the closure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClosureError {
    /// The cylinder is (numerically) at rest, so its direction is undefined.
    #[error("plume speed {speed:.3e} m/s is too small to define a direction")]
    ZeroSpeed { speed: f64 },

    /// The cylinder moves with the ambient current; α is unbounded.
    #[error("plume/ambient velocity difference {vdif:.3e} m/s is singular")]
    ZeroShear { vdif: f64 },
}

/// How shear and forced fluxes combine into the total entrainment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrainmentMode {
    /// Qe = max(Qs, Qf)
    #[default]
    Max,
    /// Qe = Qs + Qf
    Sum,
}

impl EntrainmentMode {
    /// Mode from the namelist flag: `0` is max, `1` is sum.
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Max),
            1 => Some(Self::Sum),
            _ => None,
        }
    }

    pub fn flag(self) -> i64 {
        match self {
            Self::Max => 0,
            Self::Sum => 1,
        }
    }

    /// Total flux from the shear and forced components.
    #[inline]
    pub fn combine(self, qs: f64, qf: f64) -> f64 {
        match self {
            Self::Max => qs.max(qf),
            Self::Sum => qs + qf,
        }
    }
}

/// Empirical coefficients of the shear entrainment coefficient α.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntrainmentCoefficients {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub mode: EntrainmentMode,
}

impl Default for EntrainmentCoefficients {
    /// Lee & Cheung (1990) values as used by Yapa & Zheng (1997).
    fn default() -> Self {
        Self {
            a1: 0.057,
            a2: 0.554,
            a3: 5.0,
            mode: EntrainmentMode::Max,
        }
    }
}

/// Entrainment volume fluxes of one step (m³/s).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntrainmentFluxes {
    /// Shear flux Qs (signed; negative α detrains)
    pub qs: f64,
    /// Forced flux Qf (non-negative)
    pub qf: f64,
    /// Total flux Qe
    pub qe: f64,
}

impl EntrainmentFluxes {
    /// Evaluate both closures and combine them.
    pub fn evaluate(ctx: &StepContext) -> Result<Self, ClosureError> {
        let qs = shear_entrainment(ctx)?;
        let qf = forced_entrainment(&ctx.geometry, &ctx.ambient);
        Ok(Self {
            qs,
            qf,
            qe: ctx.coefficients.mode.combine(qs, qf),
        })
    }
}
