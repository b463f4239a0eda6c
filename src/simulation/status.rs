//! Life cycle of a cylinder.

use std::fmt;

use serde::Serialize;

/// Why a rising cylinder stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StallReason {
    /// Entrainment coefficient fell below the detrainment threshold
    Detrainment,
    /// Vertical velocity fell below the rise threshold
    VerticalVelocity,
    /// Closure or state became singular (zero speed, zero shear, lost mass)
    Singular,
}

/// State of one cylinder in the controller.
///
/// ```text
/// Pending ──> Active ──┬──> Surfaced
///                      ├──> MaxHeight(reason)
///                      ├──> OutOfDomain { depth }
///                      └──> StepBudget
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CylinderStatus {
    /// Not yet released (staggered release)
    Pending,
    /// Being integrated
    Active,
    /// Reached the sea surface
    Surfaced,
    /// Stopped rising below the surface
    MaxHeight(StallReason),
    /// Left the depth range of the ambient profile
    OutOfDomain { depth: f64 },
    /// Step budget exhausted without another termination
    StepBudget,
}

impl CylinderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CylinderStatus::Pending | CylinderStatus::Active)
    }
}

impl fmt::Display for CylinderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CylinderStatus::Pending => write!(f, "pending"),
            CylinderStatus::Active => write!(f, "active"),
            CylinderStatus::Surfaced => write!(f, "surfaced"),
            CylinderStatus::MaxHeight(reason) => write!(f, "maximum height ({reason:?})"),
            CylinderStatus::OutOfDomain { depth } => write!(f, "left ambient profile at z = {depth:.2} m"),
            CylinderStatus::StepBudget => write!(f, "step budget exhausted"),
        }
    }
}

/// Final classification of a cylinder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalState {
    /// Ended deeper than [`FinalState::SURFACE_BAND`]
    Subsurface,
    Surface,
}

impl FinalState {
    /// Cylinders ending above this elevation count as surfaced (m).
    pub const SURFACE_BAND: f64 = -1.0;

    pub fn classify(z: f64) -> Self {
        if z < Self::SURFACE_BAND {
            FinalState::Subsurface
        } else {
            FinalState::Surface
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinalState::Subsurface => "subsurface",
            FinalState::Surface => "surface",
        }
    }
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
