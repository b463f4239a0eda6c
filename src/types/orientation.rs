//! Direction of travel of a plume cylinder.

use std::fmt;

/// Orientation of the cylinder velocity vector.
///
/// - `phi`: elevation angle of the velocity above the horizontal plane,
///   `asin(w / |V|)`, in `[-π/2, π/2]`
/// - `theta`: azimuth of the horizontal velocity, `atan2(v, u)`, in `(-π, π]`
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Orientation {
    pub phi: f64,
    pub theta: f64,
}

impl Orientation {
    pub const fn new(phi: f64, theta: f64) -> Self {
        Self { phi, theta }
    }

    /// Orientation of the velocity `(u, v, w)` with magnitude `speed`.
    ///
    /// `speed` must be non-zero; the ratio is clamped to `[-1, 1]` so that
    /// roundoff in `speed` never sends `asin` out of its domain.
    pub fn from_velocity(u: f64, v: f64, w: f64, speed: f64) -> Self {
        Self {
            phi: (w / speed).clamp(-1.0, 1.0).asin(),
            theta: v.atan2(u),
        }
    }

    /// Direction cosine of the cylinder axis with the zonal (x) axis.
    #[inline]
    pub fn zonal_cosine(&self) -> f64 {
        self.theta.cos() * self.phi.cos()
    }

    /// Direction cosine of the cylinder axis with the meridional (y) axis.
    #[inline]
    pub fn meridional_cosine(&self) -> f64 {
        self.theta.sin() * self.phi.cos()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "φ={:.1}° θ={:.1}°",
            self.phi.to_degrees(),
            self.theta.to_degrees()
        )
    }
}
