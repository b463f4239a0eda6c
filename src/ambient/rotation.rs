//! Horizontal rotation of ambient currents.

/// Rotation applied to `(uo, vo)` before the profile is used.
///
/// Some regional ocean products deliver currents on a grid whose axes are
/// rotated with respect to east/north.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurrentRotation {
    angle: f64,
}

impl CurrentRotation {
    /// Identity rotation.
    pub const fn none() -> Self {
        Self { angle: 0.0 }
    }

    /// Counter-clockwise rotation by `degrees`.
    pub fn degrees(degrees: f64) -> Self {
        Self {
            angle: degrees.to_radians(),
        }
    }

    /// Default rotation of a named sea area.
    ///
    /// `NORTHSEA` profiles are rotated by 90°; other areas are used as is.
    pub fn for_sea_area(area: &str) -> Self {
        if area.eq_ignore_ascii_case("NORTHSEA") {
            Self::degrees(90.0)
        } else {
            Self::none()
        }
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    /// Rotate a current vector.
    #[inline]
    pub fn apply(&self, u: f64, v: f64) -> (f64, f64) {
        if self.is_identity() {
            return (u, v);
        }
        let (sin, cos) = self.angle.sin_cos();
        (u * cos - v * sin, u * sin + v * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(CurrentRotation::none().apply(0.3, -0.2), (0.3, -0.2));
        assert!(CurrentRotation::for_sea_area("BALTIC").is_identity());
    }

    #[test]
    fn test_northsea_quarter_turn() {
        let r = CurrentRotation::for_sea_area("NORTHSEA");
        let (u, v) = r.apply(1.0, 0.0);
        assert!(u.abs() < 1e-12);
        assert!((v - 1.0).abs() < 1e-12);

        let (u, v) = r.apply(0.0, 1.0);
        assert!((u + 1.0).abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn test_rotation_preserves_speed() {
        let r = CurrentRotation::degrees(37.0);
        let (u, v) = r.apply(0.3, 0.4);
        assert!(((u * u + v * v).sqrt() - 0.5).abs() < 1e-12);
        assert!((r.angle_degrees() - 37.0).abs() < 1e-12);
    }
}
