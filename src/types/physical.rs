//! Physical quantity newtypes for the plume vertical coordinate.
//!
//! The plume model tracks cylinders in a right-handed frame with `z` pointing
//! up and the origin at the mean sea surface, so every submerged position has
//! a negative `z`. Ocean products usually report positive depths instead;
//! [`Elevation`] keeps the two conventions from getting mixed up.

use std::fmt;
use std::ops::Sub;

// =============================================================================
// Elevation (z-coordinate, negative below the sea surface)
// =============================================================================

/// Vertical position `z` relative to the sea surface.
///
/// # Convention
///
/// `z = 0` at the surface and `z < 0` below it. A cylinder released 100 m
/// down sits at `Elevation(-100.0)`.
///
/// # Example
///
/// ```
/// use plume_rs::types::Elevation;
///
/// let z = Elevation::new(-100.0);
/// assert!(z.is_submerged());
/// assert_eq!(z.depth(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Elevation(f64);

impl Elevation {
    /// Create a new elevation in meters.
    #[inline]
    pub const fn new(meters: f64) -> Self {
        Self(meters)
    }

    /// Build an elevation from a positive depth below the surface.
    #[inline]
    pub fn from_depth(depth: f64) -> Self {
        Self(-depth)
    }

    /// The sea surface.
    pub const SURFACE: Self = Self(0.0);

    /// Raw `z` in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// Distance below the surface (positive when submerged).
    #[inline]
    pub fn depth(self) -> f64 {
        -self.0
    }

    /// True strictly below the surface.
    #[inline]
    pub fn is_submerged(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}m", self.0)
    }
}

impl From<Elevation> for f64 {
    #[inline]
    fn from(e: Elevation) -> f64 {
        e.0
    }
}

impl From<f64> for Elevation {
    #[inline]
    fn from(z: f64) -> Self {
        Self(z)
    }
}

impl Sub for Elevation {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Self) -> f64 {
        self.0 - rhs.0
    }
}
