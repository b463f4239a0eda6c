//! Ambient ocean fields seen by the plume.
//!
//! A vertical profile extracted at the spill location is turned into depth
//! interpolators once per run. The plume controller samples them at the
//! current depth of a cylinder to get an [`AmbientSample`].
//!
//! Depth is the z-coordinate of the plume model: negative below the sea
//! surface. Sampling outside the profile fails with
//! [`AmbientError::OutOfDomain`]; there is no extrapolation.

mod field;
mod interpolator;
mod profile;
mod rotation;

use thiserror::Error;

pub use field::AmbientField;
pub use interpolator::DepthInterpolator;
pub use profile::AmbientProfile;
pub use rotation::CurrentRotation;

/// Errors building or sampling ambient fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmbientError {
    /// Requested depth lies outside the profile.
    #[error("{variable} requested at z = {depth:.2} m, profile covers [{min:.2}, {max:.2}] m")]
    OutOfDomain {
        variable: &'static str,
        depth: f64,
        min: f64,
        max: f64,
    },

    /// Fewer than two levels; nothing to interpolate.
    #[error("ambient profile needs at least 2 levels, got {count}")]
    TooFewLevels { count: usize },

    /// Depth column neither strictly increasing nor strictly decreasing.
    #[error("ambient profile depth is not strictly monotone at level {index}")]
    NonMonotonicDepth { index: usize },

    /// A column does not match the depth column in length.
    #[error("column {variable} has {found} values, expected {expected}")]
    LengthMismatch {
        variable: &'static str,
        expected: usize,
        found: usize,
    },

    /// NaN or infinite value in a column.
    #[error("column {variable} has a non-finite value at level {index}")]
    NonFinite { variable: &'static str, index: usize },
}

/// Ambient water properties at one depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientSample {
    /// Zonal current (m/s)
    pub ua: f64,
    /// Meridional current (m/s)
    pub va: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Salinity (PSU)
    pub salinity: f64,
    /// Density (kg/m³)
    pub density: f64,
}
