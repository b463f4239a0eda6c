//! Piecewise-linear lookup of a scalar in depth.

use super::AmbientError;

/// Linear interpolator of one ambient variable over depth.
///
/// Levels are stored in ascending z. Queries outside `[z_min, z_max]` fail
/// instead of extrapolating.
#[derive(Clone, Debug)]
pub struct DepthInterpolator {
    name: &'static str,
    depth: Vec<f64>,
    values: Vec<f64>,
}

impl DepthInterpolator {
    /// Build an interpolator from a strictly monotone depth column.
    ///
    /// The depth column may be ordered surface-down or bottom-up.
    ///
    /// # Errors
    /// - `TooFewLevels` with fewer than two levels
    /// - `LengthMismatch` if `values` and `depth` differ in length
    /// - `NonFinite` for NaN/inf entries
    /// - `NonMonotonicDepth` for repeated or unordered depths
    pub fn new(name: &'static str, depth: &[f64], values: &[f64]) -> Result<Self, AmbientError> {
        if depth.len() < 2 {
            return Err(AmbientError::TooFewLevels { count: depth.len() });
        }
        if values.len() != depth.len() {
            return Err(AmbientError::LengthMismatch {
                variable: name,
                expected: depth.len(),
                found: values.len(),
            });
        }
        if let Some(index) = depth.iter().position(|z| !z.is_finite()) {
            return Err(AmbientError::NonFinite {
                variable: "depth",
                index,
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AmbientError::NonFinite {
                variable: name,
                index,
            });
        }

        let ascending = depth[1] > depth[0];
        for i in 1..depth.len() {
            let ordered = if ascending {
                depth[i] > depth[i - 1]
            } else {
                depth[i] < depth[i - 1]
            };
            if !ordered {
                return Err(AmbientError::NonMonotonicDepth { index: i });
            }
        }

        let (mut depth, mut values) = (depth.to_vec(), values.to_vec());
        if !ascending {
            depth.reverse();
            values.reverse();
        }

        Ok(Self {
            name,
            depth,
            values,
        })
    }

    /// Name of the interpolated variable.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Covered depth range (z_min, z_max).
    pub fn range(&self) -> (f64, f64) {
        (self.depth[0], self.depth[self.depth.len() - 1])
    }

    pub fn contains(&self, z: f64) -> bool {
        let (lo, hi) = self.range();
        z >= lo && z <= hi
    }

    /// Value at depth `z`.
    pub fn eval(&self, z: f64) -> Result<f64, AmbientError> {
        let (min, max) = self.range();
        if !self.contains(z) {
            return Err(AmbientError::OutOfDomain {
                variable: self.name,
                depth: z,
                min,
                max,
            });
        }

        // First level strictly above z, clamped so [i-1, i] is a valid bracket
        let i = self
            .depth
            .partition_point(|&d| d <= z)
            .clamp(1, self.depth.len() - 1);
        let (z0, z1) = (self.depth[i - 1], self.depth[i]);
        let (v0, v1) = (self.values[i - 1], self.values[i]);
        let w = (z - z0) / (z1 - z0);
        Ok(v0 + w * (v1 - v0))
    }
}
