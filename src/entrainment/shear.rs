//! Shear entrainment and its empirical coefficient.

use super::kinematics::{projected_velocity, velocity_difference};
use super::{ClosureError, EntrainmentCoefficients, SINGULARITY_EPS};
use crate::ambient::AmbientSample;
use crate::solver::{Buoyancy, PlumeGeometry, StepContext};

/// Empirical shear entrainment coefficient α.
///
/// ```text
/// 1/F1² = g'·2b / Δv²
/// α = (a1 + a2·sin(φ)/F1²) / (1 + a3·v_proj/Δv)
/// ```
///
/// with `Δv` the [`velocity_difference`]. Fails with
/// [`ClosureError::ZeroShear`] when `Δv` vanishes.
pub fn entrainment_coefficient(
    coefficients: &EntrainmentCoefficients,
    buoyancy: &Buoyancy,
    geometry: &PlumeGeometry,
    ambient: &AmbientSample,
) -> Result<f64, ClosureError> {
    let proj = projected_velocity(geometry, ambient)?;
    let vdif = velocity_difference(geometry, ambient)?;
    if vdif < SINGULARITY_EPS {
        return Err(ClosureError::ZeroShear { vdif });
    }

    let inv_froude_sq = buoyancy.g1 * 2.0 * geometry.radius / (vdif * vdif);
    let EntrainmentCoefficients { a1, a2, a3, .. } = *coefficients;

    Ok((a1 + a2 * geometry.orientation.phi.sin() * inv_froude_sq) / (1.0 + a3 * proj / vdif))
}

/// Shear entrainment flux Qs = 2π·b·h·α·Δv (m³/s).
pub fn shear_entrainment(ctx: &StepContext) -> Result<f64, ClosureError> {
    let vdif = velocity_difference(&ctx.geometry, &ctx.ambient)?;
    Ok(ctx.geometry.lateral_area() * ctx.alpha * vdif)
}
