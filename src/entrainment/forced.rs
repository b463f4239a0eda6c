//! Forced entrainment from the ambient current.

use std::f64::consts::PI;

use crate::ambient::AmbientSample;
use crate::solver::PlumeGeometry;

/// Forced entrainment flux Qf (m³/s).
///
/// Sum of the zonal and meridional contributions. Each one is the current
/// component times the area swept by the windward face during the step,
/// which accounts for three deformations of the cylinder:
///
/// 1. stretching `π·b·(b − b_prev)·|cos|`
/// 2. bending `2·b·ds·sqrt(1 − cos²)`, the chord swept along the path
/// 3. enlargement `π·b²/2·|cos − cos_prev|`
///
/// where `cos` is the direction cosine of the cylinder axis with the
/// current component.
pub fn forced_entrainment(geometry: &PlumeGeometry, ambient: &AmbientSample) -> f64 {
    let zonal = directional_flux(
        geometry,
        ambient.ua,
        geometry.orientation.zonal_cosine(),
        geometry.orientation_prev.zonal_cosine(),
    );
    let meridional = directional_flux(
        geometry,
        ambient.va,
        geometry.orientation.meridional_cosine(),
        geometry.orientation_prev.meridional_cosine(),
    );
    zonal.abs() + meridional.abs()
}

fn directional_flux(geometry: &PlumeGeometry, current: f64, cos: f64, cos_prev: f64) -> f64 {
    let b = geometry.radius;
    let stretching = PI * b * (b - geometry.radius_prev) * cos.abs();
    // clamp: roundoff can push cos² marginally above one
    let bending = 2.0 * b * geometry.step_length * (1.0 - cos * cos).max(0.0).sqrt();
    let enlargement = PI * b * b / 2.0 * (cos - cos_prev).abs();
    current.abs() * (stretching + bending + enlargement)
}
