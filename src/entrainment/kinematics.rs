//! Buoyancy and relative-velocity primitives used by the closures.

use super::{ClosureError, SINGULARITY_EPS};
use crate::ambient::AmbientSample;
use crate::solver::PlumeGeometry;

/// Reduced gravity g' = g·(ρa − ρ)/ρa₀.
///
/// Positive for a cylinder lighter than the water around it. `rhoa_0` is the
/// ambient density at the release depth and is fixed for the whole rise.
#[inline]
pub fn reduced_gravity(g: f64, rho: f64, rhoa: f64, rhoa_0: f64) -> f64 {
    g * (rhoa - rho) / rhoa_0
}

/// Component of the ambient current along the plume velocity.
///
/// `(u·ua + v·va) / |V|`: the horizontal plume velocity dotted with the
/// horizontal current, normalised by the full plume speed.
pub fn projected_velocity(
    geometry: &PlumeGeometry,
    ambient: &AmbientSample,
) -> Result<f64, ClosureError> {
    let speed = geometry.speed;
    if speed < SINGULARITY_EPS {
        return Err(ClosureError::ZeroSpeed { speed });
    }
    let [u, v, _] = geometry.velocity;
    Ok((u * ambient.ua + v * ambient.va) / speed)
}

/// Velocity difference |V| − projected current, as a magnitude.
pub fn velocity_difference(
    geometry: &PlumeGeometry,
    ambient: &AmbientSample,
) -> Result<f64, ClosureError> {
    Ok((geometry.speed - projected_velocity(geometry, ambient)?).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn geometry(velocity: [f64; 3]) -> PlumeGeometry {
        let [u, v, w] = velocity;
        let speed = (u * u + v * v + w * w).sqrt();
        let orientation = Orientation::from_velocity(u, v, w, speed);
        PlumeGeometry {
            radius: 1.0,
            radius_prev: 1.0,
            thickness: 0.5,
            step_length: speed,
            speed,
            speed_prev: speed,
            orientation,
            orientation_prev: orientation,
            velocity,
        }
    }

    fn ambient(ua: f64, va: f64) -> AmbientSample {
        AmbientSample {
            ua,
            va,
            temperature: 10.0,
            salinity: 35.0,
            density: 1027.0,
        }
    }

    #[test]
    fn test_reduced_gravity_sign() {
        assert!(reduced_gravity(9.81, 850.0, 1025.0, 1025.0) > 0.0);
        assert!(reduced_gravity(9.81, 1030.0, 1025.0, 1025.0) < 0.0);
        assert_eq!(reduced_gravity(9.81, 1025.0, 1025.0, 1025.0), 0.0);
    }

    #[test]
    fn test_projection_without_current() {
        let g = geometry([0.3, 0.4, 1.0]);
        assert_eq!(projected_velocity(&g, &ambient(0.0, 0.0)).unwrap(), 0.0);
        assert_eq!(velocity_difference(&g, &ambient(0.0, 0.0)).unwrap(), g.speed);
    }

    #[test]
    fn test_projection_aligned_current() {
        // Horizontal plume moving with the current at the same speed
        let g = geometry([0.5, 0.0, 0.0]);
        let a = ambient(0.5, 0.0);
        assert!((projected_velocity(&g, &a).unwrap() - 0.5).abs() < 1e-15);
        assert!(velocity_difference(&g, &a).unwrap() < 1e-15);
    }

    #[test]
    fn test_projection_opposing_current() {
        let g = geometry([1.0, 0.0, 0.0]);
        let a = ambient(-0.5, 0.0);
        assert!((velocity_difference(&g, &a).unwrap() - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_zero_speed_is_reported() {
        let mut g = geometry([0.0, 0.0, 1.0]);
        g.speed = 0.0;
        assert!(matches!(
            projected_velocity(&g, &ambient(0.1, 0.1)),
            Err(ClosureError::ZeroSpeed { .. })
        ));
    }
}
