//! Per-step snapshot of everything the entrainment closures read.
//!
//! The snapshot is assembled in stages, each consuming the previous one:
//!
//! ```text
//! Buoyancy (ρ_oil, ρ_w, ρ, g')  ─┐
//! AmbientSample (ua, va, Ta, Sa, ρa) ─┼─> α ─> PlumeGeometry advanced ─> EntrainmentFluxes
//! plume velocity (u, v, w) ─┘
//! ```
//!
//! After a step, α sees the refreshed buoyancy, ambient and plume velocity
//! but the radius, speed and tilt of the previous step
//! ([`StepContext::advance`]). Only the fluxes see the advanced geometry.
//! At release both coincide ([`StepContext::assemble`]).

use std::f64::consts::PI;

use crate::ambient::AmbientSample;
use crate::entrainment::{
    ClosureError, EntrainmentCoefficients, SINGULARITY_EPS, entrainment_coefficient,
    projected_velocity, reduced_gravity,
};
use crate::equations::{OilDensity, SeawaterEos, mixture_density};
use crate::solver::PlumePrimitives;
use crate::types::Orientation;

/// Constants that do not change during a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosureConstants {
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Oil concentration of entrained ambient water
    pub ca: f64,
}

/// Densities of the cylinder and its buoyancy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Buoyancy {
    pub rho_oil: f64,
    /// Density of the water fraction
    pub rho_w: f64,
    /// Mixture density
    pub rho: f64,
    /// Reduced gravity g' = g(ρa − ρ)/ρa₀
    pub g1: f64,
}

impl Buoyancy {
    /// Densities for a cylinder at temperature `t`, salinity `s` and oil
    /// fraction `c`, surrounded by water of density `rhoa`.
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        constants: &ClosureConstants,
        oil: &OilDensity,
        eos: &SeawaterEos,
        rhoa: f64,
        rhoa_0: f64,
        t: f64,
        s: f64,
        c: f64,
    ) -> Self {
        let rho_oil = oil.at(t);
        let rho_w = eos.density(t, s);
        let rho = mixture_density(rho_oil, rho_w, c);
        Self {
            rho_oil,
            rho_w,
            rho,
            g1: reduced_gravity(constants.g, rho, rhoa, rhoa_0),
        }
    }
}

/// Shape and motion of the cylinder, current and previous step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlumeGeometry {
    /// Radius b (m)
    pub radius: f64,
    /// Radius at the previous step (m)
    pub radius_prev: f64,
    /// Thickness h (m)
    pub thickness: f64,
    /// Path length travelled during the last step, ds (m)
    pub step_length: f64,
    /// Speed |V| (m/s)
    pub speed: f64,
    pub speed_prev: f64,
    pub orientation: Orientation,
    pub orientation_prev: Orientation,
    /// Plume velocity (u, v, w)
    pub velocity: [f64; 3],
}

impl PlumeGeometry {
    /// Geometry of a freshly released cylinder.
    ///
    /// The thickness is the distance the release travels vertically in one
    /// step, `h = w0·dt`.
    pub fn at_release(velocity: [f64; 3], radius: f64, dt: f64) -> Result<Self, ClosureError> {
        let [u, v, w] = velocity;
        let speed = (u * u + v * v + w * w).sqrt();
        if speed < SINGULARITY_EPS {
            return Err(ClosureError::ZeroSpeed { speed });
        }
        let orientation = Orientation::from_velocity(u, v, w, speed);
        Ok(Self {
            radius,
            radius_prev: radius,
            thickness: w * dt,
            step_length: speed * dt,
            speed,
            speed_prev: speed,
            orientation,
            orientation_prev: orientation,
            velocity,
        })
    }

    /// Geometry after a step that moved the cylinder by `step_length` to the
    /// state described by `prim`, with mixture density `rho`.
    ///
    /// The thickness stretches with the speed ratio and the radius follows
    /// from `m = ρ·π·b²·h`.
    pub fn advance(
        &self,
        prim: &PlumePrimitives,
        step_length: f64,
        rho: f64,
    ) -> Result<Self, ClosureError> {
        let speed = (prim.u * prim.u + prim.v * prim.v + prim.w * prim.w).sqrt();
        if speed < SINGULARITY_EPS {
            return Err(ClosureError::ZeroSpeed { speed });
        }
        let thickness = (speed / self.speed * self.thickness).abs();
        let radius = (prim.m / (rho * PI * thickness)).sqrt();

        Ok(Self {
            radius,
            radius_prev: self.radius,
            thickness,
            step_length,
            speed,
            speed_prev: self.speed,
            orientation: Orientation::from_velocity(prim.u, prim.v, prim.w, speed),
            orientation_prev: self.orientation,
            velocity: [prim.u, prim.v, prim.w],
        })
    }

    /// Same shape, moving with `velocity`.
    pub fn with_velocity(&self, velocity: [f64; 3]) -> Self {
        Self { velocity, ..*self }
    }

    /// Lateral surface of the cylinder, 2π·b·h.
    #[inline]
    pub fn lateral_area(&self) -> f64 {
        2.0 * PI * self.radius * self.thickness
    }
}

/// Immutable snapshot read by the entrainment closures for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepContext {
    pub constants: ClosureConstants,
    pub coefficients: EntrainmentCoefficients,
    pub ambient: AmbientSample,
    /// Ambient density at the release depth, ρa₀
    pub rhoa_0: f64,
    pub buoyancy: Buoyancy,
    pub geometry: PlumeGeometry,
    /// Shear entrainment coefficient α
    pub alpha: f64,
}

impl StepContext {
    /// Context of a freshly released cylinder.
    pub fn assemble(
        constants: ClosureConstants,
        coefficients: EntrainmentCoefficients,
        ambient: AmbientSample,
        rhoa_0: f64,
        buoyancy: Buoyancy,
        geometry: PlumeGeometry,
    ) -> Result<Self, ClosureError> {
        let alpha = entrainment_coefficient(&coefficients, &buoyancy, &geometry, &ambient)?;
        Ok(Self {
            constants,
            coefficients,
            ambient,
            rhoa_0,
            buoyancy,
            geometry,
            alpha,
        })
    }

    /// Context after an accepted step that moved the cylinder by
    /// `step_length` to `prim`.
    ///
    /// α is taken before the geometry is advanced: new `g'`, ambient and
    /// `(u, v)` with the previous `b`, `|V|` and `φ`.
    pub fn advance(
        &self,
        ambient: AmbientSample,
        buoyancy: Buoyancy,
        prim: &PlumePrimitives,
        step_length: f64,
    ) -> Result<Self, ClosureError> {
        let lagged = self.geometry.with_velocity([prim.u, prim.v, prim.w]);
        let alpha = entrainment_coefficient(&self.coefficients, &buoyancy, &lagged, &ambient)?;
        let geometry = self.geometry.advance(prim, step_length, buoyancy.rho)?;
        Ok(Self {
            ambient,
            buoyancy,
            geometry,
            alpha,
            ..*self
        })
    }

    /// Projection of the plume velocity on the ambient current.
    pub fn projected_velocity(&self) -> Result<f64, ClosureError> {
        projected_velocity(&self.geometry, &self.ambient)
    }

    /// Densimetric Froude proxy Fd² = |V|² / (2·g'·b).
    ///
    /// Infinite for a neutrally buoyant cylinder.
    pub fn froude_proxy(&self) -> f64 {
        let g = &self.geometry;
        g.speed * g.speed / (2.0 * self.buoyancy.g1 * g.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PlumeState;

    #[test]
    fn test_release_geometry() {
        let g = PlumeGeometry::at_release([0.0, 0.0, 0.5], 1.0, 2.0).unwrap();
        assert_eq!(g.thickness, 1.0);
        assert_eq!(g.step_length, 1.0);
        assert_eq!(g.speed, 0.5);
        assert_eq!(g.radius_prev, g.radius);
        assert_eq!(g.orientation, g.orientation_prev);
    }

    #[test]
    fn test_release_at_rest_is_singular() {
        let err = PlumeGeometry::at_release([0.0, 0.0, 0.0], 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ClosureError::ZeroSpeed { .. }));
    }

    #[test]
    fn test_advance_inverts_mass_for_radius() {
        let g0 = PlumeGeometry::at_release([0.0, 0.0, 1.0], 1.0, 1.0).unwrap();
        let rho = 900.0;
        let prim = PlumePrimitives {
            m: rho * PI * 4.0 * 2.0,
            u: 0.0,
            v: 0.0,
            w: 2.0,
            c: 1.0,
            x: 0.0,
            y: 0.0,
            z: -10.0,
            temperature: 10.0,
            salinity: 35.0,
        };
        let g1 = g0.advance(&prim, 1.5, rho).unwrap();
        // speed doubled -> thickness doubled
        assert!((g1.thickness - 2.0).abs() < 1e-12);
        assert!((g1.radius - 2.0).abs() < 1e-12);
        assert_eq!(g1.radius_prev, 1.0);
        assert_eq!(g1.speed_prev, 1.0);
        assert_eq!(g1.step_length, 1.5);
    }

    #[test]
    fn test_advance_takes_alpha_before_geometry() {
        let constants = ClosureConstants { g: 9.81, ca: 0.0 };
        let coeffs = EntrainmentCoefficients::default();
        let ambient = AmbientSample {
            ua: 0.0,
            va: 0.0,
            temperature: 10.0,
            salinity: 35.0,
            density: 1027.0,
        };
        let release = Buoyancy {
            rho_oil: 843.0,
            rho_w: 1027.0,
            rho: 843.0,
            g1: 1.5,
        };
        let geometry = PlumeGeometry::at_release([0.0, 0.0, 0.5], 0.5, 1.0).unwrap();
        let ctx = StepContext::assemble(constants, coeffs, ambient, 1027.0, release, geometry)
            .unwrap();

        let rho = 1000.0;
        let prim = PlumePrimitives {
            m: rho * PI * 4.0 * 1.0,
            u: 0.0,
            v: 0.0,
            w: 1.0,
            c: 0.2,
            x: 0.0,
            y: 0.0,
            z: -49.0,
            temperature: 10.0,
            salinity: 35.0,
        };
        let buoyancy = Buoyancy {
            rho,
            g1: 0.25,
            ..release
        };
        let next = ctx.advance(ambient, buoyancy, &prim, 0.75).unwrap();

        // previous b = 0.5 and |V| = 0.5, new g' = 0.25
        let expected = coeffs.a1 + coeffs.a2 * 0.25 * 2.0 * 0.5 / 0.25;
        assert!((next.alpha - expected).abs() < 1e-12);
        // fluxes see the advanced shape: h = 1, b = 2
        assert!((next.geometry.thickness - 1.0).abs() < 1e-12);
        assert!((next.geometry.radius - 2.0).abs() < 1e-12);
        assert_eq!(next.rhoa_0, 1027.0);
    }

    #[test]
    fn test_buoyancy_of_pure_oil() {
        let constants = ClosureConstants { g: 9.81, ca: 0.0 };
        let oil = OilDensity::new(843.0, 15.5, 7.0e-4);
        let b = Buoyancy::compute(
            &constants,
            &oil,
            &SeawaterEos::Unesco,
            1025.0,
            1025.0,
            15.5,
            35.0,
            1.0,
        );
        assert!((b.rho - 843.0).abs() < 1e-9);
        assert!((b.g1 - 9.81 * 182.0 / 1025.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_state_has_no_mass() {
        assert!(!PlumeState::zero().is_physical());
    }
}
