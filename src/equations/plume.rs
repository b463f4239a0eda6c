//! Governing equations of a plume cylinder.
//!
//! Conservation of mass, momentum, oil mass, heat and salt under entrainment
//! of ambient water, plus kinematic tracking of the cylinder centre:
//!
//! ```text
//! d(m)/dt   = ρa·Qe
//! d(m·u)/dt = ρa·Qe·ua          d(m·v)/dt = ρa·Qe·va
//! d(m·w)/dt = m·g'
//! d(m·c)/dt = ρa·Qe·ca
//! dx/dt = (m·u)/m   dy/dt = (m·v)/m   dz/dt = (m·w)/m
//! d(m·T)/dt = ρa·Qe·Ta          d(m·S)/dt = ρa·Qe·Sa
//! ```
//!
//! The entrainment flux `Qe`, the reduced gravity `g'` and the ambient fields
//! are frozen for one time step ([`FrozenForcing`]); only `m` in the buoyancy
//! term and the momentum ratios in the position equations are taken from the
//! state argument, so the intermediate Runge-Kutta stages still advect the
//! cylinder with their own velocities.

use crate::solver::{PlumeState, StepContext};

/// Forcing held constant over one integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrozenForcing {
    /// Ambient density ρa (kg/m³)
    pub rhoa: f64,
    /// Ambient zonal current (m/s)
    pub ua: f64,
    /// Ambient meridional current (m/s)
    pub va: f64,
    /// Ambient oil concentration
    pub ca: f64,
    /// Ambient temperature (°C)
    pub ta: f64,
    /// Ambient salinity (PSU)
    pub sa: f64,
    /// Reduced gravity g' (m/s²)
    pub g1: f64,
    /// Total entrainment volume flux Qe (m³/s)
    pub qe: f64,
}

impl FrozenForcing {
    /// Freeze the forcing of a refreshed step context with its total flux.
    pub fn from_context(ctx: &StepContext, qe: f64) -> Self {
        Self {
            rhoa: ctx.ambient.density,
            ua: ctx.ambient.ua,
            va: ctx.ambient.va,
            ca: ctx.constants.ca,
            ta: ctx.ambient.temperature,
            sa: ctx.ambient.salinity,
            g1: ctx.buoyancy.g1,
            qe,
        }
    }

    /// Entrained ambient mass per unit time, ρa·Qe.
    #[inline]
    pub fn entrained_mass_rate(&self) -> f64 {
        self.rhoa * self.qe
    }
}

/// Right-hand side of the plume ODE system.
#[derive(Clone, Copy, Debug)]
pub struct PlumeEquations {
    pub forcing: FrozenForcing,
}

impl PlumeEquations {
    pub fn new(forcing: FrozenForcing) -> Self {
        Self { forcing }
    }

    /// Time derivative of `state`.
    pub fn rhs(&self, state: &PlumeState) -> PlumeState {
        let f = &self.forcing;
        let q = &state.0;
        let m = q[PlumeState::MASS];
        let dm = f.entrained_mass_rate();

        PlumeState([
            dm,
            dm * f.ua,
            dm * f.va,
            m * f.g1,
            dm * f.ca,
            q[PlumeState::MOM_U] / m,
            q[PlumeState::MOM_V] / m,
            q[PlumeState::MOM_W] / m,
            dm * f.ta,
            dm * f.sa,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PlumePrimitives;

    fn forcing(qe: f64) -> FrozenForcing {
        FrozenForcing {
            rhoa: 1025.0,
            ua: 0.2,
            va: -0.1,
            ca: 0.0,
            ta: 10.0,
            sa: 35.0,
            g1: 1.5,
            qe,
        }
    }

    fn state() -> PlumeState {
        PlumeState::from_primitives(&PlumePrimitives {
            m: 100.0,
            u: 0.0,
            v: 0.3,
            w: 0.5,
            c: 1.0,
            x: 0.0,
            y: 0.0,
            z: -50.0,
            temperature: 15.0,
            salinity: 0.0,
        })
    }

    #[test]
    fn test_entrainment_terms() {
        let eq = PlumeEquations::new(forcing(0.01));
        let d = eq.rhs(&state());
        let dm = 1025.0 * 0.01;
        assert!((d[PlumeState::MASS] - dm).abs() < 1e-12);
        assert!((d[PlumeState::MOM_U] - dm * 0.2).abs() < 1e-12);
        assert!((d[PlumeState::MOM_V] + dm * 0.1).abs() < 1e-12);
        assert_eq!(d[PlumeState::OIL], 0.0);
        assert!((d[PlumeState::HEAT] - dm * 10.0).abs() < 1e-12);
        assert!((d[PlumeState::SALT] - dm * 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_buoyancy_and_kinematics_use_state() {
        let eq = PlumeEquations::new(forcing(0.0));
        let d = eq.rhs(&state());
        assert!((d[PlumeState::MOM_W] - 150.0).abs() < 1e-12);
        assert_eq!(d[PlumeState::X], 0.0);
        assert!((d[PlumeState::Y] - 0.3).abs() < 1e-12);
        assert!((d[PlumeState::Z] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_entrainment_conserves_mass() {
        let eq = PlumeEquations::new(forcing(0.0));
        let d = eq.rhs(&state());
        assert_eq!(d.mass(), 0.0);
        assert_eq!(d[PlumeState::HEAT], 0.0);
    }
}
