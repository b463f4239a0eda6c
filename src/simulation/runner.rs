//! Plume controller.
//!
//! Releases cylinders, advances each one with the configured integrator and
//! refreshes the step context after every accepted step:
//!
//! ```text
//! densities -> reduced gravity -> α -> geometry -> Qs, Qf, Qe -> Fd²
//! ```
//!
//! Cylinders never read each other's state, so they can be integrated in
//! any order (or concurrently with the `parallel` feature) and merged by
//! index.

use std::f64::consts::PI;

use log::{debug, info, warn};
use thiserror::Error;

use super::{CylinderRun, CylinderStatus, SimulationOutput, StallReason};
use crate::ambient::{AmbientError, AmbientField, AmbientProfile, AmbientSample};
use crate::config::{ConfigError, PlumeConfig};
use crate::entrainment::{ClosureError, EntrainmentCoefficients, EntrainmentFluxes};
use crate::equations::{FrozenForcing, OilDensity, PlumeEquations};
use crate::solver::{
    Buoyancy, ClosureConstants, ParameterRecord, PlumeGeometry, PlumePrimitives, PlumeState,
    StateRecord, StepContext,
};
use crate::time::{IntegratorInfo, StandardIntegrator, TimeIntegrator};
use crate::types::Elevation;

/// Entrainment coefficient below which the cylinder detrains and stops.
pub const ALPHA_STALL: f64 = -5.0;

/// Vertical velocity (m/s) below which the cylinder stops rising.
pub const W_STALL: f64 = 1e-3;

/// Errors that abort a run before or at release.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Ambient profile unusable, or too shallow for the release depth
    #[error("ambient profile error: {0}")]
    Ambient(#[from] AmbientError),

    /// Release conditions are singular
    #[error("singular release conditions: {0}")]
    Closure(#[from] ClosureError),
}

// =============================================================================
// Release
// =============================================================================

/// Everything the controller tracks for a released cylinder.
#[derive(Clone, Copy, Debug)]
struct CylinderState {
    state: PlumeState,
    ctx: StepContext,
    fluxes: EntrainmentFluxes,
}

impl CylinderState {
    fn records(&self, time_min: f64, prim: &PlumePrimitives) -> (StateRecord, ParameterRecord) {
        let ctx = &self.ctx;
        let g = &ctx.geometry;
        let state = StateRecord {
            time_min,
            mass: prim.m,
            u: prim.u,
            v: prim.v,
            w: prim.w,
            c: prim.c,
            density: ctx.buoyancy.rho,
            ambient_density: ctx.ambient.density,
            thickness: g.thickness,
            radius: g.radius,
            x: prim.x,
            y: prim.y,
            z: prim.z,
        };
        let params = ParameterRecord {
            time_min,
            alpha: ctx.alpha,
            // geometry speed is non-zero whenever a context exists
            projected_velocity: ctx.projected_velocity().unwrap_or(0.0),
            speed: g.speed,
            ambient_density: ctx.ambient.density,
            qs: self.fluxes.qs,
            qf: self.fluxes.qf,
            qe: self.fluxes.qe,
            phi: g.orientation.phi,
            g1: ctx.buoyancy.g1,
            fd2: ctx.froude_proxy(),
        };
        (state, params)
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Near-field plume simulation over a fixed ambient profile.
///
/// # Example
///
/// ```
/// use plume_rs::ambient::AmbientProfile;
/// use plume_rs::config::PlumeConfig;
/// use plume_rs::simulation::PlumeSimulation;
///
/// let profile = AmbientProfile::uniform(-500.0, 10.0, 35.0, 0.0, 0.0, 1027.0);
/// let sim = PlumeSimulation::new(PlumeConfig::default(), &profile).unwrap();
/// let output = sim.run().unwrap();
/// assert_eq!(output.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PlumeSimulation {
    config: PlumeConfig,
    ambient: AmbientField,
    coefficients: EntrainmentCoefficients,
    constants: ClosureConstants,
    oil: OilDensity,
    integrator: StandardIntegrator,
}

impl PlumeSimulation {
    /// Validate `config` and build the ambient interpolators from `profile`.
    pub fn new(config: PlumeConfig, profile: &AmbientProfile) -> Result<Self, SimulationError> {
        let ambient = AmbientField::from_profile(profile, config.ambient.rotation())?;
        Self::with_field(config, ambient)
    }

    /// Validate `config` and use prebuilt ambient interpolators.
    pub fn with_field(config: PlumeConfig, ambient: AmbientField) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            coefficients: config.entrainment()?,
            constants: config.closure_constants(),
            oil: config.oil_density(),
            integrator: config.numerical.integrator,
            config,
            ambient,
        })
    }

    /// Override the integrator selected in the namelists.
    pub fn with_integrator(mut self, integrator: StandardIntegrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn config(&self) -> &PlumeConfig {
        &self.config
    }

    pub fn ambient(&self) -> &AmbientField {
        &self.ambient
    }

    pub fn integrator(&self) -> StandardIntegrator {
        self.integrator
    }

    /// Integrate every cylinder in release order.
    pub fn run(&self) -> Result<SimulationOutput, SimulationError> {
        let cylinders = (0..self.config.numerical.ncyl)
            .map(|index| self.run_cylinder(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SimulationOutput {
            cylinders,
            tmax: self.config.tmax(),
        })
    }

    /// Integrate every cylinder concurrently.
    ///
    /// Produces the same output as [`PlumeSimulation::run`].
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<SimulationOutput, SimulationError> {
        use rayon::prelude::*;

        let cylinders = (0..self.config.numerical.ncyl)
            .into_par_iter()
            .map(|index| self.run_cylinder(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SimulationOutput {
            cylinders,
            tmax: self.config.tmax(),
        })
    }

    /// Initial state, step context and fluxes of a freshly released cylinder.
    fn release(&self) -> Result<(CylinderState, PlumePrimitives), SimulationError> {
        let r = &self.config.release;
        let dt = self.config.numerical.dt;

        let ambient = self.ambient.sample(r.z0)?;
        let rhoa_0 = ambient.density;
        let buoyancy = Buoyancy::compute(
            &self.constants,
            &self.oil,
            &self.config.constants.water_eos,
            ambient.density,
            rhoa_0,
            r.t0,
            r.s0,
            r.c0,
        );
        let geometry = PlumeGeometry::at_release(r.velocity(), r.b0, dt)?;
        let ctx = StepContext::assemble(
            self.constants,
            self.coefficients,
            ambient,
            rhoa_0,
            buoyancy,
            geometry,
        )?;
        let fluxes = EntrainmentFluxes::evaluate(&ctx)?;

        let prim = PlumePrimitives {
            m: buoyancy.rho_oil * PI * r.b0 * r.b0 * geometry.thickness,
            u: r.u0,
            v: r.v0,
            w: r.w0,
            c: r.c0,
            x: r.x0,
            y: r.y0,
            z: r.z0,
            temperature: r.t0,
            salinity: r.s0,
        };
        let cylinder = CylinderState {
            state: PlumeState::from_primitives(&prim),
            ctx,
            fluxes,
        };
        Ok((cylinder, prim))
    }

    /// Integrate cylinder `index`, released at step `index`.
    pub fn run_cylinder(&self, index: usize) -> Result<CylinderRun, SimulationError> {
        let dt = self.config.numerical.dt;
        let tmax = self.config.tmax();
        let (mut cyl, prim0) = self.release()?;

        info!(
            "cylinder {} ({}): release at z = {}, {} steps of {} s",
            index,
            self.integrator.name(),
            Elevation::new(prim0.z),
            tmax,
            dt
        );

        let (row0, params0) = cyl.records(0.0, &prim0);
        let mut states = vec![row0];
        let mut parameters = vec![params0];

        let mut status = CylinderStatus::Pending;
        let mut neutral_buoyancy = None;
        let mut max_height = None;
        let mut final_z = prim0.z;
        let mut steps_accepted = 0;

        for t in 0..tmax {
            let time_min = (t + 1) as f64 * dt / 60.0;

            if t < index {
                states.push(row0.at_time(time_min));
                parameters.push(params0.at_time(time_min));
                continue;
            }
            status = CylinderStatus::Active;

            let equations =
                PlumeEquations::new(FrozenForcing::from_context(&cyl.ctx, cyl.fluxes.qe));
            let mut next = cyl.state;
            self.integrator
                .step(&mut next, dt, t as f64 * dt, |q, _| equations.rhs(q));

            if !next.is_physical() {
                warn!("cylinder {index}: non-physical state after step {t}, stopping");
                status = CylinderStatus::MaxHeight(StallReason::Singular);
                max_height = Some(Elevation::new(final_z));
                break;
            }

            let prim = next.primitives();
            if prim.z >= 0.0 {
                info!("cylinder {index}: surfaced at {time_min:.2} min");
                final_z = prim.z;
                status = CylinderStatus::Surfaced;
                break;
            }

            let ambient = match self.ambient.sample(prim.z) {
                Ok(ambient) => ambient,
                Err(err) => {
                    warn!("cylinder {index}: {err}");
                    final_z = prim.z;
                    status = CylinderStatus::OutOfDomain { depth: prim.z };
                    break;
                }
            };

            let refreshed = self.refresh(&cyl, &next, &prim, ambient);
            cyl = match refreshed {
                Ok(cyl) => cyl,
                Err(err) => {
                    warn!("cylinder {index}: {err} at z = {:.2} m", prim.z);
                    status = CylinderStatus::MaxHeight(StallReason::Singular);
                    max_height = Some(Elevation::new(final_z));
                    break;
                }
            };
            final_z = prim.z;
            steps_accepted += 1;

            debug!(
                "cylinder {index} t={time_min:.3} min: z={:.3} w={:.4} b={:.4} alpha={:.4} qe={:.4e}",
                prim.z, prim.w, cyl.ctx.geometry.radius, cyl.ctx.alpha, cyl.fluxes.qe
            );

            if cyl.ctx.buoyancy.g1 <= 0.0 && neutral_buoyancy.is_none() {
                info!("cylinder {index}: neutral buoyancy at z = {:.2} m, {time_min:.2} min", prim.z);
                neutral_buoyancy = Some(Elevation::new(prim.z));
            }

            let (row, params) = cyl.records(time_min, &prim);
            states.push(row);
            parameters.push(params);

            let stall = if cyl.ctx.alpha < ALPHA_STALL {
                Some(StallReason::Detrainment)
            } else if prim.w < W_STALL {
                Some(StallReason::VerticalVelocity)
            } else {
                None
            };
            if let Some(reason) = stall {
                info!("cylinder {index}: maximum height at z = {:.2} m, {time_min:.2} min", prim.z);
                status = CylinderStatus::MaxHeight(reason);
                max_height = Some(Elevation::new(prim.z));
                break;
            }
        }

        if !status.is_terminal() {
            status = CylinderStatus::StepBudget;
        }

        let run = CylinderRun {
            index,
            status,
            states,
            parameters,
            neutral_buoyancy,
            max_height,
            final_elevation: Elevation::new(final_z),
            steps_accepted,
        };
        info!(
            "cylinder {index}: {} after {} steps, final state {}",
            run.status,
            run.steps_accepted,
            run.final_state()
        );
        Ok(run)
    }

    /// Step context and fluxes for the accepted state `next`.
    fn refresh(
        &self,
        cyl: &CylinderState,
        next: &PlumeState,
        prim: &PlumePrimitives,
        ambient: AmbientSample,
    ) -> Result<CylinderState, ClosureError> {
        let rhoa_0 = cyl.ctx.rhoa_0;
        let buoyancy = Buoyancy::compute(
            &self.constants,
            &self.oil,
            &self.config.constants.water_eos,
            ambient.density,
            rhoa_0,
            prim.temperature,
            prim.salinity,
            prim.c,
        );
        let ctx = cyl
            .ctx
            .advance(ambient, buoyancy, prim, next.distance_to(&cyl.state))?;
        let fluxes = EntrainmentFluxes::evaluate(&ctx)?;
        Ok(CylinderState {
            state: *next,
            ctx,
            fluxes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NumericalConfig, ReleaseConfig};

    fn uniform_profile() -> AmbientProfile {
        AmbientProfile::uniform(-500.0, 10.0, 35.0, 0.0, 0.0, 1027.0)
    }

    fn config(z0: f64, time_max: f64) -> PlumeConfig {
        PlumeConfig::default()
            .with_numerical(NumericalConfig {
                dt: 1.0,
                time_max,
                ..Default::default()
            })
            .with_release(ReleaseConfig {
                z0,
                b0: 0.5,
                w0: 0.5,
                ..Default::default()
            })
    }

    #[test]
    fn test_release_row() {
        let sim = PlumeSimulation::new(config(-50.0, 1.0), &uniform_profile()).unwrap();
        let run = sim.run_cylinder(0).unwrap();
        let first = run.states[0];
        assert_eq!(first.time_min, 0.0);
        assert_eq!(first.z, -50.0);
        assert_eq!(first.w, 0.5);
        assert_eq!(first.radius, 0.5);
        assert_eq!(first.thickness, 0.5);
        assert_eq!(first.ambient_density, 1027.0);
        assert_eq!(run.parameters[0].speed, 0.5);
        assert_eq!(run.states.len(), run.parameters.len());
    }

    #[test]
    fn test_rows_advance_in_time() {
        let sim = PlumeSimulation::new(config(-400.0, 0.5), &uniform_profile()).unwrap();
        let run = sim.run_cylinder(0).unwrap();
        for pair in run.states.windows(2) {
            assert!(pair[1].time_min > pair[0].time_min);
            assert!(pair[1].z > pair[0].z, "buoyant oil rises");
        }
        assert_eq!(run.status, CylinderStatus::StepBudget);
        assert_eq!(run.steps_accepted, 30);
        assert_eq!(run.states.len(), 31);
    }

    #[test]
    fn test_release_below_profile_is_an_error() {
        let sim = PlumeSimulation::new(config(-600.0, 1.0), &uniform_profile()).unwrap();
        assert!(matches!(
            sim.run_cylinder(0),
            Err(SimulationError::Ambient(AmbientError::OutOfDomain { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_rejected_before_run() {
        let mut cfg = config(-50.0, 1.0);
        cfg.numerical.entrain_params.total_entrain = 3;
        assert!(matches!(
            PlumeSimulation::new(cfg, &uniform_profile()),
            Err(SimulationError::Config(ConfigError::UnknownEntrainmentMode(3)))
        ));
    }

    #[test]
    fn test_integrator_override() {
        let sim = PlumeSimulation::new(config(-50.0, 1.0), &uniform_profile())
            .unwrap()
            .with_integrator(StandardIntegrator::ForwardEuler);
        assert_eq!(sim.integrator(), StandardIntegrator::ForwardEuler);
        assert!(sim.run().is_ok());
    }
}
