//! # plume-rs
//!
//! Near-field model of a subsurface oil release rising through a stratified,
//! moving ocean.
//!
//! The plume is a sequence of cylinders released one per time step. Each
//! cylinder carries mass, momentum, oil mass, position and heat/salt
//! content, grows by entraining ambient water and is advanced with a
//! Runge-Kutta integrator until it reaches the surface, stops rising, leaves
//! the ambient profile or runs out of steps.
//!
//! This crate provides:
//! - Seawater and oil equations of state, mixture density
//! - Shear and forced entrainment closures
//! - The plume ODE system and time integrators (RK4, forward Euler)
//! - Depth-interpolated ambient fields from ocean profiles
//! - YAML namelist configuration
//! - The run controller with per-cylinder termination logic
//! - Output tables, run summaries and experiment directories

pub mod ambient;
pub mod analysis;
pub mod config;
pub mod entrainment;
pub mod equations;
pub mod io;
pub mod simulation;
pub mod solver;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use ambient::{AmbientError, AmbientField, AmbientProfile, AmbientSample, CurrentRotation};
pub use analysis::{CylinderMetrics, RunSummary};
pub use config::{ConfigError, PlumeConfig};
pub use entrainment::{ClosureError, EntrainmentCoefficients, EntrainmentFluxes, EntrainmentMode};
pub use equations::{EquationOfState, OilDensity, PlumeEquations};
pub use simulation::{
    CylinderRun, CylinderStatus, FinalState, PlumeSimulation, SimulationError, SimulationOutput,
    StallReason,
};
pub use solver::{ParameterRecord, PlumeState, StateRecord};
pub use time::{Integrable, Rk4, StandardIntegrator, TimeIntegrator};
pub use types::Elevation;
