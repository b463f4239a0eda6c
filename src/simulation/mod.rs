//! Plume controller and its results.
//!
//! [`PlumeSimulation`] owns the validated configuration and the ambient
//! interpolators and integrates cylinders one by one:
//!
//! ```text
//! for each cylinder k:
//!     release at (x0, y0, z0)             -> row at t = 0
//!     steps t < k: Pending                -> repeat release row
//!     steps t >= k: RK4 + refresh context -> one row per step
//!     until Surfaced | MaxHeight | OutOfDomain | StepBudget
//! ```
//!
//! # Example
//! ```
//! use plume_rs::ambient::AmbientProfile;
//! use plume_rs::config::PlumeConfig;
//! use plume_rs::simulation::{FinalState, PlumeSimulation};
//!
//! let mut config = PlumeConfig::default();
//! config.release.z0 = -3.0;
//! config.release.w0 = 1.0;
//!
//! let profile = AmbientProfile::uniform(-100.0, 10.0, 35.0, 0.0, 0.0, 1027.0);
//! let output = PlumeSimulation::new(config, &profile).unwrap().run().unwrap();
//! assert_eq!(output.cylinders[0].final_state(), FinalState::Surface);
//! ```

mod output;
mod runner;
mod status;

pub use output::{CylinderRun, SimulationOutput};
pub use runner::{ALPHA_STALL, PlumeSimulation, SimulationError, W_STALL};
pub use status::{CylinderStatus, FinalState, StallReason};
