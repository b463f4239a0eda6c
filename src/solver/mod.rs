//! Plume solver components.
//!
//! # Submodules
//!
//! - `state`: the integrated state vector ([`PlumeState`]) and its specific
//!   view ([`PlumePrimitives`])
//! - `context`: the per-step snapshot read by the closures
//!   ([`Buoyancy`] → [`PlumeGeometry`] → [`StepContext`])
//! - `records`: rows of the output time series

mod context;
mod records;
mod state;

pub use context::{Buoyancy, ClosureConstants, PlumeGeometry, StepContext};
pub use records::{PARAMETER_HEADER, ParameterRecord, STATE_HEADER, StateRecord};
pub use state::{N_STATE, PlumePrimitives, PlumeState};
