//! Post-processing of plume runs.
//!
//! - [`RunSummary`]: run-level metrics reported in `summary.json` (released
//!   oil volume, step budget, final classification, neutral buoyancy and
//!   maximum height of the last cylinder)
//! - [`CylinderMetrics`]: rise, drift and dilution of one cylinder

mod metrics;

pub use metrics::{CylinderMetrics, RunSummary};
