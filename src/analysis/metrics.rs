//! Summary metrics of a plume run.

use std::f64::consts::PI;

use serde::Serialize;

use crate::config::PlumeConfig;
use crate::simulation::{CylinderRun, FinalState, SimulationOutput};

/// Run-level metrics written to the run summary.
///
/// Oil volumes follow the release schedule: one cylinder of volume
/// `π·b0²·w0·dt` per step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    /// Oil volume of one cylinder (m³)
    pub oil_volume0: f64,
    /// Step budget per cylinder
    pub tmax: usize,
    /// Oil released over the step budget (m³, rounded)
    pub oil_volume: f64,
    /// Final classification of the last cylinder
    pub final_state: Option<FinalState>,
    /// Neutral buoyancy elevation of the last cylinder (m)
    pub neu_buoy: Option<f64>,
    /// Maximum height elevation of the last cylinder (m)
    pub max_height: Option<f64>,
    pub n_cylinders: usize,
    pub n_surfaced: usize,
}

impl RunSummary {
    pub fn compute(config: &PlumeConfig, output: &SimulationOutput) -> Self {
        let r = &config.release;
        let oil_volume0 = PI * r.b0 * r.b0 * r.w0 * config.numerical.dt;
        let tmax = config.tmax();
        let last = output.last();

        Self {
            oil_volume0,
            tmax,
            oil_volume: (oil_volume0 * tmax as f64).round(),
            final_state: last.map(CylinderRun::final_state),
            neu_buoy: last.and_then(|c| c.neutral_buoyancy).map(f64::from),
            max_height: last.and_then(|c| c.max_height).map(f64::from),
            n_cylinders: output.len(),
            n_surfaced: output.n_surfaced(),
        }
    }
}

/// Diagnostics of a single cylinder computed from its time series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CylinderMetrics {
    /// Vertical distance travelled since release (m)
    pub rise_height: f64,
    /// Horizontal drift of the cylinder centre (m)
    pub horizontal_drift: f64,
    /// Final mass over release mass
    pub dilution: f64,
    pub max_radius: f64,
    /// Time of the last row (min)
    pub duration_min: f64,
}

impl CylinderMetrics {
    /// `None` for a run without rows.
    pub fn compute(run: &CylinderRun) -> Option<Self> {
        let first = run.states.first()?;
        let last = run.states.last()?;
        let max_radius = run
            .states
            .iter()
            .map(|s| s.radius)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            rise_height: last.z - first.z,
            horizontal_drift: (last.x - first.x).hypot(last.y - first.y),
            dilution: last.mass / first.mass,
            max_radius,
            duration_min: last.time_min,
        })
    }
}
