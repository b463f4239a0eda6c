//! Results of a plume run.

use super::{CylinderStatus, FinalState};
use crate::solver::{ParameterRecord, StateRecord};
use crate::types::Elevation;

/// Outcome and time series of one cylinder.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderRun {
    /// Cylinder index; cylinder k is released at step k
    pub index: usize,
    pub status: CylinderStatus,
    /// State series, one row per step plus the release row
    pub states: Vec<StateRecord>,
    /// Diagnostic series aligned with `states`
    pub parameters: Vec<ParameterRecord>,
    /// First elevation with non-positive reduced gravity
    pub neutral_buoyancy: Option<Elevation>,
    /// Elevation where the cylinder stopped rising
    pub max_height: Option<Elevation>,
    /// Elevation of the cylinder when integration ended
    pub final_elevation: Elevation,
    /// Steps integrated after release
    pub steps_accepted: usize,
}

impl CylinderRun {
    pub fn final_state(&self) -> FinalState {
        FinalState::classify(self.final_elevation.meters())
    }

    /// Last appended state row.
    pub fn last_state(&self) -> Option<&StateRecord> {
        self.states.last()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Results of every cylinder of a run, in release order.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    pub cylinders: Vec<CylinderRun>,
    /// Step budget of each cylinder
    pub tmax: usize,
}

impl SimulationOutput {
    /// The last released cylinder; the run summary reports on it.
    pub fn last(&self) -> Option<&CylinderRun> {
        self.cylinders.last()
    }

    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    /// Number of cylinders that ended at the surface.
    pub fn n_surfaced(&self) -> usize {
        self.cylinders
            .iter()
            .filter(|c| c.final_state() == FinalState::Surface)
            .count()
    }
}
