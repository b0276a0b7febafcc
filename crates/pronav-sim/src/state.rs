//! Mutable state of one simulation run.

use serde::{Deserialize, Serialize};

use pronav_core::components::{MissileEntity, TargetEntity};
use pronav_core::enums::SimStatus;
use pronav_core::types::{SimTime, Vector};

/// Everything that changes from tick to tick.
///
/// Owned by exactly one `Simulation`; never shared between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub missile: MissileEntity,
    pub target: TargetEntity,
    pub time: SimTime,
    pub status: SimStatus,
    /// Target-minus-missile position at the start of the last tick.
    pub previous_relative_position: Vector,
}

impl SimulationState {
    /// Current target-minus-missile position.
    pub fn relative_position(&self) -> Vector {
        self.target.kinematics.position - self.missile.kinematics.position
    }

    pub fn range(&self) -> f64 {
        self.relative_position().length()
    }

    pub fn elapsed_time(&self) -> f64 {
        self.time.elapsed_secs
    }
}
