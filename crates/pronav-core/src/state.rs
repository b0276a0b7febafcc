//! Step snapshot: the complete visible state handed to consumers each tick.
//!
//! Consumers (plots, loggers, drivers) only ever read these; they never reach
//! into the engine's state.

use serde::{Deserialize, Serialize};

use crate::enums::SimStatus;
use crate::types::Vector;

/// Result of one `step` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub tick: u64,
    /// Elapsed simulation time (s).
    pub elapsed_time: f64,
    pub missile_position: Vector,
    pub target_position: Vector,
    pub missile_velocity: Vector,
    pub target_velocity: Vector,
    /// Missile-to-target distance (m).
    pub range: f64,
    /// Closest approach reached during the last tick (m). This is what the
    /// capture test compares against, so it can sit inside the capture radius
    /// while `range` has already opened past it.
    pub miss_distance: f64,
    /// Rate of range decrease (m/s); negative while opening.
    pub closing_velocity: f64,
    /// Total missile acceleration applied during the last tick (m/s²).
    pub missile_acceleration: Vector,
    /// False once the seeker has lost the target.
    pub seeker_locked: bool,
    pub status: SimStatus,
}

impl StepResult {
    /// Missile speed (m/s).
    pub fn missile_speed(&self) -> f64 {
        self.missile_velocity.length()
    }

    /// Target speed (m/s).
    pub fn target_speed(&self) -> f64 {
        self.target_velocity.length()
    }
}
