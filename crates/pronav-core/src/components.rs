//! Entity state for the two bodies in an engagement.
//!
//! Components are plain data structs. Guidance, evasion and integration
//! logic lives in the `pronav-evasion` and `pronav-sim` crates.

use serde::{Deserialize, Serialize};

use crate::config::EvasionConfig;
use crate::types::{KinematicState, Vector};

/// The guided interceptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileEntity {
    pub kinematics: KinematicState,
    /// PN gain N.
    pub navigation_constant: f64,
    /// Clamp on the guidance command (m/s²), if any.
    pub max_lateral_acceleration: Option<f64>,
    /// Remaining motor fuel (kg). Only consumed by the aero model.
    pub fuel_mass: f64,
    /// Total acceleration applied during the last tick (m/s²).
    pub last_acceleration: Vector,
    /// Flight time before guidance arms (s), if any.
    pub guidance_delay: Option<f64>,
    /// Seeker gimbal limit (rad), if any.
    pub seeker_max_off_boresight: Option<f64>,
    /// Cleared once the target leaves the seeker's field of view.
    pub seeker_locked: bool,
}

/// The (possibly maneuvering) target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetEntity {
    pub kinematics: KinematicState,
    pub evasive_enabled: bool,
    pub evasion: EvasionConfig,
    pub maneuver: ManeuverState,
}

/// Runtime state of the current evasive maneuver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManeuverState {
    /// Signed lateral acceleration of the current random maneuver (m/s²).
    /// Positive turns toward the left of the velocity vector.
    pub lateral_acceleration: f64,
    /// Time spent in the current maneuver (s).
    pub time_in_maneuver: f64,
    /// Planned length of the current maneuver (s).
    pub maneuver_duration: f64,
    /// Elapsed time at which a range-triggered weave armed.
    pub armed_at: Option<f64>,
}
