//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a simulation run.
///
/// `Running` is the only non-terminal state. Every other variant is absorbing
/// until the simulation is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimStatus {
    #[default]
    Running,
    /// Missile came within the capture radius of the target.
    InterceptedMissileHit,
    /// Missile speed dropped below the target's.
    MissileTooSlow,
    /// A position or velocity component became NaN or infinite.
    NumericalDivergence,
}

impl SimStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimStatus::Running)
    }
}

/// Target maneuver policy when evasive action is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EvasionPolicy {
    /// Full-magnitude turn whose direction flips every `period` seconds.
    Weave { period: f64 },
    /// Each maneuver draws a signed acceleration in ±max and a duration
    /// in `[min_duration, max_duration]` from the seeded RNG.
    Random { min_duration: f64, max_duration: f64 },
    /// Weave that arms once the missile closes within `trigger_range`.
    RangeTriggered { trigger_range: f64, period: f64 },
}

impl Default for EvasionPolicy {
    fn default() -> Self {
        EvasionPolicy::Random {
            min_duration: crate::constants::EVASION_MIN_DURATION,
            max_duration: crate::constants::EVASION_MAX_DURATION,
        }
    }
}
