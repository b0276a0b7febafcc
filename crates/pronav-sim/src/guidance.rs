//! True proportional navigation (TPN) for the interceptor.
//!
//! The command is proportional to closing velocity and LOS rotation rate and is
//! applied perpendicular to the line of sight. Opening geometries (Vc ≤ 0) still
//! get a command; ending such runs is the termination evaluator's job.
//!
//! Two seeker constraints can silence the command: guidance arms only after
//! the configured delay, and once the LOS drifts outside the seeker's
//! off-boresight limit the lock is gone for good.

use pronav_core::components::{MissileEntity, TargetEntity};
use pronav_core::constants::GUIDANCE_MIN_RANGE;
use pronav_core::types::Vector;

use crate::kinematics::{angle_between, Geometry};

/// How the command for this tick came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceMode {
    /// PN command computed.
    Guided,
    /// Still inside the guidance delay.
    Arming,
    /// Range fell below `GUIDANCE_MIN_RANGE`.
    ImminentIntercept,
    /// The target left the seeker's field of view on this evaluation.
    LockLost,
    /// Lock was lost on an earlier tick.
    Unguided,
}

/// Output of one guidance evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceCommand {
    /// Commanded missile acceleration (m/s²). Zero unless `mode` is `Guided`.
    pub acceleration: Vector,
    /// Closing velocity at evaluation (m/s).
    pub closing_velocity: f64,
    /// LOS rotation rate at evaluation (rad/s).
    pub los_rate: f64,
    pub range: f64,
    pub mode: GuidanceMode,
}

/// Compute the missile's commanded acceleration against the target.
///
/// a = N · Vc · λ̇, directed along the LOS unit vector rotated +90°; the sign of
/// λ̇ selects which side of the LOS the missile turns toward. The magnitude is
/// clamped to `max_lateral_acceleration` when the missile has one.
/// `flight_time` is the time since launch at the start of the tick.
pub fn missile_acceleration(
    missile: &MissileEntity,
    target: &TargetEntity,
    flight_time: f64,
) -> GuidanceCommand {
    let geo = Geometry::between(&missile.kinematics, &target.kinematics);
    let closing_velocity = geo.closing_velocity();
    let los_rate = geo.los_rate();
    let silent = |mode| GuidanceCommand {
        acceleration: Vector::ZERO,
        closing_velocity,
        los_rate,
        range: geo.range,
        mode,
    };

    if !missile.seeker_locked {
        return silent(GuidanceMode::Unguided);
    }
    if missile.guidance_delay.is_some_and(|delay| flight_time < delay) {
        return silent(GuidanceMode::Arming);
    }
    if geo.range < GUIDANCE_MIN_RANGE {
        return silent(GuidanceMode::ImminentIntercept);
    }
    if let Some(limit) = missile.seeker_max_off_boresight {
        let off_boresight = angle_between(missile.kinematics.velocity, geo.relative_position);
        if off_boresight.abs() > limit {
            return silent(GuidanceMode::LockLost);
        }
    }

    let normal = geo.relative_position.perp() / geo.range;
    let mut acceleration = normal * (missile.navigation_constant * closing_velocity * los_rate);
    if let Some(limit) = missile.max_lateral_acceleration {
        acceleration = acceleration.clamp_length_max(limit);
    }

    GuidanceCommand {
        acceleration,
        closing_velocity,
        los_rate,
        range: geo.range,
        mode: GuidanceMode::Guided,
    }
}
