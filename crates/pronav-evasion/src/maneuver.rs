//! Maneuver policies: weave, random jink, range-triggered weave.
//!
//! The command is always a pure turn: perpendicular to the target's current
//! velocity, magnitude bounded by `EvasionConfig::max_acceleration`.

use rand::Rng;

use pronav_core::components::{ManeuverState, TargetEntity};
use pronav_core::config::EvasionConfig;
use pronav_core::enums::EvasionPolicy;
use pronav_core::types::Vector;

/// Below this speed the target has no usable heading to turn from (m/s).
const MIN_TURN_SPEED: f64 = 1e-6;

/// Situation the target reacts to on this tick.
pub struct EvasionContext {
    /// Elapsed simulation time at the start of the tick (s).
    pub elapsed: f64,
    pub dt: f64,
    /// Current missile-to-target distance (m).
    pub range_to_missile: f64,
}

/// Initial maneuver state for a freshly constructed target.
pub fn initial_state<R: Rng>(config: &EvasionConfig, rng: &mut R) -> ManeuverState {
    let mut state = ManeuverState::default();
    if let EvasionPolicy::Random {
        min_duration,
        max_duration,
    } = config.policy
    {
        draw_maneuver(&mut state, config.max_acceleration, min_duration, max_duration, rng);
    }
    state
}

/// Advance the maneuver state by one tick.
///
/// Random maneuvers are redrawn once their duration has run out; a
/// range-triggered weave arms the first time the missile is inside the trigger
/// range and then stays armed.
pub fn update<R: Rng>(target: &mut TargetEntity, ctx: &EvasionContext, rng: &mut R) {
    if !target.evasive_enabled {
        return;
    }

    let max = target.evasion.max_acceleration;
    let state = &mut target.maneuver;

    match target.evasion.policy {
        EvasionPolicy::Weave { .. } => {}
        EvasionPolicy::Random {
            min_duration,
            max_duration,
        } => {
            if state.time_in_maneuver >= state.maneuver_duration {
                draw_maneuver(state, max, min_duration, max_duration, rng);
            }
            state.time_in_maneuver += ctx.dt;
        }
        EvasionPolicy::RangeTriggered { trigger_range, .. } => {
            if state.armed_at.is_none() && ctx.range_to_missile <= trigger_range {
                state.armed_at = Some(ctx.elapsed);
            }
        }
    }
}

/// Lateral acceleration the target applies at `elapsed` seconds.
///
/// Zero when evasion is disabled or the target is stationary.
pub fn target_acceleration(target: &TargetEntity, elapsed: f64) -> Vector {
    if !target.evasive_enabled {
        return Vector::ZERO;
    }

    let velocity = target.kinematics.velocity;
    let speed = velocity.length();
    if speed < MIN_TURN_SPEED {
        return Vector::ZERO;
    }

    let signed = lateral_command(&target.evasion, &target.maneuver, elapsed);
    // perp() rotates +90°, i.e. to the left of travel
    velocity.perp() / speed * signed
}

/// Signed lateral command magnitude (m/s²), clamped to the configured maximum.
pub fn lateral_command(config: &EvasionConfig, state: &ManeuverState, elapsed: f64) -> f64 {
    let max = config.max_acceleration;
    let command = match config.policy {
        EvasionPolicy::Weave { period } => weave_sign(elapsed, period) * max,
        EvasionPolicy::Random { .. } => state.lateral_acceleration,
        EvasionPolicy::RangeTriggered { period, .. } => match state.armed_at {
            Some(armed_at) => weave_sign(elapsed - armed_at, period) * max,
            None => 0.0,
        },
    };
    command.clamp(-max, max)
}

/// +1 during even half-periods, -1 during odd ones.
fn weave_sign(t: f64, period: f64) -> f64 {
    if (t / period).floor().rem_euclid(2.0) < 1.0 {
        1.0
    } else {
        -1.0
    }
}

fn draw_maneuver<R: Rng>(
    state: &mut ManeuverState,
    max_acceleration: f64,
    min_duration: f64,
    max_duration: f64,
    rng: &mut R,
) {
    state.lateral_acceleration = rng.gen_range(-max_acceleration..=max_acceleration);
    state.maneuver_duration = rng.gen_range(min_duration..=max_duration);
    state.time_in_maneuver = 0.0;
}
