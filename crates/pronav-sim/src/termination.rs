//! Stop conditions, checked once per tick after integration.

use pronav_core::enums::SimStatus;

use crate::kinematics::closest_approach;
use crate::state::SimulationState;

/// Classify the state after a tick.
///
/// Priority: numerical divergence, intercept, missile too slow. The intercept
/// test uses the closest approach over the whole tick so a fast pass cannot
/// step over the capture circle.
pub fn evaluate(state: &SimulationState, capture_radius: f64) -> SimStatus {
    if !state.missile.kinematics.is_finite() || !state.target.kinematics.is_finite() {
        return SimStatus::NumericalDivergence;
    }

    let miss = closest_approach(state.previous_relative_position, state.relative_position());
    if miss < capture_radius {
        return SimStatus::InterceptedMissileHit;
    }

    if state.missile.kinematics.speed() < state.target.kinematics.speed() {
        return SimStatus::MissileTooSlow;
    }

    SimStatus::Running
}
