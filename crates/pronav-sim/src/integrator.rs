//! Semi-implicit Euler integration of both bodies.

use pronav_core::types::{KinematicState, Vector};

use crate::state::SimulationState;

/// Accelerations to apply over one tick (m/s²).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accelerations {
    pub missile: Vector,
    pub target: Vector,
}

/// Advance both bodies and the clock by `dt`.
///
/// Velocity is updated first and the new velocity moves the position.
/// The clock always advances, whatever the bodies do.
pub fn advance(state: &mut SimulationState, accelerations: Accelerations, dt: f64) {
    state.previous_relative_position = state.relative_position();

    step_body(&mut state.missile.kinematics, accelerations.missile, dt);
    step_body(&mut state.target.kinematics, accelerations.target, dt);
    state.missile.last_acceleration = accelerations.missile;

    state.time.advance(dt);
}

/// One symplectic Euler step for a single body.
pub fn step_body(body: &mut KinematicState, acceleration: Vector, dt: f64) {
    body.velocity += acceleration * dt;
    body.position += body.velocity * dt;
}
