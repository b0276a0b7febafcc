//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Planar vector in simulation space (meters, m/s or m/s²).
/// x = East, y = North.
pub type Vector = DVec2;

/// Position and velocity of a single moving body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vector,
    pub velocity: Vector,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds, accumulated one step at a time.
    pub elapsed_secs: f64,
}

impl KinematicState {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    /// Body placed at `position` moving along `heading` (0 = North, clockwise).
    pub fn with_heading(position: Vector, speed: f64, heading: f64) -> Self {
        let (sin, cos) = heading.sin_cos();
        Self {
            position,
            velocity: Vector::new(speed * sin, speed * cos),
        }
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Range to another body in meters.
    pub fn range_to(&self, other: &KinematicState) -> f64 {
        self.position.distance(other.position)
    }

    /// True when every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
