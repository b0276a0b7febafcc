//! Simulation engine for PRONAV.
//!
//! Owns the missile/target state, runs guidance, evasion and integration at a
//! fixed timestep, and produces `StepResult` snapshots for consumers.

pub mod aero;
pub mod engine;
pub mod guidance;
pub mod integrator;
pub mod kinematics;
pub mod state;
pub mod termination;
pub mod world_setup;

pub use engine::Simulation;
pub use pronav_core as core;
