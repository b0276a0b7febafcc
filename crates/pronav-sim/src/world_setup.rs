//! Initial placement of missile and target from a config.
//!
//! The missile starts at the origin flying north (+y) toward the target. The
//! target starts on the +y axis at the configured separation, flying along
//! its own heading.

use rand::Rng;

use pronav_core::components::{ManeuverState, MissileEntity, TargetEntity};
use pronav_core::config::SimulationConfig;
use pronav_core::enums::SimStatus;
use pronav_core::types::{KinematicState, SimTime, Vector};

use pronav_evasion::maneuver;

use crate::state::SimulationState;

/// Build a fresh `Running` state. The config must already be validated.
pub fn build_state<R: Rng>(config: &SimulationConfig, rng: &mut R) -> SimulationState {
    let missile = spawn_missile(config);
    let target = spawn_target(config, rng);
    let previous_relative_position = target.kinematics.position - missile.kinematics.position;

    SimulationState {
        missile,
        target,
        time: SimTime::default(),
        status: SimStatus::Running,
        previous_relative_position,
    }
}

fn spawn_missile(config: &SimulationConfig) -> MissileEntity {
    MissileEntity {
        kinematics: KinematicState::with_heading(Vector::ZERO, config.missile_initial_speed, 0.0),
        navigation_constant: config.navigation_constant,
        max_lateral_acceleration: config.max_lateral_acceleration,
        fuel_mass: config.aero.map_or(0.0, |aero| aero.fuel_mass),
        last_acceleration: Vector::ZERO,
        guidance_delay: config.guidance_delay,
        seeker_max_off_boresight: config.seeker_max_off_boresight,
        seeker_locked: true,
    }
}

fn spawn_target<R: Rng>(config: &SimulationConfig, rng: &mut R) -> TargetEntity {
    let maneuver = if config.evasive_enabled {
        maneuver::initial_state(&config.evasion, rng)
    } else {
        ManeuverState::default()
    };

    TargetEntity {
        kinematics: KinematicState::with_heading(
            Vector::new(0.0, config.initial_separation_distance),
            config.target_initial_speed,
            config.target_heading,
        ),
        evasive_enabled: config.evasive_enabled,
        evasion: config.evasion,
        maneuver,
    }
}
