//! Simulation engine for one missile and one target at a fixed timestep.
//!
//! `Simulation` owns its config, state and RNG, and exposes a synchronous
//! `step`. It never blocks or performs I/O; cadence belongs to whoever drives
//! it. Same config = same trajectory, tick for tick.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use pronav_core::config::{ConfigError, SimulationConfig};
use pronav_core::enums::SimStatus;
use pronav_core::state::StepResult;

use pronav_evasion::maneuver::{self, EvasionContext};

use crate::aero;
use crate::guidance::{self, GuidanceMode};
use crate::integrator::{self, Accelerations};
use crate::kinematics::{closest_approach, Geometry};
use crate::state::SimulationState;
use crate::termination;
use crate::world_setup;

/// A single engagement run.
pub struct Simulation {
    config: SimulationConfig,
    state: SimulationState,
    rng: ChaCha8Rng,
    last: StepResult,
}

impl Simulation {
    /// Validate `config` and build a fresh `Running` simulation.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = world_setup::build_state(&config, &mut rng);
        let last = snapshot(&state);

        debug!(
            missile_speed = config.missile_initial_speed,
            target_speed = config.target_initial_speed,
            navigation_constant = config.navigation_constant,
            separation = config.initial_separation_distance,
            evasive = config.evasive_enabled,
            "simulation created"
        );

        Ok(Self {
            config,
            state,
            rng,
            last,
        })
    }

    /// Advance one tick and return the resulting snapshot.
    ///
    /// Once the status is terminal this is a no-op that returns the same
    /// snapshot again.
    pub fn step(&mut self) -> StepResult {
        if self.state.status.is_terminal() {
            return self.last;
        }

        let dt = self.config.time_step;
        let elapsed = self.state.time.elapsed_secs;

        // 1. Target maneuver
        let ctx = EvasionContext {
            elapsed,
            dt,
            range_to_missile: self.state.range(),
        };
        maneuver::update(&mut self.state.target, &ctx, &mut self.rng);
        let target_accel = maneuver::target_acceleration(&self.state.target, elapsed);

        // 2. Guidance
        let command =
            guidance::missile_acceleration(&self.state.missile, &self.state.target, elapsed);
        if command.mode == GuidanceMode::LockLost {
            self.state.missile.seeker_locked = false;
            info!(
                tick = self.state.time.tick,
                elapsed,
                range = command.range,
                "seeker lost lock"
            );
        }
        let mut missile_accel = command.acceleration;

        // 3. Thrust and drag along the velocity vector
        if let Some(aero_config) = &self.config.aero {
            let heading = self.state.missile.kinematics.velocity.normalize_or_zero();
            let axial = aero::axial_acceleration(
                &self.state.missile,
                aero_config,
                command.acceleration.length(),
                dt,
            );
            missile_accel += heading * axial;
            aero::burn(&mut self.state.missile, aero_config, dt);
        }

        // 4. Integrate
        integrator::advance(
            &mut self.state,
            Accelerations {
                missile: missile_accel,
                target: target_accel,
            },
            dt,
        );

        // 5. Stop conditions
        self.state.status = termination::evaluate(&self.state, self.config.capture_radius);
        self.last = snapshot(&self.state);

        match self.state.status {
            SimStatus::Running => {}
            SimStatus::NumericalDivergence => warn!(
                tick = self.last.tick,
                elapsed = self.last.elapsed_time,
                "simulation diverged numerically"
            ),
            status => info!(
                ?status,
                tick = self.last.tick,
                elapsed = self.last.elapsed_time,
                range = self.last.range,
                "simulation stopped"
            ),
        }

        self.last
    }

    /// Step until the run stops or `max_ticks` ticks have been taken.
    pub fn run(&mut self, max_ticks: u64) -> StepResult {
        for _ in 0..max_ticks {
            if self.step().status.is_terminal() {
                break;
            }
        }
        self.last
    }

    /// Discard the current run and start over from the retained config.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.state = world_setup::build_state(&self.config, &mut self.rng);
        self.last = snapshot(&self.state);
        debug!("simulation reset");
    }

    /// The most recent snapshot (the initial one before the first step).
    pub fn snapshot(&self) -> StepResult {
        self.last
    }

    pub fn status(&self) -> SimStatus {
        self.state.status
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Build the consumer-facing snapshot of a state.
fn snapshot(state: &SimulationState) -> StepResult {
    let geo = Geometry::between(&state.missile.kinematics, &state.target.kinematics);
    StepResult {
        tick: state.time.tick,
        elapsed_time: state.time.elapsed_secs,
        missile_position: state.missile.kinematics.position,
        target_position: state.target.kinematics.position,
        missile_velocity: state.missile.kinematics.velocity,
        target_velocity: state.target.kinematics.velocity,
        range: geo.range,
        miss_distance: closest_approach(state.previous_relative_position, geo.relative_position),
        closing_velocity: geo.closing_velocity(),
        missile_acceleration: state.missile.last_acceleration,
        seeker_locked: state.missile.seeker_locked,
        status: state.status,
    }
}
