//! Simulation configuration and its validation.
//!
//! A `SimulationConfig` is produced by the outer configuration layer (JSON file,
//! UI form) and consumed once at construction. Every field has a default, so a
//! partial JSON document is enough.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EvasionPolicy;

/// Everything needed to start a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Missile launch speed (m/s).
    pub missile_initial_speed: f64,
    /// Target speed at launch (m/s). Zero means a stationary target.
    pub target_initial_speed: f64,
    /// PN gain N.
    pub navigation_constant: f64,
    /// Missile-to-target distance at launch (m), measured along +y.
    pub initial_separation_distance: f64,
    pub evasive_enabled: bool,
    /// Fixed integration step (s).
    pub time_step: f64,
    /// Intercept is declared below this range (m).
    pub capture_radius: f64,
    /// Target heading at launch in radians (0 = North/away from the missile, clockwise).
    pub target_heading: f64,
    /// Clamp on the guidance command magnitude (m/s²). `None` = unlimited.
    pub max_lateral_acceleration: Option<f64>,
    /// Flight time before guidance starts commanding (s). `None` = guided from launch.
    pub guidance_delay: Option<f64>,
    /// Largest angle between missile velocity and LOS the seeker can hold (rad).
    /// Beyond it lock is lost for the rest of the run. `None` = never lost.
    pub seeker_max_off_boresight: Option<f64>,
    pub evasion: EvasionConfig,
    /// Thrust and drag model for the missile. `None` = speed governed purely by guidance.
    pub aero: Option<AeroConfig>,
    /// Seed for the evasion RNG.
    pub seed: u64,
}

/// Target maneuver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvasionConfig {
    /// Upper bound on target lateral acceleration (m/s²).
    pub max_acceleration: f64,
    pub policy: EvasionPolicy,
}

/// Reference airframe and atmosphere for the missile aero model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    pub empty_mass: f64,
    pub fuel_mass: f64,
    pub burn_time: f64,
    pub specific_impulse: f64,
    pub reference_area: f64,
    pub induced_drag_factor: f64,
    pub air_density: f64,
    pub speed_of_sound: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            missile_initial_speed: DEFAULT_MISSILE_SPEED,
            target_initial_speed: DEFAULT_TARGET_SPEED,
            navigation_constant: DEFAULT_NAVIGATION_CONSTANT,
            initial_separation_distance: DEFAULT_SEPARATION,
            evasive_enabled: false,
            time_step: DEFAULT_TIME_STEP,
            capture_radius: DEFAULT_CAPTURE_RADIUS,
            target_heading: DEFAULT_TARGET_HEADING,
            max_lateral_acceleration: None,
            guidance_delay: None,
            seeker_max_off_boresight: None,
            evasion: EvasionConfig::default(),
            aero: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            max_acceleration: EVASION_MAX_G * FREEFALL_ACC,
            policy: EvasionPolicy::default(),
        }
    }
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            empty_mass: MISSILE_EMPTY_MASS,
            fuel_mass: MISSILE_FUEL_MASS,
            burn_time: MISSILE_BURN_TIME,
            specific_impulse: MISSILE_SPECIFIC_IMPULSE,
            reference_area: MISSILE_REFERENCE_AREA,
            induced_drag_factor: POLAR_CURVE_BLADE_COEFFICIENT,
            air_density: AIR_DENSITY,
            speed_of_sound: SPEED_OF_SOUND,
        }
    }
}

/// A single violated configuration invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigViolation {
    /// Name of the offending field.
    pub field: &'static str,
    pub value: f64,
    pub requirement: &'static str,
}

impl std::fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} (must be {})", self.field, self.value, self.requirement)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {}", format_violations(.0))]
    InvalidConfiguration(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// The violated invariants, in field order.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            ConfigError::InvalidConfiguration(v) => v,
        }
    }
}

/// Collects violations instead of stopping at the first one.
#[derive(Default)]
struct Checker {
    violations: Vec<ConfigViolation>,
}

impl Checker {
    fn positive(&mut self, field: &'static str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.violations.push(ConfigViolation {
                field,
                value,
                requirement: "finite and > 0",
            });
        }
    }

    fn non_negative(&mut self, field: &'static str, value: f64) {
        if !(value.is_finite() && value >= 0.0) {
            self.violations.push(ConfigViolation {
                field,
                value,
                requirement: "finite and >= 0",
            });
        }
    }

    fn at_most(
        &mut self,
        field: &'static str,
        value: f64,
        limit: f64,
        requirement: &'static str,
    ) {
        if value > limit {
            self.violations.push(ConfigViolation {
                field,
                value,
                requirement,
            });
        }
    }

    fn finite(&mut self, field: &'static str, value: f64) {
        if !value.is_finite() {
            self.violations.push(ConfigViolation {
                field,
                value,
                requirement: "finite",
            });
        }
    }
}

impl SimulationConfig {
    /// Check every numeric invariant and report all failures at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut c = Checker::default();

        c.positive("missile_initial_speed", self.missile_initial_speed);
        c.non_negative("target_initial_speed", self.target_initial_speed);
        c.positive("navigation_constant", self.navigation_constant);
        c.positive("initial_separation_distance", self.initial_separation_distance);
        c.positive("time_step", self.time_step);
        c.positive("capture_radius", self.capture_radius);
        c.finite("target_heading", self.target_heading);
        if let Some(limit) = self.max_lateral_acceleration {
            c.positive("max_lateral_acceleration", limit);
        }
        if let Some(delay) = self.guidance_delay {
            c.non_negative("guidance_delay", delay);
        }
        if let Some(angle) = self.seeker_max_off_boresight {
            c.positive("seeker_max_off_boresight", angle);
            c.at_most("seeker_max_off_boresight", angle, PI, "<= pi");
        }

        if self.evasive_enabled {
            c.non_negative("evasion.max_acceleration", self.evasion.max_acceleration);
            c.at_most(
                "evasion.max_acceleration",
                self.evasion.max_acceleration,
                EVASION_ACCELERATION_LIMIT_G * FREEFALL_ACC,
                "<= 100 g",
            );
            match self.evasion.policy {
                EvasionPolicy::Weave { period } => c.positive("evasion.period", period),
                EvasionPolicy::Random {
                    min_duration,
                    max_duration,
                } => {
                    c.positive("evasion.min_duration", min_duration);
                    c.positive("evasion.max_duration", max_duration);
                    if min_duration > max_duration {
                        c.violations.push(ConfigViolation {
                            field: "evasion.max_duration",
                            value: max_duration,
                            requirement: ">= evasion.min_duration",
                        });
                    }
                }
                EvasionPolicy::RangeTriggered {
                    trigger_range,
                    period,
                } => {
                    c.positive("evasion.trigger_range", trigger_range);
                    c.positive("evasion.period", period);
                }
            }
        }

        if let Some(aero) = &self.aero {
            c.positive("aero.empty_mass", aero.empty_mass);
            c.non_negative("aero.fuel_mass", aero.fuel_mass);
            c.positive("aero.burn_time", aero.burn_time);
            c.non_negative("aero.specific_impulse", aero.specific_impulse);
            c.positive("aero.reference_area", aero.reference_area);
            c.non_negative("aero.induced_drag_factor", aero.induced_drag_factor);
            c.non_negative("aero.air_density", aero.air_density);
            c.positive("aero.speed_of_sound", aero.speed_of_sound);
        }

        if c.violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidConfiguration(c.violations))
        }
    }
}
