//! Simulation constants and tuning parameters.
//!
//! All values are SI (meters, seconds, kilograms).

use std::f64::consts::PI;

/// Standard gravity (m/s²).
pub const FREEFALL_ACC: f64 = 9.80665;

// --- Defaults for `SimulationConfig` ---

/// Default integration step (seconds).
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Default missile launch speed (m/s).
pub const DEFAULT_MISSILE_SPEED: f64 = 300.0;

/// Default target speed (m/s).
pub const DEFAULT_TARGET_SPEED: f64 = 250.0;

/// Default navigation constant (dimensionless, typically 3-5).
pub const DEFAULT_NAVIGATION_CONSTANT: f64 = 4.0;

/// Default missile-to-target separation at launch (meters).
pub const DEFAULT_SEPARATION: f64 = 5_000.0;

/// Default capture (proximity fuze) radius in meters.
pub const DEFAULT_CAPTURE_RADIUS: f64 = 15.0;

/// Default target heading: inbound, toward the missile (0 = +y, clockwise).
pub const DEFAULT_TARGET_HEADING: f64 = PI;

/// Default RNG seed for evasive maneuvers.
pub const DEFAULT_SEED: u64 = 42;

// --- Guidance ---

/// Range below which the guidance law stops commanding (meters).
pub const GUIDANCE_MIN_RANGE: f64 = 1e-3;

// --- Evasion ---

/// Default maximum target lateral acceleration (in g).
pub const EVASION_MAX_G: f64 = 9.0;

/// Default shortest random maneuver (seconds).
pub const EVASION_MIN_DURATION: f64 = 0.5;

/// Default longest random maneuver (seconds).
pub const EVASION_MAX_DURATION: f64 = 5.0;

/// Largest target lateral acceleration a config may request (in g).
pub const EVASION_ACCELERATION_LIMIT_G: f64 = 100.0;

// --- Atmosphere ---

/// Sea-level air density (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Speed of sound at sea level (m/s).
pub const SPEED_OF_SOUND: f64 = 343.0;

// --- Reference airframe (aero model) ---

/// Missile mass without fuel (kg).
pub const MISSILE_EMPTY_MASS: f64 = 230.0;

/// Motor fuel mass (kg).
pub const MISSILE_FUEL_MASS: f64 = 60.0;

/// Motor burn time (seconds).
pub const MISSILE_BURN_TIME: f64 = 6.0;

/// Motor specific impulse (seconds).
pub const MISSILE_SPECIFIC_IMPULSE: f64 = 235.0;

/// Aerodynamic reference area (m²).
pub const MISSILE_REFERENCE_AREA: f64 = 0.9;

/// Drag polar coefficient relating lift coefficient to induced drag.
pub const POLAR_CURVE_BLADE_COEFFICIENT: f64 = 1.5;

/// Zero-lift drag coefficient by Mach number. Linear between rows,
/// zero at Mach 0, held constant past the last row.
pub const ZERO_LIFT_DRAG_TABLE: [(f64, f64); 7] = [
    (0.5, 0.012),
    (0.9, 0.015),
    (1.2, 0.046),
    (1.5, 0.044),
    (2.0, 0.038),
    (3.0, 0.030),
    (4.0, 0.026),
];
