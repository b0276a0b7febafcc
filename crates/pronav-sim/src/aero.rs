//! Missile propulsion and drag.
//!
//! Thrust: F = Isp · g0 · ṁ while fuel remains.
//! Drag:   D = q · S · (Cx0(M) + k · Cy²), q = ½ρv², Cy = m · a_lat / (q · S).
//! The result is an axial acceleration along the missile's velocity.

use pronav_core::components::MissileEntity;
use pronav_core::config::AeroConfig;
use pronav_core::constants::{FREEFALL_ACC, ZERO_LIFT_DRAG_TABLE};

/// Below this dynamic pressure force (N) lift and drag are ignored.
const MIN_PRESSURE_FORCE: f64 = 1e-9;

/// Fraction of current speed that drag may remove in a single tick.
const MAX_DRAG_FRACTION: f64 = 0.99;

/// Total missile mass (kg).
pub fn mass(missile: &MissileEntity, aero: &AeroConfig) -> f64 {
    aero.empty_mass + missile.fuel_mass.max(0.0)
}

/// Fuel flow while the motor burns (kg/s).
pub fn fuel_flow(aero: &AeroConfig) -> f64 {
    aero.fuel_mass / aero.burn_time
}

/// Motor thrust (N). Zero after burnout.
pub fn thrust(missile: &MissileEntity, aero: &AeroConfig) -> f64 {
    if missile.fuel_mass > 0.0 {
        aero.specific_impulse * FREEFALL_ACC * fuel_flow(aero)
    } else {
        0.0
    }
}

/// Zero-lift drag coefficient at `mach`, interpolated from the reference table.
pub fn zero_lift_drag_coefficient(mach: f64) -> f64 {
    if mach <= 0.0 {
        return 0.0;
    }

    let mut prev = (0.0, 0.0);
    for &(table_mach, cx) in ZERO_LIFT_DRAG_TABLE.iter() {
        if mach < table_mach {
            return lerp(mach, prev, (table_mach, cx));
        }
        prev = (table_mach, cx);
    }
    prev.1
}

/// Drag force (N) for the given lateral load (m/s²).
pub fn drag(missile: &MissileEntity, aero: &AeroConfig, lateral_acceleration: f64) -> f64 {
    let speed = missile.kinematics.speed();
    let pressure_force = 0.5 * aero.air_density * speed * speed * aero.reference_area;
    if pressure_force < MIN_PRESSURE_FORCE {
        return 0.0;
    }

    let mach = speed / aero.speed_of_sound;
    let lift_coefficient = mass(missile, aero) * lateral_acceleration.abs() / pressure_force;
    let induced = aero.induced_drag_factor * lift_coefficient * lift_coefficient;
    pressure_force * (zero_lift_drag_coefficient(mach) + induced)
}

/// Net axial acceleration (m/s², positive = speeding up) for this tick.
///
/// Drag deceleration is capped so a single tick cannot reverse the velocity.
pub fn axial_acceleration(
    missile: &MissileEntity,
    aero: &AeroConfig,
    lateral_acceleration: f64,
    dt: f64,
) -> f64 {
    let m = mass(missile, aero);
    let speed = missile.kinematics.speed();
    let drag_decel = (drag(missile, aero, lateral_acceleration) / m)
        .min(MAX_DRAG_FRACTION * speed / dt);
    thrust(missile, aero) / m - drag_decel
}

/// Consume fuel for one tick.
pub fn burn(missile: &mut MissileEntity, aero: &AeroConfig, dt: f64) {
    let used = (fuel_flow(aero) * dt).min(missile.fuel_mass.max(0.0));
    missile.fuel_mass -= used;
}

fn lerp(x: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pronav_core::types::{KinematicState, Vector};

    fn missile(speed: f64, fuel: f64) -> MissileEntity {
        MissileEntity {
            kinematics: KinematicState::new(Vector::ZERO, Vector::new(0.0, speed)),
            navigation_constant: 4.0,
            max_lateral_acceleration: None,
            fuel_mass: fuel,
            last_acceleration: Vector::ZERO,
            guidance_delay: None,
            seeker_max_off_boresight: None,
            seeker_locked: true,
        }
    }

    #[test]
    fn test_drag_table_rows_and_interpolation() {
        assert_eq!(zero_lift_drag_coefficient(0.0), 0.0);
        assert_relative_eq!(zero_lift_drag_coefficient(0.25), 0.006);
        assert_relative_eq!(zero_lift_drag_coefficient(0.9), 0.015);
        assert_relative_eq!(zero_lift_drag_coefficient(1.05), 0.0305);
        assert_relative_eq!(zero_lift_drag_coefficient(4.0), 0.026);
        assert_relative_eq!(zero_lift_drag_coefficient(7.0), 0.026);
    }

    #[test]
    fn test_thrust_stops_at_burnout() {
        let aero = AeroConfig::default();
        let mut m = missile(300.0, aero.fuel_mass);
        assert!(thrust(&m, &aero) > 0.0);

        let dt = 0.01;
        let ticks = (aero.burn_time / dt).ceil() as usize + 1;
        for _ in 0..ticks {
            burn(&mut m, &aero, dt);
        }
        assert_eq!(m.fuel_mass, 0.0);
        assert_eq!(thrust(&m, &aero), 0.0);
        assert_relative_eq!(mass(&m, &aero), aero.empty_mass);
    }

    #[test]
    fn test_boost_accelerates_and_coast_decelerates() {
        let aero = AeroConfig::default();
        assert!(axial_acceleration(&missile(300.0, aero.fuel_mass), &aero, 0.0, 0.01) > 0.0);
        assert!(axial_acceleration(&missile(300.0, 0.0), &aero, 0.0, 0.01) < 0.0);
    }

    #[test]
    fn test_turning_adds_induced_drag() {
        let aero = AeroConfig::default();
        let m = missile(600.0, 0.0);
        let straight = drag(&m, &aero, 0.0);
        let turning = drag(&m, &aero, 20.0 * FREEFALL_ACC);
        assert!(turning > straight);
    }

    #[test]
    fn test_stationary_missile_has_no_drag() {
        let aero = AeroConfig::default();
        assert_eq!(drag(&missile(0.0, 0.0), &aero, 50.0), 0.0);
    }

    #[test]
    fn test_drag_cannot_reverse_velocity() {
        let aero = AeroConfig::default();
        let m = missile(5.0, 0.0);
        let dt = 0.01;
        let a = axial_acceleration(&m, &aero, 300.0 * FREEFALL_ACC, dt);
        assert!(5.0 + a * dt > 0.0);
    }
}
