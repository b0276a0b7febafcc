//! Planar vector and line-of-sight helpers.
//!
//! Everything here is a pure function of two kinematic states. Signs follow
//! the right-hand rule in the x/y plane: positive angles and rates are
//! counter-clockwise.

use std::f64::consts::{PI, TAU};

use pronav_core::types::{KinematicState, Vector};

/// Relative geometry of the target as seen from the missile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// R = target position − missile position.
    pub relative_position: Vector,
    /// V = target velocity − missile velocity.
    pub relative_velocity: Vector,
    /// |R|.
    pub range: f64,
}

impl Geometry {
    pub fn between(missile: &KinematicState, target: &KinematicState) -> Self {
        let relative_position = target.position - missile.position;
        Self {
            relative_position,
            relative_velocity: target.velocity - missile.velocity,
            range: relative_position.length(),
        }
    }

    /// Rate of range decrease, Vc = −(R·V)/|R|. Zero at zero range.
    pub fn closing_velocity(&self) -> f64 {
        if self.range > 0.0 {
            -self.relative_position.dot(self.relative_velocity) / self.range
        } else {
            0.0
        }
    }

    /// LOS rotation rate λ̇ = (R × V)/|R|² in rad/s. Zero at zero range.
    pub fn los_rate(&self) -> f64 {
        let range_sq = self.range * self.range;
        if range_sq > 0.0 {
            self.relative_position.perp_dot(self.relative_velocity) / range_sq
        } else {
            0.0
        }
    }

    /// LOS unit vector, or zero when the bodies coincide.
    pub fn los_unit(&self) -> Vector {
        self.relative_position.normalize_or_zero()
    }
}

/// Signed angle that rotates `from` onto `to`, normalized to (−π, π].
///
/// Zero vectors are treated as pointing along +x.
pub fn angle_between(from: Vector, to: Vector) -> f64 {
    wrap_angle(to.y.atan2(to.x) - from.y.atan2(from.x))
}

/// Normalize an angle to (−π, π].
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Shortest distance from the origin to the segment `start..end`.
///
/// Used on relative positions: if both bodies move in straight lines over a
/// tick, this is the closest approach reached during that tick.
pub fn closest_approach(start: Vector, end: Vector) -> f64 {
    let delta = end - start;
    let len_sq = delta.length_squared();
    if len_sq == 0.0 {
        return start.length();
    }
    let t = (-start.dot(delta) / len_sq).clamp(0.0, 1.0);
    (start + delta * t).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn body(px: f64, py: f64, vx: f64, vy: f64) -> KinematicState {
        KinematicState::new(Vector::new(px, py), Vector::new(vx, vy))
    }

    #[test]
    fn test_head_on_closing_velocity() {
        let missile = body(0.0, 0.0, 0.0, 300.0);
        let target = body(0.0, 5_000.0, 0.0, -250.0);
        let geo = Geometry::between(&missile, &target);

        assert_relative_eq!(geo.range, 5_000.0);
        assert_relative_eq!(geo.closing_velocity(), 550.0);
        assert_relative_eq!(geo.los_rate(), 0.0);
    }

    #[test]
    fn test_crossing_target_rotates_los_clockwise() {
        // Target north of the missile moving east: LOS swings clockwise
        let missile = body(0.0, 0.0, 0.0, 0.0);
        let target = body(0.0, 1_000.0, 100.0, 0.0);
        let geo = Geometry::between(&missile, &target);

        assert_relative_eq!(geo.los_rate(), -0.1);
        assert_relative_eq!(geo.closing_velocity(), 0.0);
        assert_relative_eq!(geo.los_unit().y, 1.0);
    }

    #[test]
    fn test_coincident_bodies_are_finite() {
        let a = body(10.0, 10.0, 1.0, 2.0);
        let geo = Geometry::between(&a, &a);
        assert_eq!(geo.range, 0.0);
        assert_eq!(geo.closing_velocity(), 0.0);
        assert_eq!(geo.los_rate(), 0.0);
        assert_eq!(geo.los_unit(), Vector::ZERO);
    }

    #[test]
    fn test_angle_between_wraps() {
        let east = Vector::new(1.0, 0.0);
        let north = Vector::new(0.0, 1.0);
        assert_relative_eq!(angle_between(east, north), FRAC_PI_2);
        assert_relative_eq!(angle_between(north, east), -FRAC_PI_2);

        // Just across the ±π seam
        let a = Vector::new(-1.0, 0.01);
        let b = Vector::new(-1.0, -0.01);
        assert!(angle_between(a, b).abs() < 0.05);
        assert_relative_eq!(wrap_angle(-PI), PI);
    }

    #[test]
    fn test_closest_approach_inside_segment() {
        // Relative position sweeps past the origin at 5 m abeam
        let d = closest_approach(Vector::new(-20.0, 5.0), Vector::new(20.0, 5.0));
        assert_relative_eq!(d, 5.0);

        // Closest point at an endpoint
        let d = closest_approach(Vector::new(30.0, 0.0), Vector::new(40.0, 0.0));
        assert_relative_eq!(d, 30.0);

        // Degenerate segment
        let d = closest_approach(Vector::new(3.0, 4.0), Vector::new(3.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }
}
