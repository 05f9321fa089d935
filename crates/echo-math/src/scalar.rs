// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix, and quaternion code.
//!
//! Everything here is a pure function over `f64`. Angle helpers come in two
//! parallel families: the plain names work in radians, the `_deg` suffixed
//! ones in degrees.

use core::f64::consts::{PI, TAU};

/// Tolerance used by every `equal` comparison in the crate.
///
/// Deliberately looser than `f64::EPSILON` so chained vector math compares
/// equal after ordinary round-off.
pub const EPSILON: f64 = 0.000001;

/// Bounds `value` to `[min, max]`.
///
/// No ordering check is made; with `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation `t * (b - a) + a`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t * (b - a) + a
}

/// Like [`lerp`] with `t` clamped to `[0, 1]`.
pub fn lerp_clamp(a: f64, b: f64, t: f64) -> f64 {
    lerp(a, b, clamp(t, 0.0, 1.0))
}

/// Maps `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Either range may be descending. The result is not clamped, and a
/// zero-width source range divides by zero.
pub fn remap(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}

/// Like [`remap`], then clamps the result to the destination range.
pub fn remap_clamp(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let mapped = remap(value, from_min, from_max, to_min, to_max);
    clamp(mapped, to_min.min(to_max), to_min.max(to_max))
}

/// Returns `true` when `a` and `b` differ by less than [`EPSILON`].
pub fn equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Moves `value` toward `target` by at most `amount` without overshooting.
pub fn approach(value: f64, target: f64, amount: f64) -> f64 {
    if value < target {
        (value + amount).min(target)
    } else {
        (value - amount).max(target)
    }
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}

fn wrap_half_turn(angle: f64, half_turn: f64) -> f64 {
    let wrapped = (angle + half_turn).rem_euclid(2.0 * half_turn) - half_turn;
    // rem_euclid lands in [-half, half); fold the lower bound onto +half.
    if wrapped <= -half_turn {
        half_turn
    } else {
        wrapped
    }
}

fn approach_half_turn(from: f64, to: f64, max_delta: f64, half_turn: f64) -> f64 {
    let delta = wrap_half_turn(to - from, half_turn);
    if delta.abs() <= max_delta {
        to
    } else {
        from + max_delta.copysign(delta)
    }
}

/// Wraps an angle in radians into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    wrap_half_turn(angle, PI)
}

/// Wraps an angle in degrees into `(-180, 180]`.
pub fn wrap_angle_deg(angle: f64) -> f64 {
    wrap_half_turn(angle, 180.0)
}

/// Shortest signed rotation (radians) taking `from` to `to`, in `(-π, π]`.
pub fn angle_difference(from: f64, to: f64) -> f64 {
    wrap_half_turn(to - from, PI)
}

/// Shortest signed rotation (degrees) taking `from` to `to`, in `(-180, 180]`.
pub fn angle_difference_deg(from: f64, to: f64) -> f64 {
    wrap_half_turn(to - from, 180.0)
}

/// Rotates `from` toward `to` (radians) the short way round by at most
/// `max_delta`.
///
/// Returns `to` itself once it is within reach, so repeated calls settle on
/// the target instead of oscillating around it. Otherwise the result is not
/// wrapped and may leave `(-π, π]`.
pub fn approach_angle(from: f64, to: f64, max_delta: f64) -> f64 {
    approach_half_turn(from, to, max_delta, PI)
}

/// Degree counterpart of [`approach_angle`].
pub fn approach_angle_deg(from: f64, to: f64, max_delta: f64) -> f64 {
    approach_half_turn(from, to, max_delta, 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.5, 0.0, 10.0), 4.5);
    }

    #[test]
    fn lerp_hits_endpoints_and_extrapolates() {
        assert_eq!(lerp(13.0, 23.0, 0.0), 13.0);
        assert_eq!(lerp(13.0, 23.0, 1.0), 23.0);
        assert_eq!(lerp(13.0, 23.0, 0.5), 18.0);
        assert_eq!(lerp(13.0, 23.0, 2.0), 33.0);
        assert_eq!(lerp_clamp(13.0, 23.0, 2.0), 23.0);
        assert_eq!(lerp_clamp(13.0, 23.0, -1.0), 13.0);
    }

    #[test]
    fn remap_handles_descending_ranges() {
        assert!(equal(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0));
        assert!(equal(remap(2.0, 10.0, 0.0, 0.0, 1.0), 0.8));
        assert!(equal(remap(-5.0, 0.0, 10.0, 100.0, 200.0), 50.0));
        assert!(equal(remap_clamp(-5.0, 0.0, 10.0, 100.0, 200.0), 100.0));
        assert!(equal(remap_clamp(15.0, 0.0, 10.0, 200.0, 100.0), 100.0));
        assert!(equal(remap_clamp(-5.0, 0.0, 10.0, 200.0, 100.0), 200.0));
    }

    #[test]
    fn equal_uses_loose_epsilon() {
        assert!(equal(0.1 + 0.2, 0.3));
        assert!(!equal(10.0, 7.0));
        assert!(equal(1.0, 1.0 + 5e-7));
        assert!(!equal(1.0, 1.0 + 2e-6));
    }

    #[test]
    fn approach_never_overshoots() {
        assert_eq!(approach(0.0, 10.0, 3.0), 3.0);
        assert_eq!(approach(9.0, 10.0, 3.0), 10.0);
        assert_eq!(approach(10.0, 0.0, 4.0), 6.0);
        assert_eq!(approach(1.0, 0.0, 4.0), 0.0);
    }

    #[test]
    fn angle_difference_takes_short_way() {
        assert!(equal(angle_difference_deg(170.0, -170.0), 20.0));
        assert!(equal(angle_difference_deg(-170.0, 170.0), -20.0));
        assert!(equal(angle_difference_deg(0.0, 180.0), 180.0));
        assert!(equal(angle_difference_deg(0.0, -180.0), 180.0));
        assert!(equal(angle_difference(0.0, 3.0 * PI / 2.0), -PI / 2.0));
        assert!(equal(wrap_angle_deg(540.0), 180.0));
        assert!(equal(wrap_angle(-PI), PI));
    }

    #[test]
    fn approach_angle_wraps_and_stops_on_target() {
        assert!(equal(approach_angle_deg(170.0, -170.0, 5.0), 175.0));
        assert_eq!(approach_angle_deg(170.0, -170.0, 30.0), -170.0);
        assert!(equal(approach_angle_deg(10.0, 350.0, 5.0), 5.0));
        assert!(equal(approach_angle(0.0, PI / 2.0, 0.25), 0.25));
    }

    #[test]
    fn degree_radian_round_trip() {
        for deg in [0.0, 45.0, 90.0, 180.0, -90.0] {
            assert!(equal(rad_to_deg(deg_to_rad(deg)), deg));
        }
    }
}
