//! Pitch + derived yaw → paddle orientation
//!
//! Yaw is never input directly. It grows as the paddle drops toward its rest
//! height (face flattening toward the table) and mirrors across the table
//! centre line. Pitch comes from the wheel.
//!
//! Composition is `Rx(pitch) * Ry(yaw)` on unit quaternions. The order
//! matters once both angles are non-zero.

use glam::{Quat, Vec3};

use crate::config::{Bounds, ControlSettings};

/// Signed yaw for a paddle at `position`.
///
/// Left of centre (x < 0) yaws negative; centre and right yaw positive.
pub fn yaw_angle(position: Vec3, bounds: &Bounds, max_yaw: f32) -> f32 {
    let rest = bounds.rest_height();
    let (_, max_y) = bounds.height_band();

    let normalized = ((position.y - rest) / (max_y - rest)).clamp(0.0, 1.0);
    let magnitude = (1.0 - normalized) * max_yaw;

    if position.x < 0.0 { -magnitude } else { magnitude }
}

/// Pitch about X first, then yaw about Y
#[inline]
pub fn compose_orientation(pitch: f32, yaw: f32) -> Quat {
    (Quat::from_rotation_x(pitch) * Quat::from_rotation_y(yaw)).normalize()
}

/// Resolve the paddle orientation.
///
/// Fails closed: a non-finite position or pitch returns `last_valid`
/// unchanged instead of letting NaN reach the transform sink.
pub fn resolve_orientation(
    position: Vec3,
    pitch: f32,
    bounds: &Bounds,
    settings: &ControlSettings,
    last_valid: Quat,
) -> Quat {
    if !position.is_finite() || !pitch.is_finite() {
        log::warn!("Keeping last orientation; position {position} pitch {pitch}");
        return last_valid;
    }

    let yaw = yaw_angle(position, bounds, settings.max_yaw);
    let orientation = compose_orientation(pitch, yaw);
    if orientation.is_finite() {
        orientation
    } else {
        last_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_yaw_mirrors_across_centre() {
        let bounds = Bounds::default();
        let left = yaw_angle(Vec3::new(-1.2, 1.0, -3.0), &bounds, FRAC_PI_2);
        let right = yaw_angle(Vec3::new(1.2, 1.0, -3.0), &bounds, FRAC_PI_2);

        assert!(left < 0.0);
        assert!(right > 0.0);
        assert!((left + right).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_at_centre_is_positive() {
        let bounds = Bounds::default();
        assert!(yaw_angle(Vec3::new(0.0, 1.0, -3.0), &bounds, FRAC_PI_2) > 0.0);
        assert!(yaw_angle(Vec3::new(-0.0, 1.0, -3.0), &bounds, FRAC_PI_2) > 0.0);
    }

    #[test]
    fn test_yaw_shrinks_with_height() {
        let bounds = Bounds::default();
        let low = yaw_angle(Vec3::new(1.0, 0.71, -3.0), &bounds, FRAC_PI_2);
        let mid = yaw_angle(Vec3::new(1.0, 2.13, -3.0), &bounds, FRAC_PI_2);
        let top = yaw_angle(Vec3::new(1.0, 3.55, -3.0), &bounds, FRAC_PI_2);

        assert!(low > mid && mid > top);
        assert!(top.abs() < 1e-6);
        assert!(low < FRAC_PI_2);
    }

    #[test]
    fn test_yaw_saturates_at_rest() {
        let bounds = Bounds::default();
        let below_rest = yaw_angle(Vec3::new(1.0, 0.0, -3.0), &bounds, FRAC_PI_2);
        assert!((below_rest - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_composition_order() {
        let pitch = -FRAC_PI_2;
        let yaw = 0.6;
        let q = compose_orientation(pitch, yaw);
        let expected = Quat::from_rotation_x(pitch) * Quat::from_rotation_y(yaw);
        let reversed = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);

        assert!(q.abs_diff_eq(expected, 1e-6));
        assert!(!q.abs_diff_eq(reversed, 1e-3));
        assert!(q.is_normalized());
    }

    #[test]
    fn test_pure_pitch_at_top() {
        let bounds = Bounds::default();
        let settings = ControlSettings::default();
        let q = resolve_orientation(
            Vec3::new(0.5, 3.55, -3.0),
            -FRAC_PI_2,
            &bounds,
            &settings,
            Quat::IDENTITY,
        );
        assert!(q.abs_diff_eq(Quat::from_rotation_x(-FRAC_PI_2), 1e-5));
    }

    #[test]
    fn test_fails_closed_on_nan() {
        let bounds = Bounds::default();
        let settings = ControlSettings::default();
        let last = Quat::from_rotation_x(-1.0);

        let q = resolve_orientation(Vec3::new(f32::NAN, 1.0, -3.0), -1.0, &bounds, &settings, last);
        assert_eq!(q, last);

        let q = resolve_orientation(Vec3::new(0.0, 1.0, -3.0), f32::NAN, &bounds, &settings, last);
        assert_eq!(q, last);
    }
}
