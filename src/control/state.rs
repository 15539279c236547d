//! Paddle control state
//!
//! One `ControlState` per controllable paddle. The handlers below are the
//! only mutators; they take bounds and settings explicitly so the state can
//! be driven without a live scene.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::input::{PointerSample, normalize_wheel};
use super::mode::ControlMode;
use super::orientation::resolve_orientation;
use super::position::resolve_position;
use crate::config::{Bounds, ControlSettings};
use crate::error::ConfigError;

/// Resolved paddle pose, ready for a transform sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleTransform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl PaddleTransform {
    /// Model matrix (translation · rotation · uniform scale)
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(scale), self.orientation, self.position)
    }
}

/// Complete control state for one paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Current position, always inside the bounds
    pub position: Vec3,
    /// Hover or Drag (with anchor)
    pub mode: ControlMode,
    /// Accumulated wheel pitch, clamped to the settings band
    pub pitch: f32,
    /// Last composed orientation
    pub orientation: Quat,
}

impl ControlState {
    /// Neutral pose: spawn position (clamped into the bounds), initial pitch, Hover.
    ///
    /// The settings are validated here; the handlers below assume the same
    /// settings are passed back in.
    pub fn new(bounds: &Bounds, settings: &ControlSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let position = bounds.clamp(settings.spawn);
        let pitch = settings.initial_pitch;

        let mut state = Self {
            position,
            mode: ControlMode::Hover,
            pitch,
            orientation: Quat::IDENTITY,
        };
        state.orientation = resolve_orientation(position, pitch, bounds, settings, Quat::IDENTITY);
        Ok(state)
    }

    /// Pointer moved: resolve position, then orientation
    pub fn on_pointer_move(&mut self, sample: PointerSample, bounds: &Bounds, settings: &ControlSettings) {
        self.position = resolve_position(sample, &mut self.mode, self.position, bounds);
        self.reorient(bounds, settings);
    }

    /// Pointer pressed: enter Drag anchored at the sample's Y
    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        self.mode.press(sample.y);
    }

    /// Pointer released: back to Hover
    pub fn on_pointer_up(&mut self) {
        self.mode.release();
    }

    /// Wheel turned: adjust pitch within its band
    pub fn on_wheel(&mut self, raw_delta: f32, bounds: &Bounds, settings: &ControlSettings) {
        let delta = normalize_wheel(raw_delta, settings.wheel_sensitivity);
        if !delta.is_finite() {
            log::warn!("Absorbed non-finite wheel delta: {raw_delta}");
            return;
        }
        self.pitch = (self.pitch - delta).clamp(settings.min_pitch, settings.max_pitch);
        self.reorient(bounds, settings);
    }

    /// Current pose. Read-only.
    pub fn transform(&self) -> PaddleTransform {
        PaddleTransform {
            position: self.position,
            orientation: self.orientation,
        }
    }

    fn reorient(&mut self, bounds: &Bounds, settings: &ControlSettings) {
        self.orientation =
            resolve_orientation(self.position, self.pitch, bounds, settings, self.orientation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::orientation::yaw_angle;
    use proptest::prelude::*;

    fn setup() -> (Bounds, ControlSettings) {
        (Bounds::default(), ControlSettings::default())
    }

    #[test]
    fn test_neutral_pose() {
        let (bounds, settings) = setup();
        let state = ControlState::new(&bounds, &settings).unwrap();

        assert_eq!(state.position, Vec3::new(0.0, 2.1, -2.85));
        assert_eq!(state.mode, ControlMode::Hover);
        assert!((state.pitch + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(state.orientation.is_normalized());
    }

    #[test]
    fn test_spawn_clamped_into_bounds() {
        let bounds = Bounds::default();
        let settings = ControlSettings {
            spawn: Vec3::new(9.0, 0.0, 4.0),
            ..Default::default()
        };
        let state = ControlState::new(&bounds, &settings).unwrap();
        assert!(bounds.contains(state.position));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bounds = Bounds::default();
        let inverted = ControlSettings {
            min_pitch: 0.0,
            max_pitch: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            ControlState::new(&bounds, &inverted),
            Err(ConfigError::DegenerateBand { axis: "pitch", .. })
        ));

        let nan_sensitivity = ControlSettings {
            wheel_sensitivity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            ControlState::new(&bounds, &nan_sensitivity),
            Err(ConfigError::NonFinite {
                field: "wheel_sensitivity"
            })
        ));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();
        state.on_pointer_move(PointerSample::new(300.0, 200.0), &bounds, &settings);

        assert_eq!(state.transform(), state.transform());
    }

    #[test]
    fn test_click_without_move_keeps_position() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();
        state.on_pointer_move(PointerSample::new(400.0, 250.0), &bounds, &settings);
        let before = state.transform();

        state.on_pointer_down(PointerSample::new(400.0, 250.0));
        state.on_pointer_up();

        assert_eq!(state.transform(), before);
        assert_eq!(state.mode, ControlMode::Hover);
    }

    #[test]
    fn test_center_then_drag_scenario() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();

        state.on_pointer_move(PointerSample::new(569.0, 320.0), &bounds, &settings);
        assert!(state.position.x.abs() < 1e-6);
        assert!((state.position.y - 2.13).abs() < 1e-4);

        let z0 = state.position.z;
        state.on_pointer_down(PointerSample::new(569.0, 320.0));
        state.on_pointer_move(PointerSample::new(569.0, 220.0), &bounds, &settings);

        let dz = state.position.z - z0;
        assert!((dz - 0.890625).abs() < 1e-4);
        assert!((state.position.y - 2.13).abs() < 1e-4);
    }

    #[test]
    fn test_drag_freezes_height_and_hover_freezes_depth() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();

        state.on_pointer_down(PointerSample::new(569.0, 600.0));
        let y0 = state.position.y;
        let mut last_z = state.position.z;
        for y in (0..600).rev().step_by(40) {
            state.on_pointer_move(PointerSample::new(569.0, y as f32), &bounds, &settings);
            assert_eq!(state.position.y, y0);
            assert!(state.position.z >= last_z);
            last_z = state.position.z;
        }
        assert_eq!(state.position.z, 0.0);

        state.on_pointer_up();
        let z = state.position.z;
        state.on_pointer_move(PointerSample::new(569.0, 100.0), &bounds, &settings);
        assert_eq!(state.position.z, z);
        assert!(state.position.y > y0);
    }

    #[test]
    fn test_wheel_saturates_pitch() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();

        for _ in 0..100 {
            state.on_wheel(100.0, &bounds, &settings);
        }
        assert_eq!(state.pitch, settings.min_pitch);
        let saturated = state.transform();
        state.on_wheel(100.0, &bounds, &settings);
        assert_eq!(state.transform(), saturated);

        for _ in 0..100 {
            state.on_wheel(-100.0, &bounds, &settings);
        }
        assert_eq!(state.pitch, settings.max_pitch);
    }

    #[test]
    fn test_wheel_direction() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();
        let start = state.pitch;

        state.on_wheel(10.0, &bounds, &settings);
        assert!((state.pitch - (start - 0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_nan_wheel_absorbed() {
        let (bounds, settings) = setup();
        let mut state = ControlState::new(&bounds, &settings).unwrap();
        let before = state.clone();

        state.on_wheel(f32::NAN, &bounds, &settings);
        assert_eq!(state.pitch, before.pitch);
        assert_eq!(state.orientation, before.orientation);
    }

    #[test]
    fn test_mirrored_positions_mirror_yaw() {
        let (bounds, settings) = setup();
        let mut left = ControlState::new(&bounds, &settings).unwrap();
        let mut right = ControlState::new(&bounds, &settings).unwrap();

        left.on_pointer_move(PointerSample::new(200.0, 400.0), &bounds, &settings);
        right.on_pointer_move(PointerSample::new(938.0, 400.0), &bounds, &settings);

        assert!((left.position.x + right.position.x).abs() < 1e-5);
        assert_eq!(left.position.y, right.position.y);

        let yaw_left = yaw_angle(left.position, &bounds, settings.max_yaw);
        let yaw_right = yaw_angle(right.position, &bounds, settings.max_yaw);
        assert!(yaw_left > 0.0);
        assert!(yaw_right < 0.0);
        assert!((yaw_left + yaw_right).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_event_stream_stays_in_bounds(
            events in prop::collection::vec((0u8..4, 0.0f32..=1138.0, 0.0f32..=640.0, -500.0f32..500.0), 1..64)
        ) {
            let (bounds, settings) = setup();
            let mut state = ControlState::new(&bounds, &settings).unwrap();

            for (kind, x, y, wheel) in events {
                let sample = PointerSample::new(x, y);
                match kind {
                    0 => state.on_pointer_move(sample, &bounds, &settings),
                    1 => state.on_pointer_down(sample),
                    2 => state.on_pointer_up(),
                    _ => state.on_wheel(wheel, &bounds, &settings),
                }
                prop_assert!(bounds.contains(state.position));
                prop_assert!((settings.min_pitch..=settings.max_pitch).contains(&state.pitch));
                prop_assert!(state.orientation.is_finite());
            }
        }
    }
}
