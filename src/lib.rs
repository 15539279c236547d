//! Paddle Control - pointer driven paddle for a 3D table tennis scene
//!
//! Core modules:
//! - `control`: Input normalisation, mode state, position and orientation resolution
//! - `config`: Table bounds and control tuning (JSON, validated once)
//! - `sink`: Where resolved transforms go (GPU uniform, log, closures)
//! - `assets`: Sequential texture → material → mesh loading state machine
//! - `scene`: Static prop layout derived from the table bounds
//! - `demo`: Seeded input scripts for headless runs

pub mod assets;
pub mod config;
pub mod control;
pub mod demo;
pub mod error;
pub mod scene;
pub mod sink;

pub use config::{BoundsConfig, ControlConfig, ControlSettings};
pub use control::{ControlMode, ControlState, PaddleController, PaddleTransform, PointerSample};
pub use error::{AssetError, ConfigError};

/// Table and control constants (defaults for the standard table)
pub mod consts {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    /// Input surface size in pixels
    pub const GAME_WIDTH: u32 = 1138;
    pub const GAME_HEIGHT: u32 = 640;

    /// Table dimensions (world units)
    pub const TABLE_WIDTH: f32 = 5.7;
    pub const TABLE_LENGTH: f32 = 11.4;
    pub const TABLE_HEIGHT: f32 = 0.14;

    /// Paddle height band
    pub const MIN_PADDLE_HEIGHT: f32 = 0.71;
    pub const MAX_PADDLE_HEIGHT: f32 = 3.55;

    /// Paddle depth band (own half of the table)
    pub const MIN_PADDLE_Z: f32 = -5.7;
    pub const MAX_PADDLE_Z: f32 = 0.0;

    /// Clearance above half the table height where the paddle rests
    pub const PADDLE_REST_CLEARANCE: f32 = 0.1425;

    /// Wheel delta → pitch radians
    pub const WHEEL_SENSITIVITY: f32 = 0.01;

    /// Pitch band: face tilted back (-135°) to tilted forward (-45°)
    pub const MIN_PITCH: f32 = -3.0 * FRAC_PI_4;
    pub const MAX_PITCH: f32 = -FRAC_PI_4;
    /// Initial pitch (90° backwards)
    pub const INITIAL_PITCH: f32 = -FRAC_PI_2;

    /// Yaw at rest height
    pub const MAX_YAW: f32 = FRAC_PI_2;

    /// Neutral pose
    pub const SPAWN_POSITION: [f32; 3] = [0.0, 2.1, -2.85];

    /// Uniform scale applied to the paddle mesh
    pub const PADDLE_MESH_SCALE: f32 = 0.071;
}

/// Clamp `value` into `[min, max]`. Infinities saturate, NaN falls back to `previous`.
#[inline]
pub fn clamp_or_keep(value: f32, min: f32, max: f32, previous: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else if value == f32::INFINITY {
        max
    } else if value == f32::NEG_INFINITY {
        min
    } else {
        previous
    }
}
