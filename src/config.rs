//! Table bounds and control tuning
//!
//! Loaded from JSON (or defaulted) and validated once. A `Bounds` value can
//! only be obtained through validation, so every resolver works on
//! non-degenerate bands.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::assets::AssetManifest;
use crate::consts::*;
use crate::error::ConfigError;

/// Raw table geometry and input surface size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Input surface width (pixels)
    pub game_width: u32,
    /// Input surface height (pixels)
    pub game_height: u32,
    pub table_width: f32,
    pub table_length: f32,
    pub table_height: f32,
    pub min_paddle_height: f32,
    pub max_paddle_height: f32,
    pub min_paddle_z: f32,
    pub max_paddle_z: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            table_width: TABLE_WIDTH,
            table_length: TABLE_LENGTH,
            table_height: TABLE_HEIGHT,
            min_paddle_height: MIN_PADDLE_HEIGHT,
            max_paddle_height: MAX_PADDLE_HEIGHT,
            min_paddle_z: MIN_PADDLE_Z,
            max_paddle_z: MAX_PADDLE_Z,
        }
    }
}

impl BoundsConfig {
    /// Check every band and dimension
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_width == 0 {
            return Err(ConfigError::NonPositive {
                field: "game_width",
                value: 0.0,
            });
        }
        if self.game_height == 0 {
            return Err(ConfigError::NonPositive {
                field: "game_height",
                value: 0.0,
            });
        }

        let fields = [
            ("table_width", self.table_width),
            ("table_length", self.table_length),
            ("table_height", self.table_height),
            ("min_paddle_height", self.min_paddle_height),
            ("max_paddle_height", self.max_paddle_height),
            ("min_paddle_z", self.min_paddle_z),
            ("max_paddle_z", self.max_paddle_z),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        for &(field, value) in &fields[..3] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field,
                    value: value as f64,
                });
            }
        }

        if self.min_paddle_height >= self.max_paddle_height {
            return Err(ConfigError::DegenerateBand {
                axis: "height",
                min: self.min_paddle_height,
                max: self.max_paddle_height,
            });
        }
        if self.min_paddle_z >= self.max_paddle_z {
            return Err(ConfigError::DegenerateBand {
                axis: "depth",
                min: self.min_paddle_z,
                max: self.max_paddle_z,
            });
        }

        let rest = self.rest_height();
        if rest >= self.max_paddle_height {
            return Err(ConfigError::RestAboveCeiling {
                rest,
                max: self.max_paddle_height,
            });
        }

        Ok(())
    }

    /// Height of the paddle's physical resting pose
    pub fn rest_height(&self) -> f32 {
        self.table_height / 2.0 + PADDLE_REST_CLEARANCE
    }
}

/// Validated bounds. Only constructible through [`Bounds::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    config: BoundsConfig,
    viewport: (f32, f32),
    rest_height: f32,
}

impl Bounds {
    pub fn new(config: BoundsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            viewport: (config.game_width as f32, config.game_height as f32),
            rest_height: config.rest_height(),
            config,
        })
    }

    pub fn config(&self) -> &BoundsConfig {
        &self.config
    }

    /// Input surface size (pixels), both strictly positive
    #[inline]
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    #[inline]
    pub fn table_width(&self) -> f32 {
        self.config.table_width
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.config.table_width / 2.0
    }

    #[inline]
    pub fn height_band(&self) -> (f32, f32) {
        (self.config.min_paddle_height, self.config.max_paddle_height)
    }

    #[inline]
    pub fn depth_band(&self) -> (f32, f32) {
        (self.config.min_paddle_z, self.config.max_paddle_z)
    }

    #[inline]
    pub fn rest_height(&self) -> f32 {
        self.rest_height
    }

    /// Clamp a position into the legal box
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        let (min_y, max_y) = self.height_band();
        let (min_z, max_z) = self.depth_band();
        Vec3::new(
            pos.x.clamp(-self.half_width(), self.half_width()),
            pos.y.clamp(min_y, max_y),
            pos.z.clamp(min_z, max_z),
        )
    }

    /// True if every axis lies inside its band
    pub fn contains(&self, pos: Vec3) -> bool {
        let (min_y, max_y) = self.height_band();
        let (min_z, max_z) = self.depth_band();
        pos.x.abs() <= self.half_width()
            && (min_y..=max_y).contains(&pos.y)
            && (min_z..=max_z).contains(&pos.z)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        let config = BoundsConfig::default();
        Self {
            viewport: (config.game_width as f32, config.game_height as f32),
            rest_height: config.rest_height(),
            config,
        }
    }
}

/// Input sensitivity and orientation limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Wheel delta → pitch radians
    pub wheel_sensitivity: f32,
    /// Lower pitch bound (radians)
    pub min_pitch: f32,
    /// Upper pitch bound (radians)
    pub max_pitch: f32,
    /// Pitch at session start
    pub initial_pitch: f32,
    /// Yaw magnitude at rest height (radians)
    pub max_yaw: f32,
    /// Neutral pose, clamped into the bounds at state creation
    pub spawn: Vec3,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            wheel_sensitivity: WHEEL_SENSITIVITY,
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
            initial_pitch: INITIAL_PITCH,
            max_yaw: MAX_YAW,
            spawn: Vec3::from_array(SPAWN_POSITION),
        }
    }
}

impl ControlSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wheel_sensitivity", self.wheel_sensitivity),
            ("min_pitch", self.min_pitch),
            ("max_pitch", self.max_pitch),
            ("initial_pitch", self.initial_pitch),
            ("max_yaw", self.max_yaw),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.spawn.is_finite() {
            return Err(ConfigError::NonFinite { field: "spawn" });
        }

        if self.min_pitch >= self.max_pitch {
            return Err(ConfigError::DegenerateBand {
                axis: "pitch",
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        if !(self.min_pitch..=self.max_pitch).contains(&self.initial_pitch) {
            return Err(ConfigError::PitchOutOfBand {
                pitch: self.initial_pitch,
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        if self.max_yaw < 0.0 {
            return Err(ConfigError::Negative {
                field: "max_yaw",
                value: self.max_yaw as f64,
            });
        }

        Ok(())
    }
}

/// Everything the controller and its host need at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub bounds: BoundsConfig,
    pub controls: ControlSettings,
    pub assets: AssetManifest,
}

impl ControlConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        self.controls.validate()
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
