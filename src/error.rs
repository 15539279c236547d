//! Error types
//!
//! Configuration errors are fatal to controller construction. Asset errors
//! park the loading pipeline in its `Failed` stage until retried.

use std::path::PathBuf;

/// Malformed bounds or control settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("degenerate {axis} band: min {min} must be below max {max}")]
    DegenerateBand {
        axis: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("paddle rest height {rest} is not below max paddle height {max}")]
    RestAboveCeiling { rest: f32, max: f32 },

    #[error("initial pitch {pitch} lies outside [{min}, {max}]")]
    PitchOutOfBand { pitch: f32, min: f32, max: f32 },

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A failed asset loading stage
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("material slot '{slot}' not found")]
    MaterialSlot { slot: String },
}
