//! Raw device input → surface-relative samples
//!
//! Pure coordinate translation. Nothing here clamps; bands are enforced by
//! the position resolver.

use serde::{Deserialize, Serialize};

/// Pointer position in screen space (e.g. `clientX`/`clientY`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPointer {
    pub client_x: f32,
    pub client_y: f32,
}

impl RawPointer {
    pub const fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }
}

/// Screen-space top-left corner of the input surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOrigin {
    pub left: f32,
    pub top: f32,
}

/// Pointer position relative to the input surface (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One device event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove(RawPointer),
    PointerDown(RawPointer),
    PointerUp,
    /// Vertical wheel delta (`deltaY`)
    Wheel(f32),
}

/// Translate a screen-space pointer into surface pixels
#[inline]
pub fn normalize_pointer(raw: RawPointer, origin: SurfaceOrigin) -> PointerSample {
    PointerSample {
        x: raw.client_x - origin.left,
        y: raw.client_y - origin.top,
    }
}

/// Scale a raw wheel delta into pitch radians. Positive deltas tilt away from the viewer.
#[inline]
pub fn normalize_wheel(raw_delta: f32, sensitivity: f32) -> f32 {
    raw_delta * sensitivity
}
