//! Transform sinks
//!
//! A sink receives every resolved paddle transform. It holds no control
//! logic; it only copies the pose onto whatever draws the paddle.

use bytemuck::{Pod, Zeroable};

use crate::consts::PADDLE_MESH_SCALE;
use crate::control::PaddleTransform;

/// Receives resolved paddle transforms
pub trait TransformSink {
    fn apply(&mut self, transform: &PaddleTransform);
}

impl<F> TransformSink for F
where
    F: FnMut(&PaddleTransform),
{
    fn apply(&mut self, transform: &PaddleTransform) {
        self(transform)
    }
}

/// Per-object uniform for the paddle draw call
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PaddleUniform {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    /// Orientation as (x, y, z, w), for normal transforms
    pub orientation: [f32; 4],
}

impl PaddleUniform {
    pub fn new(transform: &PaddleTransform, scale: f32) -> Self {
        Self {
            model: transform.model_matrix(scale).to_cols_array_2d(),
            orientation: transform.orientation.to_array(),
        }
    }
}

/// Keeps the latest transform packed as a `PaddleUniform`
#[derive(Debug, Clone)]
pub struct UniformSink {
    scale: f32,
    uniform: PaddleUniform,
    dirty: bool,
}

impl Default for UniformSink {
    fn default() -> Self {
        Self::new(PADDLE_MESH_SCALE)
    }
}

impl UniformSink {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            uniform: PaddleUniform::zeroed(),
            dirty: false,
        }
    }

    pub fn uniform(&self) -> &PaddleUniform {
        &self.uniform
    }

    /// Bytes for a buffer write, if the uniform changed since the last call
    pub fn take_dirty_bytes(&mut self) -> Option<&[u8]> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(bytemuck::bytes_of(&self.uniform))
    }
}

impl TransformSink for UniformSink {
    fn apply(&mut self, transform: &PaddleTransform) {
        let uniform = PaddleUniform::new(transform, self.scale);
        if uniform != self.uniform {
            self.uniform = uniform;
            self.dirty = true;
        }
    }
}

/// Logs every applied transform at debug level
#[derive(Debug, Default)]
pub struct LogSink {
    applied: u64,
}

impl LogSink {
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

impl TransformSink for LogSink {
    fn apply(&mut self, transform: &PaddleTransform) {
        self.applied += 1;
        log::debug!(
            "Paddle #{}: pos {} rot {}",
            self.applied,
            transform.position,
            transform.orientation
        );
    }
}
