//! Hover / Drag interaction mode

use serde::{Deserialize, Serialize};

/// Which output vertical pointer motion drives
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Pointer Y maps to paddle height
    #[default]
    Hover,
    /// Pointer held; pointer Y deltas move the paddle in depth.
    /// `anchor_y` is the pixel Y of the previous sample.
    Drag { anchor_y: f32 },
}

impl ControlMode {
    /// Pointer pressed. Enters Drag, or re-anchors if already dragging.
    ///
    /// A non-finite Y cannot anchor anything: the press is absorbed and the
    /// current mode is kept.
    pub fn press(&mut self, y: f32) {
        if !y.is_finite() {
            log::warn!("Ignoring pointer-down with non-finite y: {y}");
            return;
        }
        *self = ControlMode::Drag { anchor_y: y };
    }

    /// Pointer released
    pub fn release(&mut self) {
        *self = ControlMode::Hover;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, ControlMode::Drag { .. })
    }

    pub fn anchor_y(&self) -> Option<f32> {
        match self {
            ControlMode::Drag { anchor_y } => Some(*anchor_y),
            ControlMode::Hover => None,
        }
    }
}
