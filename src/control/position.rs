//! Pointer sample → clamped paddle position
//!
//! X always follows the absolute pointer X. Pointer Y drives height while
//! hovering and incremental depth while dragging. Clamping is the last step,
//! so no code path returns an out-of-band position.

use glam::Vec3;

use super::input::PointerSample;
use super::mode::ControlMode;
use crate::clamp_or_keep;
use crate::config::Bounds;

/// Resolve the paddle position for one pointer sample.
///
/// `previous` must already lie inside the bounds. In Drag mode the anchor is
/// advanced to the sample, so successive deltas are frame-to-frame.
/// Non-finite sample components leave the affected axis (and the anchor)
/// untouched.
pub fn resolve_position(
    sample: PointerSample,
    mode: &mut ControlMode,
    previous: Vec3,
    bounds: &Bounds,
) -> Vec3 {
    let (width_px, height_px) = bounds.viewport();
    let half_width = bounds.half_width();
    let (min_y, max_y) = bounds.height_band();
    let (min_z, max_z) = bounds.depth_band();

    let mut pos = previous;

    // Screen-left is world-left from the player's side, hence the negation
    if sample.x.is_finite() {
        let x = -((sample.x / width_px) * bounds.table_width() - half_width);
        pos.x = clamp_or_keep(x, -half_width, half_width, previous.x);
    } else {
        log::warn!("Absorbed non-finite pointer x: {}", sample.x);
    }

    if sample.y.is_finite() {
        match mode {
            ControlMode::Hover => {
                let y = (1.0 - sample.y / height_px) * (max_y - min_y) + min_y;
                pos.y = clamp_or_keep(y, min_y, max_y, previous.y);
            }
            ControlMode::Drag { anchor_y } => {
                let delta_y = (*anchor_y - sample.y) / height_px;
                let delta_z = delta_y * (max_z - min_z);
                pos.z = clamp_or_keep(previous.z + delta_z, min_z, max_z, previous.z);
                *anchor_y = sample.y;
            }
        }
    } else {
        log::warn!("Absorbed non-finite pointer y: {}", sample.y);
    }

    bounds.clamp(pos)
}
