//! Paddle control engine
//!
//! Pure and synchronous. Every handler runs to completion inside the event
//! that triggered it:
//! - No rendering or platform dependencies
//! - No internal queue or coalescing (events apply in delivery order)
//! - All mutable paddle data lives in one `ControlState`

pub mod engine;
pub mod input;
pub mod mode;
pub mod orientation;
pub mod position;
pub mod state;

pub use engine::PaddleController;
pub use input::{InputEvent, PointerSample, RawPointer, SurfaceOrigin, normalize_pointer, normalize_wheel};
pub use mode::ControlMode;
pub use orientation::{compose_orientation, resolve_orientation, yaw_angle};
pub use position::resolve_position;
pub use state::{ControlState, PaddleTransform};
