//! Paddle controller
//!
//! Owns the validated bounds, the control settings and the `ControlState`,
//! and forwards resolved transforms to a sink once the paddle entity exists.

use super::input::{InputEvent, PointerSample, SurfaceOrigin, normalize_pointer};
use super::state::{ControlState, PaddleTransform};
use crate::config::{Bounds, ControlConfig, ControlSettings};
use crate::error::ConfigError;
use crate::sink::TransformSink;

/// Event-driven paddle controller.
///
/// Not internally synchronised: every mutation takes `&mut self`, so a
/// multi-threaded host has to serialise pointer and tick callbacks itself.
/// Sinks must be `Send`, which keeps the controller `Send`.
pub struct PaddleController {
    bounds: Bounds,
    settings: ControlSettings,
    state: ControlState,
    sink: Option<Box<dyn TransformSink + Send>>,
}

impl PaddleController {
    /// Validate the configuration and start from the neutral pose
    pub fn new(config: &ControlConfig) -> Result<Self, ConfigError> {
        let bounds = Bounds::new(config.bounds.clone())?;
        Self::with_bounds(bounds, config.controls.clone())
    }

    /// Build from already validated bounds. The settings are validated here.
    pub fn with_bounds(bounds: Bounds, settings: ControlSettings) -> Result<Self, ConfigError> {
        let state = ControlState::new(&bounds, &settings)?;
        Ok(Self {
            bounds,
            settings,
            state,
            sink: None,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// The paddle entity is ready: start applying transforms to `sink`.
    /// The current pose is applied immediately.
    pub fn attach_sink(&mut self, sink: Box<dyn TransformSink + Send>) {
        log::info!("Paddle entity attached at {}", self.state.position);
        self.sink = Some(sink);
        self.apply();
    }

    /// Stop applying transforms, handing the sink back
    pub fn detach_sink(&mut self) -> Option<Box<dyn TransformSink + Send>> {
        self.sink.take()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        self.state.on_pointer_move(sample, &self.bounds, &self.settings);
        log::debug!("Pointer move {:?} -> {}", sample, self.state.position);
        self.apply();
    }

    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        self.state.on_pointer_down(sample);
        log::debug!("Pointer down, mode {:?}", self.state.mode);
    }

    pub fn on_pointer_up(&mut self) {
        self.state.on_pointer_up();
        log::debug!("Pointer up");
    }

    pub fn on_wheel(&mut self, raw_delta: f32) {
        self.state.on_wheel(raw_delta, &self.bounds, &self.settings);
        log::debug!("Wheel {raw_delta} -> pitch {}", self.state.pitch);
        self.apply();
    }

    /// Dispatch a host event. Screen coordinates are made surface-relative first.
    pub fn handle_event(&mut self, event: InputEvent, origin: SurfaceOrigin) {
        match event {
            InputEvent::PointerMove(raw) => self.on_pointer_move(normalize_pointer(raw, origin)),
            InputEvent::PointerDown(raw) => self.on_pointer_down(normalize_pointer(raw, origin)),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Wheel(delta) => self.on_wheel(delta),
        }
    }

    /// Render tick: re-apply the current transform (no state change)
    pub fn on_tick(&mut self) {
        self.apply();
    }

    /// Current pose. Read-only.
    pub fn transform(&self) -> PaddleTransform {
        self.state.transform()
    }

    fn apply(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.apply(&self.state.transform());
        }
    }
}
