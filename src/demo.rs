//! Scripted input for headless runs
//!
//! Generates a plausible stream of host events from a seed: hover sweeps
//! across the surface, press-drag-release gestures and wheel ticks. The same
//! seed always yields the same script.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::control::{InputEvent, RawPointer};

/// Moves per hover sweep
const SWEEP_STEPS: usize = 12;
/// Moves per drag gesture
const DRAG_STEPS: usize = 8;

/// Seeded input script generator
#[derive(Debug, Clone)]
pub struct PointerScript {
    rng: Pcg32,
    width: f32,
    height: f32,
    cursor: RawPointer,
}

impl PointerScript {
    /// Script for a `width` × `height` surface whose origin is at (0, 0)
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        Self {
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            cursor: RawPointer::new(width / 2.0, height / 2.0),
        }
    }

    /// Generate `gestures` gestures worth of events
    pub fn generate(&mut self, gestures: usize) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for _ in 0..gestures {
            match self.rng.random_range(0..10) {
                0..=4 => self.sweep(&mut events),
                5..=7 => self.drag(&mut events),
                _ => self.wheel(&mut events),
            }
        }
        events
    }

    fn sweep(&mut self, events: &mut Vec<InputEvent>) {
        let target = RawPointer::new(
            self.rng.random_range(0.0..self.width),
            self.rng.random_range(0.0..self.height),
        );
        self.glide_to(target, SWEEP_STEPS, events);
    }

    fn drag(&mut self, events: &mut Vec<InputEvent>) {
        events.push(InputEvent::PointerDown(self.cursor));

        // Mostly vertical: pushing toward or pulling back from the net
        let dy = self.rng.random_range(-0.4..0.4) * self.height;
        let dx = self.rng.random_range(-0.1..0.1) * self.width;
        let target = RawPointer::new(
            (self.cursor.client_x + dx).clamp(0.0, self.width),
            (self.cursor.client_y + dy).clamp(0.0, self.height),
        );
        self.glide_to(target, DRAG_STEPS, events);

        events.push(InputEvent::PointerUp);
    }

    fn wheel(&mut self, events: &mut Vec<InputEvent>) {
        let ticks = self.rng.random_range(1..=5);
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        for _ in 0..ticks {
            events.push(InputEvent::Wheel(direction * 53.0));
        }
    }

    fn glide_to(&mut self, target: RawPointer, steps: usize, events: &mut Vec<InputEvent>) {
        let start = self.cursor;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let point = RawPointer::new(
                (start.client_x + (target.client_x - start.client_x) * t).clamp(0.0, self.width),
                (start.client_y + (target.client_y - start.client_y) * t).clamp(0.0, self.height),
            );
            events.push(InputEvent::PointerMove(point));
        }
        self.cursor = target;
    }
}
