//! Canvas abstraction
//!
//! The scene draws through [`Canvas`]; hosts plug in their real 2D backend.
//! [`RecordingCanvas`] captures the command stream for headless runs and tests.

pub mod recording;

pub use recording::{DrawCommand, RecordingCanvas};

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::assets::Slice;

/// Solid fill color (components in 0..=1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Full-screen fill after the ship is destroyed
    pub const DEFEAT: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Full-screen fill after every obstacle is destroyed
    pub const VICTORY: Color = Color::rgb(0.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Immediate-mode 2D drawing target
pub trait Canvas {
    fn clear(&mut self);

    /// Color used by subsequent untextured fills
    fn set_color(&mut self, color: Color);

    /// Fill a rectangle, optionally with a texture slice, under the current transform
    fn fill_rectangle(&mut self, origin: Vec2, size: Vec2, texture: Option<&Slice>);

    fn set_transform(&mut self, transform: Affine2);

    fn reset_transform(&mut self) {
        self.set_transform(Affine2::IDENTITY);
    }
}

/// Rotate about the origin, then move to `position`
#[inline]
pub fn rotate_then_translate(angle: f32, position: Vec2) -> Affine2 {
    Affine2::from_angle_translation(angle, position)
}
