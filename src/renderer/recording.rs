//! Command-capturing canvas

use glam::{Affine2, Vec2};

use super::{Canvas, Color};
use crate::assets::Slice;

/// One captured canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetColor(Color),
    FillRect {
        origin: Vec2,
        size: Vec2,
        /// Slice name when textured
        texture: Option<String>,
    },
    SetTransform(Affine2),
}

/// Canvas that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the captured frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Names of the textured fills, in draw order
    pub fn textured_fills(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect {
                    texture: Some(name),
                    ..
                } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Colors set during the frame, in order
    pub fn colors(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SetColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rectangle(&mut self, origin: Vec2, size: Vec2, texture: Option<&Slice>) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            texture: texture.map(|s| s.name.clone()),
        });
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }
}
