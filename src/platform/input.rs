//! Touch input events in canvas coordinates

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
}

/// A decoded host touch event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Vec2,
}

impl TouchEvent {
    pub fn started(x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::Started,
            position: Vec2::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::Moved,
            position: Vec2::new(x, y),
        }
    }

    pub fn ended(x: f32, y: f32) -> Self {
        Self {
            phase: TouchPhase::Ended,
            position: Vec2::new(x, y),
        }
    }
}
