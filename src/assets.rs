//! Sprite atlas slices
//!
//! The atlas owns every slice; entities hold shared `Rc<Slice>` handles so a
//! slice outlives any entity drawn with it and nobody owns it exclusively.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Slice names the game scene looks up
pub mod names {
    pub const SHIP: &str = "ship";
    pub const SHOT: &str = "shot";
    pub const ASTEROIDS: [&str; 2] = ["asteroid_big_1", "asteroid_big_2"];

    pub const LEFT_PRESSED: &str = "ui_left_pressed";
    pub const LEFT_IDLE: &str = "ui_left_idle";
    pub const RIGHT_PRESSED: &str = "ui_right_pressed";
    pub const RIGHT_IDLE: &str = "ui_right_idle";
    pub const THRUST_PRESSED: &str = "ui_thrust_pressed";
    pub const THRUST_IDLE: &str = "ui_thrust_idle";
    pub const FIRE_PRESSED: &str = "ui_fire_pressed";
    pub const FIRE_IDLE: &str = "ui_fire_idle";
    pub const PAUSE_PRESSED: &str = "ui_pause_pressed";
    pub const PAUSE_IDLE: &str = "ui_pause_idle";
}

/// Opaque reference to the texture page a slice lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// An immutable rectangular region of the atlas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub texture: TextureId,
}

impl Slice {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            texture: TextureId::default(),
        }
    }

    /// Collision radius derived from the footprint
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.width + self.height) * 0.5
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    slices: Vec<Slice>,
}

/// Named collection of slices
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    slices: HashMap<String, Rc<Slice>>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{"slices": [{"name", "width", "height", "texture"}]}` manifest
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        let mut atlas = Self::new();
        for slice in manifest.slices {
            atlas.insert(slice);
        }
        log::info!("Loaded atlas with {} slices", atlas.len());
        Ok(atlas)
    }

    /// Footprints matching the stock sprite sheet
    pub fn builtin() -> Self {
        let mut atlas = Self::new();
        atlas.insert(Slice::new(names::SHIP, 20.0, 24.0));
        atlas.insert(Slice::new(names::SHOT, 4.0, 8.0));
        atlas.insert(Slice::new(names::ASTEROIDS[0], 48.0, 48.0));
        atlas.insert(Slice::new(names::ASTEROIDS[1], 44.0, 40.0));
        for name in [
            names::LEFT_PRESSED,
            names::LEFT_IDLE,
            names::RIGHT_PRESSED,
            names::RIGHT_IDLE,
            names::THRUST_PRESSED,
            names::THRUST_IDLE,
            names::FIRE_PRESSED,
            names::FIRE_IDLE,
            names::PAUSE_PRESSED,
            names::PAUSE_IDLE,
        ] {
            atlas.insert(Slice::new(name, 32.0, 32.0));
        }
        atlas
    }

    /// Add or replace a slice
    pub fn insert(&mut self, slice: Slice) {
        self.slices.insert(slice.name.clone(), Rc::new(slice));
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Look up a slice usable for collision (positive, finite footprint)
    pub fn slice(&self, name: &str) -> Result<Rc<Slice>, LoadError> {
        let slice = self
            .slices
            .get(name)
            .ok_or_else(|| LoadError::MissingSlice {
                name: name.to_string(),
            })?;
        if !slice.is_usable() {
            return Err(LoadError::DegenerateSlice {
                name: name.to_string(),
                width: slice.width,
                height: slice.height,
            });
        }
        Ok(Rc::clone(slice))
    }
}
