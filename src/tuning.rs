//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON override can retune the game
//! without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LoadError;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === View ===
    /// Virtual resolution width
    pub view_width: u32,
    /// Virtual resolution height
    pub view_height: u32,

    // === Pools ===
    pub obstacle_count: usize,
    pub projectile_pool: usize,

    // === Ship ===
    /// Angular speed while a rotate control is held (rad/s)
    pub rotation_speed: f32,
    /// Impulse added per frame while thrust is held
    pub thrust_increment: f32,
    /// Impulse removed at the end of every frame
    pub impulse_decay: f32,
    /// Impulse the ship starts each round with
    pub initial_impulse: f32,

    // === Shooting ===
    /// Minimum seconds between shots
    pub shot_cooldown: f32,
    pub shot_speed: f32,

    // === Obstacles ===
    pub obstacle_spin: f32,
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,

    // === Controls ===
    pub control_scale: f32,

    // === Flow ===
    /// Start playing as soon as the scene is prepared instead of waiting for a touch
    pub auto_start: bool,
    /// Seed for obstacle spawns (random when absent)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            obstacle_count: OBSTACLE_COUNT,
            projectile_pool: PROJECTILE_POOL,

            rotation_speed: ROTATION_SPEED,
            thrust_increment: THRUST_INCREMENT,
            impulse_decay: IMPULSE_DECAY,
            initial_impulse: INITIAL_IMPULSE,

            shot_cooldown: SHOT_COOLDOWN,
            shot_speed: SHOT_SPEED,

            obstacle_spin: OBSTACLE_SPIN,
            obstacle_speed_min: OBSTACLE_SPEED_MIN,
            obstacle_speed_max: OBSTACLE_SPEED_MAX,

            control_scale: CONTROL_SCALE,

            auto_start: true,
            seed: None,
        }
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Read overrides from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Keep the virtual height and widen to the surface's real aspect ratio
    pub fn with_aspect_ratio(mut self, aspect: f32) -> Self {
        if aspect.is_finite() && aspect > 0.0 {
            self.view_width = (self.view_height as f32 * aspect) as u32;
        } else {
            log::warn!("Ignoring invalid aspect ratio {aspect}");
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Virtual resolution as floats
    pub fn extent(&self) -> glam::Vec2 {
        glam::Vec2::new(self.view_width as f32, self.view_height as f32)
    }

    /// Reject a resolution with no area and any number the simulation
    /// cannot run with
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.view_width == 0 || self.view_height == 0 {
            return Err(LoadError::EmptyView {
                width: self.view_width,
                height: self.view_height,
            });
        }

        let finite = [
            ("rotation_speed", self.rotation_speed),
            ("thrust_increment", self.thrust_increment),
            ("impulse_decay", self.impulse_decay),
            ("initial_impulse", self.initial_impulse),
            ("shot_speed", self.shot_speed),
            ("obstacle_spin", self.obstacle_spin),
        ];
        // Also non-negative: drift speeds bound a uniform range
        let non_negative = [
            ("shot_cooldown", self.shot_cooldown),
            ("obstacle_speed_min", self.obstacle_speed_min),
            ("obstacle_speed_max", self.obstacle_speed_max),
            ("control_scale", self.control_scale),
        ];

        for (field, value) in finite {
            if !value.is_finite() {
                return Err(LoadError::InvalidTuning { field, value });
            }
        }
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LoadError::InvalidTuning { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_design() {
        let t = Tuning::default();
        assert_eq!((t.view_width, t.view_height), (1280, 720));
        assert_eq!(t.obstacle_count, 2);
        assert_eq!(t.projectile_pool, 20);
        assert_eq!(t.shot_cooldown, 0.3);
        assert!(t.auto_start);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"obstacle_count": 4, "seed": 9}"#).unwrap();
        assert_eq!(t.obstacle_count, 4);
        assert_eq!(t.seed, Some(9));
        assert_eq!(t.projectile_pool, PROJECTILE_POOL);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Tuning::from_json("{\"obstacle_count\": \"many\"}"),
            Err(LoadError::Manifest(_))
        ));
    }

    #[test]
    fn test_aspect_ratio() {
        let t = Tuning::default().with_aspect_ratio(2.0);
        assert_eq!(t.view_width, 1440);
        let t = Tuning::default().with_aspect_ratio(0.0);
        assert_eq!(t.view_width, VIEW_WIDTH);
    }

    #[test]
    fn test_validate_empty_view() {
        let t = Tuning {
            view_width: 0,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(LoadError::EmptyView { .. })));
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_validate_overflowing_speed() {
        // 1e39 overflows f32 to infinity
        let t = Tuning::from_json(r#"{"obstacle_speed_min": 1e39, "obstacle_speed_max": 1e39}"#)
            .unwrap();
        assert!(matches!(
            t.validate(),
            Err(LoadError::InvalidTuning {
                field: "obstacle_speed_min",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let t = Tuning {
            obstacle_speed_max: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(LoadError::InvalidTuning {
                field: "obstacle_speed_max",
                ..
            })
        ));

        let t = Tuning {
            shot_cooldown: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(LoadError::InvalidTuning { .. })));

        let t = Tuning {
            rotation_speed: f32::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(LoadError::InvalidTuning { .. })));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            Tuning::from_file("/nonexistent/asteroid-drift/tuning.json"),
            Err(LoadError::Io(_))
        ));
    }
}
