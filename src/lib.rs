//! Asteroid Drift - a single-screen asteroid shooter core
//!
//! Core modules:
//! - `sim`: Entities, pools, collisions and the per-frame simulation step
//! - `ui`: Touch control panel (rotate, thrust, fire, pause)
//! - `scene`: Scene orchestrator driven by host frame callbacks
//! - `renderer`: Canvas abstraction the scene draws through
//! - `platform`: Host collaborators (timers, touch input)
//! - `assets`: Sprite atlas slices
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use assets::{Atlas, Slice};
pub use error::LoadError;
pub use scene::{GameScene, Scene};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Virtual resolution
    pub const VIEW_WIDTH: u32 = 1280;
    pub const VIEW_HEIGHT: u32 = 720;

    /// Pool capacities
    pub const OBSTACLE_COUNT: usize = 2;
    pub const PROJECTILE_POOL: usize = 20;
    pub const CONTROL_COUNT: usize = 5;

    /// Ship handling
    pub const ROTATION_SPEED: f32 = 3.0;
    pub const THRUST_INCREMENT: f32 = 40.0;
    /// Impulse lost at the end of every simulated frame
    pub const IMPULSE_DECAY: f32 = 20.0;
    pub const INITIAL_IMPULSE: f32 = 50.0;

    /// Shooting
    pub const SHOT_COOLDOWN: f32 = 0.3;
    pub const SHOT_SPEED: f32 = 300.0;

    /// Obstacles drift diagonally with per-axis speed in [min, max]
    pub const OBSTACLE_SPIN: f32 = 1.0;
    pub const OBSTACLE_SPEED_MIN: f32 = 50.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 150.0;

    pub const CONTROL_SCALE: f32 = 1.5;

    /// Ship and projectile art is drawn nose-up
    pub const HEADING_CORRECTION: f32 = std::f32::consts::FRAC_PI_2;

    /// Touch location used to release every control at once
    pub const RELEASED_TOUCH: (f32, f32) = (-100.0, -100.0);
}

/// Unit vector for a facing angle in screen space (y grows downward)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}
