//! Simulation module
//!
//! All gameplay logic lives here:
//! - Entities and their kinematics
//! - Fixed-capacity pools
//! - Circle collisions and screen wrap
//! - Scene/gameplay state machines
//! - The per-frame world step
//!
//! Nothing here touches the host; drawing goes through `renderer::Canvas`.

pub mod collision;
pub mod entity;
pub mod pool;
pub mod state;
pub mod world;

pub use collision::{circles_overlap, outside_view, point_in_circle, wrap_axis, wrap_position};
pub use entity::{Entity, EntityKind};
pub use pool::EntityPool;
pub use state::{GameplayState, Outcome, SceneState};
pub use world::World;
