//! Per-frame simulation
//!
//! The world owns the ship, the obstacle pool and the projectile pool, and
//! advances them in a fixed order each frame:
//! ship (then impulse decay) → obstacles → ship/obstacle hits → projectiles
//! and culling → projectile/obstacle hits.

use glam::Vec2;
use rand::Rng;

use super::collision::{outside_view, wrap_position};
use super::entity::{Entity, EntityKind};
use super::pool::EntityPool;
use super::state::{GameplayState, Outcome};
use crate::assets::{Atlas, names};
use crate::error::LoadError;
use crate::heading;
use crate::platform::Timer;
use crate::tuning::Tuning;

/// Share of an obstacle's spawn band that is usable, measured from the band
/// edge farthest from the view center
const SPAWN_BAND_FILL: f32 = 0.8;

#[derive(Debug, Clone)]
pub struct World {
    extent: Vec2,
    ship: Entity,
    obstacles: EntityPool,
    projectiles: EntityPool,
    alive_obstacles: usize,
    thrust_increment: f32,
    impulse_decay: f32,
    shot_cooldown: f32,
    shot_speed: f32,
}

impl World {
    /// Build a fresh round: ship centered, obstacles spread across the view,
    /// every projectile slot hidden.
    pub fn prepare<R: Rng + ?Sized>(
        atlas: &Atlas,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Result<Self, LoadError> {
        tuning.validate()?;
        let extent = tuning.extent();

        let mut ship = Entity::new(EntityKind::Ship, atlas.slice(names::SHIP)?);
        ship.set_position(extent * 0.5);
        ship.set_angle(0.0);
        ship.set_angular_speed(0.0);
        ship.set_impulse(tuning.initial_impulse);

        let mut obstacles = Vec::with_capacity(tuning.obstacle_count);
        for i in 0..tuning.obstacle_count {
            let slice = atlas.slice(names::ASTEROIDS[i % names::ASTEROIDS.len()])?;
            let mut rock = Entity::new(EntityKind::Obstacle, slice);

            let (x_min, x_max) = spawn_band(i, tuning.obstacle_count, extent.x);
            rock.set_position(Vec2::new(
                rng.random_range(x_min..x_max),
                rng.random_range(0.0..extent.y),
            ));
            rock.set_angular_speed(tuning.obstacle_spin);
            rock.set_linear_speed(Vec2::new(
                drift_speed(rng, tuning.obstacle_speed_min, tuning.obstacle_speed_max),
                drift_speed(rng, tuning.obstacle_speed_min, tuning.obstacle_speed_max),
            ));
            obstacles.push(rock);
        }

        let shot = atlas.slice(names::SHOT)?;
        let projectiles = EntityPool::hidden(EntityKind::Projectile, &shot, tuning.projectile_pool);

        log::debug!(
            "Prepared world {}x{} with {} obstacles, {} projectile slots",
            extent.x,
            extent.y,
            tuning.obstacle_count,
            tuning.projectile_pool
        );

        Ok(Self {
            extent,
            ship,
            obstacles: EntityPool::from_entities(obstacles),
            projectiles,
            alive_obstacles: tuning.obstacle_count,
            thrust_increment: tuning.thrust_increment,
            impulse_decay: tuning.impulse_decay,
            shot_cooldown: tuning.shot_cooldown,
            shot_speed: tuning.shot_speed,
        })
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }
    pub fn ship(&self) -> &Entity {
        &self.ship
    }
    pub fn ship_mut(&mut self) -> &mut Entity {
        &mut self.ship
    }
    pub fn obstacles(&self) -> &EntityPool {
        &self.obstacles
    }
    pub fn obstacles_mut(&mut self) -> &mut EntityPool {
        &mut self.obstacles
    }
    pub fn projectiles(&self) -> &EntityPool {
        &self.projectiles
    }
    pub fn projectiles_mut(&mut self) -> &mut EntityPool {
        &mut self.projectiles
    }

    /// Obstacles not yet destroyed this round
    pub fn alive_obstacles(&self) -> usize {
        self.alive_obstacles
    }

    /// One frame's worth of thrust
    pub fn thrust(&mut self) {
        self.ship.add_impulse(self.thrust_increment);
    }

    /// Fire from the ship's nose. Refused unless gameplay is active, the
    /// cooldown has elapsed and a projectile slot is free.
    pub fn shoot(&mut self, gameplay: GameplayState, timer: &mut dyn Timer) -> bool {
        if !gameplay.is_active() {
            return false;
        }
        if timer.elapsed_seconds() < self.shot_cooldown {
            return false;
        }

        let position = self.ship.position();
        let angle = self.ship.angle();
        let Some(shot) = self.projectiles.first_hidden_mut() else {
            log::debug!("Shot refused: projectile pool exhausted");
            return false;
        };

        shot.set_position(position);
        shot.set_angle(angle);
        shot.set_angular_speed(0.0);
        shot.set_linear_speed(heading(angle) * self.shot_speed);
        shot.show();

        timer.reset();
        log::debug!("Shot fired at ({:.1}, {:.1})", position.x, position.y);
        true
    }

    /// Advance one frame. Returns how the round ended, if it did.
    ///
    /// A ship hit takes precedence over clearing the last obstacle in the
    /// same frame.
    pub fn step(&mut self, dt: f32) -> Option<Outcome> {
        self.ship.update(dt);
        self.ship.set_position(wrap_position(self.ship.position(), self.extent));
        self.ship.add_impulse(-self.impulse_decay);

        for rock in &mut self.obstacles {
            rock.update(dt);
            rock.set_position(wrap_position(rock.position(), self.extent));
        }

        let mut outcome = None;

        // Only the obstacle's visibility is checked; the ship is always in play
        if self.obstacles.iter().any(|rock| self.ship.intersects(rock)) {
            log::info!("Ship destroyed");
            outcome = Some(Outcome::Lose);
        }

        self.update_projectiles(dt);

        for shot in self.projectiles.iter_mut() {
            if !shot.is_visible() {
                continue;
            }
            for rock in self.obstacles.iter_mut() {
                if shot.intersects(rock) {
                    rock.hide();
                    shot.hide();
                    self.alive_obstacles = self.alive_obstacles.saturating_sub(1);
                    log::debug!("Obstacle destroyed, {} left", self.alive_obstacles);

                    if self.alive_obstacles == 0 && outcome.is_none() {
                        log::info!("All obstacles destroyed");
                        outcome = Some(Outcome::Win);
                    }
                    break;
                }
            }
        }

        outcome
    }

    /// Move live projectiles, then retire the ones that left the view
    fn update_projectiles(&mut self, dt: f32) {
        for shot in &mut self.projectiles {
            if !shot.is_visible() {
                continue;
            }
            shot.update(dt);
            if outside_view(shot.position(), self.extent) {
                shot.hide();
            }
        }
    }
}

/// Horizontal spawn range for obstacle `index` of `count`: its equal slice of
/// the view, trimmed on the side facing the center where the ship starts.
fn spawn_band(index: usize, count: usize, width: f32) -> (f32, f32) {
    let band = width / count.max(1) as f32;
    let start = band * index as f32;
    let end = start + band;
    let usable = band * SPAWN_BAND_FILL;

    if (start + end) * 0.5 < width * 0.5 {
        (start, start + usable)
    } else {
        (end - usable, end)
    }
}

/// Per-axis drift: magnitude in `[min, max]`, random sign
fn drift_speed<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let (lo, hi) = (min.min(max), min.max(max));
    let magnitude = rng.random_range(lo..=hi);
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}
