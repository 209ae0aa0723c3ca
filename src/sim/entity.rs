//! Simulation entities
//!
//! Every actor on screen (ship, projectile, obstacle, touch control) is an
//! [`Entity`]: a textured circle with a position, heading and visibility.
//! The kind decides how it moves and how it is drawn.

use std::rc::Rc;

use glam::Vec2;

use super::collision::{circles_overlap, point_in_circle};
use crate::assets::Slice;
use crate::consts::HEADING_CORRECTION;
use crate::heading;
use crate::renderer::{Canvas, rotate_then_translate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Moves by integrating its impulse along its heading
    Ship,
    /// Constant velocity, art drawn nose-up
    Projectile,
    /// Constant velocity
    Obstacle,
    /// Stationary touch control
    Control,
}

impl EntityKind {
    /// Source art for this kind points up instead of right
    fn nose_up(self) -> bool {
        matches!(self, EntityKind::Ship | EntityKind::Projectile)
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    slice: Rc<Slice>,
    radius: f32,
    position: Vec2,
    scale: f32,
    angle: f32,
    angular_speed: f32,
    linear_speed: Vec2,
    visible: bool,
    /// Thrust accumulator; only the ship integrates it
    impulse: f32,
}

impl Entity {
    /// Visible, at the origin, at rest. The radius is fixed from the slice here.
    pub fn new(kind: EntityKind, slice: Rc<Slice>) -> Self {
        let radius = slice.radius();
        Self {
            kind,
            slice,
            radius,
            position: Vec2::ZERO,
            scale: 1.0,
            angle: 0.0,
            angular_speed: 0.0,
            linear_speed: Vec2::ZERO,
            visible: true,
            impulse: 0.0,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }
    pub fn slice(&self) -> &Rc<Slice> {
        &self.slice
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn scale(&self) -> f32 {
        self.scale
    }
    pub fn angle(&self) -> f32 {
        self.angle
    }
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }
    pub fn linear_speed(&self) -> Vec2 {
        self.linear_speed
    }
    pub fn impulse(&self) -> f32 {
        self.impulse
    }
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Swap the drawn slice; the collision radius is unchanged
    pub fn set_slice(&mut self, slice: Rc<Slice>) {
        self.slice = slice;
    }
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }
    pub fn set_angular_speed(&mut self, speed: f32) {
        self.angular_speed = speed;
    }
    pub fn set_linear_speed(&mut self, speed: Vec2) {
        self.linear_speed = speed;
    }
    pub fn set_impulse(&mut self, impulse: f32) {
        self.impulse = impulse;
    }
    pub fn add_impulse(&mut self, amount: f32) {
        self.impulse += amount;
    }

    /// Stop updating and drawing; pooled entities are recycled this way
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Advance by `dt` seconds. Hidden entities do not move.
    pub fn update(&mut self, dt: f32) {
        if !self.visible {
            return;
        }

        self.angle += self.angular_speed * dt;

        match self.kind {
            EntityKind::Ship => {
                // Decay happens outside, so the accumulator can dip below zero between frames
                if self.impulse < 0.0 {
                    self.impulse = 0.0;
                }
                self.position += heading(self.angle) * self.impulse * dt;
            }
            EntityKind::Projectile | EntityKind::Obstacle | EntityKind::Control => {
                self.position += self.linear_speed * dt;
            }
        }
    }

    /// Bounding circles overlap. Only `other`'s visibility is checked;
    /// callers skip hidden entities on their own side.
    pub fn intersects(&self, other: &Entity) -> bool {
        if !other.visible {
            return false;
        }
        circles_overlap(self.position, self.radius, other.position, other.radius)
    }

    /// Point lies strictly inside the bounding circle
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_circle(point, self.position, self.radius)
    }

    /// Draw the slice centered on the position, rotated by the heading
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }

        let rotation = if self.kind.nose_up() {
            HEADING_CORRECTION - self.angle
        } else {
            self.angle
        };
        let size = Vec2::new(self.slice.width, self.slice.height) * self.scale;

        canvas.set_transform(rotate_then_translate(rotation, self.position));
        canvas.fill_rectangle(-size * 0.5, size, Some(&self.slice));
        canvas.reset_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    fn slice(w: f32, h: f32) -> Rc<Slice> {
        Rc::new(Slice::new("test", w, h))
    }

    fn entity_at(kind: EntityKind, x: f32, y: f32) -> Entity {
        let mut e = Entity::new(kind, slice(10.0, 10.0));
        e.set_position(Vec2::new(x, y));
        e
    }

    #[test]
    fn test_radius_fixed_at_construction() {
        let mut e = Entity::new(EntityKind::Control, slice(20.0, 40.0));
        assert_eq!(e.radius(), 30.0);
        e.set_slice(slice(2.0, 2.0));
        e.set_scale(3.0);
        assert_eq!(e.radius(), 30.0);
    }

    #[test]
    fn test_intersects_false_when_other_hidden() {
        let a = entity_at(EntityKind::Ship, 0.0, 0.0);
        let mut b = entity_at(EntityKind::Obstacle, 0.0, 0.0);
        assert!(a.intersects(&b));
        b.hide();
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_ignores_own_visibility() {
        // A hidden caller still reports overlap; the caller must filter itself
        let mut a = entity_at(EntityKind::Projectile, 0.0, 0.0);
        let b = entity_at(EntityKind::Obstacle, 5.0, 0.0);
        a.hide();
        assert!(a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_intersects_at_radius_sum() {
        // Radii 10 + 10
        let a = entity_at(EntityKind::Obstacle, 0.0, 0.0);
        let b = entity_at(EntityKind::Obstacle, 20.0, 0.0);
        assert!(a.intersects(&b));
        let c = entity_at(EntityKind::Obstacle, 20.5, 0.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains_excludes_boundary() {
        let e = entity_at(EntityKind::Control, 0.0, 0.0);
        assert!(e.contains(Vec2::new(9.9, 0.0)));
        assert!(!e.contains(Vec2::new(10.0, 0.0)));
        assert!(!e.contains(Vec2::new(6.0, 8.0)));
    }

    #[test]
    fn test_ship_without_impulse_stays_put() {
        for dt in [0.0, 0.016, 1.0, 5.0] {
            let mut ship = entity_at(EntityKind::Ship, 640.0, 360.0);
            ship.update(dt);
            assert_eq!(ship.position(), Vec2::new(640.0, 360.0));
        }
    }

    #[test]
    fn test_ship_moves_along_heading() {
        let mut ship = entity_at(EntityKind::Ship, 100.0, 100.0);
        ship.set_impulse(90.0);
        ship.update(1.0);
        assert!((ship.position().x - 190.0).abs() < 1e-4);
        assert!((ship.position().y - 100.0).abs() < 1e-4);
        // Linear speed is ignored for the ship
        ship.set_linear_speed(Vec2::new(1000.0, 1000.0));
        ship.set_impulse(0.0);
        ship.update(1.0);
        assert!((ship.position().x - 190.0).abs() < 1e-4);
    }

    #[test]
    fn test_ship_negative_impulse_clamped() {
        let mut ship = entity_at(EntityKind::Ship, 50.0, 50.0);
        ship.set_impulse(-30.0);
        ship.update(1.0);
        assert_eq!(ship.impulse(), 0.0);
        assert_eq!(ship.position(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_ship_rotates_before_thrusting() {
        let mut ship = entity_at(EntityKind::Ship, 0.0, 0.0);
        ship.set_angular_speed(std::f32::consts::FRAC_PI_2);
        ship.set_impulse(10.0);
        ship.update(1.0);
        // Facing up-screen after the turn
        assert!(ship.position().x.abs() < 1e-4);
        assert!((ship.position().y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_constant_velocity_motion() {
        let mut rock = entity_at(EntityKind::Obstacle, 10.0, 10.0);
        rock.set_linear_speed(Vec2::new(50.0, -20.0));
        rock.set_angular_speed(1.0);
        rock.set_impulse(1000.0);
        rock.update(0.5);
        assert_eq!(rock.position(), Vec2::new(35.0, 0.0));
        assert_eq!(rock.angle(), 0.5);
    }

    #[test]
    fn test_hidden_entity_does_not_update() {
        let mut shot = entity_at(EntityKind::Projectile, 10.0, 10.0);
        shot.set_linear_speed(Vec2::new(300.0, 0.0));
        shot.hide();
        shot.update(1.0);
        assert_eq!(shot.position(), Vec2::new(10.0, 10.0));
        shot.show();
        shot.update(1.0);
        assert_eq!(shot.position(), Vec2::new(310.0, 10.0));
    }

    #[test]
    fn test_render_applies_heading_correction() {
        let mut canvas = RecordingCanvas::new();
        let mut ship = entity_at(EntityKind::Ship, 30.0, 40.0);
        ship.set_angle(0.25);
        ship.render(&mut canvas);

        let expected = rotate_then_translate(HEADING_CORRECTION - 0.25, Vec2::new(30.0, 40.0));
        assert_eq!(canvas.commands()[0], DrawCommand::SetTransform(expected));
        assert_eq!(canvas.textured_fills(), vec!["test"]);
        assert_eq!(
            canvas.commands()[2],
            DrawCommand::SetTransform(glam::Affine2::IDENTITY)
        );
    }

    #[test]
    fn test_render_raw_angle_and_scale() {
        let mut canvas = RecordingCanvas::new();
        let mut button = entity_at(EntityKind::Control, 0.0, 0.0);
        button.set_angle(0.5);
        button.set_scale(1.5);
        button.render(&mut canvas);

        let commands = canvas.take();
        assert_eq!(
            commands[0],
            DrawCommand::SetTransform(rotate_then_translate(0.5, Vec2::ZERO))
        );
        match &commands[1] {
            DrawCommand::FillRect { origin, size, .. } => {
                assert_eq!(*size, Vec2::new(15.0, 15.0));
                assert_eq!(*origin, Vec2::new(-7.5, -7.5));
            }
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_entity_not_rendered() {
        let mut canvas = RecordingCanvas::new();
        let mut rock = entity_at(EntityKind::Obstacle, 0.0, 0.0);
        rock.hide();
        rock.render(&mut canvas);
        assert!(canvas.commands().is_empty());
    }
}
