//! Collision and kinematics routines
//!
//! Pure functions over positions and radii: circle overlap, point-in-circle,
//! screen wrap for the ship and obstacles, and the out-of-view test that
//! culls projectiles.

use glam::Vec2;

/// Two circles touch or overlap (boundary contact counts)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// Point lies strictly inside the circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) < radius * radius
}

/// Bring one coordinate back into `[0, extent)` by a single extent.
///
/// Expects at most one extent of overshoot, which a single frame of motion
/// never exceeds. The upper check runs after the lower one: a tiny negative
/// value plus the extent can round up to exactly the extent.
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    let mut value = value;
    if value < 0.0 {
        value += extent;
    }
    if value >= extent {
        value -= extent;
    }
    value
}

/// Wrap both axes of a position around the view
#[inline]
pub fn wrap_position(pos: Vec2, extent: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, extent.x), wrap_axis(pos.y, extent.y))
}

/// Position is outside `[0, extent)` on either axis
#[inline]
pub fn outside_view(pos: Vec2, extent: Vec2) -> bool {
    pos.x < 0.0 || pos.x >= extent.x || pos.y < 0.0 || pos.y >= extent.y
}
