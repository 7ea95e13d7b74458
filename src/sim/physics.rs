//! Gravity and velocity integration
//!
//! One integration step: `vel_y += g·dt; pos.y += vel_y·dt`. The same rule
//! drives the player's jump arc and the projectile's ballistic arc; only the
//! gravity constant and the floor treatment differ.

use glam::Vec2;

/// Free ballistic integration (projectiles; no floor interaction)
#[inline]
pub fn integrate_ballistic(pos: &mut Vec2, vel_y: &mut f32, gravity: f32, dt: f32) {
    *vel_y += gravity * dt;
    pos.y += *vel_y * dt;
}

/// Floor-clamped integration (grounded bodies)
///
/// `floor_y` is the resting coordinate for the body's `pos.y`. If the step
/// would carry the body below it, the position is clamped, vertical velocity
/// zeroed, and the body reported grounded. Returns true when resting on the
/// floor after this step.
pub fn integrate_grounded(pos: &mut Vec2, vel_y: &mut f32, gravity: f32, floor_y: f32, dt: f32) -> bool {
    *vel_y += gravity * dt;
    pos.y += *vel_y * dt;

    if pos.y >= floor_y {
        pos.y = floor_y;
        *vel_y = 0.0;
        return true;
    }
    false
}
