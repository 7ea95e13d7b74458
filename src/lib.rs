//! Undead Rush - a side-view survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `highscores`: Top-5 leaderboard with JSON file persistence
//!
//! Rendering, sprite loading and input device handling are host concerns;
//! the host feeds an [`sim::InputState`] snapshot into [`sim::tick`] each
//! fixed step and consumes the resulting [`sim::RenderFrame`] and events.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

use std::f32::consts::TAU;

/// Game configuration constants
///
/// Motion constants are expressed per second and scaled by `SIM_DT`, so at
/// the fixed 60 Hz cadence they reproduce the classic per-frame magnitudes.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Resting line for entity tops (both player and enemies stand here)
    pub const FLOOR_Y: f32 = VIEW_HEIGHT - 60.0;

    /// Downward acceleration for grounded bodies (px/s²)
    pub const GRAVITY: f32 = 1800.0;
    /// Projectiles fall at a fixed fraction of base gravity (flatter arc)
    pub const PROJECTILE_GRAVITY_SCALE: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_JUMP_SPEED: f32 = 600.0;
    /// Aim rotation rate (rad/s)
    pub const AIM_RATE: f32 = 6.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Fire cooldown in ticks (200 ms at 60 Hz)
    pub const FIRE_COOLDOWN_TICKS: u32 = 12;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    pub const ENEMY_MIN_SPEED: f32 = 30.0;
    pub const ENEMY_MAX_SPEED: f32 = 120.0;
    /// Sprite sheet frames per enemy variant
    pub const ENEMY_FRAME_COUNT: u8 = 4;
    /// Ticks between animation frame advances
    pub const ENEMY_FRAME_INTERVAL: u8 = 5;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 300.0;
    /// Fixed upward bias applied at launch (px/s)
    pub const PROJECTILE_LIFT: f32 = 300.0;
    /// Entities this far outside the viewport are pruned
    pub const OFF_WORLD_MARGIN: f32 = 50.0;

    /// Spawn threshold: one enemy every this many ticks
    pub const SPAWN_INTERVAL_TICKS: u32 = 100;

    /// Scoring
    pub const KILL_REWARD: u64 = 10;
    pub const JUMP_OVER_BONUS: u64 = 5;
    /// Health lost per overlapping enemy per step
    pub const CONTACT_DAMAGE: u32 = 10;
}

/// Wrap an angle into [0, 2π)
///
/// Single-step correction: assumes the per-step delta magnitude stays below
/// 2π, which holds for any aim rate reachable here.
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    if angle < 0.0 {
        angle += TAU;
    }
    if angle >= TAU {
        angle -= TAU;
    }
    angle
}
