//! Game state and core simulation types
//!
//! The `GameState` exclusively owns every entity; entities hold no
//! back-references. Collections mutate only inside one simulation step.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::spawn::SpawnPolicy;
use crate::consts::*;
use crate::wrap_angle;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Step is skipped entirely; no state mutates
    Paused,
    /// Terminal: health reached zero, state is frozen
    GameOver,
}

/// Typed events surfaced to the host each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile destroyed an enemy (both removed)
    EnemyKilled { enemy_id: u32, reward: u64 },
    /// The player cleared an enemy from above (one-shot per enemy)
    JumpedOver { enemy_id: u32, bonus: u64 },
    /// An overlapping enemy damaged the player
    PlayerHit { damage: u32, health: u32 },
    /// Session ended; the host commits the final score
    GameOver { score: u64 },
}

/// Which edge an enemy entered from; direction of travel is fixed away
/// from the spawn side for the enemy's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSide {
    Left,
    Right,
}

/// Cosmetic sprite sheet variant, chosen at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyVariant {
    Shambler,
    Withered,
}

/// The player-controlled survivor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (px/s, positive = downward)
    pub vel_y: f32,
    /// True iff resting on the floor plane
    pub grounded: bool,
    /// Aim angle in [0, 2π)
    pub angle: f32,
    pub health: u32,
    /// Fire cooldown countdown, decremented once per step
    pub cooldown_ticks: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new((VIEW_WIDTH - PLAYER_WIDTH) / 2.0, FLOOR_Y),
            vel_y: 0.0,
            grounded: true,
            angle: 0.0,
            health: PLAYER_MAX_HEALTH,
            cooldown_ticks: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Rotate the aim by a signed delta, keeping the angle in [0, 2π)
    pub fn rotate_aim(&mut self, delta: f32) {
        self.angle = wrap_angle(self.angle + delta);
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.cooldown_ticks == 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// An advancing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub side: SpawnSide,
    /// Horizontal speed magnitude (px/s), fixed at spawn
    pub speed: f32,
    pub variant: EnemyVariant,
    /// Current animation frame, cycles modulo ENEMY_FRAME_COUNT
    pub frame: u8,
    frame_timer: u8,
    /// One-shot: set when the jump-over bonus is awarded, never resets
    pub jumped_over: bool,
}

impl Enemy {
    /// Roll a fresh enemy at the given spawn side
    pub fn spawn(id: u32, rng: &mut Pcg32) -> Self {
        let side = if rng.random_bool(0.5) {
            SpawnSide::Left
        } else {
            SpawnSide::Right
        };
        let x = match side {
            SpawnSide::Left => 0.0,
            SpawnSide::Right => VIEW_WIDTH - ENEMY_WIDTH,
        };
        let variant = if rng.random_bool(0.5) {
            EnemyVariant::Shambler
        } else {
            EnemyVariant::Withered
        };
        Self {
            id,
            pos: Vec2::new(x, FLOOR_Y),
            side,
            speed: rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED),
            variant,
            frame: 0,
            frame_timer: 0,
            jumped_over: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
    }

    /// Signed horizontal velocity: away from the spawn side
    #[inline]
    pub fn velocity_x(&self) -> f32 {
        match self.side {
            SpawnSide::Left => self.speed,
            SpawnSide::Right => -self.speed,
        }
    }

    /// One step of horizontal translation plus animation advance.
    /// Animation is cosmetic only and never affects `bounds()`.
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.velocity_x() * dt;

        self.frame_timer += 1;
        if self.frame_timer >= ENEMY_FRAME_INTERVAL {
            self.frame = (self.frame + 1) % ENEMY_FRAME_COUNT;
            self.frame_timer = 0;
        }
    }

    /// True once the enemy has fully crossed the far edge
    pub fn is_off_world(&self) -> bool {
        match self.side {
            SpawnSide::Left => self.pos.x > VIEW_WIDTH,
            SpawnSide::Right => self.pos.x + ENEMY_WIDTH < 0.0,
        }
    }
}

/// A fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Projectile {
    /// Decompose the firer's aim angle into a launch velocity with the
    /// fixed upward bias.
    pub fn launch(id: u32, origin: Vec2, angle: f32) -> Self {
        Self {
            id,
            pos: origin,
            vel: Vec2::new(
                PROJECTILE_SPEED * angle.cos(),
                PROJECTILE_SPEED * angle.sin() - PROJECTILE_LIFT,
            ),
            radius: PROJECTILE_RADIUS,
        }
    }

    /// One ballistic integration step at the reduced gravity scale
    pub fn advance(&mut self, dt: f32) {
        super::physics::integrate_ballistic(
            &mut self.pos,
            &mut self.vel.y,
            GRAVITY * PROJECTILE_GRAVITY_SCALE,
            dt,
        );
        self.pos.x += self.vel.x * dt;
    }

    pub fn is_off_world(&self) -> bool {
        self.pos.x + self.radius < -OFF_WORLD_MARGIN
            || self.pos.x - self.radius > VIEW_WIDTH + OFF_WORLD_MARGIN
            || self.pos.y + self.radius < -OFF_WORLD_MARGIN
            || self.pos.y - self.radius > VIEW_HEIGHT + OFF_WORLD_MARGIN
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; all random draws go through here
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Non-decreasing within a session
    pub score: u64,
    pub player: Player,
    /// Active enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Active projectiles (sorted by id for determinism)
    pub projectiles: Vec<Projectile>,
    pub spawn: SpawnPolicy,
    /// Edge-detect latch for the pause-toggle action
    pub(crate) pause_held: bool,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawn: SpawnPolicy::new(SPAWN_INTERVAL_TICKS),
            pause_held: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ensure entity collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
