//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod frame;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{scan_enemy_contacts, scan_projectile_hits, CollisionReport};
pub use frame::{EnemySprite, PlayerPose, RenderFrame};
pub use input::{Action, InputState};
pub use spawn::SpawnPolicy;
pub use state::{
    Enemy, EnemyVariant, GameEvent, GamePhase, GameState, Player, Projectile, SpawnSide,
};
pub use tick::tick;
