//! Read-only render snapshot
//!
//! Captured once per step and handed to the render collaborator; pure data,
//! so the renderer cannot mutate core state. Enemy and projectile lists keep
//! the sim's id order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EnemyVariant, GamePhase, GameState, SpawnSide};

/// Player pose for drawing the body, aim line and health bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerPose {
    /// Top-left corner
    pub pos: Vec2,
    pub angle: f32,
    pub health: u32,
    pub grounded: bool,
}

/// One enemy sprite: position plus the cosmetic animation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySprite {
    /// Top-left corner
    pub pos: Vec2,
    pub frame: u8,
    pub variant: EnemyVariant,
    /// Which way the sprite faces (enemies walk away from their spawn side)
    pub facing: SpawnSide,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub player: PlayerPose,
    pub enemies: Vec<EnemySprite>,
    /// Projectile centers
    pub projectiles: Vec<Vec2>,
    pub score: u64,
    pub phase: GamePhase,
}

impl RenderFrame {
    /// Snapshot the current state
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerPose {
                pos: state.player.pos,
                angle: state.player.angle,
                health: state.player.health,
                grounded: state.player.grounded,
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemySprite {
                    pos: e.pos,
                    frame: e.frame,
                    variant: e.variant,
                    facing: e.side,
                })
                .collect(),
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            score: state.score,
            phase: state.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{tick, InputState};

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(1);
        let input = InputState::new();
        // Run past the first spawn so the frame carries an enemy
        for _ in 0..SPAWN_INTERVAL_TICKS {
            tick(&mut state, &input, SIM_DT);
        }

        let frame = RenderFrame::capture(&state);
        assert_eq!(frame.enemies.len(), state.enemies.len());
        assert_eq!(frame.projectiles.len(), state.projectiles.len());
        assert_eq!(frame.score, state.score);
        assert_eq!(frame.player.pos, state.player.pos);
        assert_eq!(frame.phase, GamePhase::Playing);
    }
}
