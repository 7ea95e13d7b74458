//! Pairwise collision scans
//!
//! Scans run over stable snapshots of the entity collections and report
//! index pairs; all removal happens afterwards in a single compaction pass
//! (never shrink-during-iterate). Order of the scans is fixed for
//! determinism: projectile×enemy first, then enemy×player.
//!
//! Hit geometry: projectile×enemy is a true circle-vs-box closest-point
//! test; enemy×player is box-vs-box. See DESIGN.md for the policy choice.

use serde::{Deserialize, Serialize};

use super::state::{Enemy, Player, Projectile};

/// A projectile/enemy hit, by collection index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    pub projectile_idx: usize,
    pub enemy_idx: usize,
}

/// Scan projectiles against enemies.
///
/// A projectile is credited with at most one kill per step (first matching
/// enemy in iteration order), and an enemy already claimed by an earlier
/// projectile cannot be claimed again, so simultaneous removal never
/// double-processes a pair.
pub fn scan_projectile_hits(projectiles: &[Projectile], enemies: &[Enemy]) -> Vec<CollisionReport> {
    let mut hits = Vec::new();
    let mut claimed = vec![false; enemies.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        for (ei, enemy) in enemies.iter().enumerate() {
            if claimed[ei] {
                continue;
            }
            if enemy
                .bounds()
                .overlaps_circle(projectile.pos, projectile.radius)
            {
                claimed[ei] = true;
                hits.push(CollisionReport {
                    projectile_idx: pi,
                    enemy_idx: ei,
                });
                break;
            }
        }
    }
    hits
}

/// Scan enemies against the player; every overlapping enemy is reported
/// (contact damage is per-overlapping-enemy, not deduplicated).
pub fn scan_enemy_contacts(enemies: &[Enemy], player: &Player) -> Vec<usize> {
    let player_box = player.bounds();
    enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| enemy.bounds().overlaps(&player_box))
        .map(|(idx, _)| idx)
        .collect()
}
