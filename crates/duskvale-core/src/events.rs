//! Events emitted by the simulation for sound, screen and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Vec2;

/// Something worth telling the outside world about. Drained into every
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    PlayerDamaged { amount: f32, remaining: f32 },
    PlayerDied,
    EnemyDamaged { id: u32, amount: f32 },
    EnemyKilled { id: u32, kind: EnemyKind },
    BossDamaged { amount: f32, remaining: f32 },
    BossStateChanged { from: BossState, to: BossState },
    BossPhaseChanged { phase: BossPhase },
    BossDefeated,
    ProjectileSpawned { position: Vec2 },
    ProjectileExpired { reason: ExpiryReason },
}
