//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Boss encounter state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossState {
    #[default]
    Idle,
    /// Charge then lunge along the locked facing.
    Attack1,
    /// Rear kick against a target standing behind.
    Attack2,
    /// Two-part sweep: rear half, then front half.
    Attack3,
    /// Phase-transition shove. Pushes, never damages.
    Attack4,
    Stagger,
    /// Terminal.
    Dead,
}

impl BossState {
    pub fn is_attack(self) -> bool {
        matches!(
            self,
            BossState::Attack1 | BossState::Attack2 | BossState::Attack3 | BossState::Attack4
        )
    }
}

/// Boss escalation tier. Moves one way, Phase1 to Phase2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    Phase1,
    Phase2,
}

/// Regular enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile melee chaser.
    Grunt,
    /// Slow, heavy melee chaser.
    Brute,
    /// Stand-off shooter.
    Archer,
}

/// Coarse state of a melee enemy, exposed for animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeleeState {
    #[default]
    Chasing,
    /// Windup; the strike lands when the timer crosses the strike delay.
    Attacking,
    /// Post-strike dash decaying toward zero.
    DashTail,
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryReason {
    Lifetime,
    Hit,
    WorldCollision,
}

/// Top-level encounter phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Active,
    Paused,
    Victory,
    Defeat,
}
