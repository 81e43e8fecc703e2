//! Encounter snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{Facing, SimTime, Vec2};

/// Complete encounter state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<CombatEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing: Facing,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
    pub grounded: bool,
    pub invulnerable: bool,
    pub attacking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub facing: Facing,
    pub health: f32,
    pub max_health: f32,
    pub attacking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub position: Vec2,
    pub facing: Facing,
    pub state: BossState,
    pub phase: BossPhase,
    /// Seconds spent in the current state.
    pub state_timer: f32,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
}
