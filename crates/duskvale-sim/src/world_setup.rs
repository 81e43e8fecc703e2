//! Spawn factories for building an encounter from its layout.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use duskvale_ai::behavior::EnemyBehavior;
use duskvale_ai::boss::BossController;
use duskvale_core::constants::*;
use duskvale_core::enums::EnemyKind;
use duskvale_core::tuning::Tuning;
use duskvale_core::types::Facing;

use crate::arena::Arena;
use crate::body::KinematicBody;
use crate::player::Player;

/// Marker for regular (non-boss) enemies.
#[derive(Debug, Clone, Copy)]
pub struct Enemy;

/// Stable identity of a spawned enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnInfo {
    pub id: u32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub x: f32,
}

/// Where everything starts. Horizontal positions only; bodies spawn standing
/// on the arena floor.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterLayout {
    pub arena: Arena,
    pub player_x: f32,
    pub boss_x: Option<f32>,
    pub enemies: Vec<EnemySpawn>,
    /// Maximum random offset added to each regular enemy spawn.
    pub spawn_jitter: f32,
}

impl Default for EncounterLayout {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            player_x: PLAYER_SPAWN_X,
            boss_x: Some(BOSS_SPAWN_X),
            enemies: vec![
                EnemySpawn {
                    kind: EnemyKind::Grunt,
                    x: 260.0,
                },
                EnemySpawn {
                    kind: EnemyKind::Archer,
                    x: 480.0,
                },
                EnemySpawn {
                    kind: EnemyKind::Brute,
                    x: -300.0,
                },
            ],
            spawn_jitter: ENEMY_SPAWN_JITTER,
        }
    }
}

impl EncounterLayout {
    /// An empty arena with only the player and the boss.
    pub fn duel(player_x: f32, boss_x: f32) -> Self {
        Self {
            boss_x: Some(boss_x),
            player_x,
            enemies: Vec::new(),
            ..Default::default()
        }
    }
}

pub fn spawn_player(layout: &EncounterLayout, tuning: &Tuning) -> Player {
    let body = KinematicBody::standing_at(layout.player_x, layout.arena.floor_y);
    let mut player = Player::new(body, tuning.player.clone());
    player.set_grounded(true);
    player
}

/// Spawn the boss facing the player.
pub fn spawn_boss(
    layout: &EncounterLayout,
    tuning: &Tuning,
) -> Option<BossController<KinematicBody>> {
    let x = layout.boss_x?;
    let body = KinematicBody::standing_at(x, layout.arena.floor_y);
    let mut boss = BossController::new(body, tuning.boss.clone())
        .with_facing(Facing::toward(x, layout.player_x));
    boss.set_grounded(true);
    Some(boss)
}

/// Spawn every regular enemy in layout order. Ids follow that order.
pub fn spawn_enemies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    layout: &EncounterLayout,
    tuning: &Tuning,
) {
    for (id, spawn) in layout.enemies.iter().enumerate() {
        let jitter = if layout.spawn_jitter > 0.0 {
            rng.gen_range(-layout.spawn_jitter..=layout.spawn_jitter)
        } else {
            0.0
        };
        spawn_enemy(world, layout, tuning, id as u32, spawn.kind, spawn.x + jitter);
    }
}

pub fn spawn_enemy(
    world: &mut World,
    layout: &EncounterLayout,
    tuning: &Tuning,
    id: u32,
    kind: EnemyKind,
    x: f32,
) -> hecs::Entity {
    let body = KinematicBody::standing_at(x, layout.arena.floor_y);
    let mut behavior =
        EnemyBehavior::for_kind(kind, body, &tuning.melee, &tuning.ranged, &tuning.projectile);
    behavior.set_grounded(true);
    world.spawn((Enemy, SpawnInfo { id, kind }, behavior))
}
