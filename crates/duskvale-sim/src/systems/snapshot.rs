//! Snapshot system: builds the renderer view of the encounter.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use duskvale_ai::behavior::EnemyBehavior;
use duskvale_ai::boss::BossController;
use duskvale_ai::capabilities::Mover;
use duskvale_ai::projectile::ProjectilePool;
use duskvale_core::enums::EncounterPhase;
use duskvale_core::events::CombatEvent;
use duskvale_core::state::*;
use duskvale_core::types::SimTime;

use crate::body::KinematicBody;
use crate::player::Player;
use crate::world_setup::SpawnInfo;

pub fn build_snapshot(
    world: &World,
    player: &Player,
    boss: Option<&BossController<KinematicBody>>,
    projectiles: &ProjectilePool,
    time: &SimTime,
    phase: EncounterPhase,
    events: Vec<CombatEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        player: build_player(player),
        enemies: build_enemies(world),
        boss: boss.map(build_boss),
        projectiles: build_projectiles(projectiles),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    let combatant = player.combatant();
    PlayerView {
        position: player.body().position,
        facing: combatant.facing,
        health: combatant.current_health(),
        max_health: combatant.max_health(),
        alive: combatant.is_alive(),
        grounded: player.is_grounded(),
        invulnerable: player.is_invulnerable(),
        attacking: player.is_attacking(),
    }
}

/// Enemy views ordered by spawn id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&SpawnInfo, &EnemyBehavior<KinematicBody>)>();
    let mut enemies: Vec<EnemyView> = query
        .iter()
        .map(|(_, (info, behavior))| {
            let combatant = behavior.combatant();
            EnemyView {
                id: info.id,
                kind: info.kind,
                position: behavior.mover().position(),
                facing: combatant.facing,
                health: combatant.current_health(),
                max_health: combatant.max_health(),
                attacking: behavior.is_attacking(),
            }
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_boss(boss: &BossController<KinematicBody>) -> BossView {
    BossView {
        position: boss.mover().position(),
        facing: boss.facing(),
        state: boss.state(),
        phase: boss.phase(),
        state_timer: boss.state_timer(),
        health: boss.current_health(),
        max_health: boss.max_health(),
    }
}

fn build_projectiles(projectiles: &ProjectilePool) -> Vec<ProjectileView> {
    projectiles
        .iter()
        .map(|p| ProjectileView {
            position: p.position(),
            velocity: p.velocity(),
        })
        .collect()
}
