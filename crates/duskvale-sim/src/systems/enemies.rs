//! Regular enemy AI system.

use hecs::World;

use duskvale_ai::behavior::EnemyBehavior;
use duskvale_ai::capabilities::ProjectileSink;
use duskvale_ai::projectile::{ProjectilePool, ProjectileSpawn};
use duskvale_core::events::CombatEvent;

use crate::body::KinematicBody;
use crate::player::Player;
use crate::world_setup::Enemy;

/// Update every enemy against the player. Shots requested this tick join the
/// pool once all enemies have acted.
pub fn run(
    world: &mut World,
    player: &mut Player,
    projectiles: &mut ProjectilePool,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let mut requests: Vec<ProjectileSpawn> = Vec::new();

    for (_entity, (_enemy, behavior)) in
        world.query_mut::<(&Enemy, &mut EnemyBehavior<KinematicBody>)>()
    {
        behavior.update(dt, player, &mut requests);
    }

    for request in requests {
        events.push(CombatEvent::ProjectileSpawned {
            position: request.origin,
        });
        projectiles.spawn(request);
    }
}
