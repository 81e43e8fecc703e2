//! Cleanup system: removes dead enemies from the world.

use hecs::{Entity, World};

use duskvale_ai::behavior::EnemyBehavior;

use crate::body::KinematicBody;
use crate::world_setup::Enemy;

/// Despawn every dead enemy. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_enemy, behavior)) in
        world.query_mut::<(&Enemy, &EnemyBehavior<KinematicBody>)>()
    {
        if behavior.is_dead() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
