//! Physics step: gravity, integration and arena collision.
//!
//! Bodies stand on the floor and are stopped by the walls. Pillars block a
//! body walking into them but do not support standing on top.

use hecs::World;

use duskvale_ai::behavior::EnemyBehavior;
use duskvale_ai::boss::BossController;
use duskvale_core::constants::GRAVITY;
use duskvale_core::types::Vec2;

use crate::arena::Arena;
use crate::body::KinematicBody;
use crate::player::Player;
use crate::world_setup::Enemy;

/// Integrate one body. Returns whether it ends the step on the floor.
pub fn step_body(body: &mut KinematicBody, arena: &Arena, dt: f32) -> bool {
    body.velocity.y -= GRAVITY * dt;

    let previous_x = body.position.x;
    body.position += body.velocity * dt;

    if body.position.x < arena.left {
        body.position.x = arena.left;
        body.velocity.x = 0.0;
    } else if body.position.x > arena.right {
        body.position.x = arena.right;
        body.velocity.x = 0.0;
    }

    let feet_y = body.feet_y().max(arena.floor_y);
    let entering_pillar = arena.pillar_at(Vec2::new(body.position.x, feet_y)).is_some()
        && arena.pillar_at(Vec2::new(previous_x, feet_y)).is_none();
    if entering_pillar {
        body.position.x = previous_x;
        body.velocity.x = 0.0;
    }

    let rest_y = arena.floor_y + body.half_height;
    if body.position.y <= rest_y {
        body.position.y = rest_y;
        body.velocity.y = body.velocity.y.max(0.0);
        true
    } else {
        false
    }
}

/// Step every body and report ground contact back to its owner.
pub fn run(
    world: &mut World,
    player: &mut Player,
    boss: Option<&mut BossController<KinematicBody>>,
    arena: &Arena,
    dt: f32,
) {
    let grounded = step_body(player.body_mut(), arena, dt);
    player.set_grounded(grounded);
    player.sync();

    for (_entity, (_enemy, behavior)) in
        world.query_mut::<(&Enemy, &mut EnemyBehavior<KinematicBody>)>()
    {
        let grounded = step_body(behavior.mover_mut(), arena, dt);
        behavior.set_grounded(grounded);
    }

    if let Some(boss) = boss {
        let grounded = step_body(boss.mover_mut(), arena, dt);
        boss.set_grounded(grounded);
    }

    log::trace!("physics step: player at {:?}", player.body().position);
}
