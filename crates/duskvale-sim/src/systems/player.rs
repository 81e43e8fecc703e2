//! Player system: timers, walking velocity and resolution of the swing.

use hecs::World;

use duskvale_ai::behavior::EnemyBehavior;
use duskvale_ai::boss::BossController;
use duskvale_ai::capabilities::Mover;
use duskvale_core::components::DamageOutcome;
use duskvale_core::events::CombatEvent;

use crate::body::KinematicBody;
use crate::player::Player;
use crate::systems;
use crate::world_setup::SpawnInfo;

/// Advance the player and land a pending swing on every enemy (and the boss)
/// inside its hitbox.
pub fn run(
    world: &mut World,
    player: &mut Player,
    boss: Option<&mut BossController<KinematicBody>>,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    player.update(dt);

    let Some((hitbox, damage)) = player.take_swing() else {
        return;
    };
    let origin = player.body().position;
    let facing = player.facing();

    for (_entity, (info, behavior)) in
        world.query_mut::<(&SpawnInfo, &mut EnemyBehavior<KinematicBody>)>()
    {
        if behavior.is_dead() || !hitbox.contains(origin, facing, behavior.mover().position()) {
            continue;
        }
        match behavior.take_damage(damage) {
            DamageOutcome::Wounded { .. } => {
                events.push(CombatEvent::EnemyDamaged {
                    id: info.id,
                    amount: damage,
                });
            }
            DamageOutcome::Killed => {
                log::info!("{:?} #{} killed", info.kind, info.id);
                events.push(CombatEvent::EnemyDamaged {
                    id: info.id,
                    amount: damage,
                });
                events.push(CombatEvent::EnemyKilled {
                    id: info.id,
                    kind: info.kind,
                });
            }
            DamageOutcome::Ignored => {}
        }
    }

    if let Some(boss) = boss {
        if !boss.is_dead() && hitbox.contains(origin, facing, boss.mover().position()) {
            systems::boss::apply_damage(boss, damage, events);
        }
    }
}
