//! Projectile system: flight, hits and expiry.

use duskvale_ai::capabilities::WorldQuery;
use duskvale_ai::projectile::ProjectilePool;
use duskvale_core::events::CombatEvent;

use crate::arena::Arena;
use crate::player::Player;

pub fn run(
    projectiles: &mut ProjectilePool,
    player: &mut Player,
    arena: &Arena,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let world: &dyn WorldQuery = arena;
    for reason in projectiles.update(dt, player, Some(world)) {
        events.push(CombatEvent::ProjectileExpired { reason });
    }
}
