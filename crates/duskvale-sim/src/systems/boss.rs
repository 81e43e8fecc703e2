//! Boss system. Reports state and phase changes as combat events.

use rand::Rng;

use duskvale_ai::boss::BossController;
use duskvale_core::components::DamageOutcome;
use duskvale_core::events::CombatEvent;

use crate::body::KinematicBody;
use crate::player::Player;

pub fn run<R: Rng + ?Sized>(
    boss: Option<&mut BossController<KinematicBody>>,
    player: &mut Player,
    rng: &mut R,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let Some(boss) = boss else {
        return;
    };

    let state = boss.state();
    let phase = boss.phase();

    boss.update(dt, player, rng);

    if boss.phase() != phase {
        events.push(CombatEvent::BossPhaseChanged {
            phase: boss.phase(),
        });
    }
    if boss.state() != state {
        events.push(CombatEvent::BossStateChanged {
            from: state,
            to: boss.state(),
        });
    }
}

/// Damage the boss and record what happened.
pub fn apply_damage(
    boss: &mut BossController<KinematicBody>,
    amount: f32,
    events: &mut Vec<CombatEvent>,
) -> DamageOutcome {
    let state = boss.state();
    let outcome = boss.receive_damage(amount);

    match outcome {
        DamageOutcome::Wounded { remaining } => {
            events.push(CombatEvent::BossDamaged { amount, remaining });
        }
        DamageOutcome::Killed => {
            events.push(CombatEvent::BossDamaged {
                amount,
                remaining: 0.0,
            });
        }
        DamageOutcome::Ignored => return outcome,
    }

    if boss.state() != state {
        events.push(CombatEvent::BossStateChanged {
            from: state,
            to: boss.state(),
        });
    }
    if outcome == DamageOutcome::Killed {
        events.push(CombatEvent::BossDefeated);
    }
    outcome
}
