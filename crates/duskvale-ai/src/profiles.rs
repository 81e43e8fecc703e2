//! Archetype-specific enemy tunings.
//!
//! Derived from the base tuning groups so a config override of the base
//! values carries through to every archetype built on them.

use duskvale_core::enums::EnemyKind;
use duskvale_core::tuning::{MeleeTuning, RangedTuning};

/// Which controller an archetype uses.
#[derive(Debug, Clone, PartialEq)]
pub enum EnemyProfile {
    Melee(MeleeTuning),
    Ranged(RangedTuning),
}

/// Get the profile for a given archetype.
pub fn get_profile(kind: EnemyKind, melee: &MeleeTuning, ranged: &RangedTuning) -> EnemyProfile {
    match kind {
        EnemyKind::Grunt => EnemyProfile::Melee(melee.clone()),
        EnemyKind::Brute => EnemyProfile::Melee(MeleeTuning {
            max_health: melee.max_health * 2.5,
            move_speed: melee.move_speed * 0.6,
            attack_range: melee.attack_range * 1.3,
            attack_damage: melee.attack_damage * 2.0,
            attack_cooldown: melee.attack_cooldown * 1.6,
            strike_delay: melee.strike_delay * 1.8,
            dash_speed: melee.dash_speed * 0.5,
            // Too heavy to jump.
            jump_threshold: f32::INFINITY,
            ..melee.clone()
        }),
        EnemyKind::Archer => EnemyProfile::Ranged(ranged.clone()),
    }
}
