//! Tagged enemy variant, chosen per archetype at construction.

use duskvale_core::components::{Combatant, DamageOutcome};
use duskvale_core::enums::EnemyKind;
use duskvale_core::tuning::{MeleeTuning, ProjectileTuning, RangedTuning};

use crate::capabilities::{Mover, ProjectileSink, Target};
use crate::melee::MeleeEnemy;
use crate::profiles::{get_profile, EnemyProfile};
use crate::ranged::RangedEnemy;

pub enum EnemyBehavior<M: Mover> {
    Melee(MeleeEnemy<M>),
    Ranged(RangedEnemy<M>),
}

impl<M: Mover> EnemyBehavior<M> {
    pub fn for_kind(
        kind: EnemyKind,
        mover: M,
        melee: &MeleeTuning,
        ranged: &RangedTuning,
        projectile: &ProjectileTuning,
    ) -> Self {
        match get_profile(kind, melee, ranged) {
            EnemyProfile::Melee(tuning) => EnemyBehavior::Melee(MeleeEnemy::new(mover, tuning)),
            EnemyProfile::Ranged(tuning) => {
                EnemyBehavior::Ranged(RangedEnemy::new(mover, tuning, projectile.clone()))
            }
        }
    }

    pub fn update(&mut self, dt: f32, target: &mut dyn Target, sink: &mut dyn ProjectileSink) {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.update(dt, target),
            EnemyBehavior::Ranged(enemy) => enemy.update(dt, target, sink),
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.take_damage(amount),
            EnemyBehavior::Ranged(enemy) => enemy.take_damage(amount),
        }
    }

    pub fn combatant(&self) -> &Combatant {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.combatant(),
            EnemyBehavior::Ranged(enemy) => enemy.combatant(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.combatant().is_dead()
    }

    pub fn is_attacking(&self) -> bool {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.is_attacking(),
            EnemyBehavior::Ranged(enemy) => enemy.is_attacking(),
        }
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.set_grounded(grounded),
            EnemyBehavior::Ranged(enemy) => enemy.set_grounded(grounded),
        }
    }

    pub fn mover(&self) -> &M {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.mover(),
            EnemyBehavior::Ranged(enemy) => enemy.mover(),
        }
    }

    pub fn mover_mut(&mut self) -> &mut M {
        match self {
            EnemyBehavior::Melee(enemy) => enemy.mover_mut(),
            EnemyBehavior::Ranged(enemy) => enemy.mover_mut(),
        }
    }
}
