//! Shared entity state.
//!
//! `Combatant` is the plain-data aggregate every controller owns. Behavior
//! lives in the controllers, not here; the only logic kept on the struct is
//! what protects its invariants (health bounds, one-way death).

use serde::{Deserialize, Serialize};

use crate::types::{Facing, Vec2};

/// Result of applying damage to a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Already dead, or the amount was not a positive number.
    Ignored,
    /// Took damage and survived.
    Wounded { remaining: f32 },
    /// This hit brought health to zero.
    Killed,
}

impl DamageOutcome {
    pub fn landed(&self) -> bool {
        !matches!(self, DamageOutcome::Ignored)
    }
}

/// Health, position and facing of one entity.
///
/// `0 <= current_health <= max_health` always holds, and `alive` flips to
/// false exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub position: Vec2,
    pub facing: Facing,
    current_health: f32,
    max_health: f32,
    alive: bool,
}

impl Combatant {
    pub fn new(position: Vec2, max_health: f32) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            position,
            facing: Facing::default(),
            current_health: max_health,
            max_health,
            alive: max_health > 0.0,
        }
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Health as a fraction of max (0.0 when max is zero).
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            self.current_health / self.max_health
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    /// Subtract `amount` from health, floored at zero.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        // `!(amount > 0.0)` also rejects NaN.
        if !self.alive || !(amount > 0.0) {
            return DamageOutcome::Ignored;
        }
        self.current_health = (self.current_health - amount).max(0.0);
        if self.current_health <= 0.0 {
            self.alive = false;
            DamageOutcome::Killed
        } else {
            DamageOutcome::Wounded {
                remaining: self.current_health,
            }
        }
    }

    /// Turn toward `target_x`.
    pub fn face_toward(&mut self, target_x: f32) {
        self.facing = Facing::toward(self.position.x, target_x);
    }
}
