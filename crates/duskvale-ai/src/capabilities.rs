//! Narrow collaborator interfaces consumed by the controllers.
//!
//! The AI never touches a physics body, a renderer or a projectile store
//! directly. Everything it needs from the outside world goes through these
//! traits, and everything it does to another entity goes through that
//! entity's own mutators.

use duskvale_core::types::Vec2;

use crate::projectile::ProjectileSpawn;

/// Physics handle for a controlled body.
pub trait Mover {
    fn position(&self) -> Vec2;
    fn linear_velocity(&self) -> Vec2;
    fn set_linear_velocity(&mut self, velocity: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// The entity the AI fights (the player).
pub trait Target {
    fn position(&self) -> Vec2;
    fn is_alive(&self) -> bool;
    /// Request damage. The target decides whether it lands.
    fn take_damage(&mut self, amount: f32);
    /// Request a knockback impulse.
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Externally owned collection that takes ownership of new projectiles.
pub trait ProjectileSink {
    fn spawn(&mut self, request: ProjectileSpawn);
}

/// Static world geometry.
pub trait WorldQuery {
    fn is_solid(&self, point: Vec2) -> bool;
}

/// Read-only copy of the target taken at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub position: Vec2,
    pub alive: bool,
}

impl TargetView {
    pub fn capture(target: &dyn Target) -> Self {
        Self {
            position: target.position(),
            alive: target.is_alive(),
        }
    }
}
