//! Straight-line projectiles and the pool that owns them after spawn.

use duskvale_core::enums::ExpiryReason;
use duskvale_core::tuning::ProjectileTuning;
use duskvale_core::types::Vec2;

use crate::capabilities::{ProjectileSink, Target, WorldQuery};
use crate::cooldown::CooldownTimer;

/// What a shooter asks the sink to create.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub origin: Vec2,
    /// Unit direction.
    pub direction: Vec2,
    pub speed: f32,
    pub damage: f32,
    pub lifetime: f32,
    pub hit_radius: f32,
}

impl ProjectileSpawn {
    pub fn from_tuning(origin: Vec2, direction: Vec2, tuning: &ProjectileTuning) -> Self {
        Self {
            origin,
            direction,
            speed: tuning.speed,
            damage: tuning.damage,
            lifetime: tuning.lifetime,
            hit_radius: tuning.hit_radius,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec2,
    velocity: Vec2,
    damage: f32,
    hit_radius: f32,
    lifetime: CooldownTimer,
    expired: Option<ExpiryReason>,
}

impl Projectile {
    pub fn new(spawn: ProjectileSpawn) -> Self {
        Self {
            position: spawn.origin,
            velocity: spawn.direction * spawn.speed,
            damage: spawn.damage,
            hit_radius: spawn.hit_radius,
            lifetime: CooldownTimer::new(spawn.lifetime),
            expired: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn remaining_lifetime(&self) -> f32 {
        self.lifetime.remaining()
    }

    pub fn is_alive(&self) -> bool {
        self.expired.is_none()
    }

    pub fn expiry_reason(&self) -> Option<ExpiryReason> {
        self.expired
    }

    /// Mark the projectile dead. Returns false if it already was.
    pub fn expire(&mut self, reason: ExpiryReason) -> bool {
        if self.expired.is_some() {
            return false;
        }
        log::trace!("projectile expired at {:?}: {:?}", self.position, reason);
        self.expired = Some(reason);
        true
    }

    /// Advance one tick. Returns the expiry reason if the projectile died
    /// during this call.
    pub fn update(
        &mut self,
        dt: f32,
        target: &mut dyn Target,
        world: Option<&dyn WorldQuery>,
    ) -> Option<ExpiryReason> {
        if !self.is_alive() {
            return None;
        }

        self.position += self.velocity * dt;

        self.lifetime.tick(dt);
        if self.lifetime.is_ready() {
            self.expire(ExpiryReason::Lifetime);
            return self.expired;
        }

        if target.is_alive() && self.position.distance(target.position()) <= self.hit_radius {
            target.take_damage(self.damage);
            self.expire(ExpiryReason::Hit);
            return self.expired;
        }

        if world.is_some_and(|w| w.is_solid(self.position)) {
            self.expire(ExpiryReason::WorldCollision);
            return self.expired;
        }

        None
    }
}

/// Shared owner of every live projectile.
#[derive(Debug, Clone, Default)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    /// Advance every projectile and drop the dead ones. Returns the expiry
    /// reason of each projectile removed this tick.
    pub fn update(
        &mut self,
        dt: f32,
        target: &mut dyn Target,
        world: Option<&dyn WorldQuery>,
    ) -> Vec<ExpiryReason> {
        let mut expired = Vec::new();
        for projectile in &mut self.projectiles {
            if let Some(reason) = projectile.update(dt, target, world) {
                expired.push(reason);
            }
        }
        self.projectiles.retain(Projectile::is_alive);
        expired
    }
}

impl ProjectileSink for ProjectilePool {
    fn spawn(&mut self, request: ProjectileSpawn) {
        self.projectiles.push(Projectile::new(request));
    }
}

impl ProjectileSink for Vec<ProjectileSpawn> {
    fn spawn(&mut self, request: ProjectileSpawn) {
        self.push(request);
    }
}
