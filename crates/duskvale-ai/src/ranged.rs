//! Ranged enemy: keep a stand-off band and fire on a cooldown.

use duskvale_core::components::{Combatant, DamageOutcome};
use duskvale_core::tuning::{ProjectileTuning, RangedTuning};
use duskvale_core::types::{Facing, Vec2};

use crate::capabilities::{Mover, ProjectileSink, Target, TargetView};
use crate::cooldown::CooldownSet;
use crate::detection::{DetectionGate, DetectionState};
use crate::projectile::ProjectileSpawn;

/// How long after a shot the shooter reports itself as attacking.
const RECOIL_SECS: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangedAction {
    Shoot,
    Recoil,
}

pub struct RangedEnemy<M: Mover> {
    combatant: Combatant,
    mover: M,
    tuning: RangedTuning,
    projectile: ProjectileTuning,
    gate: DetectionGate,
    cooldowns: CooldownSet<RangedAction>,
    grounded: bool,
    detection: DetectionState,
    shots_fired: u32,
}

impl<M: Mover> RangedEnemy<M> {
    pub fn new(mover: M, tuning: RangedTuning, projectile: ProjectileTuning) -> Self {
        let combatant = Combatant::new(mover.position(), tuning.max_health);
        Self {
            combatant,
            mover,
            // Anything detected is in range to shoot.
            gate: DetectionGate::new(tuning.detection_range, tuning.detection_range),
            tuning,
            projectile,
            cooldowns: CooldownSet::new(&[RangedAction::Shoot, RangedAction::Recoil]),
            grounded: false,
            detection: DetectionState::default(),
            shots_fired: 0,
        }
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn position(&self) -> Vec2 {
        self.combatant.position
    }

    pub fn facing(&self) -> Facing {
        self.combatant.facing
    }

    pub fn current_health(&self) -> f32 {
        self.combatant.current_health()
    }

    pub fn max_health(&self) -> f32 {
        self.combatant.max_health()
    }

    pub fn is_dead(&self) -> bool {
        self.combatant.is_dead()
    }

    pub fn is_attacking(&self) -> bool {
        !self.cooldowns.is_ready(RangedAction::Recoil)
    }

    pub fn detection(&self) -> DetectionState {
        self.detection
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        let outcome = self.combatant.take_damage(amount);
        if outcome == DamageOutcome::Killed {
            log::info!("ranged enemy killed at {:?}", self.combatant.position);
            self.set_horizontal_velocity(0.0);
        }
        outcome
    }

    /// Advance one tick. New projectiles go to `sink`; the shooter forgets
    /// them once spawned.
    pub fn update(&mut self, dt: f32, target: &dyn Target, sink: &mut dyn ProjectileSink) {
        if self.combatant.is_dead() {
            return;
        }
        self.combatant.position = self.mover.position();

        let view = TargetView::capture(target);
        if !view.alive {
            self.detection = DetectionState::default();
            return;
        }

        self.cooldowns.tick(dt);
        self.detection = self.gate.observe(&mut self.combatant, &view, false);

        if !self.detection.target_detected {
            self.set_horizontal_velocity(0.0);
            return;
        }

        self.keep_distance(&view);

        if self.cooldowns.is_ready(RangedAction::Shoot) {
            self.shoot(&view, sink);
        }
    }

    fn keep_distance(&mut self, view: &TargetView) {
        let dx = view.position.x - self.combatant.position.x;
        let toward = if dx.abs() > f32::EPSILON {
            dx.signum()
        } else {
            0.0
        };
        let distance = self.detection.distance;

        let vx = if distance < self.tuning.retreat_distance {
            -toward * self.tuning.move_speed
        } else if distance > self.tuning.preferred_distance {
            toward * self.tuning.move_speed
        } else {
            0.0
        };
        self.set_horizontal_velocity(vx);
    }

    fn shoot(&mut self, view: &TargetView, sink: &mut dyn ProjectileSink) {
        let origin = self.combatant.position;
        let direction = (view.position - origin)
            .try_normalize()
            .unwrap_or(Vec2::new(self.combatant.facing.sign(), 0.0));

        sink.spawn(ProjectileSpawn::from_tuning(
            origin,
            direction,
            &self.projectile,
        ));
        self.shots_fired += 1;
        self.cooldowns
            .start(RangedAction::Shoot, self.tuning.shoot_cooldown);
        self.cooldowns.start(RangedAction::Recoil, RECOIL_SECS);
        log::trace!("ranged enemy fired toward {:?}", direction);
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        let vy = self.mover.linear_velocity().y;
        self.mover.set_linear_velocity(Vec2::new(vx, vy));
    }
}
