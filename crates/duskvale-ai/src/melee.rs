//! Melee enemy: chase, wind up, strike once, dash, recover.

use duskvale_core::components::{Combatant, DamageOutcome};
use duskvale_core::enums::MeleeState;
use duskvale_core::tuning::MeleeTuning;
use duskvale_core::types::{Facing, Vec2};

use crate::capabilities::{Mover, Target, TargetView};
use crate::cooldown::CooldownSet;
use crate::detection::{DetectionGate, DetectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeAction {
    Attack,
    Jump,
}

pub struct MeleeEnemy<M: Mover> {
    combatant: Combatant,
    mover: M,
    tuning: MeleeTuning,
    gate: DetectionGate,
    cooldowns: CooldownSet<MeleeAction>,
    state: MeleeState,
    state_timer: f32,
    grounded: bool,
    detection: DetectionState,
    attacks_completed: u32,
    attacks_landed: u32,
}

impl<M: Mover> MeleeEnemy<M> {
    pub fn new(mover: M, tuning: MeleeTuning) -> Self {
        let combatant = Combatant::new(mover.position(), tuning.max_health);
        Self {
            combatant,
            mover,
            gate: DetectionGate::new(tuning.detection_range, tuning.attack_range),
            tuning,
            cooldowns: CooldownSet::new(&[MeleeAction::Attack, MeleeAction::Jump]),
            state: MeleeState::Chasing,
            state_timer: 0.0,
            grounded: false,
            detection: DetectionState::default(),
            attacks_completed: 0,
            attacks_landed: 0,
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
        self.state != MeleeState::Chasing
    }

    pub fn state(&self) -> MeleeState {
        self.state
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

    /// Strikes that reached the damage threshold, hit or miss.
    pub fn attacks_completed(&self) -> u32 {
        self.attacks_completed
    }

    /// Strikes that actually damaged the target.
    pub fn attacks_landed(&self) -> u32 {
        self.attacks_landed
    }

    pub fn attack_cooldown_remaining(&self) -> f32 {
        self.cooldowns.remaining(MeleeAction::Attack)
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
            log::info!("melee enemy killed at {:?}", self.combatant.position);
            self.set_horizontal_velocity(0.0);
        }
        outcome
    }

    /// Advance one tick.
    pub fn update(&mut self, dt: f32, target: &mut dyn Target) {
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
        self.state_timer += dt;

        match self.state {
            MeleeState::Chasing => self.update_chase(&view),
            MeleeState::Attacking => self.update_attack(&view, target),
            MeleeState::DashTail => self.update_dash_tail(),
        }
    }

    fn update_chase(&mut self, view: &TargetView) {
        self.detection = self.gate.observe(&mut self.combatant, view, false);

        if !self.detection.target_detected {
            self.set_horizontal_velocity(0.0);
            return;
        }

        if self.cooldowns.is_ready(MeleeAction::Attack) && self.detection.target_in_attack_range {
            // Hold still for the windup; facing is frozen from here on.
            self.set_horizontal_velocity(0.0);
            self.set_state(MeleeState::Attacking);
            return;
        }

        if self.detection.distance > self.tuning.attack_range {
            let to_target = view.position - self.combatant.position;
            let direction = if to_target.x.abs() > f32::EPSILON {
                to_target.x.signum()
            } else {
                0.0
            };
            self.set_horizontal_velocity(direction * self.tuning.move_speed);

            if to_target.y > self.tuning.jump_threshold
                && self.grounded
                && self.cooldowns.is_ready(MeleeAction::Jump)
            {
                self.mover
                    .apply_impulse(Vec2::new(0.0, self.tuning.jump_impulse));
                self.cooldowns
                    .start(MeleeAction::Jump, self.tuning.jump_cooldown);
                self.grounded = false;
            }
        } else {
            self.set_horizontal_velocity(0.0);
        }
    }

    fn update_attack(&mut self, view: &TargetView, target: &mut dyn Target) {
        self.detection = self.gate.observe(&mut self.combatant, view, true);
        self.set_horizontal_velocity(0.0);

        if self.state_timer < self.tuning.strike_delay {
            return;
        }

        // Leaving Attacking right away keeps this edge-triggered.
        self.attacks_completed += 1;
        if self.detection.target_in_attack_range {
            target.take_damage(self.tuning.attack_damage);
            self.attacks_landed += 1;
        }
        self.cooldowns
            .start(MeleeAction::Attack, self.tuning.attack_cooldown);
        self.set_horizontal_velocity(self.combatant.facing.sign() * self.tuning.dash_speed);
        self.set_state(MeleeState::DashTail);
    }

    fn update_dash_tail(&mut self) {
        if self.state_timer >= self.tuning.dash_tail_secs {
            self.set_horizontal_velocity(0.0);
            self.set_state(MeleeState::Chasing);
            return;
        }
        let vx = self.mover.linear_velocity().x * self.tuning.dash_decay;
        self.set_horizontal_velocity(vx);
    }

    fn set_state(&mut self, next: MeleeState) {
        if next != self.state {
            log::debug!("melee enemy: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        self.state_timer = 0.0;
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        let vy = self.mover.linear_velocity().y;
        self.mover.set_linear_velocity(Vec2::new(vx, vy));
    }
}
