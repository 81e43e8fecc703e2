//! Boss encounter state machine.
//!
//! One state is active at a time and every transition goes through
//! `set_state`, which resets the state-local timer. Each tick the phase check
//! runs first and may preempt whatever is in progress with the one-time
//! ATTACK4 shove; only then does the normal per-state dispatch run.
//!
//! | State   | Exit                                  | While active                      |
//! |---------|---------------------------------------|-----------------------------------|
//! | Idle    | attack selected                       | approach while cooling down       |
//! | Attack1 | charge + lunge elapsed -> Idle        | lunge: front hitbox every tick    |
//! | Attack2 | `a2_duration` -> Idle                 | rear hitbox every tick            |
//! | Attack3 | `a3_duration` -> Idle                 | rear half, then area half         |
//! | Attack4 | `a4_duration` -> Idle (long cooldown) | push target away, no damage       |
//! | Stagger | `stagger_secs` -> Idle                | nothing                           |
//! | Dead    | never                                 | nothing                           |

use rand::Rng;

use duskvale_core::components::{Combatant, DamageOutcome};
use duskvale_core::constants::*;
use duskvale_core::enums::{BossPhase, BossState};
use duskvale_core::tuning::BossTuning;
use duskvale_core::types::{Facing, Vec2};

use crate::capabilities::{Mover, Target, TargetView};
use crate::cooldown::CooldownTimer;
use crate::detection::{DetectionGate, DetectionState};
use crate::hitbox::Hitbox;

/// What the boss wants to do from Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossDecision {
    Attack(BossState),
    Approach,
}

/// Pick between the lunge and the sweep given a uniform roll in `0.0..1.0`.
pub fn medium_range_pick(roll: f32, a1_chance: f32) -> BossState {
    if roll < a1_chance {
        BossState::Attack1
    } else {
        BossState::Attack3
    }
}

pub struct BossController<M: Mover> {
    combatant: Combatant,
    mover: M,
    tuning: BossTuning,
    gate: DetectionGate,
    state: BossState,
    state_timer: f32,
    phase: BossPhase,
    cooldown: CooldownTimer,
    grounded: bool,
    detection: DetectionState,
}

impl<M: Mover> BossController<M> {
    pub fn new(mover: M, tuning: BossTuning) -> Self {
        let combatant = Combatant::new(mover.position(), tuning.max_health);
        Self {
            combatant,
            mover,
            gate: DetectionGate::new(tuning.detection_range, tuning.medium_range),
            tuning,
            state: BossState::Idle,
            state_timer: 0.0,
            phase: BossPhase::Phase1,
            cooldown: CooldownTimer::default(),
            grounded: false,
            detection: DetectionState::default(),
        }
    }

    /// Spawn facing a given way.
    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.combatant.facing = facing;
        self
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
        self.state == BossState::Dead
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attack()
    }

    pub fn state(&self) -> BossState {
        self.state
    }

    pub fn state_timer(&self) -> f32 {
        self.state_timer
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining()
    }

    pub fn detection(&self) -> DetectionState {
        self.detection
    }

    /// Current tuning, including any phase scaling.
    pub fn tuning(&self) -> &BossTuning {
        &self.tuning
    }

    pub fn move_speed(&self) -> f32 {
        self.tuning.move_speed
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    /// Apply damage. Any hit that does not kill staggers the boss, even in
    /// the middle of an attack.
    pub fn receive_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.state == BossState::Dead {
            return DamageOutcome::Ignored;
        }
        let outcome = self.combatant.take_damage(amount);
        match outcome {
            DamageOutcome::Killed => {
                log::info!("boss defeated");
                self.set_horizontal_velocity(0.0);
                self.set_state(BossState::Dead);
            }
            DamageOutcome::Wounded { .. } => {
                self.set_horizontal_velocity(0.0);
                self.set_state(BossState::Stagger);
            }
            DamageOutcome::Ignored => {}
        }
        outcome
    }

    /// Advance one tick. `rng` is only drawn from when choosing between the
    /// lunge and the sweep.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, target: &mut dyn Target, rng: &mut R) {
        if self.state == BossState::Dead {
            return;
        }
        self.combatant.position = self.mover.position();

        let view = TargetView::capture(target);
        if !view.alive {
            self.detection = DetectionState::default();
            return;
        }

        self.check_phase_transition();

        self.state_timer += dt;
        self.cooldown.tick(dt);
        self.detection = self.gate.measure(&self.combatant, &view);

        match self.state {
            BossState::Idle => self.update_idle(&view, rng),
            BossState::Attack1 => self.update_attack1(&view, target),
            BossState::Attack2 => self.update_attack2(&view, target),
            BossState::Attack3 => self.update_attack3(&view, target),
            BossState::Attack4 => self.update_attack4(dt, &view, target),
            BossState::Stagger => self.update_stagger(),
            BossState::Dead => {}
        }
    }

    /// Decide the next action from Idle with the cooldown elapsed.
    pub fn choose_action<R: Rng + ?Sized>(&self, view: &TargetView, rng: &mut R) -> BossDecision {
        let distance = self.detection.distance;
        if !self.detection.target_detected {
            return BossDecision::Approach;
        }

        let behind = self
            .combatant
            .facing
            .is_behind(self.combatant.position.x, view.position.x);

        if behind && distance < self.tuning.melee_range {
            BossDecision::Attack(BossState::Attack2)
        } else if distance < self.tuning.medium_range {
            let roll: f32 = rng.gen();
            BossDecision::Attack(medium_range_pick(roll, self.tuning.a1_chance))
        } else {
            BossDecision::Approach
        }
    }

    fn check_phase_transition(&mut self) {
        if self.phase != BossPhase::Phase1 {
            return;
        }
        if self.combatant.current_health() > self.combatant.max_health() / 2.0 {
            return;
        }

        self.phase = BossPhase::Phase2;
        self.tuning.move_speed *= PHASE2_MOVE_MULT;
        self.tuning.a1_charge_delay *= PHASE2_CHARGE_DELAY_MULT;
        self.tuning.a1_lunge_speed *= PHASE2_LUNGE_SPEED_MULT;
        self.tuning.a3_duration *= PHASE2_A3_DURATION_MULT;
        self.tuning.base_cooldown *= PHASE2_COOLDOWN_MULT;
        log::info!(
            "boss entered {:?} at {} hp",
            self.phase,
            self.combatant.current_health()
        );

        self.set_horizontal_velocity(0.0);
        self.set_state(BossState::Attack4);
    }

    fn update_idle<R: Rng + ?Sized>(&mut self, view: &TargetView, rng: &mut R) {
        if !self.cooldown.is_ready() {
            self.approach(view);
            return;
        }
        match self.choose_action(view, rng) {
            BossDecision::Attack(state) => self.begin_attack(state, view),
            BossDecision::Approach => self.approach(view),
        }
    }

    fn begin_attack(&mut self, state: BossState, view: &TargetView) {
        // The rear kick keeps its back to the target; the others lock facing
        // toward it for the whole attack.
        if state != BossState::Attack2 {
            self.combatant.face_toward(view.position.x);
        }
        self.set_horizontal_velocity(0.0);
        self.set_state(state);
    }

    fn approach(&mut self, view: &TargetView) {
        if !self.detection.target_detected {
            self.set_horizontal_velocity(0.0);
            return;
        }
        self.combatant.face_toward(view.position.x);
        let gap = (view.position.x - self.combatant.position.x).abs();
        if gap > self.tuning.hold_distance {
            self.set_horizontal_velocity(self.combatant.facing.sign() * self.tuning.move_speed);
        } else {
            self.set_horizontal_velocity(0.0);
        }
    }

    fn update_attack1(&mut self, view: &TargetView, target: &mut dyn Target) {
        let charge = self.tuning.a1_charge_delay;
        let lunge_end = charge + self.tuning.a1_lunge_duration;

        if self.state_timer < charge {
            self.set_horizontal_velocity(0.0);
        } else if self.state_timer < lunge_end {
            self.set_horizontal_velocity(self.combatant.facing.sign() * self.tuning.a1_lunge_speed);
            let hitbox = Hitbox::Front {
                reach: self.tuning.a1_reach,
                height: self.tuning.hitbox_height,
            };
            self.strike(hitbox, self.tuning.a1_damage, view, target);
        } else {
            self.finish_attack();
        }
    }

    fn update_attack2(&mut self, view: &TargetView, target: &mut dyn Target) {
        if self.state_timer >= self.tuning.a2_duration {
            self.finish_attack();
            return;
        }
        self.set_horizontal_velocity(0.0);
        let hitbox = Hitbox::Rear {
            reach: self.tuning.a2_reach,
            height: self.tuning.hitbox_height,
        };
        self.strike(hitbox, self.tuning.a2_damage, view, target);
    }

    fn update_attack3(&mut self, view: &TargetView, target: &mut dyn Target) {
        let duration = self.tuning.a3_duration;
        if self.state_timer >= duration {
            self.finish_attack();
            return;
        }
        self.set_horizontal_velocity(0.0);
        let hitbox = if self.state_timer < duration / 2.0 {
            Hitbox::Rear {
                reach: self.tuning.a3_rear_reach,
                height: self.tuning.hitbox_height,
            }
        } else {
            Hitbox::Area {
                radius: self.tuning.a3_area_radius,
            }
        };
        self.strike(hitbox, self.tuning.a3_damage, view, target);
    }

    fn update_attack4(&mut self, dt: f32, view: &TargetView, target: &mut dyn Target) {
        if self.state_timer >= self.tuning.a4_duration {
            self.set_state(BossState::Idle);
            self.cooldown.start(self.tuning.post_phase_cooldown);
            return;
        }
        self.set_horizontal_velocity(0.0);
        let dx = view.position.x - self.combatant.position.x;
        let away = if dx.abs() > f32::EPSILON {
            dx.signum()
        } else {
            self.combatant.facing.sign()
        };
        target.apply_impulse(Vec2::new(away * self.tuning.a4_push * dt, 0.0));
    }

    fn update_stagger(&mut self) {
        self.set_horizontal_velocity(0.0);
        if self.state_timer >= self.tuning.stagger_secs {
            self.set_state(BossState::Idle);
        }
    }

    fn strike(&self, hitbox: Hitbox, damage: f32, view: &TargetView, target: &mut dyn Target) {
        if hitbox.contains(self.combatant.position, self.combatant.facing, view.position) {
            target.take_damage(damage);
        }
    }

    fn finish_attack(&mut self) {
        self.set_horizontal_velocity(0.0);
        self.set_state(BossState::Idle);
        self.cooldown.start(self.tuning.base_cooldown);
    }

    fn set_state(&mut self, next: BossState) {
        log::debug!("boss: {:?} -> {:?}", self.state, next);
        self.state = next;
        self.state_timer = 0.0;
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        let vy = self.mover.linear_velocity().y;
        self.mover.set_linear_velocity(Vec2::new(vx, vy));
    }
}
