//! The player: the single `Target` every enemy fights.

use duskvale_ai::capabilities::{Mover, Target};
use duskvale_ai::cooldown::CooldownTimer;
use duskvale_ai::hitbox::Hitbox;
use duskvale_core::components::{Combatant, DamageOutcome};
use duskvale_core::constants::{PLAYER_ATTACK_HEIGHT, PLAYER_KNOCKBACK_DECAY};
use duskvale_core::events::CombatEvent;
use duskvale_core::tuning::PlayerTuning;
use duskvale_core::types::{Facing, Vec2};

use crate::body::KinematicBody;

pub struct Player {
    combatant: Combatant,
    body: KinematicBody,
    tuning: PlayerTuning,
    move_axis: f32,
    /// Horizontal push from enemies, added on top of walking speed.
    knockback: f32,
    grounded: bool,
    invulnerable: CooldownTimer,
    attack_cooldown: CooldownTimer,
    swing_pending: bool,
    events: Vec<CombatEvent>,
}

impl Player {
    pub fn new(body: KinematicBody, tuning: PlayerTuning) -> Self {
        Self {
            combatant: Combatant::new(body.position, tuning.max_health),
            body,
            tuning,
            move_axis: 0.0,
            knockback: 0.0,
            grounded: false,
            invulnerable: CooldownTimer::default(),
            attack_cooldown: CooldownTimer::default(),
            swing_pending: false,
            events: Vec::new(),
        }
    }

    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn facing(&self) -> Facing {
        self.combatant.facing
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    pub fn is_invulnerable(&self) -> bool {
        !self.invulnerable.is_ready()
    }

    /// True while the swing is recovering.
    pub fn is_attacking(&self) -> bool {
        !self.attack_cooldown.is_ready()
    }

    pub fn can_attack(&self) -> bool {
        self.combatant.is_alive() && self.attack_cooldown.is_ready()
    }

    /// Set the walk axis. Values are clamped to `-1.0..=1.0`; NaN stops.
    pub fn set_move_axis(&mut self, axis: f32) {
        self.move_axis = if axis.is_nan() { 0.0 } else { axis.clamp(-1.0, 1.0) };
    }

    pub fn jump(&mut self) {
        if !self.combatant.is_alive() || !self.grounded {
            return;
        }
        self.body.velocity.y = self.tuning.jump_impulse;
        self.grounded = false;
    }

    /// Start a swing. It resolves during the next player system pass.
    pub fn attack(&mut self) {
        if !self.can_attack() {
            return;
        }
        self.swing_pending = true;
        self.attack_cooldown.start(self.tuning.attack_cooldown);
    }

    /// Consume a pending swing, returning its hitbox and damage.
    pub fn take_swing(&mut self) -> Option<(Hitbox, f32)> {
        if !std::mem::take(&mut self.swing_pending) || !self.combatant.is_alive() {
            return None;
        }
        let hitbox = Hitbox::Front {
            reach: self.tuning.attack_reach,
            height: PLAYER_ATTACK_HEIGHT,
        };
        Some((hitbox, self.tuning.attack_damage))
    }

    /// Advance timers and set the walking velocity for this tick.
    pub fn update(&mut self, dt: f32) {
        self.invulnerable.tick(dt);
        self.attack_cooldown.tick(dt);
        self.combatant.position = self.body.position;

        if !self.combatant.is_alive() {
            self.knockback = 0.0;
            self.body.velocity.x = 0.0;
            return;
        }

        if self.move_axis > 0.0 {
            self.combatant.facing = Facing::Right;
        } else if self.move_axis < 0.0 {
            self.combatant.facing = Facing::Left;
        }
        self.body.velocity.x = self.move_axis * self.tuning.move_speed + self.knockback;
        self.knockback *= PLAYER_KNOCKBACK_DECAY;
    }

    /// Copy the integrated body position back into the combatant.
    pub fn sync(&mut self) {
        self.combatant.position = self.body.position;
    }

    pub fn drain_events(&mut self, into: &mut Vec<CombatEvent>) {
        into.append(&mut self.events);
    }
}

impl Target for Player {
    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    fn take_damage(&mut self, amount: f32) {
        if self.is_invulnerable() {
            return;
        }
        match self.combatant.take_damage(amount) {
            DamageOutcome::Wounded { remaining } => {
                self.invulnerable.start(self.tuning.invulnerable_secs);
                self.events.push(CombatEvent::PlayerDamaged { amount, remaining });
            }
            DamageOutcome::Killed => {
                log::info!("player died");
                self.events.push(CombatEvent::PlayerDamaged {
                    amount,
                    remaining: 0.0,
                });
                self.events.push(CombatEvent::PlayerDied);
            }
            DamageOutcome::Ignored => {}
        }
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if !self.combatant.is_alive() {
            return;
        }
        self.knockback += impulse.x;
        self.body.apply_impulse(Vec2::new(0.0, impulse.y));
    }
}
