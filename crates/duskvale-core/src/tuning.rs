//! Runtime tuning for every combatant type.
//!
//! Defaults come from [`crate::constants`]. Every struct is `serde(default)`,
//! so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors that can occur when loading or validating tuning data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range.
    #[error("Invalid tuning value '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or positive, got {value}"),
        })
    }
}

fn require_fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must lie in 0.0..=1.0, got {value}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub invulnerable_secs: f32,
    pub attack_damage: f32,
    pub attack_reach: f32,
    pub attack_cooldown: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            move_speed: PLAYER_MOVE_SPEED,
            jump_impulse: PLAYER_JUMP_IMPULSE,
            invulnerable_secs: PLAYER_INVULNERABLE_SECS,
            attack_damage: PLAYER_ATTACK_DAMAGE,
            attack_reach: PLAYER_ATTACK_REACH,
            attack_cooldown: PLAYER_ATTACK_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    pub strike_delay: f32,
    pub dash_speed: f32,
    /// Per-tick velocity multiplier during the dash tail.
    pub dash_decay: f32,
    pub dash_tail_secs: f32,
    pub jump_threshold: f32,
    pub jump_impulse: f32,
    pub jump_cooldown: f32,
}

impl Default for MeleeTuning {
    fn default() -> Self {
        Self {
            max_health: MELEE_MAX_HEALTH,
            move_speed: MELEE_MOVE_SPEED,
            detection_range: MELEE_DETECTION_RANGE,
            attack_range: MELEE_ATTACK_RANGE,
            attack_damage: MELEE_ATTACK_DAMAGE,
            attack_cooldown: MELEE_ATTACK_COOLDOWN,
            strike_delay: MELEE_STRIKE_DELAY,
            dash_speed: MELEE_DASH_SPEED,
            dash_decay: MELEE_DASH_DECAY,
            dash_tail_secs: MELEE_DASH_TAIL_SECS,
            jump_threshold: MELEE_JUMP_THRESHOLD,
            jump_impulse: MELEE_JUMP_IMPULSE,
            jump_cooldown: MELEE_JUMP_COOLDOWN,
        }
    }
}

impl MeleeTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("melee.max_health", self.max_health)?;
        require_non_negative("melee.move_speed", self.move_speed)?;
        require_positive("melee.attack_range", self.attack_range)?;
        if self.detection_range < self.attack_range {
            return Err(ConfigError::Invalid {
                field: "melee.detection_range",
                reason: format!(
                    "must be at least attack_range ({}), got {}",
                    self.attack_range, self.detection_range
                ),
            });
        }
        require_non_negative("melee.attack_damage", self.attack_damage)?;
        require_positive("melee.attack_cooldown", self.attack_cooldown)?;
        require_non_negative("melee.strike_delay", self.strike_delay)?;
        require_fraction("melee.dash_decay", self.dash_decay)?;
        require_non_negative("melee.dash_tail_secs", self.dash_tail_secs)?;
        require_non_negative("melee.jump_cooldown", self.jump_cooldown)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangedTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    /// 0.0 disables backing off.
    pub retreat_distance: f32,
    pub preferred_distance: f32,
    pub shoot_cooldown: f32,
}

impl Default for RangedTuning {
    fn default() -> Self {
        Self {
            max_health: RANGED_MAX_HEALTH,
            move_speed: RANGED_MOVE_SPEED,
            detection_range: RANGED_DETECTION_RANGE,
            retreat_distance: RANGED_RETREAT_DISTANCE,
            preferred_distance: RANGED_PREFERRED_DISTANCE,
            shoot_cooldown: RANGED_SHOOT_COOLDOWN,
        }
    }
}

impl RangedTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("ranged.max_health", self.max_health)?;
        require_non_negative("ranged.move_speed", self.move_speed)?;
        require_positive("ranged.detection_range", self.detection_range)?;
        require_non_negative("ranged.retreat_distance", self.retreat_distance)?;
        if self.preferred_distance < self.retreat_distance {
            return Err(ConfigError::Invalid {
                field: "ranged.preferred_distance",
                reason: format!(
                    "must be at least retreat_distance ({}), got {}",
                    self.retreat_distance, self.preferred_distance
                ),
            });
        }
        require_positive("ranged.shoot_cooldown", self.shoot_cooldown)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub speed: f32,
    pub damage: f32,
    pub lifetime: f32,
    pub hit_radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            lifetime: PROJECTILE_LIFETIME,
            hit_radius: PROJECTILE_HIT_RADIUS,
        }
    }
}

impl ProjectileTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("projectile.speed", self.speed)?;
        require_non_negative("projectile.damage", self.damage)?;
        require_positive("projectile.lifetime", self.lifetime)?;
        require_positive("projectile.hit_radius", self.hit_radius)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub hold_distance: f32,
    pub melee_range: f32,
    pub medium_range: f32,
    pub a1_chance: f32,
    pub base_cooldown: f32,
    pub post_phase_cooldown: f32,
    pub stagger_secs: f32,
    pub a1_charge_delay: f32,
    pub a1_lunge_duration: f32,
    pub a1_lunge_speed: f32,
    pub a1_damage: f32,
    pub a1_reach: f32,
    pub a2_duration: f32,
    pub a2_damage: f32,
    pub a2_reach: f32,
    pub a3_duration: f32,
    pub a3_damage: f32,
    pub a3_rear_reach: f32,
    pub a3_area_radius: f32,
    pub a4_duration: f32,
    pub a4_push: f32,
    pub hitbox_height: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: BOSS_MAX_HEALTH,
            move_speed: BOSS_MOVE_SPEED,
            detection_range: BOSS_DETECTION_RANGE,
            hold_distance: BOSS_HOLD_DISTANCE,
            melee_range: BOSS_MELEE_RANGE,
            medium_range: BOSS_MEDIUM_RANGE,
            a1_chance: BOSS_A1_CHANCE,
            base_cooldown: BOSS_BASE_COOLDOWN,
            post_phase_cooldown: BOSS_POST_PHASE_COOLDOWN,
            stagger_secs: BOSS_STAGGER_SECS,
            a1_charge_delay: BOSS_A1_CHARGE_DELAY,
            a1_lunge_duration: BOSS_A1_LUNGE_DURATION,
            a1_lunge_speed: BOSS_A1_LUNGE_SPEED,
            a1_damage: BOSS_A1_DAMAGE,
            a1_reach: BOSS_A1_REACH,
            a2_duration: BOSS_A2_DURATION,
            a2_damage: BOSS_A2_DAMAGE,
            a2_reach: BOSS_A2_REACH,
            a3_duration: BOSS_A3_DURATION,
            a3_damage: BOSS_A3_DAMAGE,
            a3_rear_reach: BOSS_A3_REAR_REACH,
            a3_area_radius: BOSS_A3_AREA_RADIUS,
            a4_duration: BOSS_A4_DURATION,
            a4_push: BOSS_A4_PUSH,
            hitbox_height: BOSS_HITBOX_HEIGHT,
        }
    }
}

impl BossTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("boss.max_health", self.max_health)?;
        require_non_negative("boss.move_speed", self.move_speed)?;
        require_positive("boss.detection_range", self.detection_range)?;
        if self.melee_range > self.medium_range {
            return Err(ConfigError::Invalid {
                field: "boss.melee_range",
                reason: format!(
                    "must not exceed medium_range ({}), got {}",
                    self.medium_range, self.melee_range
                ),
            });
        }
        require_fraction("boss.a1_chance", self.a1_chance)?;
        require_non_negative("boss.base_cooldown", self.base_cooldown)?;
        require_non_negative("boss.post_phase_cooldown", self.post_phase_cooldown)?;
        require_positive("boss.stagger_secs", self.stagger_secs)?;
        require_non_negative("boss.a1_charge_delay", self.a1_charge_delay)?;
        require_positive("boss.a1_lunge_duration", self.a1_lunge_duration)?;
        require_positive("boss.a2_duration", self.a2_duration)?;
        require_positive("boss.a3_duration", self.a3_duration)?;
        require_positive("boss.a4_duration", self.a4_duration)?;
        Ok(())
    }
}

/// All tuning groups together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub melee: MeleeTuning,
    pub ranged: RangedTuning,
    pub projectile: ProjectileTuning,
    pub boss: BossTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("player.max_health", self.player.max_health)?;
        require_non_negative("player.invulnerable_secs", self.player.invulnerable_secs)?;
        require_non_negative("player.attack_cooldown", self.player.attack_cooldown)?;
        self.melee.validate()?;
        self.ranged.validate()?;
        self.projectile.validate()?;
        self.boss.validate()?;
        Ok(())
    }
}
