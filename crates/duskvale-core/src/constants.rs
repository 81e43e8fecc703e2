//! Simulation constants and tuning defaults.
//!
//! World units are pixels, +y is up. Durations are seconds.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Remaining time at or below this counts as elapsed.
pub const TIMER_EPSILON: f32 = 1e-4;

// --- World ---

/// Downward acceleration applied by the physics step (px/s²).
pub const GRAVITY: f32 = 980.0;

/// Height of the arena floor.
pub const FLOOR_Y: f32 = 0.0;

/// Horizontal arena bounds.
pub const ARENA_LEFT: f32 = -640.0;
pub const ARENA_RIGHT: f32 = 1280.0;

/// Half the height of every body; a grounded body's centre sits this far
/// above the floor.
pub const BODY_HALF_HEIGHT: f32 = 16.0;

/// Upper bound for `EncounterConfig::time_scale`.
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- Default layout ---

pub const PLAYER_SPAWN_X: f32 = 0.0;
pub const BOSS_SPAWN_X: f32 = 900.0;
/// Maximum random horizontal offset applied to regular enemy spawns.
pub const ENEMY_SPAWN_JITTER: f32 = 16.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MOVE_SPEED: f32 = 180.0;
pub const PLAYER_JUMP_IMPULSE: f32 = 420.0;
/// Invulnerability window after taking a hit.
pub const PLAYER_INVULNERABLE_SECS: f32 = 0.6;
pub const PLAYER_ATTACK_DAMAGE: f32 = 25.0;
pub const PLAYER_ATTACK_REACH: f32 = 60.0;
pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.4;
/// Vertical tolerance of the player's swing.
pub const PLAYER_ATTACK_HEIGHT: f32 = 32.0;
/// Per-tick multiplier applied to external horizontal push on the player.
pub const PLAYER_KNOCKBACK_DECAY: f32 = 0.85;

// --- Melee enemy ---

pub const MELEE_MAX_HEALTH: f32 = 60.0;
pub const MELEE_MOVE_SPEED: f32 = 90.0;
pub const MELEE_DETECTION_RANGE: f32 = 320.0;
pub const MELEE_ATTACK_RANGE: f32 = 40.0;
pub const MELEE_ATTACK_DAMAGE: f32 = 10.0;
pub const MELEE_ATTACK_COOLDOWN: f32 = 1.0;
/// Windup before the strike lands.
pub const MELEE_STRIKE_DELAY: f32 = 0.25;
/// Forward dash speed at the moment of the strike.
pub const MELEE_DASH_SPEED: f32 = 160.0;
/// Per-tick multiplier applied to horizontal velocity during the dash tail.
pub const MELEE_DASH_DECAY: f32 = 0.8;
pub const MELEE_DASH_TAIL_SECS: f32 = 0.2;
pub const MELEE_JUMP_THRESHOLD: f32 = 48.0;
pub const MELEE_JUMP_IMPULSE: f32 = 380.0;
pub const MELEE_JUMP_COOLDOWN: f32 = 1.5;

// --- Ranged enemy ---

pub const RANGED_MAX_HEALTH: f32 = 40.0;
pub const RANGED_MOVE_SPEED: f32 = 70.0;
/// Maximum distance at which the shooter fires.
pub const RANGED_DETECTION_RANGE: f32 = 400.0;
/// Closer than this the shooter backs off.
pub const RANGED_RETREAT_DISTANCE: f32 = 80.0;
/// Farther than this the shooter steps closer.
pub const RANGED_PREFERRED_DISTANCE: f32 = 220.0;
pub const RANGED_SHOOT_COOLDOWN: f32 = 1.8;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 240.0;
pub const PROJECTILE_DAMAGE: f32 = 8.0;
pub const PROJECTILE_LIFETIME: f32 = 4.0;
pub const PROJECTILE_HIT_RADIUS: f32 = 12.0;

// --- Boss ---

pub const BOSS_MAX_HEALTH: f32 = 300.0;
pub const BOSS_MOVE_SPEED: f32 = 60.0;
pub const BOSS_DETECTION_RANGE: f32 = 800.0;
/// Horizontal gap under which the boss stops walking.
pub const BOSS_HOLD_DISTANCE: f32 = 24.0;
/// Rear kick selection range.
pub const BOSS_MELEE_RANGE: f32 = 90.0;
/// Lunge / sweep selection range.
pub const BOSS_MEDIUM_RANGE: f32 = 160.0;
/// Probability of the lunge when both lunge and sweep are eligible.
pub const BOSS_A1_CHANCE: f32 = 0.55;
pub const BOSS_BASE_COOLDOWN: f32 = 1.2;
pub const BOSS_POST_PHASE_COOLDOWN: f32 = 2.0;
pub const BOSS_STAGGER_SECS: f32 = 0.45;

pub const BOSS_A1_CHARGE_DELAY: f32 = 0.5;
pub const BOSS_A1_LUNGE_DURATION: f32 = 0.35;
pub const BOSS_A1_LUNGE_SPEED: f32 = 320.0;
pub const BOSS_A1_DAMAGE: f32 = 20.0;
pub const BOSS_A1_REACH: f32 = 70.0;

pub const BOSS_A2_DURATION: f32 = 0.5;
pub const BOSS_A2_DAMAGE: f32 = 15.0;
pub const BOSS_A2_REACH: f32 = 70.0;

pub const BOSS_A3_DURATION: f32 = 0.9;
pub const BOSS_A3_DAMAGE: f32 = 18.0;
pub const BOSS_A3_REAR_REACH: f32 = 80.0;
pub const BOSS_A3_AREA_RADIUS: f32 = 100.0;

pub const BOSS_A4_DURATION: f32 = 1.0;
/// Push strength of the phase-transition shove (impulse per second).
pub const BOSS_A4_PUSH: f32 = 600.0;

/// Vertical tolerance shared by boss hitboxes.
pub const BOSS_HITBOX_HEIGHT: f32 = 64.0;

// --- Phase 2 multipliers ---

pub const PHASE2_MOVE_MULT: f32 = 1.5;
pub const PHASE2_CHARGE_DELAY_MULT: f32 = 0.75;
pub const PHASE2_LUNGE_SPEED_MULT: f32 = 1.25;
pub const PHASE2_A3_DURATION_MULT: f32 = 0.82;
pub const PHASE2_COOLDOWN_MULT: f32 = 0.8;
