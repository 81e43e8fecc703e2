//! Enemy AI and combat resolution for DUSKVALE.
//!
//! Detection and range gating, cooldown timers, the melee and ranged enemy
//! controllers, the two-phase boss state machine and projectile lifecycles.
//! No engine dependency: every controller talks to the world through the
//! traits in [`capabilities`] and is driven by one `update(dt)` per tick.

pub mod behavior;
pub mod boss;
pub mod capabilities;
pub mod cooldown;
pub mod detection;
pub mod hitbox;
pub mod melee;
pub mod profiles;
pub mod projectile;
pub mod ranged;

pub use duskvale_core as core;
