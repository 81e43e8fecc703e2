//! Systems run once per encounter tick, in the order the engine calls them.
//!
//! Systems are free functions over the world and the engine-owned actors.
//! They keep no state of their own.

pub mod boss;
pub mod cleanup;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod snapshot;
