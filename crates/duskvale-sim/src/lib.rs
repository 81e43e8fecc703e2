//! Headless encounter driver for DUSKVALE.
//!
//! Owns the hecs world of regular enemies together with the player, the boss
//! and the projectile pool, runs the systems at a fixed tick rate and
//! produces `EncounterSnapshot`s for the renderer.

pub mod arena;
pub mod body;
pub mod engine;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use duskvale_core as core;
pub use engine::{Encounter, EncounterConfig};

#[cfg(test)]
mod tests;
