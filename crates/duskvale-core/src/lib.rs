//! Core types and definitions for the DUSKVALE encounter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! combatants, commands, state snapshots, events, tuning and constants.
//! It has no dependency on any rendering or physics framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
