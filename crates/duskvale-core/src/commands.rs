//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Set the horizontal move axis (-1.0 to 1.0). Persists until changed.
    Move { axis: f32 },
    /// Jump if grounded.
    Jump,

    // --- Combat ---
    /// Swing the frontal attack if it is off cooldown.
    Attack,

    // --- Encounter control ---
    Pause,
    Resume,
    /// Rebuild the encounter with the original seed.
    Restart,
}
