//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Horizontal facing of a combatant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1.0 for Right, -1.0 for Left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing from `from_x` toward `to_x`. A tie resolves to Left,
    /// matching `facing_right = to_x > from_x`.
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x > from_x {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Whether a point at `other_x` lies behind someone at `own_x` facing `self`.
    pub fn is_behind(self, own_x: f32, other_x: f32) -> bool {
        match self {
            Facing::Right => other_x < own_x,
            Facing::Left => other_x > own_x,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
