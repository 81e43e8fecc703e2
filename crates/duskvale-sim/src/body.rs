//! Kinematic body handed to the controllers as their `Mover`.

use duskvale_ai::capabilities::Mover;
use duskvale_core::constants::BODY_HALF_HEIGHT;
use duskvale_core::types::Vec2;

/// Unit-mass point body. Impulses change velocity directly; the physics
/// system integrates position and gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_height: f32,
}

impl KinematicBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_height: BODY_HALF_HEIGHT,
        }
    }

    /// A body standing on `floor_y` at horizontal position `x`.
    pub fn standing_at(x: f32, floor_y: f32) -> Self {
        Self::new(Vec2::new(x, floor_y + BODY_HALF_HEIGHT))
    }

    /// Height of the body's lowest point.
    pub fn feet_y(&self) -> f32 {
        self.position.y - self.half_height
    }
}

impl Mover for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}
