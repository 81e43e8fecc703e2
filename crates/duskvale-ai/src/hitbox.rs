//! Abstract damage regions tied to an attack's active window.
//!
//! Only reach and a vertical tolerance are modelled; there is no shape data.

use duskvale_core::types::{Facing, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hitbox {
    /// In front of the owner, up to `reach` horizontally.
    Front { reach: f32, height: f32 },
    /// Behind the owner, up to `reach` horizontally.
    Rear { reach: f32, height: f32 },
    /// Anywhere within `radius`.
    Area { radius: f32 },
}

impl Hitbox {
    pub fn contains(&self, owner: Vec2, facing: Facing, point: Vec2) -> bool {
        let dx = point.x - owner.x;
        let dy = (point.y - owner.y).abs();
        match *self {
            Hitbox::Front { reach, height } => {
                let ahead = dx * facing.sign();
                (0.0..=reach).contains(&ahead) && dy <= height
            }
            Hitbox::Rear { reach, height } => {
                let behind = -dx * facing.sign();
                behind > 0.0 && behind <= reach && dy <= height
            }
            Hitbox::Area { radius } => owner.distance(point) <= radius,
        }
    }
}
