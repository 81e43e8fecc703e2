//! Static arena geometry: a flat floor, two walls and solid pillars.

use duskvale_ai::capabilities::WorldQuery;
use duskvale_core::constants::{ARENA_LEFT, ARENA_RIGHT, FLOOR_Y};
use duskvale_core::types::Vec2;

/// Axis-aligned solid block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    pub min: Vec2,
    pub max: Vec2,
}

impl Pillar {
    pub fn new(left: f32, right: f32, height: f32, floor_y: f32) -> Self {
        Self {
            min: Vec2::new(left, floor_y),
            max: Vec2::new(right, floor_y + height),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub floor_y: f32,
    pub left: f32,
    pub right: f32,
    pub pillars: Vec<Pillar>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            floor_y: FLOOR_Y,
            left: ARENA_LEFT,
            right: ARENA_RIGHT,
            pillars: vec![Pillar::new(-420.0, -380.0, 120.0, FLOOR_Y)],
        }
    }
}

impl Arena {
    /// Open floor with walls and no pillars.
    pub fn flat(left: f32, right: f32) -> Self {
        Self {
            floor_y: FLOOR_Y,
            left,
            right,
            pillars: Vec::new(),
        }
    }

    pub fn with_pillar(mut self, pillar: Pillar) -> Self {
        self.pillars.push(pillar);
        self
    }

    /// Pillar containing `point`, if any.
    pub fn pillar_at(&self, point: Vec2) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.contains(point))
    }
}

impl WorldQuery for Arena {
    fn is_solid(&self, point: Vec2) -> bool {
        point.y < self.floor_y
            || point.x < self.left
            || point.x > self.right
            || self.pillar_at(point).is_some()
    }
}
