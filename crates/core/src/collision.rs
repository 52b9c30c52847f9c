//! Proximity-based collision detection.
//!
//! Each axis is tested on its own against a "zone" around the obstacle's
//! coordinate, and a hit needs both axes to be in zone. The zone for anchor
//! `a` and sensitivity `s` is `{a} ∪ (a, a + s) ∪ (a - s, a)`: both ends are
//! open, so `a ± s` is never a hit.

use crate::obstacle::Obstacle;
use crate::types::{Position, DEFAULT_SENSITIVITY};

/// Answers whether a cell is blocked by any obstacle.
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    obstacles: Vec<Obstacle>,
    sensitivity: i32,
}

impl CollisionDetector {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: i32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn set_sensitivity(&mut self, sensitivity: i32) {
        self.sensitivity = sensitivity;
    }

    pub fn sensitivity(&self) -> i32 {
        self.sensitivity
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// `true` if `value` falls in the zone around `anchor` on a single axis.
    #[inline]
    pub fn in_zone(&self, anchor: i32, value: i32) -> bool {
        let s = self.sensitivity;
        value == anchor
            || (value > anchor && (value as i64) < anchor as i64 + s as i64)
            || (value < anchor && (value as i64) > anchor as i64 - s as i64)
    }

    /// `true` if `(x, y)` is in zone of `obstacle` on both axes.
    ///
    /// `obstacle` need not belong to this detector; only the sensitivity is used.
    pub fn covers(&self, obstacle: &Obstacle, x: i32, y: i32) -> bool {
        self.in_zone(obstacle.x(), x) && self.in_zone(obstacle.y(), y)
    }

    /// `true` if `(x, y)` is in zone of some obstacle on both axes.
    pub fn collides(&self, x: i32, y: i32) -> bool {
        self.obstacles.iter().any(|o| self.covers(o, x, y))
    }

    pub fn collides_at(&self, pos: Position) -> bool {
        self.collides(pos.x, pos.y)
    }
}
