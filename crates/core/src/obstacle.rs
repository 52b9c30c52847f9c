//! Obstacle generation and placement.

use std::io;

use crate::canvas::Canvas;
use crate::rng::SimpleRng;
use crate::types::{Bounds, Position, OBSTACLE_GLYPH};

/// A static obstacle on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    x: i32,
    y: i32,
    glyph: String,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, glyph: impl Into<String>) -> Self {
        Self {
            x,
            y,
            glyph: glyph.into(),
        }
    }

    /// Obstacle with the default glyph.
    pub fn at(x: i32, y: i32) -> Self {
        Self::new(x, y, OBSTACLE_GLYPH)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

/// Scatters obstacles uniformly over a fixed grid.
///
/// Positions are independent draws, so two obstacles may share a cell.
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    bounds: Bounds,
    rng: SimpleRng,
    glyph: String,
}

impl ObstacleGenerator {
    pub fn new(bounds: Bounds, seed: u32) -> Self {
        Self {
            bounds,
            rng: SimpleRng::new(seed),
            glyph: OBSTACLE_GLYPH.to_string(),
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// Draw one obstacle.
    pub fn generate_one(&mut self) -> Obstacle {
        let x = self.rng.next_range(self.bounds.width.max(0) as u32) as i32;
        let y = self.rng.next_range(self.bounds.height.max(0) as u32) as i32;
        Obstacle::new(x, y, self.glyph.clone())
    }

    /// Draw `count` obstacles.
    pub fn generate(&mut self, count: u16) -> Vec<Obstacle> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    /// Write every obstacle's glyph at its cell.
    pub fn place<C: Canvas + ?Sized>(canvas: &mut C, obstacles: &[Obstacle]) -> io::Result<()> {
        for obstacle in obstacles {
            canvas.move_to(obstacle.position())?;
            canvas.write(obstacle.glyph())?;
        }
        canvas.flush()
    }
}
