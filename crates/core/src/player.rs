//! Player movement and drawing.
//!
//! Moves are validated against the playfield bounds and the shared
//! [`CollisionDetector`] before they are committed; a rejected move leaves the
//! player untouched. Drawing is a separate step against a [`Canvas`], driven
//! by the caller after a move.

use std::io;
use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::canvas::Canvas;
use crate::collision::CollisionDetector;
use crate::types::{
    Bounds, PlayerAction, Position, BLANK_GLYPH, DEFAULT_PLAYER_SPEED, PLAYER_GLYPH,
};

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Position changed.
    Moved,
    /// Candidate cell lies outside the playfield.
    OutOfBounds,
    /// Candidate cell is in zone of an obstacle.
    Blocked,
}

impl MoveOutcome {
    /// `true` when the player's position changed.
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Moved => "moved",
            MoveOutcome::OutOfBounds => "outOfBounds",
            MoveOutcome::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pos: Position,
    prev: Position,
    speed: i32,
    glyph: String,
    /// Blanks covering the glyph's display width.
    erase: String,
    bounds: Bounds,
    collision: Rc<CollisionDetector>,
}

impl Player {
    /// Player at the origin with the default speed and glyph.
    pub fn new(collision: Rc<CollisionDetector>, bounds: Bounds) -> Self {
        Self {
            pos: Position::ORIGIN,
            prev: Position::ORIGIN,
            speed: DEFAULT_PLAYER_SPEED,
            glyph: PLAYER_GLYPH.to_string(),
            erase: blank_for(PLAYER_GLYPH),
            bounds,
            collision,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.set_glyph(glyph);
        self
    }

    pub fn set_glyph(&mut self, glyph: impl Into<String>) {
        self.glyph = glyph.into();
        self.erase = blank_for(&self.glyph);
    }

    /// Place the player at `pos` without validation (test setup).
    #[cfg(test)]
    pub(crate) fn teleport(&mut self, pos: Position) {
        self.pos = pos;
        self.prev = pos;
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Where the glyph was last drawn.
    pub fn previous_position(&self) -> Position {
        self.prev
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn collision(&self) -> &CollisionDetector {
        &self.collision
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.apply(PlayerAction::MoveLeft)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.apply(PlayerAction::MoveRight)
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.apply(PlayerAction::MoveUp)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.apply(PlayerAction::MoveDown)
    }

    /// Step `speed` cells in the action's direction, if the target is free.
    pub fn apply(&mut self, action: PlayerAction) -> MoveOutcome {
        // Saturating: any speed, even i32::MIN, only ever yields a rejection.
        let (dx, dy) = action.delta();
        let candidate = self
            .pos
            .offset(dx.saturating_mul(self.speed), dy.saturating_mul(self.speed));
        if !self.bounds.contains(candidate) {
            return MoveOutcome::OutOfBounds;
        }
        if self.collision.collides_at(candidate) {
            return MoveOutcome::Blocked;
        }
        self.pos = candidate;
        MoveOutcome::Moved
    }

    /// Erase the glyph at the previous position, draw it at the current one,
    /// then remember the current position for the next erase.
    pub fn display<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> io::Result<()> {
        canvas.move_to(self.prev)?;
        canvas.write(&self.erase)?;
        canvas.move_to(self.pos)?;
        canvas.write(&self.glyph)?;
        self.prev = self.pos;
        canvas.flush()
    }

    /// Move the cursor to the current position without drawing.
    pub fn refresh_position<C: Canvas + ?Sized>(&self, canvas: &mut C) -> io::Result<()> {
        canvas.move_to(self.pos)
    }
}

fn blank_for(glyph: &str) -> String {
    BLANK_GLYPH.repeat(glyph.width().max(1))
}
