//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! The playfield is the terminal's character grid, addressed by `(column, row)`:
//!
//! - **x**: column, `0` is the left edge
//! - **y**: row, `0` is the top edge
//! - **Spawn position**: `(0, 0)`
//!
//! Coordinates are signed so that a candidate move past the top/left edge is
//! representable (and then rejected) instead of wrapping.
//!
//! # Game Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SENSITIVITY` | 2 | Obstacle zone half-width |
//! | `DEFAULT_PLAYER_SPEED` | 5 | Cells per move for a freshly built player |
//! | `DEFAULT_GAME_SPEED` | 3 | Cells per move used by the game runner |
//! | `DEFAULT_OBSTACLE_COUNT` | 20 | Obstacles scattered at startup |
//!
//! # Examples
//!
//! ```
//! use tui_dodge_types::{Bounds, PlayerAction, Position};
//!
//! let bounds = Bounds::new(80, 24);
//! assert!(bounds.contains(Position::new(79, 23)));
//! assert!(!bounds.contains(Position::new(80, 0)));
//! assert!(!bounds.contains(Position::new(0, -1)));
//!
//! assert_eq!(PlayerAction::from_char('w'), Some(PlayerAction::MoveUp));
//! assert_eq!(PlayerAction::from_char('x'), None);
//! ```

/// Obstacle zone half-width used when nothing else is configured.
pub const DEFAULT_SENSITIVITY: i32 = 2;

/// Speed of a freshly constructed player (cells per move).
pub const DEFAULT_PLAYER_SPEED: i32 = 5;

/// Speed the game runner assigns to its player (cells per move).
pub const DEFAULT_GAME_SPEED: i32 = 3;

/// Number of obstacles scattered at startup.
pub const DEFAULT_OBSTACLE_COUNT: u16 = 20;

/// Player glyph (a mouse).
pub const PLAYER_GLYPH: &str = "🐭";

/// Obstacle glyph (a mountain, text presentation).
pub const OBSTACLE_GLYPH: &str = "⛰︎";

/// Text written over the player's previous cell, once per display column
/// of the player glyph.
pub const BLANK_GLYPH: &str = " ";

/// Terminal size assumed when the real size cannot be queried.
pub const FALLBACK_GRID: (u16, u16) = (80, 24);


/// A cell on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The top-left cell, where the player spawns.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Playfield dimensions, read once from the display at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build bounds from a terminal size in `(columns, rows)`.
    pub fn from_terminal_size((cols, rows): (u16, u16)) -> Self {
        Self::new(cols as i32, rows as i32)
    }

    /// `true` when `pos` lies in `[0, width) × [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Player actions driven by the keyboard.
///
/// Each action moves the player `speed` cells along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Decrease x
    MoveLeft,
    /// Increase x
    MoveRight,
    /// Decrease y (towards the top row)
    MoveUp,
    /// Increase y
    MoveDown,
}

impl PlayerAction {
    /// Map a `w`/`a`/`s`/`d` key (either case) to an action.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(PlayerAction::MoveLeft),
            'd' => Some(PlayerAction::MoveRight),
            'w' => Some(PlayerAction::MoveUp),
            's' => Some(PlayerAction::MoveDown),
            _ => None,
        }
    }

    /// Unit step `(dx, dy)` for this action.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            PlayerAction::MoveLeft => (-1, 0),
            PlayerAction::MoveRight => (1, 0),
            PlayerAction::MoveUp => (0, -1),
            PlayerAction::MoveDown => (0, 1),
        }
    }

    /// camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::MoveLeft => "moveLeft",
            PlayerAction::MoveRight => "moveRight",
            PlayerAction::MoveUp => "moveUp",
            PlayerAction::MoveDown => "moveDown",
        }
    }
}
