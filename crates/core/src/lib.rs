//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the movement rules, collision model and obstacle
//! placement. It does no terminal I/O: everything that draws goes through the
//! [`Canvas`] trait, so the whole game can run against an in-memory grid.
//!
//! # Module Structure
//!
//! - [`obstacle`]: obstacles and the seeded generator that scatters them
//! - [`collision`]: per-axis zone test and the shared collision detector
//! - [`player`]: bounds- and collision-checked movement, erase/redraw
//! - [`game`]: obstacle field + detector + player, one key at a time
//! - [`canvas`]: the cursor/write display seam
//! - [`config`]: environment-driven settings
//! - [`rng`]: LCG used for reproducible layouts
//!
//! # Rules
//!
//! - The player moves `speed` cells per key along one axis.
//! - A move is committed only if the target is on the grid and not in the
//!   zone of any obstacle; otherwise nothing happens.
//! - An obstacle's zone on one axis is its coordinate plus the open interval
//!   of half-width `sensitivity` around it. A cell collides when both of its
//!   coordinates are in zone of the same obstacle.
//!
//! # Example
//!
//! ```
//! use tui_dodge_core::{Game, MoveOutcome, Obstacle};
//! use tui_dodge_types::{Bounds, PlayerAction, Position};
//!
//! let mut game = Game::from_parts(vec![Obstacle::at(10, 10)], 2, 5, Bounds::new(80, 24));
//! let mut screen = std::io::sink();
//!
//! // Unmapped keys do nothing.
//! assert_eq!(game.handle(None, &mut screen).unwrap(), None);
//!
//! let outcome = game.handle(Some(PlayerAction::MoveRight), &mut screen).unwrap();
//! assert_eq!(outcome, Some(MoveOutcome::Moved));
//! assert_eq!(game.player().position(), Position::new(5, 0));
//! ```

pub mod canvas;
pub mod collision;
pub mod config;
pub mod game;
pub mod obstacle;
pub mod player;
pub mod rng;

pub use tui_dodge_types as types;

// Re-export commonly used types for convenience
pub use canvas::Canvas;
pub use collision::CollisionDetector;
pub use config::GameConfig;
pub use game::Game;
pub use obstacle::{Obstacle, ObstacleGenerator};
pub use player::{MoveOutcome, Player};
pub use rng::{clock_seed, SimpleRng};
