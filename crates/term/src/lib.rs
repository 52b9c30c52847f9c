//! Terminal rendering module.
//!
//! Two [`Canvas`](crate::core::Canvas) implementations:
//!
//! - [`TerminalRenderer`]: crossterm cursor moves and prints, buffered per flush
//! - [`GlyphGrid`]: an in-memory grid that remembers what was drawn
//!
//! Drawing is incremental. Obstacles are written once at startup and the
//! player erases its previous cell before drawing the new one; nothing is
//! ever redrawn wholesale.

pub mod grid;
pub mod renderer;

pub use tui_dodge_core as core;
pub use tui_dodge_types as types;

pub use grid::GlyphGrid;
pub use renderer::{terminal_bounds, TerminalRenderer};
