//! Display seam.
//!
//! The game only needs two primitives from a display: move the cursor to a
//! cell and write text at the cursor. Keeping them behind a trait lets the
//! movement and drawing order be tested without a real terminal.

use std::io;

use crate::types::Position;

/// A character grid with a cursor.
pub trait Canvas {
    /// Move the cursor to `pos` (`x` is the column, `y` the row).
    fn move_to(&mut self, pos: Position) -> io::Result<()>;

    /// Write `text` at the cursor, advancing it.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Push any buffered output to the display.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Discards everything (headless runs).
impl Canvas for io::Sink {
    fn move_to(&mut self, _pos: Position) -> io::Result<()> {
        Ok(())
    }

    fn write(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
