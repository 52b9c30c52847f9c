//! TerminalRenderer: draws glyphs straight onto a real terminal.
//!
//! Commands are queued into an internal buffer and written out on
//! [`Canvas::flush`], so one redraw reaches the terminal as a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Canvas;
use crate::types::{Bounds, Position, FALLBACK_GRID};

/// Playfield size, read once from the terminal.
pub fn terminal_bounds() -> Bounds {
    let size = terminal::size().unwrap_or_else(|err| {
        tracing::warn!(%err, "terminal size unavailable, using fallback");
        FALLBACK_GRID
    });
    Bounds::from_terminal_size(size)
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Switch to raw mode (no echo, no line buffering) on a blank screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        tracing::debug!("entered raw mode");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("restored terminal");
        Ok(())
    }

    /// Bytes queued since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalRenderer<W> {
    fn move_to(&mut self, pos: Position) -> io::Result<()> {
        self.buf.queue(cursor::MoveTo(to_cell(pos.x), to_cell(pos.y)))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()
    }
}

fn to_cell(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_buffered_until_flush() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.move_to(Position::new(0, 0)).unwrap();
        term.write("@").unwrap();
        assert!(!term.pending().is_empty());

        term.flush().unwrap();
        assert!(term.pending().is_empty());

        let out = String::from_utf8(term.into_inner()).unwrap();
        assert_eq!(out, "\u{1b}[1;1H@");
    }

    #[test]
    fn move_to_is_one_based_row_then_column() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.move_to(Position::new(4, 2)).unwrap();
        term.flush().unwrap();

        let out = String::from_utf8(term.into_inner()).unwrap();
        assert_eq!(out, "\u{1b}[3;5H");
    }

    #[test]
    fn out_of_range_coordinates_are_clamped() {
        assert_eq!(to_cell(-5), 0);
        assert_eq!(to_cell(70_000), u16::MAX);
        assert_eq!(to_cell(12), 12);
    }
}
