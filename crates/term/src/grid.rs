//! In-memory glyph grid.
//!
//! A [`Canvas`] that keeps what was drawn, for tests and headless runs.
//! Each `write` fills exactly one cell, whatever its display width.

use std::io;

use crate::core::Canvas;
use crate::types::{Bounds, Position, BLANK_GLYPH};

/// 2D grid of glyphs with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u16,
    height: u16,
    cells: Vec<String>,
    cursor: Position,
    writes: usize,
}

impl GlyphGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK_GLYPH.to_string(); len],
            cursor: Position::ORIGIN,
            writes: 0,
        }
    }

    /// Grid matching a playfield.
    pub fn for_bounds(bounds: Bounds) -> Self {
        let clamp = |v: i32| v.clamp(0, u16::MAX as i32) as u16;
        Self::new(clamp(bounds.width), clamp(bounds.height))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Number of `write` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    #[inline(always)]
    fn idx(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i32 || pos.y >= self.height as i32 {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&str> {
        self.idx(Position::new(x, y)).map(|i| self.cells[i].as_str())
    }

    /// First cell (row-major) holding `glyph`.
    pub fn find(&self, glyph: &str) -> Option<Position> {
        let i = self.cells.iter().position(|c| c == glyph)?;
        let w = self.width as usize;
        Some(Position::new((i % w) as i32, (i / w) as i32))
    }

    /// Number of cells holding `glyph`.
    pub fn count(&self, glyph: &str) -> usize {
        self.cells.iter().filter(|c| *c == glyph).count()
    }

    /// Row `y` as one string.
    pub fn row(&self, y: u16) -> String {
        let w = self.width as usize;
        let start = (y as usize) * w;
        self.cells
            .get(start..start + w)
            .map(|row| row.concat())
            .unwrap_or_default()
    }
}

impl Canvas for GlyphGrid {
    fn move_to(&mut self, pos: Position) -> io::Result<()> {
        self.cursor = pos;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes += 1;
        if let Some(i) = self.idx(self.cursor) {
            self.cells[i] = text.to_string();
        }
        self.cursor.x += 1;
        Ok(())
    }
}
