//! Painting the word grid onto a [`DrawSurface`].
//!
//! The renderer walks the grid row-major and issues one draw call per
//! visible character.  It only reads the grid; which cells are lit has been
//! decided before it runs.

use crate::config::LayoutConfig;
use crate::grid::WordGrid;
use crate::traits::DrawSurface;
use log::trace;

/// Top-left corner of a letter, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// How a letter is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Part of the current time: bright and bold.
    Emphasized,
    /// Everything else: dark gray, regular weight.
    Dimmed,
}

impl Style {
    pub fn for_highlight(lit: bool) -> Self {
        if lit {
            Style::Emphasized
        } else {
            Style::Dimmed
        }
    }
}

/// Lays letters out with a fixed advance and hands them to a surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    layout: LayoutConfig,
}

impl Renderer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Position of the first letter of the first row.
    ///
    /// Rows are centred horizontally on a surface `surface_width` wide.
    pub fn origin(&self, grid: &WordGrid, surface_width: i32) -> Point {
        let columns = i32::try_from(grid.chars().max_width()).unwrap_or(i32::MAX);
        let line_width = columns.saturating_mul(self.layout.char_width);
        Point {
            x: (surface_width.saturating_sub(line_width) / 2).max(0),
            y: self.layout.top,
        }
    }

    /// Position of `(row, col)` relative to `origin`.
    ///
    /// Saturates at `i32::MAX` instead of wrapping.
    pub fn position(&self, origin: Point, row: usize, col: usize) -> Point {
        let advance = |n: usize, step: i32| i32::try_from(n).unwrap_or(i32::MAX).saturating_mul(step);
        Point {
            x: origin.x.saturating_add(advance(col, self.layout.char_width)),
            y: origin.y.saturating_add(advance(row, self.layout.line_height)),
        }
    }

    /// Draw the whole grid.  Returns the number of letters drawn.
    pub fn render<S: DrawSurface>(&self, grid: &WordGrid, surface: &mut S) -> Result<usize, S::Error> {
        let origin = self.origin(grid, surface.width());
        let mut buf = [0u8; 4];
        let mut drawn = 0;

        surface.begin_frame()?;
        for (row, glyphs) in grid.chars().rows().iter().enumerate() {
            for (col, glyph) in glyphs.glyphs().enumerate() {
                let style = Style::for_highlight(grid.is_highlighted(row, col));
                let position = self.position(origin, row, col);
                surface.draw_character(glyph.encode(&mut buf), position, style)?;
                drawn += 1;
            }
        }
        surface.end_frame()?;

        trace!("drew {} letters", drawn);
        Ok(drawn)
    }
}

//  Tests
