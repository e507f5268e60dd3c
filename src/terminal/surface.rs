//! [`DrawSurface`] implementation that writes ANSI text.
//!
//! Surface coordinates are mapped back to letter cells by dividing by the
//! layout's advances, so the renderer's centring carries over to the
//! terminal as leading blanks.  Lit letters get the configured SGR
//! parameters, dark letters the dimmed ones.

use crate::config::{LayoutConfig, TerminalConfig};
use crate::render::{Point, Style};
use crate::traits::DrawSurface;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

/// An ANSI text surface over any writer.
pub struct AnsiSurface<W: Write> {
    out: W,
    config: TerminalConfig,
    char_width: i32,
    line_height: i32,
    /// Y of the line being written, `None` before the first letter.
    line_y: Option<i32>,
    /// Terminal column the cursor is on within the current line.
    line_col: usize,
}

/// Errors produced by the terminal surface.
#[derive(Debug, thiserror::Error)]
#[error("terminal io error: {0}")]
pub struct TerminalError(#[from] std::io::Error);

impl<W: Write> AnsiSurface<W> {
    /// Create a surface writing to `out`.
    ///
    /// `layout` must be the layout the renderer uses.
    pub fn new(out: W, config: TerminalConfig, layout: &LayoutConfig) -> Self {
        Self {
            out,
            config,
            char_width: layout.char_width.max(1),
            line_height: layout.line_height.max(1),
            line_y: None,
            line_col: 0,
        }
    }

    /// Consume the surface and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_letter(&mut self, content: &str, style: Style) -> Result<(), TerminalError> {
        if self.config.color {
            let sgr = match style {
                Style::Emphasized => &self.config.emphasized_sgr,
                Style::Dimmed => &self.config.dimmed_sgr,
            };
            write!(self.out, "\x1b[{}m{}{}", sgr, content, RESET)?;
        } else {
            match style {
                Style::Emphasized => write!(self.out, "{}", content)?,
                Style::Dimmed => write!(self.out, "{}", content.to_lowercase())?,
            }
        }
        Ok(())
    }
}

impl<W: Write> DrawSurface for AnsiSurface<W> {
    type Error = TerminalError;

    fn width(&self) -> i32 {
        i32::try_from(self.config.columns)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.char_width)
    }

    fn begin_frame(&mut self) -> Result<(), TerminalError> {
        if self.config.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.line_y = None;
        self.line_col = 0;
        Ok(())
    }

    fn draw_character(&mut self, content: &str, position: Point, style: Style) -> Result<(), TerminalError> {
        if let Some(y) = self.line_y {
            if position.y != y {
                let lines = (position.y.saturating_sub(y) / self.line_height).max(1);
                for _ in 0..lines {
                    writeln!(self.out)?;
                }
                self.line_col = 0;
            }
        }
        self.line_y = Some(position.y);

        let cell = usize::try_from(position.x / self.char_width).unwrap_or(0);
        let col = cell.saturating_mul(self.config.letter_spacing.saturating_add(1));
        if col > self.line_col {
            write!(self.out, "{:width$}", "", width = col - self.line_col)?;
            self.line_col = col;
        }

        self.write_letter(content, style)?;
        self.line_col += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), TerminalError> {
        if self.line_y.is_some() {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

//  Tests
