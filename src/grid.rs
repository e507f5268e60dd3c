//! The word grid.
//!
//! [`CharacterGrid`] is the fixed matrix of letters the clock face is made
//! of; [`HighlightMask`] is a boolean matrix of the same shape that says
//! which cells are lit.  [`WordGrid`] owns one of each and keeps their
//! shapes in step.
//!
//! All coordinates are `(row, col)` with `col` counted in visible
//! characters (see [`glyph`](crate::glyph)).

use crate::glyph::{Glyph, GlyphRow};
use log::debug;
use rand::Rng;

/// Placeholder marking a cell that carries no word.
pub const FILLER: char = '-';

/// Width of the highlight mask.  No row may be wider.
pub const MAX_COLS: usize = 15;

/// The Swiss-German clock face.
pub const PHRASES: [&str; 11] = [
    "ES-ISCH--ZÄ",
    "-FOIF-PUNKT",
    "VIERTEL-AB-",
    "ZWÄNZG-VOR-",
    "PUNKT-HALBI",
    "ZWEI--FOIFI",
    "VIERI-DRÜ--",
    "ACHTI-NÜNI-",
    "SÄCHSI-ELFI",
    "-SIEBNI-EIS",
    "ZÄNI-ZWÖLFI",
];

/// Errors from building or addressing the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} visible characters, the mask holds at most {max}")]
    RowTooWide { row: usize, len: usize, max: usize },
    #[error("row {row} is not valid UTF-8 (bad sequence at byte {byte})")]
    MalformedUtf8 { row: usize, byte: usize },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },
    #[error("highlight mask is {mask_rows}x{mask_cols}, grid needs {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        mask_rows: usize,
        mask_cols: usize,
    },
}

//  Character grid

/// The fixed matrix of letters.
///
/// Shape is fixed at construction.  [`randomize_fillers`](Self::randomize_fillers)
/// may change which letter a filler cell shows, never how many cells a row
/// has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid {
    rows: Vec<GlyphRow>,
}

impl CharacterGrid {
    /// Build a grid from row strings.
    pub fn new<S: AsRef<str>>(rows: impl IntoIterator<Item = S>) -> Result<Self, GridError> {
        let rows: Vec<GlyphRow> = rows.into_iter().map(|r| GlyphRow::new(r.as_ref())).collect();
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.visible_len() > MAX_COLS {
                return Err(GridError::RowTooWide {
                    row: i,
                    len: row.visible_len(),
                    max: MAX_COLS,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build a grid from raw byte rows, rejecting malformed UTF-8.
    pub fn from_bytes(rows: &[&[u8]]) -> Result<Self, GridError> {
        let decoded = rows
            .iter()
            .enumerate()
            .map(|(i, bytes)| {
                std::str::from_utf8(bytes).map_err(|e| GridError::MalformedUtf8 {
                    row: i,
                    byte: e.valid_up_to(),
                })
            })
            .collect::<Result<Vec<&str>, _>>()?;
        Self::new(decoded)
    }

    /// The compiled-in Swiss-German grid.
    pub fn swiss_german() -> Result<Self, GridError> {
        Self::new(PHRASES)
    }

    //  Accessors

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in visible characters.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(GlyphRow::visible_len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[GlyphRow] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&GlyphRow> {
        self.rows.get(row)
    }

    /// Number of visible characters in `row`, or `None` past the last row.
    pub fn visible_length(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(GlyphRow::visible_len)
    }

    /// Whether `(row, col)` is a filler placeholder.
    pub fn is_filler(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.canonical_glyph(col))
            .is_some_and(|g| g.as_char() == FILLER)
    }

    /// Replace every filler cell with a uniformly chosen letter `A`–`Z`.
    ///
    /// Only the displayed glyph changes; the canonical text the locator
    /// searches keeps its placeholders.  Returns how many cells changed.
    pub fn randomize_fillers(&mut self, rng: &mut impl Rng) -> usize {
        let mut replaced = 0;
        for row in &mut self.rows {
            for col in 0..row.visible_len() {
                if row.canonical_glyph(col).map(Glyph::as_char) != Some(FILLER) {
                    continue;
                }
                let letter = char::from(rng.random_range(b'A'..=b'Z'));
                row.set_shown(col, Glyph::new(letter));
                replaced += 1;
            }
        }
        debug!("randomized {} filler cells", replaced);
        replaced
    }
}

//  Highlight mask

/// Boolean matrix of lit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl HighlightMask {
    /// Create an all-dark `rows × cols` mask.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Mask dimensions as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `(row, col)` is lit.  Out-of-range cells read as dark.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), GridError> {
        let i = self.index(row, col).ok_or(GridError::OutOfRange { row, col })?;
        self.cells[i] = value;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Number of lit cells.
    pub fn count_lit(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Every lit `(row, col)`, row-major.
    #[cfg(test)]
    pub fn lit_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

//  Word grid

/// A [`CharacterGrid`] together with its [`HighlightMask`].
///
/// This is the whole mutable state of the clock.  It is owned by
/// [`WordClock`](crate::clock::WordClock) and passed by reference to the
/// locator and the renderer.
#[derive(Debug, Clone)]
pub struct WordGrid {
    chars: CharacterGrid,
    mask: HighlightMask,
}

impl WordGrid {
    /// Pair `chars` with a fresh `rows × MAX_COLS` mask.
    pub fn new(chars: CharacterGrid) -> Self {
        let mask = HighlightMask::new(chars.row_count(), MAX_COLS);
        Self { chars, mask }
    }

    /// Pair `chars` with an existing mask, checking that the shapes agree.
    pub fn with_mask(chars: CharacterGrid, mask: HighlightMask) -> Result<Self, GridError> {
        let (mask_rows, mask_cols) = mask.dimensions();
        if mask_rows != chars.row_count() || mask_cols < chars.max_width() {
            return Err(GridError::ShapeMismatch {
                rows: chars.row_count(),
                cols: chars.max_width(),
                mask_rows,
                mask_cols,
            });
        }
        Ok(Self { chars, mask })
    }

    pub fn chars(&self) -> &CharacterGrid {
        &self.chars
    }

    pub fn mask(&self) -> &HighlightMask {
        &self.mask
    }

    pub fn visible_length(&self, row: usize) -> Option<usize> {
        self.chars.visible_length(row)
    }

    /// Light or darken one cell.
    ///
    /// `col` must be inside the row's visible length, not merely inside the
    /// mask.
    pub fn set_highlight(&mut self, row: usize, col: usize, value: bool) -> Result<(), GridError> {
        match self.chars.visible_length(row) {
            Some(len) if col < len => self.mask.set(row, col, value),
            _ => Err(GridError::OutOfRange { row, col }),
        }
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col)
    }

    /// Darken every cell.
    pub fn clear_all(&mut self) {
        self.mask.clear_all();
    }

    pub fn randomize_fillers(&mut self, rng: &mut impl Rng) -> usize {
        self.chars.randomize_fillers(rng)
    }
}

//  Tests
