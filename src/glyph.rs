//! Visible-character indexing for UTF-8 rows.
//!
//! Every highlight coordinate in wortuhr is a *visible character* index,
//! never a byte index.  The phrase grid mixes ASCII with two-byte letters
//! (`Ä`, `Ö`, `Ü`), so a row is decoded into [`Glyph`]s exactly once and all
//! later lookups work on that decoded form.
//!
//! Byte-level substring matches (see [`locator`](crate::locator)) are turned
//! back into columns with [`GlyphRow::column_at`], which counts lead bytes.

use std::fmt;

/// Whether `byte` starts an encoded character.
///
/// A byte is a lead byte iff its top two bits are not `10`.
pub fn is_lead_byte(byte: u8) -> bool {
    byte & 0xC0 != 0x80
}

/// Number of visible characters in `bytes`, counting lead bytes only.
///
/// `visible_len("ZÄ")` is `2`, although the string is three bytes long.
pub fn visible_len(bytes: impl AsRef<[u8]>) -> usize {
    bytes.as_ref().iter().filter(|b| is_lead_byte(**b)).count()
}

/// One visible character of the grid.
///
/// Holds the decoded code point; [`encode`](Glyph::encode) yields the short
/// byte buffer a draw call needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(char);

impl Glyph {
    pub fn new(ch: char) -> Self {
        Self(ch)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Encoded length in bytes (1–4).
    pub fn byte_len(self) -> usize {
        self.0.len_utf8()
    }

    /// Encode into `buf` and return the encoded text.
    pub fn encode(self, buf: &mut [u8; 4]) -> &str {
        self.0.encode_utf8(buf)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single grid cell: its canonical glyph plus the glyph actually shown.
///
/// The two only differ for filler placeholders after randomization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    canonical: Glyph,
    shown: Glyph,
}

/// A decoded grid row.
///
/// The canonical text is kept verbatim for substring search; the shown
/// glyphs may differ in filler cells but always have the same count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRow {
    canonical: String,
    cells: Vec<Cell>,
}

impl GlyphRow {
    /// Decode `text` into glyphs.
    pub fn new(text: &str) -> Self {
        let cells = text
            .chars()
            .map(|ch| Cell {
                canonical: Glyph(ch),
                shown: Glyph(ch),
            })
            .collect();
        Self {
            canonical: text.to_owned(),
            cells,
        }
    }

    /// Number of visible characters.
    pub fn visible_len(&self) -> usize {
        self.cells.len()
    }

    /// The canonical row text, filler placeholders included.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The glyph displayed at `col`.
    pub fn glyph(&self, col: usize) -> Option<Glyph> {
        self.cells.get(col).map(|c| c.shown)
    }

    /// The canonical glyph at `col`.
    pub fn canonical_glyph(&self, col: usize) -> Option<Glyph> {
        self.cells.get(col).map(|c| c.canonical)
    }

    /// Iterate over the displayed glyphs, left to right.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.cells.iter().map(|c| c.shown)
    }

    /// Replace the displayed glyph at `col`.  The canonical text is left
    /// untouched.  Returns `false` if `col` is out of range.
    pub fn set_shown(&mut self, col: usize, glyph: Glyph) -> bool {
        match self.cells.get_mut(col) {
            Some(cell) => {
                cell.shown = glyph;
                true
            }
            None => false,
        }
    }

    /// Convert a byte offset into the canonical text to a column.
    ///
    /// Returns `None` unless `byte` falls on a character boundary inside the
    /// row (the end of the row is not a column).
    pub fn column_at(&self, byte: usize) -> Option<usize> {
        if byte >= self.canonical.len() || !self.canonical.is_char_boundary(byte) {
            return None;
        }
        Some(visible_len(&self.canonical.as_bytes()[..byte]))
    }

    /// The displayed row as a string.
    #[cfg(test)]
    pub fn shown_text(&self) -> String {
        self.glyphs().map(Glyph::as_char).collect()
    }
}

//  Tests
