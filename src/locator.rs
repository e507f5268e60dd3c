//! Finding words in the grid and lighting them up.
//!
//! Rows are searched top to bottom with a plain byte-substring search over
//! the canonical row text.  The first row containing the word wins; the
//! byte offset of the match is converted to a visible-character column.
//!
//! A word that is not in the grid is not an error: it simply lights
//! nothing.

use crate::glyph::visible_len;
use crate::grid::{CharacterGrid, WordGrid};
use log::{debug, warn};

/// Where a word starts in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    /// Visible-character column of the first letter.
    pub col: usize,
}

/// Locate the first occurrence of `token`.
pub fn find(grid: &CharacterGrid, token: &str) -> Option<Location> {
    if token.is_empty() {
        return None;
    }
    grid.rows().iter().enumerate().find_map(|(row, r)| {
        let byte = r.canonical().find(token)?;
        let col = r.column_at(byte)?;
        Some(Location { row, col })
    })
}

/// Every occurrence of `token`, in row order and then column order.
pub fn find_all(grid: &CharacterGrid, token: &str) -> Vec<Location> {
    if token.is_empty() {
        return Vec::new();
    }
    grid.rows()
        .iter()
        .enumerate()
        .flat_map(|(row, r)| {
            r.canonical()
                .match_indices(token)
                .filter_map(move |(byte, _)| r.column_at(byte).map(|col| Location { row, col }))
        })
        .collect()
}

/// Light every cell of `token` at its first location.
///
/// Returns the location, or `None` if the word is not in the grid.
pub fn highlight(grid: &mut WordGrid, token: &str) -> Option<Location> {
    let width = visible_len(token);
    debug!("word: {} - length: {}", token, width);

    let Some(loc) = find(grid.chars(), token) else {
        debug!("word {} not in grid, nothing lit", token);
        return None;
    };

    for col in loc.col..loc.col + width {
        if let Err(e) = grid.set_highlight(loc.row, col, true) {
            warn!("highlighting {}: {}", token, e);
        }
    }
    Some(loc)
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid() -> CharacterGrid {
        CharacterGrid::swiss_german().unwrap()
    }

    #[test]
    fn finds_ascii_word() {
        assert_eq!(find(&grid(), "ISCH"), Some(Location { row: 0, col: 3 }));
        assert_eq!(find(&grid(), "HALBI"), Some(Location { row: 4, col: 6 }));
    }

    #[test]
    fn column_is_visible_index_after_two_byte_letter() {
        // "ZÄNI-ZWÖLFI": ZWÖLFI starts at byte 6, column 5.
        assert_eq!(find(&grid(), "ZWÖLFI"), Some(Location { row: 10, col: 5 }));
        // "SÄCHSI-ELFI": ELFI starts at byte 8, column 7.
        assert_eq!(find(&grid(), "ELFI"), Some(Location { row: 8, col: 7 }));
    }

    #[test]
    fn first_row_wins() {
        // ZÄ is in row 0 and again at the start of ZÄNI in row 10.
        assert_eq!(find(&grid(), "ZÄ"), Some(Location { row: 0, col: 9 }));
        assert_eq!(find(&grid(), "PUNKT"), Some(Location { row: 1, col: 6 }));
        assert_eq!(find(&grid(), "FOIF"), Some(Location { row: 1, col: 1 }));
    }

    #[test]
    fn find_all_lists_duplicates() {
        assert_eq!(
            find_all(&grid(), "ZÄ"),
            vec![Location { row: 0, col: 9 }, Location { row: 10, col: 0 }]
        );
        assert_eq!(find_all(&grid(), "HALBI").len(), 1);
        assert!(find_all(&grid(), "MITTERNACHT").is_empty());
    }

    #[test]
    fn missing_word_is_none() {
        assert_eq!(find(&grid(), "MITTERNACHT"), None);
        assert_eq!(find(&grid(), ""), None);
    }

    #[test]
    fn fillers_never_match_after_randomization() {
        let mut g = grid();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        g.randomize_fillers(&mut rng);
        // Search text keeps the placeholders.
        assert_eq!(find(&g, "ES-ISCH"), Some(Location { row: 0, col: 0 }));
    }

    #[test]
    fn highlight_marks_visible_width() {
        let mut wg = WordGrid::new(grid());
        let loc = highlight(&mut wg, "SÄCHSI").unwrap();
        assert_eq!(loc, Location { row: 8, col: 0 });
        for col in 0..6 {
            assert!(wg.is_highlighted(8, col), "col {col}");
        }
        // Six letters, seven bytes: the seventh column stays dark.
        assert!(!wg.is_highlighted(8, 6));
        assert_eq!(wg.mask().count_lit(), 6);
    }

    #[test]
    fn highlight_missing_word_lights_nothing() {
        let mut wg = WordGrid::new(grid());
        assert_eq!(highlight(&mut wg, "MITTERNACHT"), None);
        assert_eq!(wg.mask().count_lit(), 0);
    }
}
