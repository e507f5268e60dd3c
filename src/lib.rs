//! **wortuhr** — a Swiss-German word clock.
//!
//! The time is shown by lighting words in a fixed 11 × 11 grid of letters:
//! at 12:07 the clock reads *ES ISCH FOIF AB ZWÖLFI*.  Cells that belong to
//! no word show a random letter chosen once at startup.
//!
//! # Architecture
//!
//! An update runs leaf-first through four pieces:
//!
//! * [`words`] turns a [`ClockTime`](words::ClockTime) into the list of
//!   words to light.
//! * [`locator`] finds each word in the [`grid`] and lights its cells.
//! * [`grid`] holds the letters and the highlight mask, both indexed by
//!   visible character (see [`glyph`]).
//! * [`render`] paints the grid onto a [`traits::DrawSurface`].
//!
//! [`clock::WordClock`] owns the state and drives the update for every
//! [`clock::Tick`] delivered by a [`traits::TickSource`].  Terminal
//! implementations of both traits live in [`terminal`].

pub mod clock;
pub mod config;
pub mod glyph;
pub mod grid;
pub mod locator;
pub mod render;
pub mod terminal;
pub mod traits;
pub mod words;
