//! The orchestrator that ties the grid, the word rules and the renderer
//! together.
//!
//! [`WordClock`] owns the [`WordGrid`] and reacts to [`Tick`]s by
//! recomputing which cells are lit.  Every update starts from a dark mask,
//! so an update never depends on the one before it.

use crate::config::LayoutConfig;
use crate::grid::{CharacterGrid, GridError, WordGrid};
use crate::locator::{find_all, highlight};
use crate::render::Renderer;
use crate::traits::DrawSurface;
use crate::words::{words_for, ClockTime, TimeError, Word};
use chrono::Timelike;
use log::{debug, info};
use rand::Rng;

/// A wall-clock reading delivered by a [`TickSource`](crate::traits::TickSource).
///
/// `hour` is on the 24-hour clock; reduction to the clock face happens in
/// [`ClockTime::from_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub hour: u32,
    pub minute: u32,
}

impl Tick {
    /// Read hour and minute from any chrono time.
    pub fn from_time(time: &impl Timelike) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Parse `"HH:MM"` (24-hour).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bad = || TimeError::Parse(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let hour: u32 = h.parse().map_err(|_| bad())?;
        let minute: u32 = m.parse().map_err(|_| bad())?;
        // Range check only; the clock time itself is built per update.
        ClockTime::from_tick(hour, minute)?;
        Ok(Self { hour, minute })
    }
}

/// Possible errors from the clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// A word the rules can ask for is not on the clock face.
    #[error("word {0} is not on the clock face")]
    MissingWord(Word),
    /// The draw surface returned an error.
    #[error("draw surface error: {0}")]
    Draw(String),
}

/// Check that every word the rules use can be found in `chars`.
///
/// Words found more than once are accepted; the topmost occurrence is the
/// one that lights.
pub fn self_check(chars: &CharacterGrid) -> Result<(), ClockError> {
    for word in Word::ALL {
        match find_all(chars, word.text()).as_slice() {
            [] => return Err(ClockError::MissingWord(word)),
            [_] => {}
            [first, rest @ ..] => debug!(
                "{} appears {} times, row {} wins",
                word,
                rest.len() + 1,
                first.row
            ),
        }
    }
    Ok(())
}

/// The word clock.
///
/// # Typical usage
///
/// ```ignore
/// let mut clock = WordClock::swiss_german(LayoutConfig::default(), &mut rng)?;
/// clock.handle(Tick { hour: 12, minute: 7 })?;
/// clock.render(&mut surface)?;
/// ```
#[derive(Debug)]
pub struct WordClock {
    grid: WordGrid,
    renderer: Renderer,
    dirty: bool,
}

impl WordClock {
    /// Build a clock over `chars`.
    ///
    /// Runs [`self_check`] and then gives every filler cell a random
    /// letter.  The letters stay fixed for the lifetime of the clock.
    pub fn new(chars: CharacterGrid, layout: LayoutConfig, rng: &mut impl Rng) -> Result<Self, ClockError> {
        self_check(&chars)?;
        let mut grid = WordGrid::new(chars);
        grid.randomize_fillers(rng);
        Ok(Self {
            grid,
            renderer: Renderer::new(layout),
            dirty: true,
        })
    }

    /// Build a clock over the compiled-in Swiss-German face.
    pub fn swiss_german(layout: LayoutConfig, rng: &mut impl Rng) -> Result<Self, ClockError> {
        Self::new(CharacterGrid::swiss_german()?, layout, rng)
    }

    pub fn grid(&self) -> &WordGrid {
        &self.grid
    }

    /// Whether the grid changed since the last [`render`](Self::render).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Process a single [`Tick`].
    ///
    /// An out-of-range tick is rejected and leaves the previous time lit.
    pub fn handle(&mut self, tick: Tick) -> Result<ClockTime, ClockError> {
        let time = ClockTime::from_tick(tick.hour, tick.minute)?;
        self.show(time);
        Ok(time)
    }

    /// Light the words for `time`.
    ///
    /// The clock only becomes dirty when the lit cells differ from before.
    pub fn show(&mut self, time: ClockTime) {
        let before = self.grid.mask().clone();
        self.grid.clear_all();
        let words = words_for(time);
        for word in &words {
            highlight(&mut self.grid, word.text());
        }
        info!(
            "{} -> {}",
            time,
            words.iter().map(|w| w.text()).collect::<Vec<_>>().join(" ")
        );
        if *self.grid.mask() != before {
            self.dirty = true;
        }
    }

    /// Draw the grid onto `surface`.
    ///
    /// On failure the grid stays dirty so the next tick draws again.
    pub fn render<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), ClockError> {
        self.renderer
            .render(&self.grid, surface)
            .map_err(|e| ClockError::Draw(e.to_string()))?;
        self.dirty = false;
        Ok(())
    }

    /// Draw only if the grid changed since the last successful render.
    ///
    /// Returns whether a frame was drawn.
    pub fn render_if_dirty<S: DrawSurface>(&mut self, surface: &mut S) -> Result<bool, ClockError> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(surface)?;
        Ok(true)
    }
}

//  Tests
