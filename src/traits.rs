//! Core traits that decouple wortuhr from any specific display or timer.
//!
//! The [`WordClock`](crate::clock::WordClock) only talks to the outside
//! world through these two abstractions: a [`DrawSurface`] it paints
//! letters onto, and a [`TickSource`] that tells it when the minute
//! changes.

use crate::clock::Tick;
use crate::render::{Point, Style};
use std::sync::mpsc;

/// Something letters can be drawn onto.
///
/// An implementation might write ANSI escape sequences to a terminal, or it
/// might be a recording stub used in tests.
pub trait DrawSurface {
    /// The error type produced by this surface.
    type Error: std::error::Error + Send + 'static;

    /// Width of the drawable area, in the same units as [`Point`].
    fn width(&self) -> i32;

    /// Called once before the first letter of a frame.
    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Draw one visible character at `position`.
    ///
    /// `content` is the encoded character, one to four bytes.
    fn draw_character(
        &mut self,
        content: &str,
        position: Point,
        style: Style,
    ) -> Result<(), Self::Error>;

    /// Called once after the last letter of a frame.
    fn end_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A source of [`Tick`]s.
///
/// # Contract
///
/// * [`run`](TickSource::run) **blocks** until the source is exhausted or
///   the sink is closed.
/// * The first tick is sent immediately with the current time; later ticks
///   follow at most once per minute.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait TickSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start ticking and forward every [`Tick`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Tick>) -> Result<(), Self::Error>;
}
