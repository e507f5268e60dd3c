//! Terminal-backed implementations.
//!
//! This module provides concrete backends for the
//! [`DrawSurface`](crate::traits::DrawSurface) and
//! [`TickSource`](crate::traits::TickSource) traits: an ANSI text surface
//! and a wall-clock minute ticker.
//!
//! Nothing outside this module and the binary should reference the
//! terminal directly.

pub mod surface;
pub mod ticker;
