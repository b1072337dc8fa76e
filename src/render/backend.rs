//! Surface trait for pluggable drawing targets.
//!
//! This module defines the `FrameSurface` trait that abstracts the drawing
//! operations the renderer needs, so the Canvas 2D surface used in the browser
//! and the recording surface used by tests and the CLI are interchangeable.

use crate::error::Result;
use crate::layout::{Placement, Viewport};

/// Trait for drawing surfaces
///
/// Implementations own the decoded frame images (or stand-ins for them) and
/// know how to put frame `index` at a placement.
pub trait FrameSurface {
    /// Size the backing store to the viewport's physical pixels and set the
    /// transform so one drawing unit is one logical pixel.
    fn configure(&mut self, viewport: &Viewport) -> Result<()>;

    /// Clear the logical viewport area.
    fn clear(&mut self, viewport: &Viewport);

    /// Draw frame `index` at `placement` (logical coordinates).
    fn blit(&mut self, index: usize, placement: &Placement) -> Result<()>;
}

/// Result of asking the renderer to draw a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOutcome {
    /// The frame was drawn at this placement
    Drawn(Placement),
    /// Nothing was drawn (frame not loaded, empty viewport or surface fault)
    Skipped,
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }
}
