//! Viewport renderer: fits the selected frame into the drawing surface.

use crate::frames::Frame;
use crate::layout::{cover_fit, Viewport};

use super::backend::{DrawOutcome, FrameSurface};

/// Draws single frames into a device-pixel-ratio-aware surface.
pub struct ViewportRenderer<S> {
    surface: S,
    viewport: Viewport,
}

impl<S: FrameSurface> ViewportRenderer<S> {
    /// Create a renderer and configure the surface for `viewport`.
    pub fn new(surface: S, viewport: Viewport) -> Self {
        let mut renderer = Self { surface, viewport };
        renderer.apply_viewport();
        renderer
    }

    /// Establish the surface transform for a new logical size and pixel ratio.
    /// Must be called on every resize.
    pub fn configure(&mut self, logical_width: f64, logical_height: f64, dpr: f64) {
        self.viewport.resize(logical_width, logical_height, dpr);
        self.apply_viewport();
    }

    fn apply_viewport(&mut self) {
        if let Err(err) = self.surface.configure(&self.viewport) {
            tracing::warn!("surface configure failed: {err}");
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Draw a frame with a centered cover fit. No-op for unloaded frames.
    pub fn draw(&mut self, frame: &Frame) -> DrawOutcome {
        let Some((width, height)) = frame.dimensions() else {
            return DrawOutcome::Skipped;
        };
        let Some(placement) = cover_fit(width, height, &self.viewport) else {
            return DrawOutcome::Skipped;
        };

        self.surface.clear(&self.viewport);
        match self.surface.blit(frame.index, &placement) {
            Ok(()) => DrawOutcome::Drawn(placement),
            Err(err) => {
                tracing::warn!(index = frame.index, "frame blit failed: {err}");
                DrawOutcome::Skipped
            }
        }
    }
}
