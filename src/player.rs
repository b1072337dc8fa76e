//! Sequence player: owns the frame store, renderer and driver.
//!
//! The player is the one object shared (by reference) with load callbacks,
//! the resize handler and the animation loop.

use crate::config::SequenceConfig;
use crate::driver::{AnimationDriver, DriverState, TickOutcome};
use crate::frames::{FrameStore, LoadEvent, ReadinessPolicy};
use crate::layout::Viewport;
use crate::render::{DrawOutcome, FrameSurface, ViewportRenderer};
use crate::scroll::LayoutGeometry;

pub struct SequencePlayer<S> {
    store: FrameStore,
    renderer: ViewportRenderer<S>,
    driver: AnimationDriver,
}

impl<S: FrameSurface> SequencePlayer<S> {
    pub fn new(store: FrameStore, surface: S, viewport: Viewport) -> Self {
        Self {
            store,
            renderer: ViewportRenderer::new(surface, viewport),
            driver: AnimationDriver::new(),
        }
    }

    /// Player for a configured sequence with all frames pending.
    pub fn from_config(config: &SequenceConfig, surface: S, viewport: Viewport) -> Self {
        let store = FrameStore::from_scheme(
            &config.locator,
            config.frame_count,
            ReadinessPolicy::from_max_missing(config.max_missing_frames),
        );
        Self::new(store, surface, viewport)
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn renderer(&self) -> &ViewportRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut ViewportRenderer<S> {
        &mut self.renderer
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn current_frame(&self) -> usize {
        self.driver.current_frame()
    }

    /// Frame on the surface, `None` until one has been drawn.
    pub fn drawn_frame(&self) -> Option<usize> {
        self.driver.drawn_frame()
    }

    pub fn frame_count(&self) -> usize {
        self.store.len()
    }

    pub fn loaded_count(&self) -> usize {
        self.store.loaded_count()
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    /// Load completion. On the completion that makes the store ready the
    /// viewport is re-applied and the driver starts.
    pub fn frame_loaded(&mut self, index: usize, width: u32, height: u32) -> LoadEvent {
        let event = self.store.mark_loaded(index, width, height);
        if event == LoadEvent::BecameReady {
            let vp = *self.renderer.viewport();
            self.renderer.configure(vp.width, vp.height, vp.dpr);
            self.driver.start(&self.store, &mut self.renderer);
        }
        event
    }

    pub fn frame_failed(&mut self, index: usize) -> LoadEvent {
        self.store.mark_failed(index)
    }

    /// Reconfigure for a new viewport. Resizing clears the surface, so a
    /// running player redraws its current frame.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, dpr: f64) -> DrawOutcome {
        self.renderer.configure(logical_width, logical_height, dpr);
        if !self.driver.is_running() {
            return DrawOutcome::Skipped;
        }
        match self.driver.drawn_frame().and_then(|index| self.store.get(index)) {
            Some(frame) => self.renderer.draw(frame),
            None => DrawOutcome::Skipped,
        }
    }

    /// One animation tick against the current layout.
    pub fn tick(&mut self, geometry: &impl LayoutGeometry) -> TickOutcome {
        if !self.driver.is_running() {
            return if self.driver.state() == DriverState::Stopped {
                TickOutcome::Stopped
            } else {
                TickOutcome::Idle
            };
        }
        let Some(sample) = geometry.sample() else {
            return TickOutcome::Unchanged;
        };
        self.driver.tick(&sample, &self.store, &mut self.renderer)
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }
}
