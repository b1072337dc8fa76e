//! Animation driver: the per-tick frame selection state machine.
//!
//! `Idle` until the frame store is ready, then `Running` for the lifetime of
//! the page unless explicitly stopped. Each tick maps the scroll sample to a
//! candidate frame and redraws only when the candidate changes and is loaded.

use crate::frames::FrameStore;
use crate::render::{FrameSurface, ViewportRenderer};
use crate::scroll::{frame_index, ScrollSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Waiting for the frame store to become ready
    Idle,
    /// Redrawing on every tick
    Running,
    /// Stopped through the cancel handle; terminal
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not started yet
    Idle,
    /// Stopped; the loop should not reschedule
    Stopped,
    /// Candidate equals the current frame
    Unchanged,
    /// Candidate frame is absent, not loaded or failed to draw; nothing drawn
    Skipped(usize),
    /// Current frame updated and drawn
    Drawn(usize),
}

impl TickOutcome {
    /// Whether the host loop should request another tick.
    pub fn keep_running(&self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

#[derive(Debug)]
pub struct AnimationDriver {
    state: DriverState,
    /// Last frame the renderer actually drew
    drawn: Option<usize>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            drawn: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Last drawn frame index (0 before anything is drawn).
    pub fn current_frame(&self) -> usize {
        self.drawn.unwrap_or(0)
    }

    /// Last drawn frame index, `None` until a frame reaches the surface.
    pub fn drawn_frame(&self) -> Option<usize> {
        self.drawn
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Idle -> Running, drawing frame 0 if it is loaded. Returns whether the
    /// transition happened; it can only happen once and only with a ready
    /// store. When frame 0 is not drawable the first tick with a loaded
    /// candidate draws instead.
    pub fn start<S: FrameSurface>(
        &mut self,
        store: &FrameStore,
        renderer: &mut ViewportRenderer<S>,
    ) -> bool {
        if self.state != DriverState::Idle || !store.is_ready() {
            return false;
        }
        self.drawn = None;
        if let Some(first) = store.get(0) {
            if renderer.draw(first).is_drawn() {
                self.drawn = Some(0);
            }
        }
        self.state = DriverState::Running;
        tracing::debug!(frames = store.len(), "animation running");
        true
    }

    /// One scheduling tick.
    pub fn tick<S: FrameSurface>(
        &mut self,
        sample: &ScrollSample,
        store: &FrameStore,
        renderer: &mut ViewportRenderer<S>,
    ) -> TickOutcome {
        match self.state {
            DriverState::Idle => return TickOutcome::Idle,
            DriverState::Stopped => return TickOutcome::Stopped,
            DriverState::Running => {}
        }

        let candidate = frame_index(sample.progress(), store.len());
        if self.drawn == Some(candidate) {
            return TickOutcome::Unchanged;
        }
        match store.get(candidate) {
            Some(frame) if frame.is_loaded() && renderer.draw(frame).is_drawn() => {
                self.drawn = Some(candidate);
                TickOutcome::Drawn(candidate)
            }
            _ => TickOutcome::Skipped(candidate),
        }
    }

    /// Stop the animation. Later ticks report `Stopped`.
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            tracing::debug!(frame = ?self.drawn, "animation stopped");
        }
        self.state = DriverState::Stopped;
    }
}
