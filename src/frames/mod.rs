//! Preloaded image frames and their load bookkeeping.
//!
//! This module handles:
//! - The per-frame load state (pending, loaded with decoded size, failed)
//! - Aggregating out-of-order load completions into a readiness signal
//! - The readiness policy (all frames, or all but a tolerated few)

mod store;

pub use store::{FrameStore, LoadEvent, ReadinessPolicy};

/// Load state of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Requested, no completion yet
    Pending,
    /// Decoded; pixel dimensions are known
    Loaded { width: u32, height: u32 },
    /// The resource could not be loaded; never retried
    Failed,
}

/// One still image of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 0-based position in the sequence
    pub index: usize,
    /// Resource path of the image
    pub locator: String,
    pub state: FrameState,
}

impl Frame {
    pub fn new(index: usize, locator: String) -> Self {
        Self {
            index,
            locator,
            state: FrameState::Pending,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, FrameState::Loaded { .. })
    }

    /// Decoded `(width, height)`, once loaded.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self.state {
            FrameState::Loaded { width, height } => Some((width, height)),
            _ => None,
        }
    }
}
