//! Frame store: fixed-size ordered frames plus load completion counting.

use serde::{Deserialize, Serialize};

use super::{Frame, FrameState};
use crate::error::ScrollframeError;
use crate::locator::LocatorScheme;

/// When the store counts as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadinessPolicy {
    /// Every frame must load; one failure blocks the animation forever
    #[default]
    AllFrames,
    /// Ready once at least `N - k` frames have loaded
    AllowMissing(usize),
}

impl ReadinessPolicy {
    pub fn from_max_missing(max_missing: usize) -> Self {
        if max_missing == 0 {
            Self::AllFrames
        } else {
            Self::AllowMissing(max_missing)
        }
    }

    fn required(self, frame_count: usize) -> usize {
        match self {
            Self::AllFrames => frame_count,
            Self::AllowMissing(k) => frame_count.saturating_sub(k).max(1),
        }
    }
}

/// What a single load completion changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    /// Counted, store not ready yet
    Loaded,
    /// This completion made the store ready (reported exactly once)
    BecameReady,
    /// Recorded as a load failure
    Failed,
    /// Duplicate or out-of-range completion; nothing changed
    Ignored,
}

/// Ordered sequence of N frames and a monotonically increasing loaded count.
#[derive(Debug)]
pub struct FrameStore {
    frames: Vec<Frame>,
    loaded_count: usize,
    failures: Vec<ScrollframeError>,
    policy: ReadinessPolicy,
    ready_reported: bool,
}

impl FrameStore {
    /// Create a store with one pending frame per locator.
    pub fn new(locators: Vec<String>, policy: ReadinessPolicy) -> Self {
        let frames = locators
            .into_iter()
            .enumerate()
            .map(|(index, locator)| Frame::new(index, locator))
            .collect();
        Self {
            frames,
            loaded_count: 0,
            failures: Vec::new(),
            policy,
            ready_reported: false,
        }
    }

    pub fn from_scheme(scheme: &LocatorScheme, frame_count: usize, policy: ReadinessPolicy) -> Self {
        Self::new(scheme.sequence(frame_count), policy)
    }

    /// Number of frames (N)
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn policy(&self) -> ReadinessPolicy {
        self.policy
    }

    /// True once enough frames have loaded to start animating.
    pub fn is_ready(&self) -> bool {
        !self.frames.is_empty() && self.loaded_count >= self.policy.required(self.frames.len())
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// `(index, locator)` pairs for starting acquisition of every frame.
    pub fn locators(&self) -> impl Iterator<Item = (usize, &str)> {
        self.frames.iter().map(|f| (f.index, f.locator.as_str()))
    }

    /// Failures recorded so far, in completion order.
    pub fn failures(&self) -> &[ScrollframeError] {
        &self.failures
    }

    /// Record a successful load with the decoded image size.
    pub fn mark_loaded(&mut self, index: usize, width: u32, height: u32) -> LoadEvent {
        let Some(frame) = self.frames.get_mut(index) else {
            tracing::debug!(index, "load completion for unknown frame");
            return LoadEvent::Ignored;
        };
        if frame.state != FrameState::Pending {
            return LoadEvent::Ignored;
        }
        frame.state = FrameState::Loaded { width, height };
        self.loaded_count += 1;

        if !self.ready_reported && self.is_ready() {
            self.ready_reported = true;
            tracing::info!(
                loaded = self.loaded_count,
                total = self.frames.len(),
                "frame sequence ready"
            );
            LoadEvent::BecameReady
        } else {
            LoadEvent::Loaded
        }
    }

    /// Record a failed load. Logged, never retried.
    pub fn mark_failed(&mut self, index: usize) -> LoadEvent {
        let Some(frame) = self.frames.get_mut(index) else {
            return LoadEvent::Ignored;
        };
        if frame.state != FrameState::Pending {
            return LoadEvent::Ignored;
        }
        frame.state = FrameState::Failed;
        let err = ScrollframeError::LoadFailure {
            index,
            locator: frame.locator.clone(),
        };
        tracing::error!("{err}");
        if self.policy == ReadinessPolicy::AllFrames {
            tracing::warn!(
                index,
                "animation cannot start: every frame is required to load"
            );
        }
        self.failures.push(err);
        LoadEvent::Failed
    }
}
