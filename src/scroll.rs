//! Scroll progress mapping.
//!
//! Converts the scroll offset inside a bounded section into a normalized
//! progress value, and progress into a discrete frame index.

use serde::{Deserialize, Serialize};

/// Normalized scroll position within the animated section, always in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp an arbitrary value into [0, 1]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::START
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// `clamp((scroll_offset - section_top) / scrollable_height, 0, 1)`.
///
/// A non-positive (or non-finite) scrollable height means the section cannot
/// scroll: progress saturates at 1 once the section top is reached and is 0
/// before it.
pub fn progress(section_top: f64, scrollable_height: f64, scroll_offset: f64) -> Progress {
    if !scroll_offset.is_finite() || !section_top.is_finite() {
        return Progress::START;
    }
    let travelled = scroll_offset - section_top;
    if !scrollable_height.is_finite() || scrollable_height <= 0.0 {
        return if travelled >= 0.0 {
            Progress::END
        } else {
            Progress::START
        };
    }
    Progress::new(travelled / scrollable_height)
}

/// `floor(progress * (frame_count - 1))`, always in `[0, frame_count - 1]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn frame_index(progress: Progress, frame_count: usize) -> usize {
    let Some(last) = frame_count.checked_sub(1) else {
        return 0;
    };
    let index = (progress.value() * last as f64).floor();
    // progress is clamped, so index is a non-negative integer no larger than last
    (index as usize).min(last)
}

/// Layout inputs for one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSample {
    /// Document offset of the section's top edge
    pub section_top: f64,
    /// Rendered height of the section
    pub section_height: f64,
    /// Height of the browser viewport
    pub viewport_height: f64,
    /// Current vertical scroll offset of the document
    pub scroll_offset: f64,
}

impl ScrollSample {
    /// Section height minus viewport height (may be zero or negative).
    pub fn scrollable_height(&self) -> f64 {
        self.section_height - self.viewport_height
    }

    pub fn progress(&self) -> Progress {
        progress(self.section_top, self.scrollable_height(), self.scroll_offset)
    }

    /// Same geometry at a different scroll offset.
    pub fn at_offset(self, scroll_offset: f64) -> Self {
        Self {
            scroll_offset,
            ..self
        }
    }
}

/// Supplies section geometry and scroll offset, refreshed once per tick.
pub trait LayoutGeometry {
    /// Current layout, or `None` when it cannot be measured (e.g. the section
    /// is missing from the document).
    fn sample(&self) -> Option<ScrollSample>;
}

impl LayoutGeometry for ScrollSample {
    fn sample(&self) -> Option<ScrollSample> {
        Some(*self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_maps_to_half() {
        let p = progress(0.0, 1000.0, 500.0);
        assert_eq!(p.value(), 0.5);
        assert_eq!(frame_index(p, 200), 99);
    }

    #[test]
    fn clamps_before_and_after_the_section() {
        assert_eq!(progress(400.0, 1000.0, 0.0), Progress::START);
        assert_eq!(progress(400.0, 1000.0, 5000.0), Progress::END);
    }

    #[test]
    fn zero_or_negative_height_saturates() {
        assert_eq!(progress(100.0, 0.0, 100.0), Progress::END);
        assert_eq!(progress(100.0, -50.0, 99.0), Progress::START);
        assert_eq!(progress(100.0, -50.0, 400.0), Progress::END);
    }

    #[test]
    fn non_finite_inputs_stay_in_range() {
        assert_eq!(progress(0.0, 100.0, f64::NAN), Progress::START);
        assert_eq!(progress(0.0, f64::NAN, 10.0), Progress::END);
        assert_eq!(Progress::new(f64::INFINITY), Progress::END);
    }

    #[test]
    fn endpoints_map_to_first_and_last_frame() {
        for n in [1, 2, 3, 200] {
            assert_eq!(frame_index(Progress::START, n), 0);
            assert_eq!(frame_index(Progress::END, n), n - 1);
        }
        assert_eq!(frame_index(Progress::END, 0), 0);
    }

    #[test]
    fn sample_derives_scrollable_height() {
        let sample = ScrollSample {
            section_top: 0.0,
            section_height: 1800.0,
            viewport_height: 800.0,
            scroll_offset: 250.0,
        };
        assert_eq!(sample.scrollable_height(), 1000.0);
        assert_eq!(sample.progress().value(), 0.25);
        assert_eq!(sample.at_offset(1000.0).progress(), Progress::END);
    }
}
