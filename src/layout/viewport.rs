//! Viewport state management for resizing and device pixel ratio.

/// Viewport state - the logical drawing area of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in logical (CSS) pixels
    pub width: f64,
    /// Viewport height in logical (CSS) pixels
    pub height: f64,
    /// Device pixel ratio (physical pixels per logical pixel)
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            dpr: 1.0,
        }
    }

    /// Viewport of the given logical size and pixel ratio.
    ///
    /// Negative or non-finite sizes collapse to zero; an unusable ratio falls
    /// back to 1, as browsers report when `devicePixelRatio` is unavailable.
    pub fn with_size(width: f64, height: f64, dpr: f64) -> Self {
        let mut viewport = Self::new();
        viewport.resize(width, height, dpr);
        viewport
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.width = sanitize_len(width);
        self.height = sanitize_len(height);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Backing-store size in physical pixels: `(width * dpr, height * dpr)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn physical_size(&self) -> (u32, u32) {
        let to_px = |v: f64| (v * self.dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32;
        (to_px(self.width), to_px(self.height))
    }

    /// Width over height, or `None` for a degenerate viewport.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    /// True when nothing can be drawn.
    pub fn is_empty(&self) -> bool {
        self.aspect_ratio().is_none()
    }
}

fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_scales_by_dpr() {
        let vp = Viewport::with_size(400.0, 300.0, 2.0);
        assert_eq!(vp.physical_size(), (800, 600));
    }

    #[test]
    fn fractional_dpr_rounds() {
        let vp = Viewport::with_size(101.0, 33.0, 1.5);
        assert_eq!(vp.physical_size(), (152, 50));
    }

    #[test]
    fn bad_dpr_falls_back_to_one() {
        assert_eq!(Viewport::with_size(10.0, 10.0, 0.0).dpr, 1.0);
        assert_eq!(Viewport::with_size(10.0, 10.0, f64::NAN).dpr, 1.0);
    }

    #[test]
    fn degenerate_viewport_has_no_ratio() {
        assert!(Viewport::with_size(0.0, 100.0, 1.0).is_empty());
        assert!(Viewport::with_size(-5.0, 100.0, 1.0).is_empty());
        assert_eq!(Viewport::with_size(-5.0, 100.0, 1.0).width, 0.0);
    }
}
