//! Aspect-preserving frame placement.

use serde::Serialize;

use super::Viewport;

/// Where a frame is drawn, in logical viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale a `frame_width` x `frame_height` image to cover the viewport and
/// center it.
///
/// A frame relatively wider than the viewport fills the height (overflowing
/// left and right); otherwise it fills the width (overflowing top and bottom).
/// Returns `None` when either side is empty.
pub fn cover_fit(frame_width: u32, frame_height: u32, viewport: &Viewport) -> Option<Placement> {
    if frame_width == 0 || frame_height == 0 {
        return None;
    }
    let view_ratio = viewport.aspect_ratio()?;
    let img_ratio = f64::from(frame_width) / f64::from(frame_height);

    let (width, height) = if img_ratio > view_ratio {
        let height = viewport.height;
        (img_ratio * height, height)
    } else {
        let width = viewport.width;
        (width, width / img_ratio)
    };

    Some(Placement {
        x: (viewport.width - width) / 2.0,
        y: (viewport.height - height) / 2.0,
        width,
        height,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wide_frame_fills_height() {
        // 16:9 frame in a 4:3 viewport
        let vp = Viewport::with_size(800.0, 600.0, 1.0);
        let p = cover_fit(1920, 1080, &vp).unwrap();
        assert_eq!(p.height, 600.0);
        assert!((p.width - 600.0 * 16.0 / 9.0).abs() < 1e-9);
        assert!((p.x - (800.0 - p.width) / 2.0).abs() < 1e-9);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn tall_frame_fills_width() {
        let vp = Viewport::with_size(800.0, 600.0, 2.0);
        let p = cover_fit(1000, 1000, &vp).unwrap();
        assert_eq!(p.width, 800.0);
        assert_eq!(p.height, 800.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, -100.0);
    }

    #[test]
    fn matching_ratio_fills_exactly() {
        let vp = Viewport::with_size(1600.0, 900.0, 1.0);
        let p = cover_fit(1920, 1080, &vp).unwrap();
        assert_eq!((p.x, p.y), (0.0, 0.0));
        assert!((p.width - 1600.0).abs() < 1e-9);
        assert!((p.height - 900.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_have_no_placement() {
        let vp = Viewport::with_size(800.0, 600.0, 1.0);
        assert!(cover_fit(0, 10, &vp).is_none());
        assert!(cover_fit(10, 10, &Viewport::with_size(0.0, 600.0, 1.0)).is_none());
    }
}
