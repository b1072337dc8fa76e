//! Viewport state and frame placement geometry.
//!
//! This module handles:
//! - Logical viewport size and device pixel ratio, recomputed on resize
//! - Physical backing-store size for crisp rendering on high-density displays
//! - Aspect-preserving cover fit of a frame into the viewport

mod fit;
mod viewport;

pub use fit::{cover_fit, Placement};
pub use viewport::Viewport;
