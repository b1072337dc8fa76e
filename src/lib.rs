//! scrollframe - scroll-driven image sequence playback for the web
//!
//! Plays a numbered image sequence on a canvas as the visitor scrolls through
//! a page section, plus the interactions of a single-page portfolio:
//! - Concurrent frame preloading with a readiness gate
//! - Scroll progress to frame index mapping
//! - Cover-fit drawing on a high-DPI canvas
//! - Navigation menu, reveal-on-scroll, smooth anchors, card hover
//! - A chat relay to a hosted generative-language model
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ScrollFrame } from 'scrollframe';
//! await init();
//! const frames = new ScrollFrame(canvas, { frameCount: 200 });
//! frames.load();
//! ```

pub mod chat;
pub mod config;
pub mod driver;
pub mod error;
pub mod frames;
pub mod layout;
pub mod locator;
pub mod logging;
pub mod player;
pub mod render;
pub mod scroll;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::{PortfolioConfig, SequenceConfig};
pub use driver::{AnimationDriver, DriverState, TickOutcome};
pub use error::{Result, ScrollframeError};
pub use frames::{Frame, FrameState, FrameStore, LoadEvent, ReadinessPolicy};
pub use layout::{cover_fit, Placement, Viewport};
pub use locator::LocatorScheme;
pub use player::SequencePlayer;
pub use scroll::{frame_index, progress, LayoutGeometry, Progress, ScrollSample};

#[cfg(target_arch = "wasm32")]
pub use viewer::{mount_portfolio, Portfolio, ScrollFrame};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
