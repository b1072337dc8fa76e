//! Rendering engine with pluggable surfaces.
//!
//! This module provides:
//! - The surface trait and draw outcome type
//! - The viewport renderer (cover fit, clear, blit)
//! - Canvas 2D surface (wasm32, the browser target)
//! - Recording surface (tests and the CLI)

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod renderer;

pub use backend::{DrawOutcome, FrameSurface};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{RecordingSurface, SurfaceOp};
pub use renderer::ViewportRenderer;
