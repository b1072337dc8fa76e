//! Canvas 2D drawing surface.
//!
//! Frames are `HtmlImageElement`s attached by the loader; drawing is a single
//! `drawImage` per frame change on a retina-scaled 2D context.

mod surface;

pub use surface::CanvasSurface;
