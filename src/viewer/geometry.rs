//! Layout geometry read from the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::scroll::{LayoutGeometry, ScrollSample};

/// Reads the driving section's offsets and the window scroll on every sample,
/// so layout changes after load are picked up.
pub struct DomGeometry {
    window: Window,
    document: Document,
    section_selector: String,
}

impl DomGeometry {
    pub fn new(window: Window, document: Document, section_selector: impl Into<String>) -> Self {
        Self {
            window,
            document,
            section_selector: section_selector.into(),
        }
    }

    fn section(&self) -> Option<HtmlElement> {
        self.document
            .query_selector(&self.section_selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl LayoutGeometry for DomGeometry {
    fn sample(&self) -> Option<ScrollSample> {
        let section = self.section()?;
        Some(ScrollSample {
            section_top: f64::from(section.offset_top()),
            section_height: f64::from(section.offset_height()),
            viewport_height: self.window.inner_height().ok()?.as_f64()?,
            scroll_offset: self.window.scroll_y().ok()?,
        })
    }
}
