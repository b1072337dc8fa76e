//! Canvas 2D implementation of `FrameSurface` via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::{Result, ScrollframeError};
use crate::layout::{Placement, Viewport};
use crate::render::backend::FrameSurface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Image element per frame index, attached as loads are started
    images: Vec<Option<HtmlImageElement>>,
}

impl CanvasSurface {
    /// Create a surface from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement, frame_count: usize) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self {
            canvas,
            ctx,
            images: vec![None; frame_count],
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Register the image element that backs frame `index`.
    pub fn attach_image(&mut self, index: usize, image: HtmlImageElement) {
        if let Some(slot) = self.images.get_mut(index) {
            *slot = Some(image);
        }
    }
}

impl FrameSurface for CanvasSurface {
    fn configure(&mut self, viewport: &Viewport) -> Result<()> {
        let (physical_width, physical_height) = viewport.physical_size();
        // Setting the size also resets the context state, including the transform.
        self.canvas.set_width(physical_width);
        self.canvas.set_height(physical_height);
        self.ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)
            .map_err(|_| ScrollframeError::Render("Failed to set transform".to_string()))
    }

    fn clear(&mut self, viewport: &Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn blit(&mut self, index: usize, placement: &Placement) -> Result<()> {
        let image = self
            .images
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| ScrollframeError::Render(format!("no image attached for frame {index}")))?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                placement.x,
                placement.y,
                placement.width,
                placement.height,
            )
            .map_err(|_| ScrollframeError::Render(format!("drawImage failed for frame {index}")))
    }
}
