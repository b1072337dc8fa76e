//! In-memory surface that records drawing operations.
//!
//! Used by the CLI and by tests to observe what the renderer would have put
//! on a canvas.

use serde::Serialize;

use crate::error::{Result, ScrollframeError};
use crate::layout::{Placement, Viewport};

use super::backend::FrameSurface;

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SurfaceOp {
    Configure {
        physical_width: u32,
        physical_height: u32,
        dpr: f64,
    },
    Clear {
        width: f64,
        height: f64,
    },
    Blit {
        index: usize,
        placement: Placement,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    fail_blits: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose blits always fail, for exercising fault handling.
    pub fn failing() -> Self {
        Self {
            ops: Vec::new(),
            fail_blits: true,
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Recorded blits as `(index, placement)`.
    pub fn blits(&self) -> Vec<(usize, Placement)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Blit { index, placement } => Some((*index, *placement)),
                _ => None,
            })
            .collect()
    }

    pub fn last_blit(&self) -> Option<(usize, Placement)> {
        self.blits().last().copied()
    }

    pub fn clear_log(&mut self) {
        self.ops.clear();
    }
}

impl FrameSurface for RecordingSurface {
    fn configure(&mut self, viewport: &Viewport) -> Result<()> {
        let (physical_width, physical_height) = viewport.physical_size();
        self.ops.push(SurfaceOp::Configure {
            physical_width,
            physical_height,
            dpr: viewport.dpr,
        });
        Ok(())
    }

    fn clear(&mut self, viewport: &Viewport) {
        self.ops.push(SurfaceOp::Clear {
            width: viewport.width,
            height: viewport.height,
        });
    }

    fn blit(&mut self, index: usize, placement: &Placement) -> Result<()> {
        if self.fail_blits {
            return Err(ScrollframeError::Render(format!(
                "no image attached for frame {index}"
            )));
        }
        self.ops.push(SurfaceOp::Blit {
            index,
            placement: *placement,
        });
        Ok(())
    }
}
