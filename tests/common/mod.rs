//! Common test utilities for building players and scroll samples.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use scrollframe::render::RecordingSurface;
use scrollframe::{
    FrameStore, LocatorScheme, ReadinessPolicy, ScrollSample, SequencePlayer, Viewport,
};

/// Store with `count` pending frames using the default locator scheme.
pub fn store(count: usize) -> FrameStore {
    FrameStore::from_scheme(&LocatorScheme::default(), count, ReadinessPolicy::AllFrames)
}

/// Player over a recording surface with nothing loaded yet.
pub fn pending_player(count: usize, viewport: Viewport) -> SequencePlayer<RecordingSurface> {
    SequencePlayer::new(store(count), RecordingSurface::new(), viewport)
}

/// Player with every frame loaded at `width` x `height`, already running.
pub fn ready_player(
    count: usize,
    width: u32,
    height: u32,
    viewport: Viewport,
) -> SequencePlayer<RecordingSurface> {
    let mut player = pending_player(count, viewport);
    for index in 0..count {
        player.frame_loaded(index, width, height);
    }
    player
}

/// Section starting at the top of the document that scrolls for
/// `scrollable` pixels in a 1000px-tall viewport.
pub fn section(scrollable: f64) -> ScrollSample {
    ScrollSample {
        section_top: 0.0,
        section_height: scrollable + 1000.0,
        viewport_height: 1000.0,
        scroll_offset: 0.0,
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
