//! Tests for the viewport renderer: cover fit, clearing and pixel ratio.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::approx_eq;
use scrollframe::render::{DrawOutcome, RecordingSurface, SurfaceOp, ViewportRenderer};
use scrollframe::{Frame, FrameState, Viewport};
use test_case::test_case;

fn loaded(index: usize, width: u32, height: u32) -> Frame {
    let mut frame = Frame::new(index, format!("frame-{index}.jpg"));
    frame.state = FrameState::Loaded { width, height };
    frame
}

#[test]
fn sixteen_nine_frames_pillarbox_in_four_three_viewport() {
    // frameCount = 3, all 16:9, drawn into 4:3
    let mut player = common::ready_player(3, 1920, 1080, Viewport::with_size(1024.0, 768.0, 1.0));
    let (index, p) = player.renderer().surface().last_blit().unwrap();

    assert_eq!(index, 0);
    assert_eq!(p.height, 768.0);
    assert!(approx_eq(p.width, 768.0 * 16.0 / 9.0));
    assert!(approx_eq(p.x, (1024.0 - p.width) / 2.0));
    assert!(p.x < 0.0, "wide frame overflows both sides");
    assert_eq!(p.y, 0.0);

    // Same geometry for the last frame.
    let outcome = player.tick(&common::section(1000.0).at_offset(1000.0));
    assert_eq!(outcome, scrollframe::TickOutcome::Drawn(2));
    assert_eq!(player.renderer().surface().last_blit().unwrap().1, p);
}

#[test]
fn drawing_twice_gives_the_same_placement() {
    let mut renderer =
        ViewportRenderer::new(RecordingSurface::new(), Viewport::with_size(390.0, 844.0, 3.0));
    let frame = loaded(7, 1920, 1080);
    let first = renderer.draw(&frame);
    let second = renderer.draw(&frame);
    assert!(first.is_drawn());
    assert_eq!(first, second);
}

#[test]
fn every_draw_clears_before_blitting() {
    let mut renderer =
        ViewportRenderer::new(RecordingSurface::new(), Viewport::with_size(800.0, 600.0, 1.0));
    renderer.surface_mut().clear_log();
    renderer.draw(&loaded(0, 100, 100));
    renderer.draw(&loaded(1, 100, 100));

    let ops = renderer.surface().ops();
    assert_eq!(ops.len(), 4);
    assert!(matches!(ops[0], SurfaceOp::Clear { width, height } if width == 800.0 && height == 600.0));
    assert!(matches!(ops[1], SurfaceOp::Blit { index: 0, .. }));
    assert!(matches!(ops[2], SurfaceOp::Clear { .. }));
    assert!(matches!(ops[3], SurfaceOp::Blit { index: 1, .. }));
}

#[test]
fn unloaded_frames_are_never_drawn() {
    let mut renderer = ViewportRenderer::new(RecordingSurface::new(), Viewport::new());
    renderer.surface_mut().clear_log();

    let pending = Frame::new(0, "a.jpg".to_string());
    let mut failed = Frame::new(1, "b.jpg".to_string());
    failed.state = FrameState::Failed;

    assert_eq!(renderer.draw(&pending), DrawOutcome::Skipped);
    assert_eq!(renderer.draw(&failed), DrawOutcome::Skipped);
    assert!(renderer.surface().ops().is_empty());
}

#[test_case(1.0, 1280, 720 ; "standard density")]
#[test_case(2.0, 2560, 1440 ; "retina")]
#[test_case(1.5, 1920, 1080 ; "fractional")]
#[test_case(0.0, 1280, 720 ; "missing ratio falls back to one")]
fn configure_sizes_backing_store_in_physical_pixels(dpr: f64, width: u32, height: u32) {
    let mut renderer = ViewportRenderer::new(RecordingSurface::new(), Viewport::new());
    renderer.configure(1280.0, 720.0, dpr);

    match renderer.surface().ops().last().unwrap() {
        SurfaceOp::Configure {
            physical_width,
            physical_height,
            ..
        } => assert_eq!((*physical_width, *physical_height), (width, height)),
        other => panic!("expected configure, got {other:?}"),
    }
    // Placement stays in logical pixels whatever the ratio.
    let DrawOutcome::Drawn(p) = renderer.draw(&loaded(0, 1280, 720)) else {
        panic!("frame should draw");
    };
    assert!(approx_eq(p.width, 1280.0));
    assert!(approx_eq(p.height, 720.0));
}

#[test]
fn surface_faults_degrade_to_skipped() {
    let mut renderer = ViewportRenderer::new(RecordingSurface::failing(), Viewport::new());
    assert_eq!(renderer.draw(&loaded(0, 10, 10)), DrawOutcome::Skipped);
}

#[test]
fn empty_viewport_draws_nothing() {
    let mut renderer =
        ViewportRenderer::new(RecordingSurface::new(), Viewport::with_size(0.0, 600.0, 1.0));
    assert_eq!(renderer.draw(&loaded(0, 10, 10)), DrawOutcome::Skipped);
}
