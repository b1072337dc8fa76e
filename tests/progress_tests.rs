//! Tests for scroll progress and frame index mapping.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]

mod common;

use scrollframe::{frame_index, progress, Progress, ScrollSample};
use test_case::test_case;

#[test]
fn progress_is_clamped_and_monotonic() {
    let sample = common::section(1000.0);
    let mut previous = Progress::START;
    for step in -20..=140 {
        let offset = f64::from(step) * 10.0;
        let p = sample.at_offset(offset).progress();
        assert!((0.0..=1.0).contains(&p.value()), "offset {offset}: {p:?}");
        assert!(p >= previous, "progress decreased at offset {offset}");
        previous = p;
    }
}

#[test_case(1 ; "single frame")]
#[test_case(2 ; "two frames")]
#[test_case(200 ; "default sequence")]
#[test_case(10_000 ; "long sequence")]
fn endpoints_map_to_first_and_last_frame(count: usize) {
    assert_eq!(frame_index(Progress::START, count), 0);
    assert_eq!(frame_index(Progress::END, count), count - 1);
}

#[test]
fn halfway_through_two_hundred_frames() {
    let sample = ScrollSample {
        section_top: 0.0,
        section_height: 1800.0,
        viewport_height: 800.0,
        scroll_offset: 500.0,
    };
    let p = sample.progress();
    assert_eq!(p.value(), 0.5);
    assert_eq!(frame_index(p, 200), 99);
}

#[test_case(0.0, 0.0, 0.0 ; "zero height at the top")]
#[test_case(100.0, 0.0, 1.0 ; "zero height past the top")]
#[test_case(100.0, -250.0, 1.0 ; "section shorter than viewport")]
#[test_case(-1.0, -250.0, 0.0 ; "before a short section")]
#[test_case(50.0, f64::NAN, 1.0 ; "unmeasurable height")]
fn degenerate_sections_saturate(offset: f64, scrollable: f64, expected: f64) {
    assert_eq!(progress(0.0, scrollable, offset).value(), expected);
}

#[test]
fn offset_section_starts_counting_at_its_top() {
    assert_eq!(progress(600.0, 1200.0, 300.0).value(), 0.0);
    assert_eq!(progress(600.0, 1200.0, 900.0).value(), 0.25);
    assert_eq!(progress(600.0, 1200.0, 5000.0).value(), 1.0);
}

#[test]
fn every_progress_maps_into_range() {
    for count in [1_usize, 3, 200] {
        for step in 0..=1000 {
            let idx = frame_index(Progress::new(f64::from(step) / 1000.0), count);
            assert!(idx < count);
        }
    }
}
