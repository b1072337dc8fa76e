//! Tests for frame loading bookkeeping and the readiness gate.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use scrollframe::{FrameState, FrameStore, LoadEvent, LocatorScheme, ReadinessPolicy, ScrollframeError};
use test_case::test_case;

#[test]
fn locators_follow_the_numbering_scheme() {
    let store = common::store(200);
    let locators: Vec<(usize, &str)> = store.locators().collect();
    assert_eq!(locators.len(), 200);
    assert_eq!(locators[0], (0, "images/ezgif-frame-001.jpg"));
    assert_eq!(locators[99], (99, "images/ezgif-frame-100.jpg"));
    assert_eq!(locators[199], (199, "images/ezgif-frame-200.jpg"));
}

#[test]
fn out_of_order_completions_become_ready_exactly_once() {
    let mut store = common::store(4);
    let order = [3, 0, 2, 1];
    let events: Vec<LoadEvent> = order
        .iter()
        .map(|&i| store.mark_loaded(i, 320, 180))
        .collect();

    assert_eq!(
        events,
        vec![
            LoadEvent::Loaded,
            LoadEvent::Loaded,
            LoadEvent::Loaded,
            LoadEvent::BecameReady
        ]
    );
    assert!(store.is_ready());
    assert_eq!(store.loaded_count(), 4);
}

#[test]
fn duplicate_completions_are_not_double_counted() {
    let mut store = common::store(2);
    assert_eq!(store.mark_loaded(0, 1, 1), LoadEvent::Loaded);
    assert_eq!(store.mark_loaded(0, 1, 1), LoadEvent::Ignored);
    assert_eq!(store.loaded_count(), 1);
    assert!(!store.is_ready());

    assert_eq!(store.mark_loaded(1, 1, 1), LoadEvent::BecameReady);
    assert_eq!(store.mark_loaded(1, 1, 1), LoadEvent::Ignored);
    assert_eq!(store.mark_failed(1), LoadEvent::Ignored);
    assert_eq!(store.loaded_count(), 2);
}

#[test]
fn unknown_indices_are_ignored() {
    let mut store = common::store(2);
    assert_eq!(store.mark_loaded(2, 1, 1), LoadEvent::Ignored);
    assert_eq!(store.mark_failed(99), LoadEvent::Ignored);
    assert_eq!(store.loaded_count(), 0);
}

#[test]
fn a_single_failure_blocks_the_strict_policy() {
    let mut store = common::store(3);
    store.mark_loaded(0, 1, 1);
    assert_eq!(store.mark_failed(1), LoadEvent::Failed);
    store.mark_loaded(2, 1, 1);

    assert!(!store.is_ready());
    assert_eq!(store.get(1).unwrap().state, FrameState::Failed);
    match &store.failures()[0] {
        ScrollframeError::LoadFailure { index, locator } => {
            assert_eq!(*index, 1);
            assert_eq!(locator, "images/ezgif-frame-002.jpg");
        }
        other => panic!("unexpected failure {other:?}"),
    }
}

#[test_case(10, 0, 10 ; "strict")]
#[test_case(10, 1, 9 ; "one missing")]
#[test_case(10, 3, 7 ; "three missing")]
#[test_case(2, 5, 1 ; "budget larger than sequence still needs one frame")]
fn allowed_missing_frames_lower_the_bar(count: usize, max_missing: usize, needed: usize) {
    let policy = ReadinessPolicy::from_max_missing(max_missing);
    let mut store = FrameStore::from_scheme(&LocatorScheme::default(), count, policy);

    for index in 0..needed - 1 {
        store.mark_loaded(index, 1, 1);
    }
    assert!(!store.is_ready());
    assert_eq!(store.mark_loaded(needed - 1, 1, 1), LoadEvent::BecameReady);
    assert!(store.is_ready());
}

#[test]
fn empty_store_is_never_ready() {
    let store = common::store(0);
    assert!(store.is_empty());
    assert!(!store.is_ready());
}

#[test]
fn custom_scheme_pads_and_extends() {
    let scheme = LocatorScheme {
        prefix: "seq/shot_".to_string(),
        pad_width: 4,
        extension: "webp".to_string(),
    };
    assert_eq!(scheme.locate(12), "seq/shot_0012.webp");
    assert_eq!(scheme.locate(12345), "seq/shot_12345.webp");
}
