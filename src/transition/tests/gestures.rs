use tracing_test::traced_test;

use crate::event::ChangeSource;
use crate::gesture::GestureInput;
use crate::page::Page;
use crate::transition::{TransitionSettings, TransitionState, TransitionStyle};

use super::support::{CANCEL_MS, COMMIT_MS, Harness, WIDTH};

#[test]
#[traced_test]
fn gesture_start_during_commit_animation_is_ignored() {
    let mut h = Harness::at(Page::Recents);
    h.swipe(-150.0, 0.0);
    assert_eq!(h.page(), Page::Favorites);

    h.drag(-150.0, 0.0);
    h.end();
    assert_eq!(h.page(), Page::Favorites);
    assert_eq!(h.sink.len(), 1);
    assert!(logs_contain(
        "gesture start ignored while a transition is in progress"
    ));

    h.advance_ms(COMMIT_MS);
    h.swipe(-150.0, 0.0);
    assert_eq!(h.page(), Page::Actions);
    assert_eq!(h.sink.len(), 2);
}

#[test]
fn overlapping_start_keeps_the_running_total() {
    let mut h = Harness::at(Page::Dock);
    h.drag(-50.0, 0.0);
    h.begin();
    h.change(-100.0, 0.0);
    h.end();
    assert_eq!(h.page(), Page::Recents);
}

#[test]
fn overlapping_start_during_live_drag_is_ignored() {
    let mut h = Harness::at(Page::Favorites);
    h.drag(-50.0, 0.0);
    assert!(h.controller().is_dragging());

    h.begin();
    assert!(h.controller().is_dragging());
    assert_eq!(h.offset(), -50.0);

    // Only the original stream's total crosses the threshold.
    h.change(-60.0, 0.0);
    assert_eq!(h.offset(), -110.0);
    h.end();
    assert_eq!(h.page(), Page::Actions);
    let change = h.sink.last().expect("commit is notified");
    assert_eq!(change.source, ChangeSource::Gesture);
    assert!(change.suppressed);
}

#[test]
fn phases_without_began_are_ignored() {
    let mut h = Harness::at(Page::Recents);
    h.change(-150.0, 0.0);
    assert!(h.controller().state().is_idle());
    h.end();
    assert!(h.controller().state().is_idle());
    assert_eq!(h.controller().next_deadline(), None);
    assert_eq!(h.page(), Page::Recents);
}

#[test]
fn incremental_changes_accumulate_into_live_offset() {
    let mut h = Harness::at(Page::Favorites);
    h.begin();
    h.change(-20.0, 1.0);
    h.change(-30.0, 1.0);
    assert_eq!(h.offset(), -50.0);
    h.change(-70.0, 0.0);
    assert_eq!(h.offset(), -120.0);
    h.end();
    assert_eq!(h.page(), Page::Actions);
}

#[test]
fn live_offset_is_clamped_to_viewport_width() {
    let mut h = Harness::at(Page::Favorites);
    h.drag(-400.0, 0.0);
    assert_eq!(h.offset(), -WIDTH);
    h.change(800.0, 0.0);
    assert_eq!(h.offset(), WIDTH);
    let preview = h.controller().neighbor_preview().expect("recents preview");
    assert_eq!(preview.page, Page::Recents);
    assert_eq!(preview.offset, 0.0);
}

#[test]
fn reversing_toward_anchor_hides_preview_and_cancels() {
    let mut h = Harness::at(Page::Recents);
    h.drag(-50.0, 0.0);
    assert!(h.controller().neighbor_preview().is_some());
    h.change(200.0, 0.0);
    match h.controller().state() {
        TransitionState::Dragging { neighbor, .. } => assert_eq!(*neighbor, None),
        other => panic!("expected dragging, got {other:?}"),
    }
    assert!(h.controller().neighbor_preview().is_none());
    h.end();
    assert!(matches!(
        h.controller().state(),
        TransitionState::Cancelling { .. }
    ));
    h.advance_ms(CANCEL_MS);
    assert_eq!(h.page(), Page::Recents);
}

#[test]
fn interrupted_drag_always_snaps_back() {
    let mut h = Harness::at(Page::Favorites);
    h.drag(-200.0, 0.0);
    h.navigator.interrupt();
    match h.controller().state() {
        TransitionState::Cancelling { animation, .. } => assert_eq!(animation.start_offset(), -200.0),
        other => panic!("expected cancelling, got {other:?}"),
    }
    h.advance_ms(CANCEL_MS);
    assert!(h.controller().state().is_idle());
    assert_eq!(h.page(), Page::Favorites);

    h.end();
    assert!(h.controller().state().is_idle());
    assert!(h.sink.is_empty());
}

#[test]
fn cancelled_stream_snaps_back_by_default() {
    let mut h = Harness::at(Page::Recents);
    h.drag(-200.0, 0.0);
    h.cancel();
    assert!(matches!(
        h.controller().state(),
        TransitionState::Cancelling { .. }
    ));
    h.advance_ms(CANCEL_MS);
    assert_eq!(h.page(), Page::Recents);
}

#[test]
fn cancelled_stream_may_commit_when_configured() {
    let settings = TransitionSettings {
        cancelled_gestures_commit: true,
        ..TransitionSettings::default()
    };
    let mut h = Harness::with_settings(Page::Recents, settings);
    h.drag(-200.0, 0.0);
    h.cancel();
    assert_eq!(h.page(), Page::Favorites);
    assert!(h.sink.last().is_some_and(|change| change.suppressed));
}

#[test]
fn gesture_during_grace_preempts_pending_release() {
    let mut h = Harness::at(Page::Recents);
    h.swipe(-150.0, 0.0);
    h.advance_ms(COMMIT_MS);
    assert!(h.controller().state().is_idle());
    assert!(h.controller().is_suppressing());

    h.swipe(-150.0, 0.0);
    assert_eq!(h.page(), Page::Actions);
    assert!(h.controller().is_suppressing());

    h.advance_ms(COMMIT_MS);
    assert!(h.controller().is_suppressing());
    h.advance_ms(COMMIT_MS);
    assert!(!h.controller().is_suppressing());
    assert!(h.sink.changes().iter().all(|change| change.suppressed));
    assert_eq!(h.sink.len(), 2);
}

#[test]
fn reduced_motion_keeps_decisions_and_drops_durations() {
    let mut h = Harness::at(Page::Recents);
    h.reduced.set(true);
    h.swipe(-150.0, 0.0);
    assert_eq!(h.page(), Page::Favorites);
    assert_eq!(h.offset(), 0.0);

    let change = h.sink.last().expect("commit notifies");
    assert!(change.suppressed);
    assert!(!change.animated);
    assert_eq!(change.transition.style, TransitionStyle::Opacity);
    assert!(change.transition.duration.is_zero());

    h.advance_ms(0);
    assert!(h.controller().state().is_idle());
    assert!(!h.controller().is_suppressing());
    assert_eq!(h.controller().next_deadline(), None);
}

#[test]
fn zero_width_falls_back_to_minimum_threshold() {
    let mut h = Harness::at(Page::Recents);
    h.width.set(0.0);
    h.drag(-40.0, 0.0);
    assert_eq!(h.offset(), 0.0);
    h.end();
    assert_eq!(h.page(), Page::Favorites);

    h.advance_ms(2 * COMMIT_MS);
    h.width.set(-10.0);
    h.swipe(-20.0, 0.0);
    assert_eq!(h.page(), Page::Favorites);
}

#[test]
fn snap_into_anchor_from_recents_when_no_drag_was_shown() {
    let mut h = Harness::at(Page::Recents);
    h.begin();
    h.navigator.handle_gesture(GestureInput::ended(150.0, 0.0));
    assert_eq!(h.page(), Page::Dock);
    let change = h.sink.last().expect("snap notifies");
    assert_eq!(change.source, ChangeSource::Snap);
    assert!(!change.suppressed);
}

#[test]
fn released_drag_keeps_neighbor_until_settled() {
    let mut h = Harness::at(Page::Recents);
    h.drag(-60.0, 0.0);
    h.end();

    let preview = h
        .controller()
        .neighbor_preview()
        .expect("neighbor stays on screen while settling");
    assert_eq!(preview.page, Page::Favorites);
    assert_eq!(preview.offset, WIDTH - 60.0);

    h.advance_ms(CANCEL_MS / 2);
    let preview = h.controller().neighbor_preview().expect("still settling");
    assert!((h.offset() + 30.0).abs() < 0.01);
    assert!((preview.offset - (WIDTH - 30.0)).abs() < 0.01);

    h.advance_ms(CANCEL_MS - CANCEL_MS / 2);
    assert!(h.controller().state().is_idle());
    assert_eq!(h.controller().neighbor_preview(), None);
    assert_eq!(h.page(), Page::Recents);
}

#[test]
fn interrupt_before_dragging_unwinds_like_a_short_release() {
    let mut h = Harness::at(Page::Favorites);
    h.begin();
    h.change(0.0, 40.0);
    assert!(h.controller().state().is_idle());

    h.navigator.interrupt();
    assert!(!h.controller().is_tracking_gesture());
    match h.controller().state() {
        TransitionState::Cancelling {
            animation,
            neighbor,
            ..
        } => {
            assert_eq!(animation.start_offset(), 0.0);
            assert_eq!(*neighbor, None);
        }
        other => panic!("expected cancelling, got {other:?}"),
    }
    h.advance_ms(CANCEL_MS);
    assert!(h.controller().state().is_idle());
    assert_eq!(h.page(), Page::Favorites);
    assert!(h.sink.is_empty());
}

#[test]
fn interrupt_on_anchor_before_dragging_is_silent() {
    let mut h = Harness::at(Page::Dock);
    h.drag(-50.0, 0.0);
    h.navigator.interrupt();
    assert!(h.controller().state().is_idle());
    assert_eq!(h.controller().next_deadline(), None);
    assert!(h.sink.is_empty());
}
