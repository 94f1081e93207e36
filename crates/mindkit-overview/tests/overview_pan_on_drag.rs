//! Drag-to-pan and wheel-to-zoom behavior, plus notification coalescing.

mod common;

use common::Harness;
use mindkit_core::{Dimension, Point, Rect};

#[test]
fn test_drag_scrolls_by_scaled_delta() {
    // Canonical scenario: minimap scale 0.1 at 1x zoom, so 1 panel px of
    // drag is 10 source px of scroll.
    let harness = Harness::standard();

    harness.overview.pointer_down(Point::new(40.0, 55.0));
    assert!(harness.overview.is_dragging());

    harness.overview.pointer_move(Point::new(45.0, 52.0));
    assert_eq!(
        harness.view.borrow().scroll_to_calls,
        vec![Point::new(50.0, -30.0)]
    );
}

#[test]
fn test_drag_measures_from_gesture_start_not_previous_move() {
    let harness = Harness::standard();
    harness.view.borrow_mut().scroll = Point::new(100.0, 200.0);

    harness.overview.pointer_down(Point::new(40.0, 55.0));
    harness.overview.pointer_move(Point::new(41.0, 55.0));
    harness.overview.pointer_move(Point::new(42.0, 55.0));
    harness.overview.pointer_move(Point::new(43.0, 55.0));

    // Each target is start + total delta; repeated moves do not compound.
    let calls = &harness.view.borrow().scroll_to_calls;
    assert_eq!(
        *calls,
        vec![
            Point::new(110.0, 200.0),
            Point::new(120.0, 200.0),
            Point::new(130.0, 200.0),
        ]
    );
}

#[test]
fn test_drag_scales_with_source_zoom() {
    let harness = Harness::with_geometry(
        Rect::new(0.0, 0.0, 2000.0, 1000.0),
        Dimension::new(800.0, 600.0),
        2.0,
    );

    harness.overview.pointer_down(Point::new(10.0, 30.0));
    harness.overview.pointer_move(Point::new(11.0, 30.0));

    // Factor is zoom / scale = 2 / 0.1 = 20.
    assert_eq!(
        harness.view.borrow().scroll_to_calls,
        vec![Point::new(20.0, 0.0)]
    );
}

#[test]
fn test_release_ends_gesture_without_further_scrolling() {
    let harness = Harness::standard();

    harness.overview.pointer_down(Point::new(40.0, 55.0));
    harness.overview.pointer_move(Point::new(50.0, 55.0));
    harness.overview.pointer_up(Point::new(50.0, 55.0));

    assert!(!harness.overview.is_dragging());
    assert_eq!(harness.view.borrow().scroll_to_calls.len(), 1);
    assert!(harness.view.borrow().scroll_by_calls.is_empty());

    // Moves after release are ignored.
    harness.overview.pointer_move(Point::new(60.0, 55.0));
    assert_eq!(harness.view.borrow().scroll_to_calls.len(), 1);
}

#[test]
fn test_drag_on_degenerate_geometry_is_inert() {
    let harness = Harness::with_geometry(
        Rect::new(0.0, 0.0, 0.0, 0.0),
        Dimension::new(800.0, 600.0),
        1.0,
    );

    harness.overview.pointer_down(Point::new(10.0, 10.0));
    harness.overview.pointer_move(Point::new(30.0, 30.0));
    harness.overview.pointer_up(Point::new(30.0, 30.0));

    assert!(harness.view.borrow().scroll_to_calls.is_empty());
    assert!(harness.view.borrow().scroll_by_calls.is_empty());
}

#[test]
fn test_wheel_maps_sign_to_zoom_steps() {
    let harness = Harness::standard();

    harness.overview.wheel(3.0);
    harness.overview.wheel(1.0);
    harness.overview.wheel(-2.0);
    harness.overview.wheel(0.0);

    let view = harness.view.borrow();
    assert_eq!(view.zoom_in_calls, 2);
    assert_eq!(view.zoom_out_calls, 1);
}

#[test]
fn test_notification_burst_coalesces_into_one_recompute() {
    let harness = Harness::standard();
    let generation = harness.overview.repaint_generation();

    harness.notify_scroll();
    harness.notify_scroll();
    harness.notify_zoom();
    harness.notify_selection();
    harness.notify_layout();

    assert_eq!(harness.queue.pending(), 1);
    harness.settle();
    assert_eq!(harness.overview.repaint_generation(), generation + 1);

    // A notification after the recompute schedules a fresh pass.
    harness.notify_layout();
    harness.settle();
    assert_eq!(harness.overview.repaint_generation(), generation + 2);
}

#[test]
fn test_scroll_notification_moves_indicator() {
    let harness = Harness::standard();

    harness.view.borrow_mut().scroll = Point::new(200.0, 100.0);
    harness.notify_scroll();
    harness.settle();

    let indicator = harness.overview.frame().indicator.unwrap();
    assert_eq!(indicator.origin, Point::new(20.0, 35.0));
}
