//! Pointer and wheel input handling for the minimap.
//!
//! A two-state machine (idle / dragging) that resolves each gesture into a
//! scroll or zoom command for the source view. The controller itself never
//! moves the indicator: it commands the source, and the indicator follows
//! from the next change notification.
//!
//! Click and drag are mutually exclusive outcomes of one gesture, decided
//! only at release time: a pointer-up exactly at the pointer-down position
//! is a click (jump-to-point), anything else was a drag and releases
//! without further movement.

use mindkit_core::{Dimension, Point, Rect};

use crate::scale::ScaleState;

/// In-flight drag bookkeeping, present between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position at the start of the gesture, panel coordinates.
    pub start: Point,
    /// Source scroll position captured at the start of the gesture.
    pub source_start: Point,
}

/// A single zoom step requested by the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

/// Maps a signed wheel magnitude to a zoom step, if any.
pub fn wheel_zoom(value: f64) -> Option<ZoomStep> {
    if value > 0.0 {
        Some(ZoomStep::In)
    } else if value < 0.0 {
        Some(ZoomStep::Out)
    } else {
        None
    }
}

/// The minimap input state machine.
#[derive(Debug, Default)]
pub struct InputController {
    drag: Option<DragState>,
}

impl InputController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a pointer gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begins a gesture at `at`, capturing the current source scroll position.
    pub fn pointer_down(&mut self, at: Point, source_scroll: Point) {
        self.drag = Some(DragState {
            start: at,
            source_start: source_scroll,
        });
    }

    /// Continues a gesture; returns the absolute scroll target for the source.
    ///
    /// The target is always derived from the drag-start scroll position, not
    /// from the source's current position, so repeated moves cannot
    /// accumulate drift:
    ///
    /// ```text
    /// target = source_start + (at - start) * zoom / scale
    /// ```
    ///
    /// Returns `None` when idle or while the scale state is invalid
    /// (sentinel geometry is not hit-testable).
    pub fn pointer_move(&self, at: Point, zoom: f64, scale: &ScaleState) -> Option<Point> {
        let drag = self.drag.as_ref()?;
        if !scale.is_valid() {
            return None;
        }
        let factor = zoom / scale.scale;
        Some(Point::new(
            drag.source_start.x + (at.x - drag.start.x) * factor,
            drag.source_start.y + (at.y - drag.start.y) * factor,
        ))
    }

    /// Ends the gesture; returns a relative scroll delta when it was a click.
    ///
    /// A release exactly at the pointer-down position jumps the viewport so
    /// the clicked point becomes the indicator center:
    ///
    /// ```text
    /// delta = (at - indicator.center()) * zoom / scale
    /// ```
    ///
    /// After any actual movement the release returns `None` — the panning
    /// already happened move by move.
    pub fn pointer_up(
        &mut self,
        at: Point,
        indicator: Option<&Rect>,
        zoom: f64,
        scale: &ScaleState,
    ) -> Option<Dimension> {
        let drag = self.drag.take()?;
        if drag.start != at {
            return None;
        }
        let indicator = indicator?;
        if !scale.is_valid() {
            return None;
        }
        let center = indicator.center();
        let factor = zoom / scale.scale;
        Some(Dimension::new(
            (at.x - center.x) * factor,
            (at.y - center.y) * factor,
        ))
    }

    /// Abandons any in-flight gesture without issuing a command.
    ///
    /// Called when the source binding changes mid-drag.
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
