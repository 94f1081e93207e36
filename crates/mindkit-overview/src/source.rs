//! The observed diagram view: collaborator trait, change signals, and
//! subscription bookkeeping.
//!
//! The overview treats the main diagram view as an opaque service. It reads
//! geometry, sends scroll/zoom commands, and listens to five change
//! signals; everything else about the editor is out of scope.

use mindkit_core::{Dimension, Point, Rect, Signal, SubscriptionId};

/// The source diagram view, as seen from the overview.
///
/// Geometry getters use two coordinate systems: `scroll_position` and
/// `viewport_size` are in source device pixels (zoom applied), while
/// `content_bounds` is in content units. `zoom_scale` converts between the
/// two and is always positive.
pub trait SourceView {
    /// Current zoom scale of the source view.
    fn zoom_scale(&self) -> f64;

    /// Scroll position of the source viewport, device pixels.
    fn scroll_position(&self) -> Point;

    /// Visible size of the source viewport, device pixels.
    fn viewport_size(&self) -> Dimension;

    /// Bounding box of the diagram content, content units.
    fn content_bounds(&self) -> Rect;

    /// Scrolls the viewport to an absolute position.
    fn scroll_to(&mut self, position: Point);

    /// Scrolls the viewport by a relative delta.
    fn scroll_by(&mut self, delta: Dimension);

    /// Zooms in one step.
    fn zoom_in(&mut self);

    /// Zooms out one step.
    fn zoom_out(&mut self);
}

/// A scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Scroll position changed on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollChanged {
    pub axis: Axis,
    pub value: f64,
}

/// Zoom scale changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChanged {
    pub old: f64,
    pub new: f64,
}

/// The selection in the source view changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged;

/// The content layer was re-laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChanged;

/// The change signals a source view exposes.
///
/// The overview reacts identically to all of them; the payloads exist for
/// other observers and for logging.
#[derive(Debug, Default)]
pub struct SourceSignals {
    pub horizontal_scroll: Signal<ScrollChanged>,
    pub vertical_scroll: Signal<ScrollChanged>,
    pub zoom: Signal<ZoomChanged>,
    pub selection: Signal<SelectionChanged>,
    pub layout: Signal<LayoutChanged>,
}

impl SourceSignals {
    /// Creates the signal bundle with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total subscriptions across all five signals.
    pub fn subscriber_count(&self) -> usize {
        self.horizontal_scroll.subscriber_count()
            + self.vertical_scroll.subscriber_count()
            + self.zoom.subscriber_count()
            + self.selection.subscriber_count()
            + self.layout.subscriber_count()
    }
}

/// The subscription ids the overview holds on one source's signals.
///
/// Each slot is optional so detaching tolerates subscriptions that were
/// never established, and detaching twice is a no-op.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    pub horizontal_scroll: Option<SubscriptionId>,
    pub vertical_scroll: Option<SubscriptionId>,
    pub zoom: Option<SubscriptionId>,
    pub selection: Option<SubscriptionId>,
    pub layout: Option<SubscriptionId>,
}

impl SubscriptionSet {
    /// Unsubscribes every held subscription from `signals`.
    ///
    /// Idempotent: slots are cleared as they are released, so a second call
    /// finds nothing to do.
    pub fn detach(&mut self, signals: &SourceSignals) {
        if let Some(id) = self.horizontal_scroll.take() {
            signals.horizontal_scroll.unsubscribe(id);
        }
        if let Some(id) = self.vertical_scroll.take() {
            signals.vertical_scroll.unsubscribe(id);
        }
        if let Some(id) = self.zoom.take() {
            signals.zoom.unsubscribe(id);
        }
        if let Some(id) = self.selection.take() {
            signals.selection.unsubscribe(id);
        }
        if let Some(id) = self.layout.take() {
            signals.layout.unsubscribe(id);
        }
    }

    /// True when no subscriptions are held.
    pub fn is_empty(&self) -> bool {
        self.horizontal_scroll.is_none()
            && self.vertical_scroll.is_none()
            && self.zoom.is_none()
            && self.selection.is_none()
            && self.layout.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detach_releases_all_subscriptions() {
        let signals = SourceSignals::new();
        let mut set = SubscriptionSet {
            horizontal_scroll: Some(signals.horizontal_scroll.subscribe(|_| {})),
            vertical_scroll: Some(signals.vertical_scroll.subscribe(|_| {})),
            zoom: Some(signals.zoom.subscribe(|_| {})),
            selection: Some(signals.selection.subscribe(|_| {})),
            layout: Some(signals.layout.subscribe(|_| {})),
        };
        assert_eq!(signals.subscriber_count(), 5);

        set.detach(&signals);
        assert_eq!(signals.subscriber_count(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_detach_is_idempotent() {
        let signals = SourceSignals::new();
        let mut set = SubscriptionSet {
            zoom: Some(signals.zoom.subscribe(|_| {})),
            ..Default::default()
        };

        set.detach(&signals);
        set.detach(&signals);
        assert_eq!(signals.subscriber_count(), 0);
    }

    #[test]
    fn test_partial_set_detaches_cleanly() {
        let signals = SourceSignals::new();
        let mut set = SubscriptionSet::default();
        set.detach(&signals);
        assert!(set.is_empty());
    }
}
