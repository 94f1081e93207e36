//! Shared test fixture: a scriptable fake diagram view and a harness that
//! wires it to an overview through a manually drained task queue.

#![allow(dead_code)]

use std::rc::Rc;

use mindkit_core::{shared, Dimension, Point, Rect, Shared};
use mindkit_overview::{
    Axis, LayoutChanged, Overview, OverviewConfig, ScrollChanged, SelectionChanged, SourceSignals,
    SourceView, TaskQueue, ZoomChanged,
};

/// An in-memory diagram view recording every command it receives.
pub struct FakeDiagramView {
    pub zoom: f64,
    pub scroll: Point,
    pub viewport: Dimension,
    pub content: Rect,
    pub scroll_to_calls: Vec<Point>,
    pub scroll_by_calls: Vec<Dimension>,
    pub zoom_in_calls: u32,
    pub zoom_out_calls: u32,
}

impl FakeDiagramView {
    pub fn new(content: Rect, viewport: Dimension, zoom: f64) -> Self {
        Self {
            zoom,
            scroll: Point::default(),
            viewport,
            content,
            scroll_to_calls: Vec::new(),
            scroll_by_calls: Vec::new(),
            zoom_in_calls: 0,
            zoom_out_calls: 0,
        }
    }
}

impl SourceView for FakeDiagramView {
    fn zoom_scale(&self) -> f64 {
        self.zoom
    }

    fn scroll_position(&self) -> Point {
        self.scroll
    }

    fn viewport_size(&self) -> Dimension {
        self.viewport
    }

    fn content_bounds(&self) -> Rect {
        self.content
    }

    fn scroll_to(&mut self, position: Point) {
        self.scroll = position;
        self.scroll_to_calls.push(position);
    }

    fn scroll_by(&mut self, delta: Dimension) {
        self.scroll = self.scroll.translated(delta.width, delta.height);
        self.scroll_by_calls.push(delta);
    }

    fn zoom_in(&mut self) {
        self.zoom *= 1.25;
        self.zoom_in_calls += 1;
    }

    fn zoom_out(&mut self) {
        self.zoom /= 1.25;
        self.zoom_out_calls += 1;
    }
}

/// Overview widget wired to a fake view; tests drive signals and the queue
/// by hand.
pub struct Harness {
    pub overview: Overview,
    pub view: Shared<FakeDiagramView>,
    pub signals: Rc<SourceSignals>,
    pub queue: Rc<TaskQueue>,
}

impl Harness {
    /// Content 2000x1000 at the origin, 800x600 viewport, 1x zoom, default
    /// 200x150 panel — the canonical fit scenario (scale 0.1, 25px
    /// vertical margins).
    pub fn standard() -> Self {
        Self::with_geometry(
            Rect::new(0.0, 0.0, 2000.0, 1000.0),
            Dimension::new(800.0, 600.0),
            1.0,
        )
    }

    pub fn with_geometry(content: Rect, viewport: Dimension, zoom: f64) -> Self {
        let queue = Rc::new(TaskQueue::new());
        let overview = Overview::new(OverviewConfig::default(), queue.clone());
        let view = shared(FakeDiagramView::new(content, viewport, zoom));
        let signals = Rc::new(SourceSignals::new());

        let dyn_view: Shared<dyn SourceView> = view.clone();
        overview.bind(dyn_view, signals.clone());

        let harness = Self {
            overview,
            view,
            signals,
            queue,
        };
        harness.settle();
        harness
    }

    /// Drains the deferred-task queue, running any pending recompute.
    pub fn settle(&self) -> usize {
        self.queue.run_pending()
    }

    /// Emits a horizontal scroll notification with the view's current value.
    pub fn notify_scroll(&self) {
        let value = self.view.borrow().scroll.x;
        self.signals.horizontal_scroll.emit(&ScrollChanged {
            axis: Axis::Horizontal,
            value,
        });
    }

    /// Emits a zoom notification with the view's current scale.
    pub fn notify_zoom(&self) {
        let new = self.view.borrow().zoom;
        self.signals.zoom.emit(&ZoomChanged { old: new, new });
    }

    pub fn notify_selection(&self) {
        self.signals.selection.emit(&SelectionChanged);
    }

    pub fn notify_layout(&self) {
        self.signals.layout.emit(&LayoutChanged);
    }
}
