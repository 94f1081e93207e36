//! The overview widget: binding, coalesced recompute, input dispatch, and
//! the render snapshot handed to the host.
//!
//! The widget owns no toolkit resources. A host binds it to a source view,
//! forwards pointer/wheel/resize events, drains the deferrer it supplied,
//! and paints from [`OverviewFrame`] whenever the repaint hook fires.

use std::rc::Rc;

use mindkit_core::{shared, Dimension, Point, Rect, Shared, SharedWeak, Transform};

use crate::config::{OverviewConfig, OverviewTheme};
use crate::controller::{wheel_zoom, InputController, ZoomStep};
use crate::indicator::{content_transform, map_viewport};
use crate::relay::{Deferrer, UpdateCoalescer};
use crate::scale::ScaleState;
use crate::source::{SourceSignals, SourceView, SubscriptionSet};

/// Everything a host needs to paint the overview panel.
#[derive(Debug, Clone)]
pub struct OverviewFrame {
    /// The full panel rectangle, origin (0,0).
    pub panel: Rect,
    /// The panel shrunk by the centering margins; the scaled content copy
    /// is painted here.
    pub drawable: Rect,
    /// Content-units-to-drawable-pixels transform, `None` while the scale
    /// state is invalid.
    pub content_transform: Option<Transform>,
    /// The viewport indicator in panel coordinates, `None` when hidden.
    pub indicator: Option<Rect>,
    /// Colors and stroke settings.
    pub theme: OverviewTheme,
}

struct Binding {
    view: Shared<dyn SourceView>,
    signals: Rc<SourceSignals>,
    subscriptions: SubscriptionSet,
}

struct OverviewState {
    config: OverviewConfig,
    panel: Dimension,
    binding: Option<Binding>,
    controller: InputController,
    scale: ScaleState,
    indicator: Option<Rect>,
    content_transform: Option<Transform>,
    repaint_generation: u64,
    repaint_hook: Option<Rc<dyn Fn()>>,
}

/// The minimap overview widget.
pub struct Overview {
    state: Shared<OverviewState>,
    coalescer: UpdateCoalescer,
}

impl Overview {
    /// Creates an unbound overview.
    ///
    /// `deferrer` is the host's post-to-event-loop primitive; every
    /// recompute goes through it so notification bursts coalesce.
    pub fn new(config: OverviewConfig, deferrer: Rc<dyn Deferrer>) -> Self {
        let panel = config.panel.into();
        Self {
            state: shared(OverviewState {
                config,
                panel,
                binding: None,
                controller: InputController::new(),
                scale: ScaleState::INVALID,
                indicator: None,
                content_transform: None,
                repaint_generation: 0,
                repaint_hook: None,
            }),
            coalescer: UpdateCoalescer::new(deferrer),
        }
    }

    /// Binds the overview to a source view, replacing any previous binding.
    ///
    /// The old binding is fully detached before the new subscriptions are
    /// taken out, so no notification can be delivered twice or arrive from
    /// a stale source. An in-flight drag on the old source is abandoned.
    pub fn bind(&self, view: Shared<dyn SourceView>, signals: Rc<SourceSignals>) {
        {
            let mut st = self.state.borrow_mut();
            if let Some(mut old) = st.binding.take() {
                tracing::debug!("rebinding overview, detaching previous source");
                old.subscriptions.detach(&old.signals);
            }
            st.controller.cancel();

            let subscriptions = SubscriptionSet {
                horizontal_scroll: Some(signals.horizontal_scroll.subscribe(self.relay_handler())),
                vertical_scroll: Some(signals.vertical_scroll.subscribe(self.relay_handler())),
                zoom: Some(signals.zoom.subscribe(self.relay_handler())),
                selection: Some(signals.selection.subscribe(self.relay_handler())),
                layout: Some(signals.layout.subscribe(self.relay_handler())),
            };
            st.binding = Some(Binding {
                view,
                signals,
                subscriptions,
            });
        }
        self.schedule_update();
    }

    /// Detaches from the source view and stops reacting to notifications.
    ///
    /// Idempotent, and safe to call on a widget that was never bound.
    pub fn dispose(&self) {
        let mut st = self.state.borrow_mut();
        if let Some(mut binding) = st.binding.take() {
            tracing::debug!("disposing overview");
            binding.subscriptions.detach(&binding.signals);
        }
        st.controller.cancel();
        st.indicator = None;
        st.content_transform = None;
        st.scale = ScaleState::INVALID;
    }

    /// Registers a callback invoked after every recompute.
    pub fn set_repaint_hook<F>(&self, hook: F)
    where
        F: Fn() + 'static,
    {
        self.state.borrow_mut().repaint_hook = Some(Rc::new(hook));
    }

    /// The host panel was resized.
    pub fn panel_resized(&self, width: f64, height: f64) {
        self.state.borrow_mut().panel = Dimension::new(width, height);
        self.schedule_update();
    }

    /// Pointer pressed on the panel at `at` (panel coordinates).
    pub fn pointer_down(&self, at: Point) {
        let Some(view) = self.bound_view() else {
            return;
        };
        let scroll = view.borrow().scroll_position();
        self.state.borrow_mut().controller.pointer_down(at, scroll);
    }

    /// Pointer moved with the button held.
    pub fn pointer_move(&self, at: Point) {
        let command = {
            let st = self.state.borrow();
            let Some(binding) = st.binding.as_ref() else {
                return;
            };
            let zoom = binding.view.borrow().zoom_scale();
            st.controller
                .pointer_move(at, zoom, &st.scale)
                .map(|target| (binding.view.clone(), target))
        };
        if let Some((view, target)) = command {
            view.borrow_mut().scroll_to(target);
        }
    }

    /// Pointer released at `at`.
    ///
    /// A release exactly at the press position re-centers the source
    /// viewport under the clicked point; otherwise the gesture was a drag
    /// and just ends.
    pub fn pointer_up(&self, at: Point) {
        let command = {
            let mut st = self.state.borrow_mut();
            let Some(binding) = st.binding.as_ref() else {
                st.controller.cancel();
                return;
            };
            let view = binding.view.clone();
            let zoom = view.borrow().zoom_scale();
            let indicator = st.indicator;
            let scale = st.scale;
            st.controller
                .pointer_up(at, indicator.as_ref(), zoom, &scale)
                .map(|delta| (view, delta))
        };
        if let Some((view, delta)) = command {
            view.borrow_mut().scroll_by(delta);
        }
    }

    /// Wheel rotated over the panel with signed magnitude `value`.
    pub fn wheel(&self, value: f64) {
        let Some(step) = wheel_zoom(value) else {
            return;
        };
        let Some(view) = self.bound_view() else {
            return;
        };
        match step {
            ZoomStep::In => view.borrow_mut().zoom_in(),
            ZoomStep::Out => view.borrow_mut().zoom_out(),
        }
    }

    /// Snapshot of what the host should paint.
    pub fn frame(&self) -> OverviewFrame {
        let st = self.state.borrow();
        let panel = Rect {
            origin: Point::default(),
            size: st.panel,
        };
        let drawable = if st.scale.is_valid() {
            panel.shrunk(&st.scale.margins)
        } else {
            panel
        };
        OverviewFrame {
            panel,
            drawable,
            content_transform: st.content_transform,
            indicator: st.indicator,
            theme: st.config.theme.clone(),
        }
    }

    /// The current fit state.
    pub fn scale_state(&self) -> ScaleState {
        self.state.borrow().scale
    }

    /// True while a pointer gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().controller.is_dragging()
    }

    /// Monotonic counter bumped on every recompute.
    pub fn repaint_generation(&self) -> u64 {
        self.state.borrow().repaint_generation
    }

    fn bound_view(&self) -> Option<Shared<dyn SourceView>> {
        self.state.borrow().binding.as_ref().map(|b| b.view.clone())
    }

    /// Builds a notification handler relaying into the coalescer.
    ///
    /// The handler holds the state weakly: once the widget is dropped,
    /// leftover subscriptions on an old signal bundle degrade to no-ops.
    fn relay_handler<E>(&self) -> impl Fn(&E) + 'static {
        let coalescer = self.coalescer.clone();
        let weak = Rc::downgrade(&self.state);
        move |_| Self::schedule(&coalescer, &weak)
    }

    fn schedule_update(&self) {
        Self::schedule(&self.coalescer, &Rc::downgrade(&self.state));
    }

    fn schedule(coalescer: &UpdateCoalescer, weak: &SharedWeak<OverviewState>) {
        let weak = weak.clone();
        coalescer.request(move || {
            if let Some(state) = weak.upgrade() {
                Self::recompute(&state);
            }
        });
    }

    /// Recomputes scale, indicator, and paint transform from the source.
    ///
    /// Runs only from the deferred task. Without a binding there is nothing
    /// to compute and the redraw is skipped silently.
    fn recompute(state: &Shared<OverviewState>) {
        let hook = {
            let mut st = state.borrow_mut();
            let Some(binding) = st.binding.as_ref() else {
                tracing::trace!("recompute skipped: no source binding");
                return;
            };

            let (content, scroll, viewport, zoom) = {
                let view = binding.view.borrow();
                (
                    view.content_bounds(),
                    view.scroll_position(),
                    view.viewport_size(),
                    view.zoom_scale(),
                )
            };

            st.scale = ScaleState::fit(content.size, st.panel);
            st.indicator = map_viewport(scroll, viewport, content, zoom, &st.scale);
            st.content_transform = content_transform(content, &st.scale);
            st.repaint_generation += 1;
            tracing::trace!(
                generation = st.repaint_generation,
                scale = st.scale.scale,
                "overview recomputed"
            );
            st.repaint_hook.clone()
        };
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl Drop for Overview {
    fn drop(&mut self) {
        self.dispose();
    }
}
