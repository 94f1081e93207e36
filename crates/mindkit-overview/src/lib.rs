//! # MindKit Overview
//!
//! The minimap ("overview") widget for the MindKit diagram editor: a small
//! panel showing a scaled-down copy of the diagram and a draggable
//! indicator of the visible region. Dragging the indicator pans the main
//! view, clicking jumps to a spot, and the wheel zooms — all expressed as
//! commands against an opaque [`SourceView`], so the widget carries no
//! toolkit dependency.
//!
//! Change notifications from the source (scroll, zoom, selection, layout)
//! and panel resizes all funnel into one coalesced recompute that rebuilds
//! the fit scale, the indicator rectangle, and the content paint transform.

pub mod config;
pub mod controller;
pub mod indicator;
pub mod overview;
pub mod relay;
pub mod scale;
pub mod source;

pub use config::{OverviewConfig, OverviewTheme, PanelSize};
pub use controller::{DragState, InputController, ZoomStep};
pub use overview::{Overview, OverviewFrame};
pub use relay::{Deferrer, TaskQueue, UpdateCoalescer};
pub use scale::ScaleState;
pub use source::{
    Axis, LayoutChanged, ScrollChanged, SelectionChanged, SourceSignals, SourceView,
    SubscriptionSet, ZoomChanged,
};
