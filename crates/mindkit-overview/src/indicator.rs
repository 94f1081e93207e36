//! Viewport-to-minimap forward mapping.
//!
//! Computes where the source view's visible region sits inside the minimap
//! panel, and the transform a host uses to paint the scaled content copy.
//! Both are pure functions of the source geometry and the current
//! [`ScaleState`]; input handlers never write the indicator directly.

use mindkit_core::{Dimension, Point, Rect, Transform};

use crate::scale::ScaleState;

/// Maps the source viewport onto the minimap panel.
///
/// `scroll` is the source view's scroll position and `viewport` its visible
/// size, both in source device pixels (zoom applied); `content` is the
/// diagram's bounding box in content units; `zoom` is the source zoom scale.
///
/// The indicator origin walks the same chain the painting does:
///
/// ```text
/// origin = (scroll / zoom - content.origin) * scale + (margins.left, margins.top)
/// size   = viewport * (scale / zoom)
/// ```
///
/// Returns `None` (hidden indicator) when the scale state is invalid or the
/// zoom is degenerate; the mapping never divides by a non-positive value.
pub fn map_viewport(
    scroll: Point,
    viewport: Dimension,
    content: Rect,
    zoom: f64,
    scale: &ScaleState,
) -> Option<Rect> {
    if !scale.is_valid() || zoom <= 0.0 {
        return None;
    }

    let origin = scroll
        .scaled(1.0 / zoom)
        .translated(-content.origin.x, -content.origin.y)
        .scaled(scale.scale)
        .translated(scale.margins.left, scale.margins.top);
    let size = viewport.scaled(scale.scale / zoom);

    Some(Rect { origin, size })
}

/// The transform mapping content units to drawable-area pixels.
///
/// Relative to the margins-shrunk drawable rectangle, painting the content
/// layer means translating its bounding-box origin to zero and scaling down:
/// `p_panel = (p - content.origin) * scale`. Returns `None` when there is
/// nothing to paint.
pub fn content_transform(content: Rect, scale: &ScaleState) -> Option<Transform> {
    if !scale.is_valid() {
        return None;
    }
    Some(
        Transform::translation(content.origin.negated())
            .then(&Transform::scaling(scale.scale)),
    )
}
