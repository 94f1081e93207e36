//! Fit-to-panel scale computation.
//!
//! The overview shows the whole diagram inside a fixed panel. The scale is
//! chosen so the content fits entirely while preserving aspect ratio; the
//! leftover space on the non-dominant axis becomes symmetric margins.

use mindkit_core::{Dimension, Insets};

/// Scale factor and centering margins for the minimap rendering.
///
/// A non-positive `scale` is the invalid sentinel: nothing should be
/// rendered or hit-tested while the panel or the content has zero extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub scale: f64,
    pub margins: Insets,
}

impl ScaleState {
    /// The "do not render" sentinel.
    pub const INVALID: ScaleState = ScaleState {
        scale: -1.0,
        margins: Insets {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        },
    };

    /// Computes the scale state fitting `content` inside `panel`.
    ///
    /// If either dimension of either input is zero the result is
    /// [`ScaleState::INVALID`]. Otherwise:
    ///
    /// ```text
    /// w_ratio = content.width / panel.width
    /// h_ratio = content.height / panel.height
    /// scale   = 1 / max(w_ratio, h_ratio)
    /// ```
    ///
    /// The margin on the non-dominant axis centers the scaled content,
    /// floored to whole pixels and applied to both ends; the dominant axis
    /// gets no margin.
    pub fn fit(content: Dimension, panel: Dimension) -> ScaleState {
        if content.is_empty() || panel.is_empty() {
            return ScaleState::INVALID;
        }

        let w_ratio = content.width / panel.width;
        let h_ratio = content.height / panel.height;
        if w_ratio > h_ratio {
            let margin = ((panel.height - content.height / w_ratio) / 2.0).floor();
            ScaleState {
                scale: 1.0 / w_ratio,
                margins: Insets::vertical(margin),
            }
        } else {
            let margin = ((panel.width - content.width / h_ratio) / 2.0).floor();
            ScaleState {
                scale: 1.0 / h_ratio,
                margins: Insets::horizontal(margin),
            }
        }
    }

    /// True when the state carries a usable scale.
    pub fn is_valid(&self) -> bool {
        self.scale > 0.0
    }
}
