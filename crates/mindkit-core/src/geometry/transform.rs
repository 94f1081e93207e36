//! Uniform-scale affine transform.
//!
//! The overview only ever composes uniform scales with translations, so a
//! full 2x3 matrix is unnecessary: an `(offset, scale)` pair closes under
//! composition and inverts trivially.

use super::{Dimension, Point, Rect};

/// A scale-then-translate affine transform.
///
/// Applying the transform maps `p` to `p * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub offset: Point,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        offset: Point { x: 0.0, y: 0.0 },
    };

    /// Creates a transform from a scale factor and an offset.
    pub fn new(scale: f64, offset: Point) -> Self {
        Self { scale, offset }
    }

    /// A pure scale with no translation.
    pub fn scaling(scale: f64) -> Self {
        Self::new(scale, Point::default())
    }

    /// A pure translation.
    pub fn translation(offset: Point) -> Self {
        Self::new(1.0, offset)
    }

    /// Maps a point through the transform.
    pub fn apply(&self, p: &Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset.x,
            p.y * self.scale + self.offset.y,
        )
    }

    /// Maps a dimension through the transform (scale only, no offset).
    pub fn apply_size(&self, d: &Dimension) -> Dimension {
        d.scaled(self.scale)
    }

    /// Maps a rectangle through the transform.
    pub fn apply_rect(&self, r: &Rect) -> Rect {
        Rect {
            origin: self.apply(&r.origin),
            size: self.apply_size(&r.size),
        }
    }

    /// Composes two transforms: the result applies `self` first, then `next`.
    ///
    /// ```text
    /// (p * s1 + o1) * s2 + o2  =  p * (s1*s2) + (o1*s2 + o2)
    /// ```
    pub fn then(&self, next: &Transform) -> Transform {
        Transform::new(
            self.scale * next.scale,
            self.offset.scaled(next.scale).translated(next.offset.x, next.offset.y),
        )
    }

    /// The inverse transform, or `None` when the scale is zero.
    ///
    /// ```text
    /// q = p * s + o   =>   p = q / s - o / s
    /// ```
    pub fn inverted(&self) -> Option<Transform> {
        if self.scale == 0.0 {
            return None;
        }
        Some(Transform::new(
            1.0 / self.scale,
            self.offset.scaled(-1.0 / self.scale),
        ))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
