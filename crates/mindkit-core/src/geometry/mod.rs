//! 2D geometry value types shared across MindKit crates.
//!
//! All coordinates are `f64`. Screen space puts (0,0) at the top-left with
//! +Y going down, matching the diagram canvas; content space uses the same
//! orientation, so no axis flip is involved anywhere in the overview math.

mod transform;

pub use transform::Transform;

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns this point with both coordinates negated.
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns this point with both coordinates multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    /// Creates a new dimension.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns this dimension scaled uniformly by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// True when either extent is zero or negative.
    ///
    /// A degenerate dimension on either side of the overview mapping means
    /// there is nothing meaningful to fit or render.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Margins around a rectangular area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Zero margins on every side.
    pub const NONE: Insets = Insets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Creates insets with explicit values for each side.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Equal margins above and below, none on the sides.
    pub fn vertical(margin: f64) -> Self {
        Self::new(margin, 0.0, margin, 0.0)
    }

    /// Equal margins left and right, none above or below.
    pub fn horizontal(margin: f64) -> Self {
        Self::new(0.0, margin, 0.0, margin)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Dimension,
}

impl Rect {
    /// Creates a rectangle from origin and size components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Dimension::new(width, height),
        }
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns this rectangle shrunk inward by the given insets.
    ///
    /// The result keeps a non-negative size even when the insets exceed the
    /// available extent.
    pub fn shrunk(&self, insets: &Insets) -> Self {
        let width = (self.size.width - insets.left - insets.right).max(0.0);
        let height = (self.size.height - insets.top - insets.bottom).max(0.0);
        Self::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            width,
            height,
        )
    }

    /// True when the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translate_and_negate() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(p.translated(1.0, 2.0), Point::new(4.0, -2.0));
        assert_eq!(p.negated(), Point::new(-3.0, 4.0));
    }

    #[test]
    fn test_dimension_empty() {
        assert!(Dimension::new(0.0, 10.0).is_empty());
        assert!(Dimension::new(10.0, 0.0).is_empty());
        assert!(!Dimension::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r.center(), Point::new(30.0, 50.0));
    }

    #[test]
    fn test_rect_shrunk_by_insets() {
        let r = Rect::new(0.0, 0.0, 200.0, 150.0);
        let shrunk = r.shrunk(&Insets::vertical(25.0));
        assert_eq!(shrunk, Rect::new(0.0, 25.0, 200.0, 100.0));
    }

    #[test]
    fn test_rect_shrunk_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let shrunk = r.shrunk(&Insets::horizontal(20.0));
        assert_eq!(shrunk.size.width, 0.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(&Point::new(0.0, 0.0)));
        assert!(r.contains(&Point::new(10.0, 10.0)));
        assert!(!r.contains(&Point::new(10.1, 5.0)));
    }
}
