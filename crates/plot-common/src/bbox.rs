//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// An axis-aligned extent in data or projected coordinates.
///
/// For geographic data coordinates are in degrees, for projected map
/// surfaces they are in projection units (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// An inverted box that any point expands.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Build the extent of a set of points, skipping non-finite ones.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut bbox = Self::empty();
        for (x, y) in points {
            bbox.expand(x, y);
        }
        bbox
    }

    /// Grow the box to include a point. Non-finite points are ignored.
    pub fn expand(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// True once at least one finite point has been added.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Ensure both spans are non-zero so the box can be used as a viewport.
    ///
    /// Degenerate spans are widened by one unit on each side.
    pub fn non_degenerate(&self) -> BoundingBox {
        let mut out = *self;
        if out.width() <= 0.0 {
            out.min_x -= 1.0;
            out.max_x += 1.0;
        }
        if out.height() <= 0.0 {
            out.min_y -= 1.0;
            out.max_y += 1.0;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_skips_nan() {
        let bbox = BoundingBox::from_points([(0.0, 1.0), (f64::NAN, 5.0), (3.0, -2.0)]);
        assert_eq!(bbox, BoundingBox::new(0.0, -2.0, 3.0, 1.0));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!BoundingBox::empty().is_valid());
        let mut bbox = BoundingBox::empty();
        bbox.expand(1.0, 1.0);
        assert!(bbox.is_valid());
    }

    #[test]
    fn test_non_degenerate() {
        let bbox = BoundingBox::new(2.0, 3.0, 2.0, 7.0).non_degenerate();
        assert_eq!(bbox.min_x, 1.0);
        assert_eq!(bbox.max_x, 3.0);
        assert_eq!(bbox.height(), 4.0);
    }
}
