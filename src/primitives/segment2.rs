//! 2D line segment type.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns `true` if any endpoint of `self` equals any endpoint of `other`.
    #[inline]
    pub fn shares_endpoint(self, other: Self) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Returns `true` if the axis-aligned bounding boxes of the two segments
    /// overlap (touching counts).
    #[inline]
    pub fn bounds_overlap(self, other: Self) -> bool {
        self.start.x.min(self.end.x) <= other.start.x.max(other.end.x)
            && other.start.x.min(other.end.x) <= self.start.x.max(self.end.x)
            && self.start.y.min(self.end.y) <= other.start.y.max(other.end.y)
            && other.start.y.min(other.end.y) <= self.start.y.max(self.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.start, Point2::new(1.0, 2.0));
        assert_eq!(s.end, Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_shares_endpoint() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let b = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let c = Segment2::from_coords(4.0, 4.0, 0.0, 0.0);
        let d = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);
        assert!(a.shares_endpoint(b));
        assert!(b.shares_endpoint(c));
        assert!(!b.shares_endpoint(d));
    }

    #[test]
    fn test_bounds_overlap() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment2::from_coords(2.0, 0.0, 0.0, 2.0);
        let c = Segment2::from_coords(3.0, 3.0, 5.0, 5.0);
        let touching = Segment2::from_coords(2.0, 2.0, 3.0, 5.0);
        assert!(a.bounds_overlap(b));
        assert!(!a.bounds_overlap(c));
        assert!(a.bounds_overlap(touching));
    }
}
