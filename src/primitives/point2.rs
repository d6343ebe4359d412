//! 2D point type.

use super::Vec2;
use geo::{Coord, CoordFloat};
use num_traits::Float;
use std::ops::Sub;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact
/// value equality, which is what ring adjacency and shared-endpoint checks
/// rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the coordinates as an `[x, y]` pair.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }

    /// Area of the triangle `self`, `a`, `b` (always non-negative).
    #[inline]
    pub fn triangle_area(self, a: Self, b: Self) -> F {
        let two = F::one() + F::one();
        ((a - self).cross(b - self) / two).abs()
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: CoordFloat> From<Point2<F>> for Coord<F> {
    fn from(p: Point2<F>) -> Self {
        Coord { x: p.x, y: p.y }
    }
}
