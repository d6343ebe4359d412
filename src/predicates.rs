//! Exact geometric predicates.
//!
//! Orientation is evaluated with adaptive-precision arithmetic (the robust
//! kernel from `geo`), so the sign of every test is exact for the given
//! floating-point inputs. No tolerance parameters are involved.

use crate::primitives::{Point2, Segment2};
use geo::kernels::{Kernel, Orientation as KernelOrientation, RobustKernel};
use geo::CoordFloat;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` is to the left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` is to the right of the directed line `a -> b`.
    Clockwise,
    /// The three points are exactly collinear.
    Collinear,
}

/// Computes the exact orientation of the triangle `a`, `b`, `c`.
#[inline]
pub fn orient2d<F: CoordFloat>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    match RobustKernel::orient2d(a.into(), b.into(), c.into()) {
        KernelOrientation::CounterClockwise => Orientation::CounterClockwise,
        KernelOrientation::Clockwise => Orientation::Clockwise,
        KernelOrientation::Collinear => Orientation::Collinear,
    }
}

/// Tests whether two closed segments have any point in common.
///
/// Touching (an endpoint lying on the other segment) and collinear overlap
/// both count. Use [`intersects`] for the ring-aware variant that ignores
/// shared endpoints.
pub fn segments_intersect<F: CoordFloat>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    if !s1.bounds_overlap(s2) {
        return false;
    }

    let o1 = orient2d(s1.start, s1.end, s2.start);
    let o2 = orient2d(s1.start, s1.end, s2.end);
    let o3 = orient2d(s2.start, s2.end, s1.start);
    let o4 = orient2d(s2.start, s2.end, s1.end);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Remaining hits are collinear contacts; the bounding-box test above
    // already places the collinear point within the other segment's extent.
    (o1 == Orientation::Collinear && within_extent(s1, s2.start))
        || (o2 == Orientation::Collinear && within_extent(s1, s2.end))
        || (o3 == Orientation::Collinear && within_extent(s2, s1.start))
        || (o4 == Orientation::Collinear && within_extent(s2, s1.end))
}

/// Ring-aware intersection test between two line segments.
///
/// Returns `false` immediately when the segments share an endpoint (by
/// value), since consecutive ring edges always do. Otherwise reports whether
/// the segments meet anywhere.
///
/// # Example
///
/// ```
/// use polyreduce::{predicates::intersects, Segment2};
///
/// let a = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
/// let b = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);
/// let c = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
///
/// assert!(intersects(a, b));
/// assert!(!intersects(a, c)); // shares the endpoint (0, 0)
/// ```
#[inline]
pub fn intersects<F: CoordFloat>(a: Segment2<F>, b: Segment2<F>) -> bool {
    if a.shares_endpoint(b) {
        return false;
    }
    segments_intersect(a, b)
}

/// Returns `true` if any two segments in the slice intersect.
pub fn any_intersection<F: CoordFloat>(segments: &[Segment2<F>]) -> bool {
    segments.iter().enumerate().any(|(i, &a)| {
        segments[i + 1..]
            .iter()
            .any(|&b| intersects(a, b))
    })
}

/// Returns `true` if `candidate` intersects any segment in the slice.
pub fn intersects_any<F: CoordFloat>(candidate: Segment2<F>, segments: &[Segment2<F>]) -> bool {
    segments.iter().any(|&s| intersects(candidate, s))
}

/// Checks that a point known to be collinear with `seg` lies within it.
#[inline]
fn within_extent<F: CoordFloat>(seg: Segment2<F>, p: Point2<F>) -> bool {
    p.x >= seg.start.x.min(seg.end.x)
        && p.x <= seg.start.x.max(seg.end.x)
        && p.y >= seg.start.y.min(seg.end.y)
        && p.y <= seg.start.y.max(seg.end.y)
}
