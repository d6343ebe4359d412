//! Planar region operations used by topology repair.

use crate::io::PolygonCoords;
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon, Relate};

/// Boolean operations on planar regions.
///
/// Repair only needs these few operations, plus conversion between a
/// region and closed-ring coordinates.
pub trait RegionOps {
    type Region: Clone;

    /// Region bounded by one closed ring.
    fn region_from_ring(&self, ring: &[[f64; 2]]) -> Self::Region;

    /// Polygons making up `region`, each as closed rings with the outer ring
    /// first.
    fn region_to_polygons(&self, region: &Self::Region) -> Vec<PolygonCoords>;

    /// Whether the regions share at least one point.
    fn intersects(&self, a: &Self::Region, b: &Self::Region) -> bool;

    /// Whether `inner` lies entirely within `outer`.
    fn contains(&self, outer: &Self::Region, inner: &Self::Region) -> bool;

    fn union(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;

    /// Points of `a` not in `b`.
    fn difference(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;

    fn is_empty(&self, region: &Self::Region) -> bool;
}

/// [`RegionOps`] backed by `geo`'s boolean operations and DE-9IM relate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoRegions;

impl RegionOps for GeoRegions {
    type Region = MultiPolygon<f64>;

    fn region_from_ring(&self, ring: &[[f64; 2]]) -> MultiPolygon<f64> {
        let exterior: LineString<f64> = ring.iter().map(|&c| Coord::from(c)).collect();
        MultiPolygon::new(vec![Polygon::new(exterior, Vec::new())])
    }

    fn region_to_polygons(&self, region: &MultiPolygon<f64>) -> Vec<PolygonCoords> {
        region
            .0
            .iter()
            .map(|polygon| {
                std::iter::once(polygon.exterior())
                    .chain(polygon.interiors())
                    .map(ring_coords)
                    .filter(|ring| !ring.is_empty())
                    .collect::<PolygonCoords>()
            })
            .filter(|rings| !rings.is_empty())
            .collect()
    }

    fn intersects(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        if self.is_empty(a) || self.is_empty(b) {
            return false;
        }
        a.relate(b).is_intersects()
    }

    fn contains(&self, outer: &MultiPolygon<f64>, inner: &MultiPolygon<f64>) -> bool {
        if self.is_empty(outer) || self.is_empty(inner) {
            return false;
        }
        outer.relate(inner).is_contains()
    }

    fn union(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        BooleanOps::union(a, b)
    }

    fn difference(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        BooleanOps::difference(a, b)
    }

    fn is_empty(&self, region: &MultiPolygon<f64>) -> bool {
        region.0.iter().all(|p| p.exterior().0.len() < 4)
    }
}

fn ring_coords(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    if ring.0.len() < 4 {
        return Vec::new();
    }
    ring.0.iter().map(|c| [c.x, c.y]).collect()
}
