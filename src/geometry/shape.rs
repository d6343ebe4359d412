//! Tagged geometry built from an interchange [`Shape`].

use super::{Geometry, MultiPolygon, Polygon, Ring, RingId};
use crate::io::Shape;
use std::ops::Range;

/// A polygon or multi-polygon, dispatched statically by variant.
#[derive(Debug, Clone)]
pub enum ShapeGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl ShapeGeometry {
    /// Current coordinates as a shape of the same type, rings re-closed.
    pub fn to_shape(&self) -> Shape {
        match self {
            ShapeGeometry::Polygon(p) => Shape::Polygon(p.to_closed_coordinates()),
            ShapeGeometry::MultiPolygon(m) => Shape::MultiPolygon(m.to_closed_coordinates()),
        }
    }
}

impl From<&Shape> for ShapeGeometry {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Polygon(rings) => ShapeGeometry::Polygon(Polygon::new(rings)),
            Shape::MultiPolygon(polygons) => {
                ShapeGeometry::MultiPolygon(MultiPolygon::new(polygons))
            }
        }
    }
}

impl Geometry<f64> for ShapeGeometry {
    fn ring_ids(&self) -> Range<RingId> {
        match self {
            ShapeGeometry::Polygon(p) => p.ring_ids(),
            ShapeGeometry::MultiPolygon(m) => m.ring_ids(),
        }
    }

    fn ring(&self, id: RingId) -> Option<&Ring<f64>> {
        match self {
            ShapeGeometry::Polygon(p) => p.ring(id),
            ShapeGeometry::MultiPolygon(m) => m.ring(id),
        }
    }

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring<f64>> {
        match self {
            ShapeGeometry::Polygon(p) => p.ring_mut(id),
            ShapeGeometry::MultiPolygon(m) => m.ring_mut(id),
        }
    }

    fn area(&self) -> f64 {
        match self {
            ShapeGeometry::Polygon(p) => p.area(),
            ShapeGeometry::MultiPolygon(m) => m.area(),
        }
    }
}
