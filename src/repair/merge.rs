//! Fixed-point merge of overlapping rings across polygons.

use super::RegionOps;
use crate::io::{PolygonCoords, Shape};
use tracing::debug;

/// One polygon as regions: the area inside its outer ring, and the area
/// inside each hole ring.
struct Part<R> {
    outer: R,
    holes: Vec<R>,
}

/// Repairs intersections between rings of different polygons, and between
/// holes and their outer ring.
///
/// Runs three passes, each to a fixed point:
///
/// 1. Overlapping outer rings are replaced by their union, which inherits
///    the holes of both.
/// 2. Overlapping holes of the same polygon are replaced by their union.
/// 3. A hole that no longer touches its outer ring is dropped; a hole that
///    crosses it is cut out of the outer ring and dropped.
///
/// The input is returned unchanged if no pass applied. Otherwise a single
/// remaining polygon is returned as a `Polygon`, anything else as a
/// `MultiPolygon`.
///
/// # Example
///
/// ```
/// use polyreduce::io::Shape;
/// use polyreduce::repair::{fix_self_intersections, GeoRegions};
///
/// let shape = Shape::MultiPolygon(vec![
///     vec![vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]],
///     vec![vec![[5.0, 5.0], [5.0, 6.0], [6.0, 6.0], [6.0, 5.0], [5.0, 5.0]]],
/// ]);
/// let fixed = fix_self_intersections(&shape, &GeoRegions);
/// assert_eq!(fixed.type_name(), "Polygon");
/// ```
pub fn fix_self_intersections<R: RegionOps>(shape: &Shape, ops: &R) -> Shape {
    let mut parts: Vec<Part<R::Region>> = shape
        .polygons()
        .into_iter()
        .filter_map(|rings| {
            let (outer, holes) = rings.split_first()?;
            Some(Part {
                outer: ops.region_from_ring(outer),
                holes: holes.iter().map(|h| ops.region_from_ring(h)).collect(),
            })
        })
        .collect();

    let merged_outers = merge_outers(&mut parts, ops);
    let merged_holes = merge_holes(&mut parts, ops);
    let clipped = clip_holes(&mut parts, ops);

    if merged_outers + merged_holes + clipped == 0 {
        return shape.clone();
    }
    debug!(
        merged_outers,
        merged_holes,
        clipped,
        polygons = parts.len(),
        "repaired ring overlaps"
    );

    let mut polygons = Vec::new();
    for part in &parts {
        polygons.extend(emit(part, ops));
    }

    if polygons.len() == 1 {
        Shape::Polygon(polygons.remove(0))
    } else {
        Shape::MultiPolygon(polygons)
    }
}

fn merge_outers<R: RegionOps>(parts: &mut Vec<Part<R::Region>>, ops: &R) -> usize {
    let mut merges = 0;
    while let Some((x, y)) = first_pair(parts.len(), |x, y| {
        ops.intersects(&parts[x].outer, &parts[y].outer)
    }) {
        let absorbed = parts.remove(y);
        let target = &mut parts[x];
        target.outer = ops.union(&target.outer, &absorbed.outer);
        target.holes.extend(absorbed.holes);
        merges += 1;
    }
    merges
}

fn merge_holes<R: RegionOps>(parts: &mut [Part<R::Region>], ops: &R) -> usize {
    let mut merges = 0;
    for part in parts.iter_mut() {
        let holes = &mut part.holes;
        while let Some((x, y)) =
            first_pair(holes.len(), |x, y| ops.intersects(&holes[x], &holes[y]))
        {
            let absorbed = holes.remove(y);
            holes[x] = ops.union(&holes[x], &absorbed);
            merges += 1;
        }
    }
    merges
}

fn clip_holes<R: RegionOps>(parts: &mut [Part<R::Region>], ops: &R) -> usize {
    let mut changes = 0;
    for part in parts.iter_mut() {
        let mut i = 0;
        while i < part.holes.len() {
            let hole = &part.holes[i];
            if !ops.intersects(&part.outer, hole) {
                part.holes.remove(i);
                changes += 1;
            } else if !ops.contains(&part.outer, hole) {
                part.outer = ops.difference(&part.outer, hole);
                part.holes.remove(i);
                changes += 1;
                // A smaller outer ring may now miss or cut earlier holes.
                i = 0;
            } else {
                i += 1;
            }
        }
    }
    changes
}

/// First `(x, y)` with `x < y < n` satisfying `hit`.
fn first_pair(n: usize, mut hit: impl FnMut(usize, usize) -> bool) -> Option<(usize, usize)> {
    (0..n).find_map(|x| (x + 1..n).find(|&y| hit(x, y)).map(|y| (x, y)))
}

/// Every piece of the outer region becomes a polygon; each hole ring joins
/// the first piece it overlaps. Islands left inside merged holes become
/// polygons of their own.
fn emit<R: RegionOps>(part: &Part<R::Region>, ops: &R) -> Vec<PolygonCoords> {
    let mut polygons = ops.region_to_polygons(&part.outer);
    if polygons.is_empty() {
        return polygons;
    }
    let pieces: Vec<Option<R::Region>> = polygons
        .iter()
        .map(|rings| rings.first().map(|outer| ops.region_from_ring(outer)))
        .collect();

    let mut islands = Vec::new();
    for hole in &part.holes {
        for rings in ops.region_to_polygons(hole) {
            let mut rings = rings.into_iter();
            let Some(ring) = rings.next() else {
                continue;
            };
            let region = ops.region_from_ring(&ring);
            let owner = pieces
                .iter()
                .position(|piece| piece.as_ref().is_some_and(|p| ops.intersects(p, &region)))
                .unwrap_or(0);
            polygons[owner].push(ring);
            islands.extend(rings.map(|island| vec![island]));
        }
    }
    polygons.extend(islands);
    polygons
}
