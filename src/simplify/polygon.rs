//! Whole-shape simplification pipeline.

use super::{Simplifier, SimplifyOptions, StopConditions};
use crate::error::{Result, SimplifyError};
use crate::geometry::ShapeGeometry;
use crate::io::Shape;
use crate::repair::{fix_self_intersections, GeoRegions};
use tracing::{debug, warn};

/// Simplifies a polygon or multi-polygon to the bounds in `options`.
///
/// Shapes already at or below both `min_vertices` and `max_vertices` are
/// returned unchanged. With `fix_intersections` set, removals that introduce
/// a self-intersection are found by rewinding and the offending vertex is
/// kept; overlaps left between rings are then merged away. Input that
/// intersects itself before simplification is rejected in that mode.
///
/// # Example
///
/// ```
/// use polyreduce::{simplify_polygon, SimplifyOptions};
/// use polyreduce::io::Shape;
///
/// let shape = Shape::Polygon(vec![vec![
///     [0.0, 0.0], [0.0, 10.0], [9.0, 9.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0],
/// ]]);
/// let options = SimplifyOptions::new().with_max_vertices(4);
///
/// let simplified = simplify_polygon(&shape, &options).unwrap();
/// assert_eq!(
///     simplified,
///     Shape::Polygon(vec![vec![
///         [0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0],
///     ]])
/// );
/// ```
pub fn simplify_polygon(shape: &Shape, options: &SimplifyOptions) -> Result<Shape> {
    options.validate()?;
    shape.validate()?;

    let count = shape.vertex_count();
    if count <= options.min_vertices && count <= options.max_vertices {
        debug!(vertices = count, "shape already within vertex bounds");
        return Ok(shape.clone());
    }

    let conditions = options.stop_conditions();
    let mut simplifier = Simplifier::new(ShapeGeometry::from(shape))?;

    if options.fix_intersections && simplifier.has_intersections() {
        return Err(SimplifyError::InvalidArgument(
            "shape intersects itself before simplification".into(),
        ));
    }

    simplifier.simplify_to(&conditions)?;
    if !options.fix_intersections {
        return Ok(simplifier.geometry().to_shape());
    }

    resolve_intersections(&mut simplifier, &conditions)?;
    debug!(
        vertices = simplifier.vertex_count(),
        stats = ?simplifier.stats(),
        "simplification finished"
    );

    let simplified = simplifier.geometry().to_shape();
    Ok(fix_self_intersections(&simplified, &GeoRegions))
}

/// Rewinds to each intersecting removal, keeps that vertex, and simplifies
/// again, until clean or out of candidates.
fn resolve_intersections(
    simplifier: &mut Simplifier<f64, ShapeGeometry>,
    conditions: &StopConditions,
) -> Result<()> {
    let mut round = 0usize;
    while simplifier.has_intersections() {
        round += 1;

        match simplifier.rewind_to_intersection() {
            Ok(()) => {}
            Err(SimplifyError::NoIntersectionFound) => {
                warn!(round, "intersection not caused by a recorded removal");
                break;
            }
            Err(e) => return Err(e),
        }

        match simplifier.skip() {
            Ok(key) => debug!(round, ring = key.ring, index = key.index, "keeping vertex"),
            Err(SimplifyError::Exhausted) => {
                warn!(round, "no vertex left to keep");
                break;
            }
            Err(e) => return Err(e),
        }

        simplifier.simplify_to(conditions)?;
    }
    Ok(())
}
