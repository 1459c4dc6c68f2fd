//! Polygon clipping.

use crate::polygon::core::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Intersects two simple polygons.
///
/// The intersection of two simple polygons may be several disjoint
/// regions, so implementations return a list. An empty list means the
/// polygons do not overlap.
///
/// Any `Fn(&Polygon<F>, &Polygon<F>) -> Vec<Polygon<F>>` is a clipper, which
/// makes it easy to substitute a general boolean-operations library or a
/// test stub.
pub trait PolygonClipper<F> {
    /// Returns the regions covered by both `subject` and `clip`.
    fn intersect(&self, subject: &Polygon<F>, clip: &Polygon<F>) -> Vec<Polygon<F>>;
}

impl<F, C> PolygonClipper<F> for C
where
    C: Fn(&Polygon<F>, &Polygon<F>) -> Vec<Polygon<F>>,
{
    fn intersect(&self, subject: &Polygon<F>, clip: &Polygon<F>) -> Vec<Polygon<F>> {
        self(subject, clip)
    }
}

/// Clipper for convex clip regions, backed by [`sutherland_hodgman`].
///
/// Always yields at most one region. Exact when `clip` is convex; for a
/// concave `clip` the result is the intersection with its convex hull
/// edges' half-planes and may be wrong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvexClipper;

impl<F: Float> PolygonClipper<F> for ConvexClipper {
    fn intersect(&self, subject: &Polygon<F>, clip: &Polygon<F>) -> Vec<Polygon<F>> {
        let result = sutherland_hodgman(subject, clip);
        if result.is_empty() {
            Vec::new()
        } else {
            vec![result]
        }
    }
}

/// Clips a polygon against a convex clipping polygon using the
/// Sutherland-Hodgman algorithm.
///
/// The clip polygon may wind either way; it is treated as counter-clockwise
/// internally. The subject may wind either way and keeps its winding.
///
/// # Returns
///
/// The clipped polygon. Empty if the subject is entirely outside the clip
/// region or the result has fewer than three vertices.
///
/// # Example
///
/// ```
/// use dualis::polygon::{Polygon, sutherland_hodgman};
/// use dualis::Point2;
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(0.0, 3.0),
/// ]);
/// let clip = Polygon::new(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(1.0, 2.0),
/// ]);
///
/// let result = sutherland_hodgman(&subject, &clip);
/// assert!((result.area() - 1.0_f64).abs() < 1e-12);
/// ```
pub fn sutherland_hodgman<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>) -> Polygon<F> {
    if subject.is_empty() || clip.len() < 3 {
        return Polygon::empty();
    }

    let mut window = clip.clone();
    window.ensure_ccw();
    let window = window.vertices;

    let mut output = subject.vertices.clone();
    let clip_n = window.len();

    for i in 0..clip_n {
        if output.is_empty() {
            break;
        }

        let edge_start = window[i];
        let edge_end = window[(i + 1) % clip_n];

        let input = std::mem::take(&mut output);
        let input_n = input.len();

        for j in 0..input_n {
            let current = input[j];
            let next = input[(j + 1) % input_n];

            let current_inside = is_inside(current, edge_start, edge_end);
            let next_inside = is_inside(next, edge_start, edge_end);

            if current_inside {
                output.push(current);
            }
            if current_inside != next_inside {
                // Crossing the clip edge, in either direction
                if let Some(crossing) = line_intersection(current, next, edge_start, edge_end) {
                    output.push(crossing);
                }
            }
        }
    }

    if output.len() < 3 {
        return Polygon::empty();
    }
    Polygon::new(output)
}

/// Tests if a point is on the "inside" (left side) of a directed edge.
#[inline]
fn is_inside<F: Float>(point: Point2<F>, edge_start: Point2<F>, edge_end: Point2<F>) -> bool {
    (edge_end - edge_start).cross(point - edge_start) >= F::zero()
}

/// Computes the intersection of the line through `p1, p2` with the line
/// through `p3, p4`.
fn line_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denom = d1.cross(d2);
    if denom.abs() < F::epsilon() {
        return None; // Parallel
    }

    let t = (p3 - p1).cross(d2) / denom;
    Some(p1 + d1 * t)
}
