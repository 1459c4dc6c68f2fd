//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with two super-triangles covering an enlarged bounding rectangle
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point and fan the boundary of the resulting hole to it
//! 3. Keep the triangles touching the super-rectangle corners; callers drop
//!    them with [`Frame::remove_border_triangles`] when they need to
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, every insertion scans all live triangles
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use dualis::triangulation::Triangulator;
//! use dualis::Point2;
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.set_padding(1.0);
//! triangulator.add_points([
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ]);
//!
//! let mut triangulation = triangulator.triangulate().unwrap();
//! triangulation.remove_border_triangles();
//!
//! // Square with center point
//! assert_eq!(triangulation.len(), 4);
//! ```

use super::key::PointKey;
use super::{Edge, Frame, Triangle, Voronoi};
use crate::bounds::Aabb2;
use crate::error::{DualisError, Result};
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashSet;

/// Where the working rectangle of a triangulation comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bounds<F> {
    /// A fixed rectangle, independent of the points.
    Explicit(Aabb2<F>),
    /// The tight bounding box of the points, grown by `padding` on all sides.
    FitPoints {
        /// Margin added on every side.
        padding: F,
    },
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Bounds::FitPoints {
            padding: F::zero(),
        }
    }
}

/// Configuration of a [`Triangulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangulatorConfig<F> {
    pub bounds: Bounds<F>,
}

impl<F: Float> Default for TriangulatorConfig<F> {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
        }
    }
}

/// Accumulates points and triangulates them.
///
/// Points are inserted in the order they were added; the result depends on
/// that order when points are cocircular.
#[derive(Debug, Clone)]
pub struct Triangulator<F> {
    points: Vec<Point2<F>>,
    config: TriangulatorConfig<F>,
}

impl<F: Float> Default for Triangulator<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Triangulator<F> {
    /// Creates a triangulator that fits its rectangle to the points.
    pub fn new() -> Self {
        Self::with_config(TriangulatorConfig::default())
    }

    pub fn with_config(config: TriangulatorConfig<F>) -> Self {
        Self {
            points: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TriangulatorConfig<F> {
        &self.config
    }

    /// Points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Appends a point. No deduplication or validation takes place.
    pub fn add_point(&mut self, p: Point2<F>) {
        self.points.push(p);
    }

    pub fn add_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        self.points.extend(points);
    }

    /// Uses `rect` as the working rectangle.
    pub fn set_rectangle(&mut self, rect: Aabb2<F>) {
        self.config.bounds = Bounds::Explicit(rect);
    }

    /// Fits the working rectangle to the points, grown by `padding`.
    pub fn set_padding(&mut self, padding: F) {
        self.config.bounds = Bounds::FitPoints { padding };
    }

    /// Tight bounding box of `points`, grown by `padding` on all sides.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `points` is empty or `padding` is not finite.
    pub fn calculate_rect(points: &[Point2<F>], padding: F) -> Result<Aabb2<F>> {
        Aabb2::calculate(points, padding)
    }

    /// Resolves the working rectangle and super-triangles for the current
    /// points and configuration.
    pub fn frame(&self) -> Result<Frame<F>> {
        let rect = match self.config.bounds {
            Bounds::Explicit(rect) => rect,
            Bounds::FitPoints { padding } => Self::calculate_rect(&self.points, padding)?,
        };
        Frame::new(rect)
    }

    /// Triangulates all points added so far.
    ///
    /// The result includes the border triangles attached to the
    /// super-rectangle corners. A point equal to one inserted earlier is
    /// skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the rectangle must be fitted to an empty point set
    ///   or is not a valid rectangle
    /// - `DegenerateTriangle` if at least three distinct points are all
    ///   collinear, or if rounding produces a collinear triangle
    pub fn triangulate(&self) -> Result<Triangulation<F>> {
        let frame = self.frame()?;
        if is_collinear_set(&self.points) {
            return Err(DualisError::DegenerateTriangle);
        }

        let mut vertices: HashSet<PointKey> = frame
            .super_rect()
            .corners()
            .iter()
            .map(|&corner| PointKey::new(corner))
            .collect();
        let mut triangles = frame.super_triangles().to_vec();

        for (index, &p) in self.points.iter().enumerate() {
            if !vertices.insert(PointKey::new(p)) {
                tracing::debug!(index, "skipping point already in the triangulation");
                continue;
            }
            triangles = insert_point(triangles, p)?;
        }

        tracing::debug!(
            points = self.points.len(),
            triangles = triangles.len(),
            "triangulated"
        );
        Ok(Triangulation { triangles, frame })
    }

    /// Builds the Voronoi diagram of the added points from `triangles`.
    ///
    /// See [`make_voronoi`](super::make_voronoi).
    pub fn make_voronoi(&self, triangles: &[Triangle<F>]) -> Voronoi<F> {
        super::make_voronoi(&self.points, triangles)
    }
}

/// Triangles produced by [`Triangulator::triangulate`], with the frame they
/// were built in.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    triangles: Vec<Triangle<F>>,
    frame: Frame<F>,
}

impl<F: Float> Triangulation<F> {
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    #[inline]
    pub fn frame(&self) -> &Frame<F> {
        &self.frame
    }

    pub fn into_triangles(self) -> Vec<Triangle<F>> {
        self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// See [`Frame::is_border_triangle`].
    pub fn is_border_triangle(&self, triangle: &Triangle<F>) -> bool {
        self.frame.is_border_triangle(triangle)
    }

    /// Drops the triangles attached to the super-rectangle corners.
    pub fn remove_border_triangles(&mut self) {
        self.frame.remove_border_triangles(&mut self.triangles);
    }
}

/// Inserts `p`, replacing the triangles whose circumcircle contains it by a
/// fan from `p` to the boundary of the hole they leave.
fn insert_point<F: Float>(triangles: Vec<Triangle<F>>, p: Point2<F>) -> Result<Vec<Triangle<F>>> {
    let (bad, mut live): (Vec<_>, Vec<_>) = triangles
        .into_iter()
        .partition(|t| t.is_point_inside_circumcircle(p));

    for edge in cavity_boundary(&bad) {
        live.push(Triangle::new(edge.a(), edge.b(), p)?);
    }
    Ok(live)
}

/// Edges of `bad` that belong to exactly one of them.
///
/// An edge shared by two bad triangles lies inside the hole; the others
/// form its boundary.
pub(crate) fn cavity_boundary<F: Float>(bad: &[Triangle<F>]) -> Vec<Edge<F>> {
    let edges: Vec<Edge<F>> = bad.iter().flat_map(|t| t.edges()).collect();

    edges
        .iter()
        .enumerate()
        .filter(|&(i, edge)| {
            !edges
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other == edge)
        })
        .map(|(_, &edge)| edge)
        .collect()
}

/// Returns `true` if there are at least three distinct points and all of
/// them lie exactly on one line.
fn is_collinear_set<F: Float>(points: &[Point2<F>]) -> bool {
    let Some(&origin) = points.first() else {
        return false;
    };
    let Some(&other) = points.iter().find(|&&q| q != origin) else {
        return false;
    };

    let direction = other - origin;
    let on_line = points
        .iter()
        .all(|&q| direction.cross(q - origin) == F::zero());
    let third = points.iter().any(|&q| q != origin && q != other);

    on_line && third
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb2<f64> {
        Aabb2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn triangulator(points: &[(f64, f64)]) -> Triangulator<f64> {
        let mut triangulator = Triangulator::new();
        triangulator.add_points(points.iter().map(|&p| Point2::from(p)));
        triangulator
    }

    fn assert_delaunay(triangles: &[Triangle<f64>], points: &[Point2<f64>]) {
        for t in triangles {
            for &p in points.iter().filter(|&&p| !t.has_point(p)) {
                // Cocircular points sit on the circle up to rounding
                let d = t.center().distance_squared(p);
                assert!(
                    d >= t.radius_sqr() * (1.0 - 1e-9),
                    "{:?} is inside the circumcircle of {:?}",
                    p,
                    t.vertices()
                );
            }
        }
    }

    #[test]
    fn test_single_point_in_rectangle() {
        let mut triangulator = triangulator(&[(50.0, 50.0)]);
        triangulator.set_rectangle(rect(0.0, 0.0, 100.0, 100.0));

        let mut triangulation = triangulator.triangulate().unwrap();
        // The point is inside the circumcircle shared by both super-triangles,
        // so both are replaced by a fan of four
        assert_eq!(triangulation.len(), 4);
        for t in triangulation.triangles() {
            assert!(triangulation.is_border_triangle(t));
            assert!(t.has_point(Point2::new(50.0, 50.0)));
        }

        triangulation.remove_border_triangles();
        assert!(triangulation.is_empty());
    }

    #[test]
    fn test_no_points_with_rectangle() {
        let mut triangulator: Triangulator<f64> = Triangulator::new();
        triangulator.set_rectangle(rect(0.0, 0.0, 1.0, 1.0));

        let triangulation = triangulator.triangulate().unwrap();
        assert_eq!(triangulation.triangles(), triangulation.frame().super_triangles());
    }

    #[test]
    fn test_no_points_without_rectangle() {
        let triangulator: Triangulator<f64> = Triangulator::new();
        assert!(matches!(
            triangulator.triangulate(),
            Err(DualisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_three_points() {
        let points = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
        let mut triangulator = triangulator(&points);
        triangulator.set_padding(5.0);

        let triangulation = triangulator.triangulate().unwrap();
        assert_delaunay(triangulation.triangles(), triangulator.points());

        let inner: Vec<_> = triangulation
            .triangles()
            .iter()
            .filter(|t| !triangulation.is_border_triangle(t))
            .collect();
        assert_eq!(inner.len(), 1);
        for &(x, y) in &points {
            assert!(inner[0].has_point(Point2::new(x, y)));
        }
    }

    #[test]
    fn test_square_with_center() {
        let mut triangulator = triangulator(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.5, 0.5),
        ]);
        triangulator.set_padding(1.0);

        let mut triangulation = triangulator.triangulate().unwrap();
        triangulation.remove_border_triangles();
        assert_eq!(triangulation.len(), 4);
        for t in triangulation.triangles() {
            assert!(t.has_point(Point2::new(0.5, 0.5)));
        }
    }

    #[test]
    fn test_grid_delaunay() {
        let mut points = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push((i as f64, j as f64));
            }
        }
        let triangulator = triangulator(&points);

        let mut triangulation = triangulator.triangulate().unwrap();
        assert_delaunay(triangulation.triangles(), triangulator.points());

        // 3x3 unit squares, each split in two
        triangulation.remove_border_triangles();
        assert_eq!(triangulation.len(), 18);
        let area: f64 = triangulation
            .triangles()
            .iter()
            .map(|t| t.signed_area().abs())
            .sum();
        assert_eq!(area, 9.0);
    }

    #[test]
    fn test_covers_all_points() {
        let triangulator = triangulator(&[
            (0.1, 0.2),
            (0.8, 0.1),
            (0.9, 0.9),
            (0.2, 0.85),
            (0.5, 0.5),
            (0.3, 0.3),
            (0.7, 0.6),
            (0.4, 0.8),
        ]);
        let triangulation = triangulator.triangulate().unwrap();
        assert_delaunay(triangulation.triangles(), triangulator.points());

        for &p in triangulator.points() {
            assert!(triangulation.triangles().iter().any(|t| t.has_point(p)));
        }
    }

    #[test]
    fn test_duplicate_point() {
        let points = [(10.0, 10.0), (30.0, 12.0), (20.0, 30.0)];
        let mut once = triangulator(&points);
        once.set_rectangle(rect(0.0, 0.0, 40.0, 40.0));
        let mut twice = once.clone();
        twice.add_point(Point2::new(10.0, 10.0));

        let expected = once.triangulate().unwrap();
        let actual = twice.triangulate().unwrap();
        assert_eq!(actual.triangles(), expected.triangles());
    }

    #[test]
    fn test_collinear_points() {
        let triangulator = triangulator(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(
            triangulator.triangulate().unwrap_err(),
            DualisError::DegenerateTriangle
        );
    }

    #[test]
    fn test_two_points_are_not_collinear_error() {
        let triangulator = triangulator(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        let mut triangulation = triangulator.triangulate().unwrap();
        triangulation.remove_border_triangles();
        assert!(triangulation.is_empty());
    }

    #[test]
    fn test_is_collinear_set() {
        let p = |x: f64, y: f64| Point2::new(x, y);
        assert!(is_collinear_set(&[p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0)]));
        assert!(is_collinear_set(&[p(0.0, 0.0), p(0.0, 0.0), p(0.0, 1.0), p(0.0, 5.0)]));
        assert!(!is_collinear_set(&[p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.1)]));
        assert!(!is_collinear_set(&[p(0.0, 0.0), p(1.0, 1.0)]));
        assert!(!is_collinear_set(&[p(2.0, 2.0), p(2.0, 2.0), p(2.0, 2.0)]));
        assert!(!is_collinear_set::<f64>(&[]));
    }

    #[test]
    fn test_cavity_boundary_is_closed_loop() {
        let triangulator = triangulator(&[
            (0.1, 0.2),
            (0.8, 0.1),
            (0.9, 0.9),
            (0.2, 0.85),
            (0.5, 0.5),
        ]);
        let triangulation = triangulator.triangulate().unwrap();

        let p = Point2::new(0.45, 0.55);
        let bad: Vec<_> = triangulation
            .triangles()
            .iter()
            .filter(|t| t.is_point_inside_circumcircle(p))
            .cloned()
            .collect();
        assert!(bad.len() >= 2);

        let boundary = cavity_boundary(&bad);
        // Every boundary vertex has exactly two boundary edges
        for edge in &boundary {
            for end in edge.endpoints() {
                let degree = boundary.iter().filter(|e| e.has_point(end)).count();
                assert_eq!(degree, 2);
            }
        }

        // Walking the loop from one edge visits every edge once
        let mut visited = vec![false; boundary.len()];
        let mut current = 0;
        let mut at = boundary[0].b();
        visited[0] = true;
        loop {
            let next = (0..boundary.len()).find(|&i| i != current && boundary[i].has_point(at));
            let next = next.unwrap();
            if visited[next] {
                break;
            }
            visited[next] = true;
            at = if boundary[next].a() == at { boundary[next].b() } else { boundary[next].a() };
            current = next;
        }
        assert!(visited.iter().all(|&v| v));

        // The fan from the new point exactly fills the hole
        let fan: f64 = boundary
            .iter()
            .map(|e| Triangle::new(e.a(), e.b(), p).unwrap().signed_area().abs())
            .sum();
        let cavity: f64 = bad.iter().map(|t| t.signed_area().abs()).sum();
        assert!((fan - cavity).abs() < 1e-9);
    }

    #[test]
    fn test_insertion_order_sensitivity_only_on_ties() {
        let points = [(0.1, 0.2), (0.8, 0.1), (0.9, 0.9), (0.2, 0.85), (0.5, 0.45)];
        let forward = triangulator(&points);
        let mut reversed_points = points;
        reversed_points.reverse();
        let backward = triangulator(&reversed_points);

        let mut a = forward.triangulate().unwrap();
        let mut b = backward.triangulate().unwrap();
        a.remove_border_triangles();
        b.remove_border_triangles();

        // Points in general position have a unique Delaunay triangulation
        assert_eq!(a.len(), b.len());
        for t in a.triangles() {
            assert!(b.triangles().iter().any(|u| t.vertices().iter().all(|&v| u.has_point(v))));
        }
    }

    #[test]
    fn test_f32() {
        let mut triangulator: Triangulator<f32> = Triangulator::new();
        triangulator.add_points([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ]);
        let mut triangulation = triangulator.triangulate().unwrap();
        triangulation.remove_border_triangles();
        assert_eq!(triangulation.len(), 1);
    }

    mod cavity {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every vertex of the hole left by a new point has exactly two
            /// boundary edges.
            #[test]
            fn prop_cavity_boundary_vertex_degree(
                coords in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 3..30),
                x in 0.0f64..100.0,
                y in 0.0f64..100.0,
            ) {
                let p = Point2::new(x, y);
                let mut triangulator = triangulator(&coords);
                triangulator.set_rectangle(rect(0.0, 0.0, 100.0, 100.0));
                prop_assume!(triangulator.points().iter().all(|&q| q != p));

                let triangulation = triangulator.triangulate().unwrap();
                let bad: Vec<_> = triangulation
                    .triangles()
                    .iter()
                    .filter(|t| t.is_point_inside_circumcircle(p))
                    .cloned()
                    .collect();
                prop_assert!(!bad.is_empty());

                let boundary = cavity_boundary(&bad);
                prop_assert!(boundary.len() >= 3);
                for edge in &boundary {
                    for end in edge.endpoints() {
                        let degree = boundary.iter().filter(|e| e.has_point(end)).count();
                        prop_assert_eq!(degree, 2);
                    }
                }
            }
        }
    }
}
