//! Triangle with a cached circumcircle.

use super::Edge;
use crate::error::{DualisError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A triangle `(a, b, c)` with its edges and circumcircle computed once.
///
/// Construction fails for (nearly) collinear vertices, so every `Triangle`
/// has a finite circumcenter. A triangle never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<F> {
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    edge_ab: Edge<F>,
    edge_bc: Edge<F>,
    edge_ca: Edge<F>,
    center: Point2<F>,
    radius_sqr: F,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle and computes its circumcircle.
    ///
    /// The circumcenter is the intersection of the perpendicular bisectors,
    /// in closed form:
    ///
    /// ```text
    /// cmb = c - b, amc = a - c, bma = b - a
    /// dx  = a.x*cmb.y + b.x*amc.y + c.x*bma.y
    /// dy  = a.y*cmb.x + b.y*amc.x + c.y*bma.x
    /// x   = (|a|²*cmb.y + |b|²*amc.y + |c|²*bma.y) / dx / 2
    /// y   = (|a|²*cmb.x + |b|²*amc.x + |c|²*bma.x) / dy / 2
    /// ```
    ///
    /// # Errors
    ///
    /// `DegenerateTriangle` when `dx` is zero relative to the magnitude of
    /// its terms, i.e. the vertices are collinear up to rounding.
    ///
    /// # Example
    ///
    /// ```
    /// use dualis::triangulation::Triangle;
    /// use dualis::Point2;
    ///
    /// let t = Triangle::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(0.0, 2.0),
    /// ).unwrap();
    /// assert_eq!(t.center(), Point2::new(1.0, 1.0));
    /// assert_eq!(t.radius_sqr(), 2.0);
    /// ```
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Result<Self> {
        let ab = a.length_squared();
        let cd = b.length_squared();
        let ef = c.length_squared();

        let cmb = c - b;
        let amc = a - c;
        let bma = b - a;

        let terms = [a.x * cmb.y, b.x * amc.y, c.x * bma.y];
        let dx = terms[0] + terms[1] + terms[2];
        let scale = terms[0].abs() + terms[1].abs() + terms[2].abs();
        if dx.is_nan() || dx.abs() <= F::epsilon() * scale {
            return Err(DualisError::DegenerateTriangle);
        }
        let dy = a.y * cmb.x + b.y * amc.x + c.y * bma.x;

        let half = (F::one() + F::one()).recip();
        let center = Point2::new(
            (ab * cmb.y + cd * amc.y + ef * bma.y) / dx * half,
            (ab * cmb.x + cd * amc.x + ef * bma.x) / dy * half,
        );
        if !center.is_finite() {
            return Err(DualisError::DegenerateTriangle);
        }

        Ok(Self {
            a,
            b,
            c,
            edge_ab: Edge::new(a, b),
            edge_bc: Edge::new(b, c),
            edge_ca: Edge::new(c, a),
            center,
            radius_sqr: a.distance_squared(center),
        })
    }

    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    #[inline]
    pub fn c(&self) -> Point2<F> {
        self.c
    }

    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn edge_ab(&self) -> Edge<F> {
        self.edge_ab
    }

    #[inline]
    pub fn edge_bc(&self) -> Edge<F> {
        self.edge_bc
    }

    #[inline]
    pub fn edge_ca(&self) -> Edge<F> {
        self.edge_ca
    }

    /// The three edges in order `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Edge<F>; 3] {
        [self.edge_ab, self.edge_bc, self.edge_ca]
    }

    /// Circumcenter.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Squared circumradius.
    #[inline]
    pub fn radius_sqr(&self) -> F {
        self.radius_sqr
    }

    /// Returns `true` if `p` is one of the three vertices.
    #[inline]
    pub fn has_point(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// Points exactly on the circle are outside.
    #[inline]
    pub fn is_point_inside_circumcircle(&self, p: Point2<F>) -> bool {
        self.center.distance_squared(p) < self.radius_sqr
    }

    /// The edge that does not touch `corner`.
    ///
    /// Returns `None` if `corner` is not a vertex of this triangle.
    pub fn get_corner_opposite_edge(&self, corner: Point2<F>) -> Option<Edge<F>> {
        if corner == self.a {
            Some(self.edge_bc)
        } else if corner == self.b {
            Some(self.edge_ca)
        } else if corner == self.c {
            Some(self.edge_ab)
        } else {
            None
        }
    }

    /// Signed area; positive when `(a, b, c)` winds counter-clockwise.
    pub fn signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a) / (F::one() + F::one())
    }

    pub fn centroid(&self) -> Point2<F> {
        let three = F::one() + F::one() + F::one();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }
}
