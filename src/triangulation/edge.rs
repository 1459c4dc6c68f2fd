//! Unordered triangle edge.

use crate::primitives::Point2;
use num_traits::Float;

/// An edge between two points, compared without regard to direction.
///
/// `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Edge<F> {
    a: Point2<F>,
    b: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates a new edge.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self { a, b }
    }

    /// First endpoint, as given at construction.
    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    /// Second endpoint, as given at construction.
    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    #[inline]
    pub fn endpoints(&self) -> [Point2<F>; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn length(&self) -> F {
        self.a.distance(self.b)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.a.midpoint(self.b)
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn has_point(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p
    }

    /// Endpoint shared with `other`, if the edges touch at an endpoint.
    ///
    /// For equal edges this is `self.a()`.
    pub fn shared_point(&self, other: &Self) -> Option<Point2<F>> {
        if other.has_point(self.a) {
            Some(self.a)
        } else if other.has_point(self.b) {
            Some(self.b)
        } else {
            None
        }
    }
}

impl<F: PartialEq> PartialEq for Edge<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
