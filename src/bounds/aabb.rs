//! Axis-aligned bounding box.

use crate::error::{DualisError, Result};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Used both as the working
/// rectangle of a triangulation and as the clip region for border cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Tight bounding box of `points`, grown by `padding` on all four sides.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `points` is empty or `padding` is not finite.
    pub fn calculate(points: &[Point2<F>], padding: F) -> Result<Self> {
        if !padding.is_finite() {
            return Err(DualisError::InvalidInput {
                reason: "padding must be finite",
            });
        }
        let tight = Self::from_points(points.iter().copied()).ok_or(DualisError::InvalidInput {
            reason: "cannot compute a rectangle from an empty point set",
        })?;
        Ok(tight.expand(padding))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_dimension(self) -> F {
        self.width().max(self.height())
    }

    /// Returns `true` if both corners are finite and `min <= max` on both axes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns a new AABB grown by `margin` on every side.
    #[inline]
    pub fn expand(self, margin: F) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// The four corners in counter-clockwise order, starting at `min`.
    #[inline]
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// The rectangle as a counter-clockwise polygon.
    pub fn to_polygon(self) -> Polygon<F> {
        Polygon::new(self.corners().to_vec())
    }

    /// Returns `true` if this AABB contains the given point (bounds inclusive).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if every point lies inside this AABB.
    pub fn contains_all<'a, I>(self, points: I) -> bool
    where
        I: IntoIterator<Item = &'a Point2<F>>,
        F: 'a,
    {
        points.into_iter().all(|&p| self.contains_point(p))
    }
}
