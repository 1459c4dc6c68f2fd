//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact:
/// two points are equal only when both coordinates compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Squared distance from the origin, `x² + y²`.
    #[inline]
    pub fn length_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Angle of the direction from `self` to `other`, in radians in `(-π, π]`.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        (other - self).angle()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0_f64, 2.0).midpoint(Point2::new(4.0, 6.0));
        assert_eq!(m, Point2::new(2.0, 4.0));
    }

    #[test]
    fn test_exact_equality() {
        let a = Point2::new(0.1_f64 + 0.2, 0.0);
        let b = Point2::new(0.3_f64, 0.0);
        // No epsilon: 0.1 + 0.2 != 0.3 in binary floating point
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_angle_to() {
        let o = Point2::new(1.0_f64, 1.0);
        assert_relative_eq!(o.angle_to(Point2::new(2.0, 1.0)), 0.0);
        assert_relative_eq!(
            o.angle_to(Point2::new(1.0, 2.0)),
            std::f64::consts::FRAC_PI_2
        );
        assert_relative_eq!(o.angle_to(Point2::new(0.0, 1.0)), std::f64::consts::PI);
    }

    #[test]
    fn test_point_vector_ops() {
        let p = Point2::new(1.0_f64, 2.0);
        let q = Point2::new(4.0, 6.0);
        let v = q - p;
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(p + v, q);
        assert_eq!(q - v, p);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point2<f32> = (1.5, -2.0).into();
        assert_eq!(p, Point2::new(1.5, -2.0));
    }
}
