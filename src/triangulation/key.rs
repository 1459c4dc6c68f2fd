//! Exact, hashable identity for point coordinates.

use crate::primitives::Point2;
use num_traits::Float;

/// Hash key that is equal for two points exactly when the points compare equal.
///
/// Built from the mantissa/exponent/sign decomposition of each coordinate,
/// with `-0.0` folded onto `0.0`. NaN coordinates never compare equal as
/// points and are not expected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PointKey([(u64, i16, i8); 2]);

impl PointKey {
    pub(crate) fn new<F: Float>(p: Point2<F>) -> Self {
        Self([decode(p.x), decode(p.y)])
    }
}

fn decode<F: Float>(v: F) -> (u64, i16, i8) {
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}
