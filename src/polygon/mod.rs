//! Polygons and the clipping capability used to trim border Voronoi cells.
//!
//! Clipping is consumed through the [`PolygonClipper`] trait so callers can
//! plug in a general polygon boolean library. The default
//! [`ConvexClipper`] is exact whenever the clip region is convex, which is
//! always the case for the rectangles used by a triangulation frame.
//!
//! # Example
//!
//! ```
//! use dualis::polygon::{ConvexClipper, Polygon, PolygonClipper};
//! use dualis::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//! let window = Polygon::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ]);
//!
//! let pieces = ConvexClipper.intersect(&square, &window);
//! assert_eq!(pieces.len(), 1);
//! assert!((pieces[0].area() - 1.0_f64).abs() < 1e-12);
//! ```

mod clip;
mod core;

pub use clip::{sutherland_hodgman, ConvexClipper, PolygonClipper};
pub use core::{polygon_signed_area, Polygon};
