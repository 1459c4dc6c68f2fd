//! dualis - Delaunay triangulation and its Voronoi dual
//!
//! Points are inserted one at a time into a triangulation seeded by two
//! super-triangles covering an enlarged bounding rectangle (Bowyer-Watson).
//! The resulting triangles are then grouped around every input point to
//! form Voronoi cells, which are linked to their neighbouring cells.
//!
//! ```
//! use dualis::bounds::Aabb2;
//! use dualis::triangulation::Triangulator;
//! use dualis::Point2;
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.set_rectangle(Aabb2::new(Point2::new(0.0, 0.0), Point2::new(40.0, 40.0)));
//! for y in [10.0, 20.0, 30.0] {
//!     for x in [10.0, 20.0, 30.0] {
//!         triangulator.add_point(Point2::new(x, y));
//!     }
//! }
//!
//! let triangulation = triangulator.triangulate().unwrap();
//! let mut voronoi = triangulator.make_voronoi(triangulation.triangles());
//! assert_eq!(voronoi.len(), 9);
//!
//! triangulation.frame().remove_border_sites(&mut voronoi);
//! assert_eq!(voronoi.len(), 1);
//! ```

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod triangulation;

pub use error::{DualisError, Result};
pub use primitives::{Point2, Vec2};
