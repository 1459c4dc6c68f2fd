//! Delaunay triangulation of point sets and the Voronoi diagram derived from it.
//!
//! [`Triangulator`] collects points and runs Bowyer-Watson insertion inside
//! a [`Frame`]; [`make_voronoi`] turns the resulting triangles into cells
//! with neighbour links.

mod delaunay;
mod edge;
mod frame;
mod key;
mod triangle;
mod voronoi;

pub use delaunay::{Bounds, Triangulation, Triangulator, TriangulatorConfig};
pub use edge::Edge;
pub use frame::Frame;
pub use triangle::Triangle;
pub use voronoi::{make_voronoi, SiteId, TriangleId, Voronoi, VoronoiEdge, VoronoiSite};
