//! Voronoi diagram built as the dual of a Delaunay triangulation.
//!
//! Every input point whose triangle fan is closed becomes a site. The
//! site's cell is the polygon of the circumcenters of its fan, ordered
//! clockwise around the point, and two sites are neighbours when their
//! points share a Delaunay edge.
//!
//! Sites and triangles live in one [`Voronoi`] arena; sites refer to each
//! other and to triangles through [`SiteId`] and [`TriangleId`] handles.
//!
//! # Example
//!
//! ```
//! use dualis::triangulation::Triangulator;
//! use dualis::Point2;
//!
//! let mut triangulator = Triangulator::new();
//! triangulator.add_points([
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ]);
//!
//! let triangulation = triangulator.triangulate().unwrap();
//! let voronoi = triangulator.make_voronoi(triangulation.triangles());
//!
//! // Border triangles close every fan, so each point gets a site
//! assert_eq!(voronoi.len(), 3);
//! for site in voronoi.sites() {
//!     assert_eq!(site.neighbours().len(), 2);
//! }
//! ```

use super::key::PointKey;
use super::{Edge, Triangle};
use crate::polygon::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Handle of a site, its index in construction order.
///
/// Ids stay valid when other sites are removed with [`Voronoi::retain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiteId(usize);

impl SiteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of a triangle in [`Voronoi::triangles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleId(usize);

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The boundary between two neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge<F> {
    a: Point2<F>,
    b: Point2<F>,
    this: SiteId,
    other: SiteId,
}

impl<F: Float> VoronoiEdge<F> {
    /// Creates an edge from `a` to `b` owned by `this` and facing `other`.
    pub fn new(a: Point2<F>, b: Point2<F>, this: SiteId, other: SiteId) -> Self {
        Self { a, b, this, other }
    }

    #[inline]
    pub fn a(&self) -> Point2<F> {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point2<F> {
        self.b
    }

    /// The site whose cell this edge bounds.
    #[inline]
    pub fn this(&self) -> SiteId {
        self.this
    }

    /// The site on the other side.
    #[inline]
    pub fn other(&self) -> SiteId {
        self.other
    }

    #[inline]
    pub fn length(&self) -> F {
        self.a.distance(self.b)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.a.midpoint(self.b)
    }

    /// Unit vector perpendicular to `a -> b`, rotated counter-clockwise.
    ///
    /// Zero for a zero-length edge. Cells wind clockwise, so the normal
    /// points into the cell of [`this`](Self::this).
    pub fn normal(&self) -> Vec2<F> {
        (self.b - self.a)
            .normalize()
            .map_or_else(Vec2::zero, Vec2::perpendicular)
    }

    pub fn segment(&self) -> Edge<F> {
        Edge::new(self.a, self.b)
    }
}

/// A Voronoi cell around one input point.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiSite<F> {
    id: SiteId,
    center: Point2<F>,
    polygon: Vec<Point2<F>>,
    source_triangles: Vec<TriangleId>,
    neighbours: Vec<VoronoiEdge<F>>,
}

impl<F: Float> VoronoiSite<F> {
    #[inline]
    pub fn id(&self) -> SiteId {
        self.id
    }

    /// The input point generating this cell.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Cell corners in clockwise order.
    ///
    /// One corner per source triangle, so corners repeat where cocircular
    /// points share a circumcenter.
    #[inline]
    pub fn polygon(&self) -> &[Point2<F>] {
        &self.polygon
    }

    /// Triangles having the center as a vertex, in the order of
    /// [`polygon`](Self::polygon).
    #[inline]
    pub fn source_triangles(&self) -> &[TriangleId] {
        &self.source_triangles
    }

    /// One edge per Delaunay edge leading to another site, in clockwise order.
    ///
    /// Where the site is cocircular with neighbours, consecutive source
    /// triangles share a circumcenter and the edge between them has zero
    /// length. The centre of a square grid has six edges, two of them
    /// zero-length edges to diagonal sites.
    #[inline]
    pub fn neighbours(&self) -> &[VoronoiEdge<F>] {
        &self.neighbours
    }

    pub fn to_polygon(&self) -> Polygon<F> {
        Polygon::new(self.polygon.clone())
    }

    /// Area of the cell.
    pub fn polygon_area(&self) -> F {
        self.to_polygon().area()
    }

    /// Returns `true` if one of the neighbour edges faces `other`.
    pub fn is_neighbour_of(&self, other: SiteId) -> bool {
        self.neighbours.iter().any(|edge| edge.other == other)
    }
}

/// Sites and the triangles they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Voronoi<F> {
    triangles: Vec<Triangle<F>>,
    sites: Vec<VoronoiSite<F>>,
}

impl<F: Float> Voronoi<F> {
    /// Sites in ascending id order.
    #[inline]
    pub fn sites(&self) -> &[VoronoiSite<F>] {
        &self.sites
    }

    /// Looks up a site by id; `None` if it was removed.
    pub fn site(&self, id: SiteId) -> Option<&VoronoiSite<F>> {
        self.sites
            .binary_search_by_key(&id, |site| site.id)
            .ok()
            .map(|i| &self.sites[i])
    }

    /// The site generated by `center`.
    pub fn site_at(&self, center: Point2<F>) -> Option<&VoronoiSite<F>> {
        self.sites.iter().find(|site| site.center == center)
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle<F>> {
        self.triangles.get(id.0)
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// The site on the far side of `edge`, if it is still present.
    pub fn neighbour(&self, edge: &VoronoiEdge<F>) -> Option<&VoronoiSite<F>> {
        self.site(edge.other)
    }

    /// Keeps the sites for which `keep` returns `true`, preserving order.
    ///
    /// Neighbour edges of the kept sites are left untouched.
    pub fn retain<P>(&mut self, keep: P)
    where
        P: FnMut(&VoronoiSite<F>) -> bool,
    {
        self.sites.retain(keep);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn into_sites(self) -> Vec<VoronoiSite<F>> {
        self.sites
    }
}

/// Builds the Voronoi diagram of `points` from their triangulation.
///
/// A point becomes a site only if its fan of triangles is closed: the
/// edges opposite the point must form a cycle, which holds when they have
/// as many distinct endpoints as there are triangles. Points on the
/// boundary of the triangulation are skipped, and so are repeated points.
///
/// # Arguments
///
/// * `points` - The generating points, usually those given to the triangulator
/// * `triangles` - A triangulation of the points, with or without its
///   border triangles
///
/// # Example
///
/// ```
/// use dualis::triangulation::{make_voronoi, Triangulator};
/// use dualis::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(1.0, 1.0),
/// ];
/// let mut triangulator = Triangulator::new();
/// triangulator.add_points(points.iter().copied());
///
/// let mut triangulation = triangulator.triangulate().unwrap();
/// triangulation.remove_border_triangles();
///
/// // Only the middle point is surrounded by triangles
/// let voronoi = make_voronoi(&points, triangulation.triangles());
/// assert_eq!(voronoi.len(), 1);
/// assert_eq!(voronoi.sites()[0].polygon_area(), 2.0);
/// ```
pub fn make_voronoi<F: Float>(points: &[Point2<F>], triangles: &[Triangle<F>]) -> Voronoi<F> {
    let mut fans: HashMap<PointKey, Vec<TriangleId>> = HashMap::new();
    for (i, triangle) in triangles.iter().enumerate() {
        for vertex in triangle.vertices() {
            fans.entry(PointKey::new(vertex))
                .or_default()
                .push(TriangleId(i));
        }
    }

    let mut owners: Vec<Vec<SiteId>> = vec![Vec::new(); triangles.len()];
    let mut sites: Vec<VoronoiSite<F>> = Vec::new();
    let mut seen = HashSet::new();
    let mut open_fans = 0usize;

    for &center in points {
        let key = PointKey::new(center);
        if !seen.insert(key) {
            continue;
        }
        let fan = match fans.get(&key) {
            Some(fan) if is_closed_fan(center, fan, triangles) => fan,
            _ => {
                open_fans += 1;
                continue;
            }
        };

        let mut source_triangles = fan.clone();
        source_triangles
            .sort_by(|&t, &u| clockwise(center, &triangles[t.0], &triangles[u.0]));

        let id = SiteId(sites.len());
        for t in &source_triangles {
            owners[t.0].push(id);
        }
        sites.push(VoronoiSite {
            id,
            center,
            polygon: source_triangles
                .iter()
                .map(|t| triangles[t.0].center())
                .collect(),
            source_triangles,
            neighbours: Vec::new(),
        });
    }

    let neighbours: Vec<_> = sites
        .iter()
        .map(|site| link_neighbours(site, triangles, &owners, &sites))
        .collect();
    for (site, edges) in sites.iter_mut().zip(neighbours) {
        site.neighbours = edges;
    }

    tracing::debug!(sites = sites.len(), open_fans, "built voronoi diagram");
    Voronoi {
        triangles: triangles.to_vec(),
        sites,
    }
}

/// Returns `true` if the edges opposite `center` in `fan` form a closed ring.
fn is_closed_fan<F: Float>(center: Point2<F>, fan: &[TriangleId], triangles: &[Triangle<F>]) -> bool {
    let rim: HashSet<PointKey> = fan
        .iter()
        .filter_map(|t| triangles[t.0].get_corner_opposite_edge(center))
        .flat_map(|edge| edge.endpoints())
        .map(PointKey::new)
        .collect();

    !fan.is_empty() && rim.len() == fan.len()
}

/// Orders triangles clockwise around `center`: by descending angle of the
/// circumcenter, then by descending angle of the centroid.
fn clockwise<F: Float>(center: Point2<F>, t: &Triangle<F>, u: &Triangle<F>) -> Ordering {
    let descending = |p: Point2<F>, q: Point2<F>| {
        center
            .angle_to(q)
            .partial_cmp(&center.angle_to(p))
            .unwrap_or(Ordering::Equal)
    };
    descending(t.center(), u.center()).then_with(|| descending(t.centroid(), u.centroid()))
}

/// One edge per pair of consecutive source triangles whose shared rim
/// point generates another site owning the first triangle.
fn link_neighbours<F: Float>(
    site: &VoronoiSite<F>,
    triangles: &[Triangle<F>],
    owners: &[Vec<SiteId>],
    sites: &[VoronoiSite<F>],
) -> Vec<VoronoiEdge<F>> {
    let ring = &site.source_triangles;
    let mut edges = Vec::with_capacity(ring.len());

    for (k, &current) in ring.iter().enumerate() {
        let next = ring[(k + 1) % ring.len()];
        let (t, u) = (&triangles[current.0], &triangles[next.0]);

        let shared = t
            .get_corner_opposite_edge(site.center)
            .zip(u.get_corner_opposite_edge(site.center))
            .and_then(|(e, f)| e.shared_point(&f));
        let Some(shared) = shared else {
            continue;
        };

        let other = owners[current.0]
            .iter()
            .copied()
            .find(|&o| o != site.id && sites[o.0].center == shared);
        if let Some(other) = other {
            edges.push(VoronoiEdge::new(t.center(), u.center(), site.id, other));
        }
    }
    edges
}
