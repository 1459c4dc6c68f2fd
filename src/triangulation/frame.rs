//! The rectangle a triangulation is built in, and border classification.

use super::{Triangle, Voronoi, VoronoiSite};
use crate::bounds::Aabb2;
use crate::error::{DualisError, Result};
use crate::polygon::{ConvexClipper, Polygon, PolygonClipper};
use crate::primitives::Point2;
use num_traits::Float;

/// Working rectangle plus the super-rectangle that seeds the triangulation.
///
/// The super-rectangle is the working rectangle grown on every side by its
/// largest dimension (one unit if the rectangle has no extent), and is
/// split along its `min`–`max` diagonal into the two super-triangles.
/// Triangles touching a super-rectangle corner are border triangles; cells
/// reaching outside the working rectangle are border sites.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<F> {
    rect: Aabb2<F>,
    super_rect: Aabb2<F>,
    super_triangles: [Triangle<F>; 2],
}

impl<F: Float> Frame<F> {
    /// Resolves the super-rectangle and super-triangles for `rect`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `rect` is not finite or has `min > max`;
    /// `DegenerateTriangle` if the super-rectangle overflows.
    pub fn new(rect: Aabb2<F>) -> Result<Self> {
        if !rect.is_valid() {
            return Err(DualisError::InvalidInput {
                reason: "rectangle must be finite with min <= max",
            });
        }

        let extent = rect.max_dimension();
        let margin = if extent > F::zero() { extent } else { F::one() };
        let super_rect = rect.expand(margin);

        let [c0, c1, c2, c3] = super_rect.corners();
        let super_triangles = [Triangle::new(c0, c1, c2)?, Triangle::new(c0, c2, c3)?];

        Ok(Self {
            rect,
            super_rect,
            super_triangles,
        })
    }

    /// The working rectangle.
    #[inline]
    pub fn rect(&self) -> Aabb2<F> {
        self.rect
    }

    #[inline]
    pub fn super_rect(&self) -> Aabb2<F> {
        self.super_rect
    }

    #[inline]
    pub fn super_triangles(&self) -> &[Triangle<F>; 2] {
        &self.super_triangles
    }

    /// Returns `true` if `p` is one of the four super-rectangle corners.
    pub fn is_super_corner(&self, p: Point2<F>) -> bool {
        self.super_rect.corners().contains(&p)
    }

    /// Returns `true` if any vertex of `triangle` is a super-rectangle corner.
    pub fn is_border_triangle(&self, triangle: &Triangle<F>) -> bool {
        triangle.vertices().iter().any(|&v| self.is_super_corner(v))
    }

    /// Drops every border triangle from `triangles`.
    pub fn remove_border_triangles(&self, triangles: &mut Vec<Triangle<F>>) {
        triangles.retain(|t| !self.is_border_triangle(t));
    }

    /// Returns `true` if part of the site's cell lies outside the working rectangle.
    pub fn is_border_site(&self, site: &VoronoiSite<F>) -> bool {
        !self.rect.contains_all(site.polygon())
    }

    /// Drops every border site from `voronoi`.
    ///
    /// Neighbour edges of the remaining sites that pointed at a removed site
    /// are kept; [`Voronoi::neighbour`] resolves them to `None`.
    pub fn remove_border_sites(&self, voronoi: &mut Voronoi<F>) {
        voronoi.retain(|site| !self.is_border_site(site));
    }

    /// The working rectangle as a counter-clockwise polygon.
    pub fn rect_polygon(&self) -> Polygon<F> {
        self.rect.to_polygon()
    }

    /// The site's cell, trimmed to the working rectangle by `clipper`.
    ///
    /// Cells inside the rectangle are returned unchanged. If the clipper
    /// yields several disjoint regions, the first one is kept and a warning
    /// is logged; if it yields none, the result is empty.
    pub fn get_polygon_site<C>(&self, site: &VoronoiSite<F>, clipper: &C) -> Polygon<F>
    where
        C: PolygonClipper<F> + ?Sized,
    {
        if !self.is_border_site(site) {
            return site.to_polygon();
        }

        let mut regions = clipper.intersect(&site.to_polygon(), &self.rect_polygon());
        if regions.len() > 1 {
            tracing::warn!(
                site = site.id().index(),
                regions = regions.len(),
                "clipping produced several regions, keeping the first"
            );
        }
        if regions.is_empty() {
            tracing::debug!(site = site.id().index(), "cell lies outside the rectangle");
            return Polygon::empty();
        }
        regions.swap_remove(0)
    }

    /// [`get_polygon_site`](Self::get_polygon_site) with the built-in [`ConvexClipper`].
    pub fn clip_site(&self, site: &VoronoiSite<F>) -> Polygon<F> {
        self.get_polygon_site(site, &ConvexClipper)
    }
}
