//! Extraction of the Voronoi diagram from a finished triangulation.
//!
//! Two independent modes exist: a list of Voronoi edges connecting circumcenters of adjacent
//! triangles, and per-site sets of cell vertices.

use crate::geometry::{Point, Segment};
use crate::triangulation::Triangulation;
use rayon::prelude::*;

/// An edge of the Voronoi diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoronoiEdge {
    /// From the circumcenter of the first triangle to the circumcenter of the second.
    pub segment: Segment,
    /// The Delaunay edge shared by both triangles. Both endpoints of `segment` are equidistant
    /// from its two points.
    pub dual: Segment,
    /// True when neither triangle touches the super-triangle.
    pub bounded: bool,
}

/// The unordered boundary vertices of one site's cell.
#[derive(Clone, Debug, PartialEq)]
pub struct RawCell {
    pub site: Point,
    /// Circumcenters of every triangle incident to `site`, in triangle order.
    pub vertices: Vec<Point>,
    /// False when an incident triangle touches the super-triangle. Such cells extend far
    /// outside the input and are never clipped.
    pub bounded: bool,
}

/// Emits one segment for every ordered pair of triangles sharing an edge.
///
/// A segment is skipped only when an identical segment (same orientation) was already emitted.
/// The pair `(T2, T)` produces the reversed segment of `(T, T2)`, which is not recognized as a
/// duplicate, so mirrored segments usually appear twice.
pub fn voronoi_edges(triangulation: &Triangulation) -> Vec<VoronoiEdge> {
    let triangles = triangulation.triangles();
    let super_triangle = triangulation.super_triangle();
    let mut edges: Vec<VoronoiEdge> = Vec::new();

    for t in triangles {
        for t2 in triangles {
            if t == t2 || t.shared_vertices(t2) != 2 {
                continue;
            }

            let (Some(c1), Some(c2)) = (t.circumcircle(), t2.circumcircle()) else {
                log::warn!("skipping Voronoi edge between degenerate triangles {:?} and {:?}", t, t2);
                continue;
            };
            let Some(dual) = t.shared_edge(t2) else {
                continue;
            };

            let segment = Segment::new(c1.center, c2.center);
            if edges.iter().any(|e| e.segment == segment) {
                continue;
            }
            edges.push(VoronoiEdge {
                segment,
                dual,
                bounded: !t.touches(super_triangle) && !t2.touches(super_triangle),
            });
        }
    }

    log::debug!("extracted {} Voronoi edges from {} triangles", edges.len(), triangles.len());
    edges
}

/// Collects, for each site, the circumcenters of the triangles it is a vertex of.
///
/// Cells are returned in the order of `sites`.
pub fn raw_cells(sites: &[Point], triangulation: &Triangulation) -> Vec<RawCell> {
    let triangles = triangulation.triangles();
    let super_triangle = triangulation.super_triangle();

    let cells: Vec<RawCell> = sites
        .par_iter()
        .map(|site| {
            let mut vertices = Vec::new();
            let mut bounded = true;
            for t in triangles.iter().filter(|t| t.has_vertex(site)) {
                if t.touches(super_triangle) {
                    bounded = false;
                }
                match t.circumcircle() {
                    Some(circle) => vertices.push(circle.center),
                    None => log::warn!("degenerate triangle {:?} left out of cell ({}, {})", t, site.x, site.y),
                }
            }
            RawCell { site: *site, vertices, bounded }
        })
        .collect();

    log::debug!("extracted {} raw cells from {} triangles", cells.len(), triangles.len());
    cells
}
