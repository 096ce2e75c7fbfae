use crate::bounds::SuperTriangle;
use crate::geometry::{Point, Segment};
use crate::triangle::Triangle;

/// The triangle set of a Bowyer-Watson triangulation seeded by a [`SuperTriangle`].
///
/// Every rebuild starts over from the super-triangle; no state is carried between calls.
#[derive(Clone, Debug)]
pub struct Triangulation {
    super_triangle: SuperTriangle,
    triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn new(super_triangle: SuperTriangle) -> Self {
        let [a, b, c] = super_triangle.vertices();
        Self {
            super_triangle,
            triangles: vec![Triangle::new(a, b, c)],
        }
    }

    pub fn super_triangle(&self) -> &SuperTriangle {
        &self.super_triangle
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles that do not touch any super-triangle vertex.
    pub fn interior_triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter().filter(|t| !t.touches(&self.super_triangle))
    }

    /// Flat array of all triangle vertices `[x1, y1, x2, y2, x3, y3, ...]`, super-triangle
    /// included, for drawing the mesh.
    pub fn vertex_coords(&self) -> Vec<f64> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices)
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// Triangulates `sites` from scratch.
    ///
    /// Sites are inserted in ascending y, then ascending x. For each site all triangles whose
    /// circumcircle contains it are removed, and the boundary of the resulting cavity is fanned
    /// out to the new site. Degenerate triangles never test positive, so they stay in the set.
    pub fn rebuild(&mut self, sites: &[Point]) {
        let mut sorted = sites.to_vec();
        sorted.sort_by(Point::cmp_yx);

        let [a, b, c] = self.super_triangle.vertices();
        self.triangles.clear();
        self.triangles.push(Triangle::new(a, b, c));

        for site in &sorted {
            if !self.super_triangle.contains(site) {
                log::warn!("site ({}, {}) lies outside the super-triangle", site.x, site.y);
            }
            self.insert(*site);
        }

        log::debug!(
            "rebuilt triangulation of {} sites into {} triangles",
            sorted.len(),
            self.triangles.len()
        );
    }

    fn insert(&mut self, site: Point) {
        let mut edges: Vec<Segment> = Vec::new();
        self.triangles.retain(|t| {
            if t.circum_contains(&site) {
                edges.extend(t.edges());
                false
            } else {
                true
            }
        });

        let boundary = cavity_boundary(&edges);
        log::trace!(
            "site ({}, {}): {} bad triangles, cavity of {} edges",
            site.x,
            site.y,
            edges.len() / 3,
            boundary.len()
        );

        self.triangles
            .extend(boundary.into_iter().map(|e| Triangle::new(e.p1, e.p2, site)));
    }
}

/// Drops every pair of reverse-equal edges. Each edge is cancelled by at most one partner.
fn cavity_boundary(edges: &[Segment]) -> Vec<Segment> {
    let mut removed = vec![false; edges.len()];
    for i in 0..edges.len() {
        if removed[i] {
            continue;
        }
        let partner = (i + 1..edges.len()).find(|&j| !removed[j] && edges[i].is_reverse_of(&edges[j]));
        if let Some(j) = partner {
            removed[i] = true;
            removed[j] = true;
        }
    }

    edges
        .iter()
        .zip(removed)
        .filter(|(_, gone)| !gone)
        .map(|(e, _)| *e)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_initial_state_is_super_triangle() {
        let tri = Triangulation::new(SuperTriangle::default());
        assert_eq!(tri.len(), 1);
        assert_eq!(tri.interior_triangles().count(), 0);
    }

    #[test]
    fn test_single_site_fans_super_triangle() {
        let mut tri = Triangulation::new(SuperTriangle::default());
        tri.rebuild(&[p(100.0, 100.0)]);
        assert_eq!(tri.len(), 3);
        assert!(tri.triangles().iter().all(|t| t.has_vertex(&p(100.0, 100.0))));
    }

    #[test]
    fn test_cavity_boundary_cancels_pairs_once() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(0.0, 1.0);
        let edges = vec![
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(b, a),
            Segment::new(c, a),
        ];
        let boundary = cavity_boundary(&edges);
        assert_eq!(boundary, vec![Segment::new(b, c), Segment::new(c, a)]);
    }

    #[test]
    fn test_vertex_coords() {
        let tri = Triangulation::new(SuperTriangle::default());
        assert_eq!(tri.vertex_coords(), vec![-1000.0, -1000.0, 500.0, 3000.0, 1500.0, -1000.0]);

        let mut tri = Triangulation::new(SuperTriangle::default());
        tri.rebuild(&[p(100.0, 100.0), p(200.0, 150.0)]);
        let coords = tri.vertex_coords();
        assert_eq!(coords.len(), tri.len() * 6);
        assert_eq!(&coords[..6], &[
            tri.triangles()[0].vertices[0].x, tri.triangles()[0].vertices[0].y,
            tri.triangles()[0].vertices[1].x, tri.triangles()[0].vertices[1].y,
            tri.triangles()[0].vertices[2].x, tri.triangles()[0].vertices[2].y,
        ]);
    }

    #[test]
    fn test_empty_rebuild_resets() {
        let mut tri = Triangulation::new(SuperTriangle::default());
        tri.rebuild(&[p(10.0, 10.0), p(20.0, 30.0)]);
        tri.rebuild(&[]);
        assert_eq!(tri.len(), 1);
    }

    #[test]
    fn test_euler_count() {
        // n sites strictly inside the super-triangle, in general position: 2n + 1 triangles.
        let sites = [p(10.0, 20.0), p(300.0, 40.0), p(150.0, 400.0), p(170.0, 130.0), p(600.0, 500.0)];
        let mut tri = Triangulation::new(SuperTriangle::default());
        tri.rebuild(&sites);
        assert_eq!(tri.len(), 2 * sites.len() + 1);
    }
}
