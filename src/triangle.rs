use crate::bounds::SuperTriangle;
use crate::circumcircle::{self, Circumcircle};
use crate::geometry::{Point, Segment};

/// A triangle of the triangulation.
///
/// Vertices are kept in construction order so that edges inherit a consistent winding, but two
/// triangles compare equal whenever their vertex sets match.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub(crate) vertices: [Point; 3],
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { vertices: [p1, p2, p3] }
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// The three directed edges `(p1, p2), (p2, p3), (p3, p1)`.
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    pub fn has_vertex(&self, p: &Point) -> bool {
        self.vertices.contains(p)
    }

    /// Counts the vertices of `self` that also appear in `other`.
    pub fn shared_vertices(&self, other: &Triangle) -> usize {
        self.vertices.iter().filter(|v| other.has_vertex(v)).count()
    }

    /// The edge shared with `other`, oriented as it appears in `self`.
    pub fn shared_edge(&self, other: &Triangle) -> Option<Segment> {
        self.edges()
            .into_iter()
            .find(|e| other.has_vertex(&e.p1) && other.has_vertex(&e.p2))
    }

    pub fn circumcircle(&self) -> Option<Circumcircle> {
        let [a, b, c] = &self.vertices;
        circumcircle::circumcircle(a, b, c)
    }

    /// Circumcircle test of `query` against this triangle.
    pub fn circum_contains(&self, query: &Point) -> bool {
        let [a, b, c] = &self.vertices;
        circumcircle::test(query, a, b, c).contains
    }

    /// True when any vertex belongs to the super-triangle.
    pub fn touches(&self, super_triangle: &SuperTriangle) -> bool {
        self.vertices.iter().any(|v| super_triangle.is_vertex(v))
    }

    fn sorted(&self) -> [Point; 3] {
        let mut v = self.vertices;
        v.sort_by(Point::cmp_yx);
        v
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}
