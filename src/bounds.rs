use crate::error::{Error, Result};
use crate::geometry::Point;

/// Default super-triangle vertices. Large enough to enclose a typical window of interactive input.
pub const SUPER_TRIANGLE_DEFAULT: [Point; 3] = [
    Point::new(-1000.0, -1000.0),
    Point::new(500.0, 3000.0),
    Point::new(1500.0, -1000.0),
];

/// The synthetic triangle that seeds every rebuild.
///
/// Its vertices are fixed and not derived from the input. Sites outside of it break the
/// triangulation silently, so callers only get a warning in the log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuperTriangle {
    vertices: [Point; 3],
}

impl Default for SuperTriangle {
    fn default() -> Self {
        Self { vertices: SUPER_TRIANGLE_DEFAULT }
    }
}

impl SuperTriangle {
    /// Creates a super-triangle from custom vertices.
    ///
    /// Fails when the vertices are not finite or (nearly) collinear.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        let area2 = orient(&a, &b, &c);
        if !a.is_finite() || !b.is_finite() || !c.is_finite() || area2.abs() < f64::EPSILON {
            return Err(Error::DegenerateSuperTriangle { a, b, c });
        }
        Ok(Self { vertices: [a, b, c] })
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    pub fn is_vertex(&self, p: &Point) -> bool {
        self.vertices.contains(p)
    }

    /// True when `p` lies inside or on the border of the triangle.
    pub fn contains(&self, p: &Point) -> bool {
        let [a, b, c] = &self.vertices;
        let d1 = orient(a, b, p);
        let d2 = orient(b, c, p);
        let d3 = orient(c, a, p);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

/// Twice the signed area of `a, b, c`.
fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
