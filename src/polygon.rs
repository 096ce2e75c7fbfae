use crate::color::Rgb;
use crate::dual::RawCell;
use crate::geometry::Point;

/// Sorts cell vertices by polar angle around the lowest vertex (smallest y, then smallest x).
///
/// The result is a simple polygon only when the vertex set is star-shaped with respect to that
/// reference, which holds for interior cells. Hull cells with far-away vertices may self-intersect.
pub fn order_vertices(vertices: &mut [Point]) {
    let Some(reference) = vertices.iter().copied().min_by(Point::cmp_yx) else {
        return;
    };

    // Equal angles keep the nearer vertex first, so the reference itself leads.
    let angle = |p: &Point| (p.y - reference.y).atan2(p.x - reference.x);
    vertices.sort_by(|a, b| {
        angle(a)
            .total_cmp(&angle(b))
            .then(a.distance_sq(&reference).total_cmp(&b.distance_sq(&reference)))
    });
}

/// A Voronoi cell ready for filled-polygon rendering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub site: Point,
    /// Boundary vertices in polar order around the lowest vertex.
    pub vertices: Vec<Point>,
    pub color: Rgb,
    /// False for hull cells reaching towards the super-triangle.
    pub bounded: bool,
}

impl Cell {
    pub fn new(raw: RawCell, color: Rgb) -> Cell {
        let mut vertices = raw.vertices;
        order_vertices(&mut vertices);
        Cell {
            site: raw.site,
            vertices,
            color,
            bounded: raw.bounded,
        }
    }

    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 { return 0.0; }

        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        (area * 0.5).abs()
    }

    /// Area centroid of the polygon, or the site itself when the polygon is degenerate.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len();
        if n < 3 { return self.site; }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            area += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }

        if area.abs() < 1e-9 {
            return self.site;
        }

        let factor = 1.0 / (3.0 * area);
        Point::new(cx * factor, cy * factor)
    }
}
