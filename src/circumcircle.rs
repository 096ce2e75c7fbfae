use crate::geometry::Point;

/// Tolerance for near-horizontal vertex pairs and for boundary inclusion.
pub const EPSILON: f64 = 1e-4;

/// The circle through the three vertices of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle {
    pub center: Point,
    pub radius_sq: f64,
}

impl Circumcircle {
    /// Points on the circle (within `EPSILON`) count as contained.
    pub fn contains(&self, query: &Point) -> bool {
        query.distance_sq(&self.center) - self.radius_sq <= EPSILON
    }
}

/// Outcome of testing a query point against the circumcircle of `a, b, c`.
///
/// `circle` is `None` when the triangle is degenerate; `contains` is then always `false`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircumTest {
    pub contains: bool,
    pub circle: Option<Circumcircle>,
}

/// Decides whether `query` lies inside or on the circumcircle of `a, b, c`.
pub fn test(query: &Point, a: &Point, b: &Point, c: &Point) -> CircumTest {
    match circumcircle(a, b, c) {
        Some(circle) => CircumTest {
            contains: circle.contains(query),
            circle: Some(circle),
        },
        None => CircumTest {
            contains: false,
            circle: None,
        },
    }
}

/// Computes the circumcircle of `a, b, c` as the intersection of two perpendicular bisectors.
///
/// A bisector is only usable when its pair of points is not near-horizontal. When both pairs
/// qualify, the y-coordinate is evaluated on the bisector of the pair with the larger `|dy|`.
/// Returns `None` when both pairs are near-horizontal or when the center is not finite
/// (collinear input).
pub fn circumcircle(a: &Point, b: &Point, c: &Point) -> Option<Circumcircle> {
    let dy_ab = (a.y - b.y).abs();
    let dy_bc = (b.y - c.y).abs();

    if dy_ab < EPSILON && dy_bc < EPSILON {
        return None;
    }

    let (cx, cy) = if dy_ab < EPSILON {
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx2 = (b.x + c.x) / 2.0;
        let my2 = (b.y + c.y) / 2.0;
        let cx = (a.x + b.x) / 2.0;
        (cx, m2 * (cx - mx2) + my2)
    } else if dy_bc < EPSILON {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let mx1 = (a.x + b.x) / 2.0;
        let my1 = (a.y + b.y) / 2.0;
        let cx = (b.x + c.x) / 2.0;
        (cx, m1 * (cx - mx1) + my1)
    } else {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx1 = (a.x + b.x) / 2.0;
        let mx2 = (b.x + c.x) / 2.0;
        let my1 = (a.y + b.y) / 2.0;
        let my2 = (b.y + c.y) / 2.0;
        let cx = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        let cy = if dy_ab > dy_bc {
            m1 * (cx - mx1) + my1
        } else {
            m2 * (cx - mx2) + my2
        };
        (cx, cy)
    };

    let center = Point::new(cx, cy);
    if !center.is_finite() {
        return None;
    }

    Some(Circumcircle {
        center,
        radius_sq: b.distance_sq(&center),
    })
}
