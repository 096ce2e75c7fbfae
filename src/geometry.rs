use std::cmp::Ordering;

/// A point in the plane.
///
/// Equality is exact component-wise comparison. The only place where a tolerance is applied is
/// the circumcircle predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total order used to sort sites before insertion: ascending y, then ascending x.
    pub fn cmp_yx(&self, other: &Point) -> Ordering {
        self.y.total_cmp(&other.y).then(self.x.total_cmp(&other.x))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// An ordered pair of points.
///
/// Used for cavity boundaries during insertion and for emitted Voronoi edges. Equality is
/// order-sensitive: `(a, b) != (b, a)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.p2, self.p1)
    }

    /// True when `other` runs over the same two points in the opposite direction.
    pub fn is_reverse_of(&self, other: &Segment) -> bool {
        self.p1 == other.p2 && self.p2 == other.p1
    }

    pub fn length_sq(&self) -> f64 {
        self.p1.distance_sq(&self.p2)
    }
}
