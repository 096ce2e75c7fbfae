use thiserror::Error;

use crate::geometry::Point;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
///
/// Geometry never fails: degenerate triangles are skipped silently. Errors only guard the inputs
/// the triangulation cannot recover from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("site ({x}, {y}) has a non-finite coordinate")]
    NonFiniteSite { x: f64, y: f64 },
    #[error("super-triangle {a:?}, {b:?}, {c:?} is degenerate")]
    DegenerateSuperTriangle { a: Point, b: Point, c: Point },
}
