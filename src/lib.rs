//! # voroplane
//!
//! `voroplane` is a Rust library for interactive 2D Voronoi diagrams, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). Sites are triangulated with the Bowyer-Watson
//! algorithm and the Voronoi diagram is derived as the dual of the Delaunay triangulation.
//!
//! ## Features
//!
//! - **Full rebuilds**: every site insertion or mode switch triangulates all sites from scratch,
//!   seeded by a fixed super-triangle.
//! - **Two output modes**: Voronoi edges between circumcenters of adjacent triangles, or filled
//!   cells with polar-ordered vertices and a fill color.
//! - **Seeded colors**: cell colors come from an explicit seed, either reshuffled on every rebuild
//!   or stable per site.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! See the `demos/` directory for SVG plotting of both modes.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`TriangulationContext`] struct, which owns the sites, the
//! triangulation and the published diagram.

mod bounds;
pub mod circumcircle;
mod color;
mod context;
pub mod dual;
mod error;
mod geometry;
pub mod polygon;
mod triangle;
mod triangulation;
pub mod wasm;

pub use bounds::SuperTriangle;
pub use bounds::SUPER_TRIANGLE_DEFAULT;
pub use circumcircle::{Circumcircle, CircumTest, EPSILON};
pub use color::{ColorPolicy, Palette, Rgb};
pub use context::{Config, Diagram, DisplayMode, Event, TriangulationContext};
pub use dual::{RawCell, VoronoiEdge};
pub use error::{Error, Result};
pub use geometry::{Point, Segment};
pub use polygon::Cell;
pub use triangle::Triangle;
pub use triangulation::Triangulation;
