use crate::color::{get_seed, ColorPolicy};
use crate::context::{Config, DisplayMode, TriangulationContext};
use crate::geometry::Point;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// JavaScript handle to an interactive Voronoi diagram.
///
/// Geometry is exchanged as flat `[x, y, x, y, ...]` arrays.
#[wasm_bindgen(js_name = Voronoi2D)]
pub struct Voronoi2D {
    inner: TriangulationContext,
}

#[wasm_bindgen(js_class = Voronoi2D)]
impl Voronoi2D {
    /// Creates a diagram in cell mode. With `stable_colors`, cell colors follow their sites
    /// instead of being redrawn on every rebuild.
    #[wasm_bindgen(constructor)]
    pub fn new(stable_colors: bool) -> Voronoi2D {
        let seed = get_seed();
        let policy = if stable_colors {
            ColorPolicy::PerSite { seed }
        } else {
            ColorPolicy::Reshuffle { seed }
        };
        Voronoi2D { inner: TriangulationContext::new(Config::default().with_color_policy(policy)) }
    }

    /// Inserts a site at integer device coordinates and rebuilds.
    #[wasm_bindgen(js_name = insertSite)]
    pub fn insert_site(&mut self, x: i32, y: i32) -> Result<(), JsError> {
        self.inner.insert_site((x, y)).map_err(JsError::from)
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, edges: bool) {
        self.inner.set_mode(if edges { DisplayMode::Edges } else { DisplayMode::Cells });
    }

    pub fn clear(&mut self) { self.inner.clear(); }

    #[wasm_bindgen(getter)]
    pub fn sites(&self) -> Vec<f64> { flatten(self.inner.sites().iter()) }

    /// Voronoi edges as `[x1, y1, x2, y2, ...]`; empty in cell mode.
    #[wasm_bindgen(getter)]
    pub fn segments(&self) -> Vec<f64> {
        self.inner
            .edges()
            .unwrap_or_default()
            .iter()
            .flat_map(|e| [e.segment.p1.x, e.segment.p1.y, e.segment.p2.x, e.segment.p2.y])
            .collect()
    }

    /// Delaunay triangles as `[x1, y1, x2, y2, x3, y3, ...]`, super-triangle included.
    #[wasm_bindgen(getter)]
    pub fn triangles(&self) -> Vec<f64> { self.inner.triangulation().vertex_coords() }

    #[wasm_bindgen(getter, js_name = cellCount)]
    pub fn cell_count(&self) -> usize { self.inner.cells().map_or(0, |c| c.len()) }

    #[wasm_bindgen(js_name = cellVertices)]
    pub fn cell_vertices(&self, index: usize) -> Vec<f64> {
        self.inner
            .cells()
            .and_then(|cells| cells.get(index))
            .map(|cell| flatten(cell.vertices.iter()))
            .unwrap_or_default()
    }

    /// `[r, g, b]` of the cell at `index`.
    #[wasm_bindgen(js_name = cellColor)]
    pub fn cell_color(&self, index: usize) -> Vec<u8> {
        self.inner
            .cells()
            .and_then(|cells| cells.get(index))
            .map(|cell| vec![cell.color.r, cell.color.g, cell.color.b])
            .unwrap_or_default()
    }
}

fn flatten<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<f64> {
    points.flat_map(|p| [p.x, p.y]).collect()
}
