use crate::bounds::SuperTriangle;
use crate::color::{ColorPolicy, Palette};
use crate::dual::{self, VoronoiEdge};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::polygon::Cell;
use crate::triangulation::Triangulation;

/// Which dual structure is extracted after a rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    Edges,
    #[default]
    Cells,
}

/// Input accepted by a [`TriangulationContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    InsertSite(Point),
    SetMode(DisplayMode),
    Clear,
}

/// The published result of the last rebuild.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagram {
    Edges(Vec<VoronoiEdge>),
    Cells(Vec<Cell>),
}

impl Diagram {
    fn empty(mode: DisplayMode) -> Diagram {
        match mode {
            DisplayMode::Edges => Diagram::Edges(Vec::new()),
            DisplayMode::Cells => Diagram::Cells(Vec::new()),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        match self {
            Diagram::Edges(_) => DisplayMode::Edges,
            Diagram::Cells(_) => DisplayMode::Cells,
        }
    }
}

/// Settings of a [`TriangulationContext`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Config {
    pub super_triangle: SuperTriangle,
    pub color_policy: ColorPolicy,
    pub mode: DisplayMode,
}

impl Config {
    pub fn with_super_triangle(mut self, super_triangle: SuperTriangle) -> Self {
        self.super_triangle = super_triangle;
        self
    }

    pub fn with_color_policy(mut self, color_policy: ColorPolicy) -> Self {
        self.color_policy = color_policy;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Owns the sites, the triangulation and the derived diagram.
///
/// Every accepted site insertion or mode switch rebuilds everything from scratch. The new
/// triangulation and diagram are computed aside and replace the published ones together, so a
/// reader never observes a half-built state.
#[derive(Clone, Debug)]
pub struct TriangulationContext {
    sites: Vec<Point>,
    mode: DisplayMode,
    triangulation: Triangulation,
    diagram: Diagram,
    palette: Palette,
}

impl Default for TriangulationContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TriangulationContext {
    pub fn new(config: Config) -> Self {
        Self {
            sites: Vec::new(),
            mode: config.mode,
            triangulation: Triangulation::new(config.super_triangle),
            diagram: Diagram::empty(config.mode),
            palette: Palette::new(config.color_policy),
        }
    }

    /// Sites in insertion order.
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Voronoi edges, when the context is in edge mode.
    pub fn edges(&self) -> Option<&[VoronoiEdge]> {
        match &self.diagram {
            Diagram::Edges(edges) => Some(edges),
            Diagram::Cells(_) => None,
        }
    }

    /// Voronoi cells in site order, when the context is in cell mode.
    pub fn cells(&self) -> Option<&[Cell]> {
        match &self.diagram {
            Diagram::Cells(cells) => Some(cells),
            Diagram::Edges(_) => None,
        }
    }

    pub fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::InsertSite(site) => self.insert_site(site)?,
            Event::SetMode(mode) => self.set_mode(mode),
            Event::Clear => self.clear(),
        }
        Ok(())
    }

    /// Appends a site and rebuilds. Non-finite coordinates are rejected without touching state.
    pub fn insert_site(&mut self, site: impl Into<Point>) -> Result<()> {
        let site = site.into();
        if !site.is_finite() {
            return Err(Error::NonFiniteSite { x: site.x, y: site.y });
        }
        self.sites.push(site);
        self.rebuild();
        Ok(())
    }

    /// Switches the display mode and rebuilds, even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.rebuild();
    }

    /// Forgets all sites and publishes an empty diagram. No rebuild runs.
    pub fn clear(&mut self) {
        self.sites.clear();
        self.triangulation = Triangulation::new(*self.triangulation.super_triangle());
        self.diagram = Diagram::empty(self.mode);
        log::debug!("cleared all sites");
    }

    /// Recomputes triangulation and diagram from the current sites and mode.
    pub fn rebuild(&mut self) {
        let mut triangulation = Triangulation::new(*self.triangulation.super_triangle());
        triangulation.rebuild(&self.sites);

        let diagram = match self.mode {
            DisplayMode::Edges => Diagram::Edges(dual::voronoi_edges(&triangulation)),
            DisplayMode::Cells => {
                let raw = dual::raw_cells(&self.sites, &triangulation);
                let cells = raw
                    .into_iter()
                    .map(|cell| {
                        let color = self.palette.next_color(&cell.site);
                        Cell::new(cell, color)
                    })
                    .collect();
                Diagram::Cells(cells)
            }
        };

        self.triangulation = triangulation;
        self.diagram = diagram;
    }
}
