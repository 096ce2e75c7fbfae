use plotters::prelude::*;
use rand::Rng;
use voroplane::{ColorPolicy, Config, DisplayMode, TriangulationContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("2d_voronoi_cells.svg", DisplayMode::Cells)?;
    run_example("2d_voronoi_edges.svg", DisplayMode::Edges)?;
    Ok(())
}

fn run_example(filename: &str, mode: DisplayMode) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (720, 720)).into_drawing_area();
    root.fill(&BLACK)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..720.0, 0.0..720.0)?;

    let config = Config::default()
        .with_mode(mode)
        .with_color_policy(ColorPolicy::Reshuffle { seed: rand::thread_rng().r#gen() });
    let mut ctx = TriangulationContext::new(config);

    let mut rng = rand::thread_rng();
    for _ in 0..60 {
        ctx.insert_site((rng.gen_range(0..720), rng.gen_range(0..720)))?;
    }

    // Draw cells
    for cell in ctx.cells().unwrap_or_default() {
        if cell.vertices.len() < 3 {
            continue;
        }
        let poly: Vec<(f64, f64)> = cell.vertices.iter().map(|p| (p.x, p.y)).collect();
        let color = RGBColor(cell.color.r, cell.color.g, cell.color.b);
        chart.draw_series(std::iter::once(Polygon::new(poly, color.filled())))?;
    }

    // Draw the Delaunay mesh
    let green = RGBColor(0, 240, 160);
    for t in ctx.triangulation().triangles() {
        let [a, b, c] = t.vertices();
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(a.x, a.y), (b.x, b.y), (c.x, c.y), (a.x, a.y)],
            green,
        )))?;
    }

    // Draw sites
    let points: Vec<(f64, f64)> = ctx.sites().iter().map(|p| (p.x, p.y)).collect();
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, RGBColor(240, 240, 23).filled())))?;

    // Draw edges
    let yellow = RGBColor(240, 240, 20);
    for edge in ctx.edges().unwrap_or_default() {
        let s = edge.segment;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(s.p1.x, s.p1.y), (s.p2.x, s.p2.y)],
            yellow,
        )))?;
    }

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
