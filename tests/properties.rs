use rand::prelude::*;
use rand::rngs::StdRng;
use voroplane::{
    Config, ColorPolicy, DisplayMode, Point, SuperTriangle, Triangulation, TriangulationContext, dual,
};

fn random_sites(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..720.0), rng.gen_range(0.0..720.0)))
        .collect()
}

fn triangulate(sites: &[Point]) -> Triangulation {
    let mut tri = Triangulation::new(SuperTriangle::default());
    tri.rebuild(sites);
    tri
}

#[test]
fn test_empty_circumcircles() {
    for seed in 0..5 {
        let sites = random_sites(40, seed);
        let tri = triangulate(&sites);

        for t in tri.triangles() {
            let circle = t.circumcircle().expect("random sites give no degenerate triangles");
            for s in sites.iter().filter(|s| !t.has_vertex(s)) {
                let d = s.distance_sq(&circle.center);
                assert!(
                    d >= circle.radius_sq * (1.0 - 1e-9),
                    "Site {:?} lies inside the circumcircle of {:?}",
                    s,
                    t
                );
            }
        }
    }
}

#[test]
fn test_triangle_count_and_edge_sharing() {
    let sites = random_sites(60, 99);
    let tri = triangulate(&sites);
    assert_eq!(tri.len(), 2 * sites.len() + 1);

    let st = tri.super_triangle();
    for t in tri.triangles() {
        for e in t.edges() {
            let same = tri.triangles().iter().filter(|o| o.edges().contains(&e)).count();
            let reverse = tri
                .triangles()
                .iter()
                .filter(|o| o.edges().iter().any(|oe| oe.is_reverse_of(&e)))
                .count();
            assert_eq!(same, 1, "Edge {:?} appears twice with the same orientation", e);
            if st.is_vertex(&e.p1) && st.is_vertex(&e.p2) {
                assert_eq!(reverse, 0);
            } else {
                assert_eq!(reverse, 1, "Internal edge {:?} must be shared by two triangles", e);
            }
        }
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let sites = random_sites(30, 5);
    let mut tri = Triangulation::new(SuperTriangle::default());
    tri.rebuild(&sites);
    let first = tri.triangles().to_vec();
    tri.rebuild(&sites);
    assert_eq!(first.len(), tri.len());
    for t in &first {
        assert!(tri.triangles().contains(t));
    }
}

#[test]
fn test_insertion_order_is_irrelevant() {
    let sites = random_sites(25, 17);
    let mut shuffled = sites.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(4));

    let a = triangulate(&sites);
    let b = triangulate(&shuffled);
    assert_eq!(a.triangles(), b.triangles());
}

#[test]
fn test_edges_are_equidistant() {
    let sites = random_sites(40, 23);
    let tri = triangulate(&sites);
    let edges = dual::voronoi_edges(&tri);
    assert!(!edges.is_empty());

    for e in &edges {
        for end in [e.segment.p1, e.segment.p2] {
            let da = end.distance_sq(&e.dual.p1).sqrt();
            let db = end.distance_sq(&e.dual.p2).sqrt();
            assert!(
                (da - db).abs() <= 1e-4 * da.max(1.0),
                "Endpoint {:?} is not equidistant from {:?}",
                end,
                e.dual
            );
        }
    }
}

#[test]
fn test_cell_vertices_are_incident_circumcenters() {
    let sites = random_sites(40, 31);
    let mut ctx = TriangulationContext::new(Config::default().with_color_policy(ColorPolicy::Reshuffle { seed: 2 }));
    for s in &sites {
        ctx.insert_site(*s).unwrap();
    }

    let tri = ctx.triangulation();
    let cells = ctx.cells().expect("cell mode");
    assert_eq!(cells.len(), sites.len());

    for cell in cells {
        let incident: Vec<Point> = tri
            .triangles()
            .iter()
            .filter(|t| t.has_vertex(&cell.site))
            .filter_map(|t| t.circumcircle())
            .map(|c| c.center)
            .collect();
        assert_eq!(cell.vertices.len(), incident.len());
        for v in &cell.vertices {
            assert!(incident.contains(v), "Vertex {:?} is not a circumcenter around {:?}", v, cell.site);
        }
    }
}

#[test]
fn test_bounded_cells_are_convex() {
    let sites = random_sites(50, 77);
    let mut ctx = TriangulationContext::new(Config::default().with_color_policy(ColorPolicy::Reshuffle { seed: 2 }));
    for s in &sites {
        ctx.insert_site(*s).unwrap();
    }

    let cells = ctx.cells().unwrap();
    let bounded: Vec<_> = cells.iter().filter(|c| c.bounded).collect();
    assert!(!bounded.is_empty());

    for cell in bounded {
        assert!(cell.area() > 0.0);
        let n = cell.vertices.len();
        for i in 0..n {
            let a = cell.vertices[i];
            let b = cell.vertices[(i + 1) % n];
            let c = cell.vertices[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            assert!(cross >= -1e-6, "Cell of {:?} is not ordered convexly", cell.site);
        }
    }
}

#[test]
fn test_colors_reshuffle_on_rebuild() {
    let sites = random_sites(10, 8);
    let config = Config::default().with_color_policy(ColorPolicy::Reshuffle { seed: 1234 });
    let mut a = TriangulationContext::new(config);
    let mut b = TriangulationContext::new(config);
    for s in &sites {
        a.insert_site(*s).unwrap();
        b.insert_site(*s).unwrap();
    }

    let colors = |ctx: &TriangulationContext| -> Vec<_> { ctx.cells().unwrap().iter().map(|c| c.color).collect() };
    assert_eq!(colors(&a), colors(&b), "Same seed must give the same colors");

    let before = colors(&a);
    a.set_mode(DisplayMode::Cells);
    assert_ne!(before, colors(&a), "A rebuild draws fresh colors");
}

#[test]
fn test_colors_follow_sites() {
    let sites = random_sites(10, 8);
    let mut ctx = TriangulationContext::new(Config::default().with_color_policy(ColorPolicy::PerSite { seed: 1 }));
    for s in &sites {
        ctx.insert_site(*s).unwrap();
    }

    let before: Vec<_> = ctx.cells().unwrap().iter().map(|c| c.color).collect();
    ctx.set_mode(DisplayMode::Edges);
    ctx.set_mode(DisplayMode::Cells);
    let after: Vec<_> = ctx.cells().unwrap().iter().map(|c| c.color).collect();
    assert_eq!(before, after);
}
