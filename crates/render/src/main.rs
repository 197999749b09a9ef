//! Generate SVG previews of row partitions: every face filled with its row color.

use std::error::Error;
use std::fs;

use knit_kernel::{Pattern, PatternConfig, RowPattern, RowPipeline};
use knit_tessellation::{TriangleMesh, tessellate_cone, tessellate_sphere};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

const OUT_DIR: &str = "docs/renders";
const SEED: u64 = 42;

/// Isometric-style projection with Y up. Returns (screen x, screen y, depth).
fn project(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let yaw: f64 = 0.8;
    let pitch: f64 = 0.5;
    let rx = x * yaw.cos() - z * yaw.sin();
    let rz = x * yaw.sin() + z * yaw.cos();
    let sy = y * pitch.cos() - rz * pitch.sin();
    let depth = y * pitch.sin() + rz * pitch.cos();
    (rx, -sy, depth)
}

fn rows_to_svg(positions: &[f32], result: &RowPattern, width: f64, height: f64, title: &str) -> String {
    let colors = &result.colors.buffer;
    let num_verts = positions.len() / 3;
    if num_verts == 0 {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"14\" fill=\"#ccc\">{title}</text>\
             </svg>"
        );
    }

    let projected: Vec<(f64, f64, f64)> = positions
        .chunks_exact(3)
        .map(|p| project(p[0] as f64, p[1] as f64, p[2] as f64))
        .collect();

    let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
    let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
    for &(px, py, _) in &projected {
        min_x = min_x.min(px);
        max_x = max_x.max(px);
        min_y = min_y.min(py);
        max_y = max_y.max(py);
    }

    let padding = 40.0;
    let avail_w = width - 2.0 * padding;
    let avail_h = height - 2.0 * padding - 25.0;
    let data_w = (max_x - min_x).max(0.001);
    let data_h = (max_y - min_y).max(0.001);
    let scale = (avail_w / data_w).min(avail_h / data_h);
    let offset_x = padding + (avail_w - data_w * scale) / 2.0;
    let offset_y = padding + 25.0 + (avail_h - data_h * scale) / 2.0;

    let tx = |px: f64| -> f64 { (px - min_x) * scale + offset_x };
    let ty = |py: f64| -> f64 { (py - min_y) * scale + offset_y };

    // Faces are consecutive vertex triples; paint far faces first.
    let mut faces: Vec<(usize, f64)> = (0..num_verts / 3)
        .map(|f| {
            let depth = (0..3).map(|v| projected[f * 3 + v].2).sum::<f64>() / 3.0;
            (f, depth)
        })
        .collect();
    faces.sort_by(|a, b| a.1.total_cmp(&b.1));

    let stroke_width = if faces.len() > 200 { 0.2 } else { 0.5 };

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#1a1a2e\">\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#8892b0\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );

    for &(f, _) in &faces {
        let v = f * 3;
        let (x0, y0) = (tx(projected[v].0), ty(projected[v].1));
        let (x1, y1) = (tx(projected[v + 1].0), ty(projected[v + 1].1));
        let (x2, y2) = (tx(projected[v + 2].0), ty(projected[v + 2].1));

        let c = &colors[v * 3..v * 3 + 3];
        let (r, g, b) = ((255.0 * c[0]) as u8, (255.0 * c[1]) as u8, (255.0 * c[2]) as u8);

        svg.push_str(&format!(
            "  <polygon points=\"{x0:.1},{y0:.1} {x1:.1},{y1:.1} {x2:.1},{y2:.1}\" \
             fill=\"rgb({r},{g},{b})\" stroke=\"#2a2a4a\" stroke-width=\"{stroke_width}\"/>\n"
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\" fill=\"#5a6080\" \
         text-anchor=\"middle\">{} rows, {} faces, {}</text>\n",
        width / 2.0,
        height - 8.0,
        result.rows.len(),
        faces.len(),
        result.config.pattern,
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Partition a mesh, write its preview and print the schema.
fn render(name: &str, title: &str, mesh: &TriangleMesh, pattern: Pattern) -> Result<(), Box<dyn Error>> {
    let positions = mesh.to_non_indexed();
    let config = PatternConfig::default().with_pattern(pattern).with_seed(Some(SEED));
    let result = RowPipeline::new(config).run(&positions)?;

    for warning in &result.warnings {
        warn!(name, ?warning, "pattern warning");
    }

    let svg = rows_to_svg(&positions, &result, 400.0, 300.0, title);
    let path = format!("{OUT_DIR}/{name}.svg");
    fs::write(&path, svg)?;

    println!(
        "  {name}: {rows} rows, {stitches} stitches, cast on {cast_on:?}, shifts {shifts:?}",
        rows = result.rows.len(),
        stitches = result.schema.total_stitches(),
        cast_on = result.schema.cast_on_length,
        shifts = result.schema.shifts,
    );
    info!(path, "wrote preview");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    fs::create_dir_all(OUT_DIR)?;

    println!("=== Spheres ===");
    let sphere = tessellate_sphere(6.0, 32, 16);
    render("sphere_increment", "Sphere (r=6, 32x16), increment", &sphere, Pattern::Increment)?;
    render("sphere_decrement", "Sphere (r=6, 32x16), decrement", &sphere, Pattern::Decrement)?;

    println!("=== Stacked Rings ===");
    let mut stack = TriangleMesh::new();
    for k in 0..6 {
        let base_y = k as f32;
        let radius = 2.0 + 0.5 * k as f32;
        stack.merge(&tessellate_cone(base_y, base_y - 1.0, radius, 24));
    }
    render("flared_stack", "Flared stack (6 rings), increment", &stack, Pattern::Increment)?;

    Ok(())
}
