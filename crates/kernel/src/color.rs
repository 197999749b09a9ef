//! Per-vertex row colors.

use rand::Rng;
use tracing::{debug, instrument};

use crate::config::COLOR_CHANNELS;
use crate::geometry::MeshFaces;
use crate::rows::RowSet;

/// Default color of vertices not covered by any row.
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Color buffer for a non-indexed mesh plus the color picked for each row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowColors {
    /// RGB triples, one per vertex, in position-buffer order.
    pub buffer: Vec<f32>,
    /// Color of each row, in row order.
    pub palette: Vec<[f32; 3]>,
}

impl RowColors {
    /// Color of the vertex whose x coordinate sits at `offset`.
    pub fn color_at(&self, offset: usize) -> [f32; 3] {
        [self.buffer[offset], self.buffer[offset + 1], self.buffer[offset + 2]]
    }
}

/// Draw one uniformly random RGB color (each channel in [0, 1)).
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    let r = rng.random::<f32>();
    let g = rng.random::<f32>();
    let b = rng.random::<f32>();
    [r, g, b]
}

/// Paint every vertex of every face of a row with that row's random color.
///
/// The buffer starts white. Vertices are per triangle corner, so a vertex
/// belongs to exactly one face and is written at most once.
#[instrument(skip_all, fields(rows = rows.len(), vertices = mesh.vertex_count()))]
pub fn assign_row_colors<R: Rng + ?Sized>(rows: &RowSet, mesh: &MeshFaces, rng: &mut R) -> RowColors {
    let mut buffer = vec![1.0f32; mesh.vertex_count() * COLOR_CHANNELS];
    let mut palette = Vec::with_capacity(rows.len());

    for row in rows {
        let color = random_color(rng);
        for &id in &row.faces {
            for offset in mesh.faces[id].offsets() {
                buffer[offset..offset + COLOR_CHANNELS].copy_from_slice(&color);
            }
        }
        palette.push(color);
    }

    debug!(colored_rows = palette.len(), "assigned row colors");
    RowColors { buffer, palette }
}
