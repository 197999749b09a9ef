//! Ring-aligned mesh fixtures.
//!
//! Produces indexed triangle meshes whose vertices lie on horizontal rings, the
//! shape the row partitioner expects from a modeled knit object, and flattens
//! them into the non-indexed position buffers the partitioner consumes.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: [f32; 3]) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&pos);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        for &idx in &other.indices {
            self.indices.push(idx + offset);
        }
    }

    /// Expand the mesh so that every triangle corner owns its own vertex.
    ///
    /// The result holds `triangle_count() * 9` floats, three vertices per
    /// triangle in index order.
    pub fn to_non_indexed(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let start = idx as usize * 3;
            out.extend_from_slice(&self.positions[start..start + 3]);
        }
        out
    }
}

/// Tessellate a UV sphere centered at the origin with Y as the vertical axis.
///
/// `parallels` is the number of latitude bands (at least 2): the mesh has
/// `parallels - 1` vertex rings, a triangle fan at each pole and two triangles
/// per quad in the bands between. Every triangle has exactly two vertices on
/// one ring, so each ring contributes one row per pattern direction.
pub fn tessellate_sphere(radius: f32, meridians: usize, parallels: usize) -> TriangleMesh {
    let meridians = meridians.max(3);
    let parallels = parallels.max(2);
    let mut mesh = TriangleMesh::new();

    let north = mesh.add_vertex([0.0, radius, 0.0]);
    let south = mesh.add_vertex([0.0, -radius, 0.0]);

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(parallels - 1);
    for j in 1..parallels {
        let phi = std::f64::consts::PI * (j as f64 / parallels as f64);
        // Computed once per ring so every vertex on it shares the exact elevation.
        let y = (radius as f64 * phi.cos()) as f32;
        let ring_radius = radius as f64 * phi.sin();
        let ring = (0..meridians)
            .map(|i| {
                let theta = std::f64::consts::TAU * (i as f64 / meridians as f64);
                let x = (ring_radius * theta.cos()) as f32;
                let z = (ring_radius * theta.sin()) as f32;
                mesh.add_vertex([x, y, z])
            })
            .collect();
        rings.push(ring);
    }

    // North cap: base on the top ring, apex at the pole.
    let top = &rings[0];
    for i in 0..meridians {
        let next = (i + 1) % meridians;
        mesh.add_triangle(top[i], top[next], north);
    }

    // Bands: one triangle based on the upper ring, one based on the lower ring.
    for j in 0..rings.len() - 1 {
        let upper = &rings[j];
        let lower = &rings[j + 1];
        for i in 0..meridians {
            let next = (i + 1) % meridians;
            mesh.add_triangle(upper[i], lower[i], upper[next]);
            mesh.add_triangle(upper[next], lower[i], lower[next]);
        }
    }

    // South cap: base on the bottom ring, apex at the pole.
    let bottom = &rings[rings.len() - 1];
    for i in 0..meridians {
        let next = (i + 1) % meridians;
        mesh.add_triangle(bottom[i], bottom[next], south);
    }

    debug!(
        radius,
        meridians,
        parallels,
        triangles = mesh.triangle_count(),
        "tessellated sphere"
    );
    mesh
}

/// Tessellate an open cone: one ring of `segments` triangles whose base edges
/// lie on a circle at `base_y` and whose apexes meet at `(0, apex_y, 0)`.
pub fn tessellate_cone(base_y: f32, apex_y: f32, radius: f32, segments: usize) -> TriangleMesh {
    let segments = segments.max(3);
    let mut mesh = TriangleMesh::new();
    let apex = mesh.add_vertex([0.0, apex_y, 0.0]);
    let ring: Vec<u32> = (0..segments)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64 / segments as f64);
            let x = (radius as f64 * theta.cos()) as f32;
            let z = (radius as f64 * theta.sin()) as f32;
            mesh.add_vertex([x, base_y, z])
        })
        .collect();

    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(ring[i], ring[next], apex);
    }
    mesh
}
