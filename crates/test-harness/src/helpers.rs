//! Helper functions: error types, mesh fixtures, color buffer access.

use knit_tessellation::{tessellate_cone, tessellate_sphere, TriangleMesh};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("{msg_type}: unexpected response {response}")]
    UnexpectedResponse { msg_type: String, response: String },

    #[error("no rows computed")]
    NoRows,

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

// ── Mesh Fixtures ───────────────────────────────────────────────────────────

/// Non-indexed buffer of a UV sphere with `parallels` latitude bands.
pub fn sphere_positions(radius: f32, meridians: usize, parallels: usize) -> Vec<f32> {
    tessellate_sphere(radius, meridians, parallels).to_non_indexed()
}

/// Non-indexed buffer of a single ring of faces around an apex.
pub fn cone_positions(base_y: f32, apex_y: f32, radius: f32, segments: usize) -> Vec<f32> {
    tessellate_cone(base_y, apex_y, radius, segments).to_non_indexed()
}

/// Stacked cones: ring `k` has its base at `y = k` and apexes at `y = k - 1`.
///
/// Every face points down, so the whole stack knits upward ring by ring.
pub fn stacked_rings(ring_count: usize, segments: usize, radius: f32) -> Vec<f32> {
    let mut mesh = TriangleMesh::new();
    for k in 0..ring_count {
        let base_y = k as f32;
        mesh.merge(&tessellate_cone(base_y, base_y - 1.0, radius, segments));
    }
    mesh.to_non_indexed()
}

// ── Color Buffer Access ─────────────────────────────────────────────────────

/// The three vertex colors of a face in a per-vertex RGB buffer.
pub fn face_colors(colors: &[f32], face_index: usize) -> Option<[[f32; 3]; 3]> {
    let start = face_index * 9;
    let face = colors.get(start..start + 9)?;
    Some(std::array::from_fn(|v| {
        [face[v * 3], face[v * 3 + 1], face[v * 3 + 2]]
    }))
}

/// Number of faces described by a non-indexed triangle buffer.
pub fn face_count(positions: &[f32]) -> usize {
    positions.len() / 9
}
