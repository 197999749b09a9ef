use tracing::{debug, instrument};

use super::face::{Face, MeshFaces, Vertex};
use super::point::Point3d;
use crate::config::{AXES_COUNT, TRIANGLE_VERTICES};
use crate::error::RowError;

/// Split a flat, non-indexed position buffer into triangular faces.
///
/// Every `vertices_per_face * 3` floats form one face. Each vertex remembers
/// the buffer offset of its x coordinate so per-vertex attributes can later be
/// written back at the same position.
#[instrument(skip(positions), fields(len = positions.len()))]
pub fn unpack_faces(positions: &[f32], vertices_per_face: usize) -> Result<MeshFaces, RowError> {
    if vertices_per_face != TRIANGLE_VERTICES {
        return Err(RowError::UnsupportedArity { vertices_per_face });
    }

    let stride = vertices_per_face * AXES_COUNT;
    if positions.len() % stride != 0 {
        return Err(RowError::InputLength {
            len: positions.len(),
            stride,
        });
    }

    let face_count = positions.len() / stride;
    let mut mesh = MeshFaces::with_capacity(positions.len() / AXES_COUNT, face_count);

    for (index, coords) in positions.chunks_exact(stride).enumerate() {
        let face_offset = index * stride;
        let vertices = std::array::from_fn(|v| {
            let o = v * AXES_COUNT;
            Vertex {
                position: Point3d::from_f32([coords[o], coords[o + 1], coords[o + 2]]),
                offset: face_offset + o,
            }
        });
        mesh.insert(Face { index, vertices });
    }

    debug!(faces = face_count, vertices = mesh.vertex_count(), "unpacked position buffer");
    Ok(mesh)
}
