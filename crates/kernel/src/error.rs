use thiserror::Error;

/// Fatal failures of a row-partitioning run.
///
/// Any of these aborts the whole mesh: no rows, schema or color buffer are
/// produced for the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("coordinate buffer length {len} is not a multiple of the face stride {stride}")]
    InputLength { len: usize, stride: usize },

    #[error("unsupported face arity {vertices_per_face}: only triangles can be partitioned")]
    UnsupportedArity { vertices_per_face: usize },

    #[error("face {face_index} has no repeated elevation {elevations:?}; base edge is undefined")]
    MalformedGeometry {
        face_index: usize,
        elevations: [f64; 3],
    },

    #[error("row {row_index} has {} distinct base lengths; shift ratio is ambiguous", lengths.len())]
    AmbiguousRowLength { row_index: usize, lengths: Vec<f64> },
}
