//! Row partitioning of knit-object meshes.
//!
//! Splits a non-indexed triangle mesh into horizontal rows of faces that share
//! a base-edge elevation, orders the rows and their faces into knitting order,
//! derives a stitch-shift schema and paints each row with its own color.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod rows;
pub mod schema;

pub use color::{RowColors, assign_row_colors};
pub use config::PatternConfig;
pub use error::RowError;
pub use geometry::{Face, FaceId, FaceProfile, MeshFaces, unpack_faces};
pub use pipeline::{RowPattern, RowPipeline, process_mesh};
pub use rows::{Classification, Row, RowSet, build_rows, classify_faces, order_rows};
pub use schema::compute_schema;

pub use knit_types::{Pattern, PatternWarning, RowSummary, ShiftPolicy, StitchSchema};
