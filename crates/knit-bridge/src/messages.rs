use serde::{Deserialize, Serialize};

use knit_kernel::PatternConfig;
use knit_types::{Pattern, PatternWarning, RowSummary, ShiftPolicy, StitchSchema};
use pattern_format::PatternDocument;

fn default_vertices_per_face() -> usize {
    knit_kernel::config::TRIANGLE_VERTICES
}

/// Messages from the UI to the engine.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Mesh --
    /// Replace the current mesh with a non-indexed position buffer.
    LoadMesh {
        positions: Vec<f32>,
        #[serde(default = "default_vertices_per_face")]
        vertices_per_face: usize,
    },

    // -- Configuration --
    SetPattern {
        pattern: Pattern,
    },
    /// Fix the row color seed, or clear it for fresh colors on every run.
    SetSeed {
        seed: Option<u64>,
    },
    SetShiftPolicy {
        policy: ShiftPolicy,
    },

    // -- Computation --
    /// Partition the loaded mesh into rows with the current configuration.
    ComputeRows,

    // -- File operations --
    SavePattern {
        name: String,
    },
    LoadPattern {
        data: String,
    },

    /// Drop the mesh, the last result and any configuration changes.
    Reset,
}

/// Messages from the engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// A mesh was accepted.
    MeshLoaded {
        vertex_count: usize,
        face_count: usize,
    },

    /// The run configuration changed. Any previous result is discarded.
    ConfigChanged { config: PatternConfig },

    /// Rows were computed for the loaded mesh.
    RowsComputed {
        /// Per-vertex RGB colors, aligned with the loaded position buffer.
        colors: Vec<f32>,
        rows: Vec<RowSummary>,
        schema: StitchSchema,
        warnings: Vec<PatternWarning>,
    },

    /// Save pattern is ready.
    PatternSaved { json_data: String },

    /// Pattern loaded successfully.
    PatternLoaded { document: PatternDocument },

    /// An error occurred in the engine.
    Error { message: String },
}
