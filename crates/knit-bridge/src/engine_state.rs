use knit_kernel::{PatternConfig, RowError, RowPattern, RowPipeline, unpack_faces};
use knit_types::{Pattern, ShiftPolicy};
use pattern_format::{LoadError, PatternDocument, PatternMetadata, SaveError};

/// The engine state wrapper for the bridge.
///
/// Holds the loaded mesh, the run configuration and the most recent result.
#[derive(Debug, Default)]
pub struct EngineState {
    pub config: PatternConfig,
    /// Non-indexed position buffer of the loaded mesh.
    pub positions: Option<Vec<f32>>,
    /// Result of the last `compute`, cleared whenever its inputs change.
    pub result: Option<RowPattern>,
    /// Last pattern document read from a file.
    pub loaded: Option<PatternDocument>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a position buffer.
    ///
    /// Returns the vertex and face counts of the accepted mesh. A rejected
    /// buffer leaves the previous mesh in place.
    pub fn load_mesh(
        &mut self,
        positions: Vec<f32>,
        vertices_per_face: usize,
    ) -> Result<(usize, usize), BridgeError> {
        let mesh = unpack_faces(&positions, vertices_per_face)?;
        self.config.vertices_per_face = vertices_per_face;
        self.positions = Some(positions);
        self.result = None;
        Ok((mesh.vertex_count(), mesh.face_count()))
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.config.pattern = pattern;
        self.result = None;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
        self.result = None;
    }

    pub fn set_shift_policy(&mut self, policy: ShiftPolicy) {
        self.config.shift_policy = policy;
        self.result = None;
    }

    /// Partition the loaded mesh with the current configuration.
    pub fn compute(&mut self) -> Result<&RowPattern, BridgeError> {
        let positions = self.positions.as_ref().ok_or(BridgeError::NoMesh)?;
        let result = RowPipeline::new(self.config.clone()).run(positions)?;
        Ok(self.result.insert(result))
    }

    /// Build a pattern document from the last result.
    pub fn document(&self, name: &str) -> Result<PatternDocument, BridgeError> {
        let result = self.result.as_ref().ok_or(BridgeError::NoResult)?;
        Ok(PatternDocument::new(
            PatternMetadata::new(name),
            result.config.pattern,
            result.summaries(),
            result.schema.clone(),
        ))
    }

    /// Per-vertex colors of the last result, empty if nothing was computed.
    pub fn row_colors(&self) -> &[f32] {
        self.result
            .as_ref()
            .map(|r| r.colors.buffer.as_slice())
            .unwrap_or_default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("no mesh loaded")]
    NoMesh,

    #[error("no rows computed yet")]
    NoResult,

    #[error("kernel error: {0}")]
    Kernel(#[from] RowError),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("save error: {0}")]
    Save(#[from] SaveError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
