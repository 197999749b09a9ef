//! End-to-end row partitioning of one mesh.
//!
//! ```text
//! positions ─► unpack ─► classify ─► build rows ─► order ─┬─► schema
//!                                                        └─► colors
//! ```
//!
//! Every fallible stage runs before the color buffer is allocated, so a run
//! either yields a complete result or an error and nothing else.

use knit_types::{PatternWarning, RowSummary, StitchSchema};
use rand::{Rng, RngCore, SeedableRng};
use tracing::{info, instrument, warn};

use crate::color::{RowColors, assign_row_colors};
use crate::config::PatternConfig;
use crate::error::RowError;
use crate::geometry::{MeshFaces, unpack_faces};
use crate::rows::{Classification, ElevationExtremes, RowSet, build_rows, classify_faces, order_rows};
use crate::schema::compute_schema;

/// Everything computed for one mesh.
#[derive(Debug, Clone)]
pub struct RowPattern {
    pub config: PatternConfig,
    pub mesh: MeshFaces,
    pub classification: Classification,
    pub rows: RowSet,
    pub schema: StitchSchema,
    pub colors: RowColors,
    pub warnings: Vec<PatternWarning>,
}

impl RowPattern {
    pub fn extremes(&self) -> Option<ElevationExtremes> {
        self.classification.extremes
    }

    /// Display-facing description of each row.
    pub fn summaries(&self) -> Vec<RowSummary> {
        self.rows
            .iter()
            .zip(&self.colors.palette)
            .enumerate()
            .map(|(index, (row, color))| RowSummary {
                index,
                base_y: row.key.base_y,
                min_y: row.key.min_y,
                max_y: row.key.max_y,
                face_count: row.len(),
                is_opening: row.is_opening,
                is_closing: row.is_closing,
                color: *color,
            })
            .collect()
    }
}

/// Runs the partitioning stages with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct RowPipeline {
    config: PatternConfig,
}

impl RowPipeline {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Run with the configured seed, or with the thread-local generator when
    /// no seed is set.
    pub fn run(&self, positions: &[f32]) -> Result<RowPattern, RowError> {
        let mut rng: Box<dyn RngCore> = match self.config.seed {
            Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        self.run_with_rng(positions, &mut *rng)
    }

    /// Run with an injected random source for row colors.
    #[instrument(skip_all, fields(pattern = %self.config.pattern, len = positions.len()))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        positions: &[f32],
        rng: &mut R,
    ) -> Result<RowPattern, RowError> {
        let mesh = unpack_faces(positions, self.config.vertices_per_face)?;
        let classification = classify_faces(&mesh, self.config.pattern)?;

        let mut rows = build_rows(&classification);
        order_rows(&mut rows, &classification);

        let mut warnings = Vec::new();
        if rows.is_empty() {
            warn!(faces = mesh.face_count(), "no face matched the pattern direction");
            warnings.push(PatternWarning::EmptyRowSet {
                face_count: mesh.face_count(),
            });
        }

        let schema = compute_schema(&rows, &classification.profiles, &self.config)?;
        for row_index in schema.undefined_shifts() {
            warn!(row_index, "shift into row follows a zero-length row");
            warnings.push(PatternWarning::UndefinedShift { row_index });
        }
        let colors = assign_row_colors(&rows, &mesh, rng);

        info!(
            faces = mesh.face_count(),
            rows = rows.len(),
            opening = ?rows.opening_index(),
            closing = ?rows.closing_index(),
            "row pattern complete"
        );

        Ok(RowPattern {
            config: self.config.clone(),
            mesh,
            classification,
            rows,
            schema,
            colors,
            warnings,
        })
    }
}

/// Partition a non-indexed triangle buffer into rows with the given config.
pub fn process_mesh(positions: &[f32], config: &PatternConfig) -> Result<RowPattern, RowError> {
    RowPipeline::new(config.clone()).run(positions)
}
