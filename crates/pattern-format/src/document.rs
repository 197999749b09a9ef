use knit_types::{Pattern, RowSummary, StitchSchema};
use serde::{Deserialize, Serialize};

use crate::metadata::PatternMetadata;

/// A computed knitting pattern: direction, rows in knitting order and the
/// stitch schema derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDocument {
    pub metadata: PatternMetadata,
    pub pattern: Pattern,
    pub rows: Vec<RowSummary>,
    pub schema: StitchSchema,
}

impl PatternDocument {
    pub fn new(
        metadata: PatternMetadata,
        pattern: Pattern,
        rows: Vec<RowSummary>,
        schema: StitchSchema,
    ) -> Self {
        Self {
            metadata,
            pattern,
            rows,
            schema,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The row knitting starts from, if any.
    pub fn opening_row(&self) -> Option<&RowSummary> {
        self.rows.iter().find(|r| r.is_opening)
    }

    /// The row knitting ends on, if any.
    pub fn closing_row(&self) -> Option<&RowSummary> {
        self.rows.iter().find(|r| r.is_closing)
    }
}
