use serde::{Deserialize, Serialize};

/// Per-row description handed to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSummary {
    /// Position of the row in knitting order.
    pub index: usize,
    /// Elevation shared by the base edges of the row's faces.
    pub base_y: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// Number of faces (stitches) in the row.
    pub face_count: usize,
    pub is_opening: bool,
    pub is_closing: bool,
    /// RGB color assigned to every vertex of the row.
    pub color: [f32; 3],
}

/// Non-fatal conditions reported alongside a computed pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PatternWarning {
    /// No face matched the pattern direction and no cap face was re-admitted.
    EmptyRowSet { face_count: usize },
    /// The row before `row_index` has a zero base length, so the shift into
    /// `row_index` has no ratio.
    UndefinedShift { row_index: usize },
}
