use serde::{Deserialize, Serialize};

/// Base-length information of one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSchema {
    /// Distinct base lengths of the row in stitch order (first occurrence kept).
    pub base_lengths: Vec<f64>,
    /// Number of stitches (faces) in the row.
    pub stitch_count: usize,
    pub is_opening: bool,
    pub is_closing: bool,
}

/// Stitch-count shift schema derived from row base lengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StitchSchema {
    /// Base length of a stitch in the opening row, if an opening row exists.
    pub cast_on_length: Option<f64>,
    /// Stitch count of the first row.
    pub cast_on_stitches: usize,
    pub rows: Vec<RowSchema>,
    /// Ratio of each row's base length to the previous row's. The first entry
    /// is 1; `None` where the previous row's length is zero.
    pub shifts: Vec<Option<f64>>,
}

impl StitchSchema {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows whose shift ratio is undefined.
    pub fn undefined_shifts(&self) -> Vec<usize> {
        self.shifts
            .iter()
            .enumerate()
            .filter(|(_, shift)| shift.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Total number of stitches over all rows.
    pub fn total_stitches(&self) -> usize {
        self.rows.iter().map(|r| r.stitch_count).sum()
    }
}
