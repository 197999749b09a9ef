use knit_types::Pattern;
use serde::{Deserialize, Serialize};

use crate::geometry::{Elevation, FaceId};

/// Rows are identified by the exact elevation triple of their faces.
pub type RowKey = Elevation;

/// Lowest and highest elevation over every face of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationExtremes {
    pub min_y: f64,
    pub max_y: f64,
}

impl ElevationExtremes {
    /// Widen the extremes to include a face's elevation range.
    pub fn include(self, elevation: &Elevation) -> Self {
        Self {
            min_y: self.min_y.min(elevation.min_y),
            max_y: self.max_y.max(elevation.max_y),
        }
    }

    pub fn of(elevation: &Elevation) -> Self {
        Self {
            min_y: elevation.min_y,
            max_y: elevation.max_y,
        }
    }
}

/// One horizontal ring of faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: RowKey,
    /// Faces in stitch order once the row has been sorted.
    pub faces: Vec<FaceId>,
    pub is_opening: bool,
    pub is_closing: bool,
}

impl Row {
    fn new(key: RowKey, first: FaceId) -> Self {
        Self {
            key,
            faces: vec![first],
            is_opening: false,
            is_closing: false,
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Rows of a mesh, kept sorted by `max_y` in the pattern's growth direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    pattern: Pattern,
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            rows: Vec::new(),
        }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Face lists of every row, for reordering faces within a row.
    pub fn faces_mut(&mut self) -> impl Iterator<Item = &mut Vec<FaceId>> + '_ {
        self.rows.iter_mut().map(|row| &mut row.faces)
    }

    pub fn set_opening(&mut self, index: usize) {
        self.rows[index].is_opening = true;
    }

    pub fn set_closing(&mut self, index: usize) {
        self.rows[index].is_closing = true;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Total number of faces over all rows.
    pub fn face_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Ascending sort key: `max_y` for increment, `-max_y` for decrement.
    fn sort_key(&self, key: &RowKey) -> f64 {
        match self.pattern {
            Pattern::Increment => key.max_y,
            Pattern::Decrement => -key.max_y,
        }
    }

    /// Add a face to the row with the given key.
    ///
    /// A new row is inserted before the first row whose sort key is not less
    /// than its own, so rows stay ordered without a separate sort pass.
    /// Returns the row's index and whether the row was created.
    pub fn insert_face(&mut self, face: FaceId, key: RowKey) -> (usize, bool) {
        if let Some(index) = self.rows.iter().position(|row| row.key == key) {
            self.rows[index].faces.push(face);
            return (index, false);
        }

        let new_key = self.sort_key(&key);
        let index = self
            .rows
            .partition_point(|row| self.sort_key(&row.key) < new_key);
        self.rows.insert(index, Row::new(key, face));
        (index, true)
    }

    pub fn opening_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.is_opening)
    }

    pub fn closing_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.is_closing)
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
