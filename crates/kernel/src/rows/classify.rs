use knit_types::Pattern;
use slotmap::SecondaryMap;
use tracing::{debug, info, instrument};

use super::types::{ElevationExtremes, RowSet};
use crate::error::RowError;
use crate::geometry::{FaceId, FaceProfile, MeshFaces};

/// Outcome of the first pass over a mesh.
#[derive(Debug, Clone)]
pub struct Classification {
    pub pattern: Pattern,
    /// Base edge and elevation statistics of every face.
    pub profiles: SecondaryMap<FaceId, FaceProfile>,
    /// Faces whose apex points against the pattern direction, in buffer order.
    pub matched: Vec<FaceId>,
    /// Faces that did not match, in buffer order.
    pub excluded: Vec<FaceId>,
    /// Extremes over all faces, matched or not. `None` for an empty mesh.
    pub extremes: Option<ElevationExtremes>,
}

impl Classification {
    /// Excluded faces touching the pole the pattern grows toward.
    ///
    /// These are the cap faces around the final pole: the direction predicate
    /// rejects them, yet they close the last row of the object.
    pub fn readmitted(&self) -> Vec<FaceId> {
        let Some(extremes) = self.extremes else {
            return Vec::new();
        };

        self.excluded
            .iter()
            .copied()
            .filter(|&id| {
                let e = &self.profiles[id].elevation;
                match self.pattern {
                    Pattern::Increment => e.max_y == extremes.max_y,
                    Pattern::Decrement => e.min_y == extremes.min_y,
                }
            })
            .collect()
    }
}

/// First pass: profile every face, fold the global extremes and split faces
/// by direction membership.
///
/// Fails on the first face without a base edge; no partial classification is
/// returned.
#[instrument(skip(mesh), fields(faces = mesh.face_count()))]
pub fn classify_faces(mesh: &MeshFaces, pattern: Pattern) -> Result<Classification, RowError> {
    let profiled = mesh
        .iter()
        .map(|(id, face)| face.profile().map(|profile| (id, profile)))
        .collect::<Result<Vec<_>, _>>()?;

    let extremes = profiled.iter().fold(None, |acc: Option<ElevationExtremes>, (_, p)| {
        Some(match acc {
            Some(ext) => ext.include(&p.elevation),
            None => ElevationExtremes::of(&p.elevation),
        })
    });

    let (matched, excluded): (Vec<(FaceId, FaceProfile)>, Vec<_>) =
        profiled.iter().partition(|(_, p)| {
            let e = &p.elevation;
            pattern.matches(e.base_y, e.min_y, e.max_y)
        });

    let classification = Classification {
        pattern,
        matched: matched.into_iter().map(|(id, _)| id).collect(),
        excluded: excluded.into_iter().map(|(id, _)| id).collect(),
        profiles: profiled.into_iter().collect(),
        extremes,
    };

    info!(
        matched = classification.matched.len(),
        excluded = classification.excluded.len(),
        ?extremes,
        "classified faces"
    );
    Ok(classification)
}

/// Second pass: group matched faces into rows, then merge the re-admitted
/// cap faces into the same structure by the same key.
#[instrument(skip(classification), fields(pattern = %classification.pattern))]
pub fn build_rows(classification: &Classification) -> RowSet {
    let mut rows = RowSet::new(classification.pattern);

    for &id in &classification.matched {
        let key = classification.profiles[id].elevation;
        let (index, created) = rows.insert_face(id, key);
        if created {
            debug!(index, base_y = key.base_y, min_y = key.min_y, max_y = key.max_y, "new row");
        }
    }

    let readmitted = classification.readmitted();
    for &id in &readmitted {
        let key = classification.profiles[id].elevation;
        let (index, created) = rows.insert_face(id, key);
        if created {
            debug!(index, base_y = key.base_y, "new row from re-admitted cap faces");
        }
    }

    info!(rows = rows.len(), readmitted = readmitted.len(), "built rows");
    rows
}
