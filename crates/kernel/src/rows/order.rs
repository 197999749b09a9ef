use std::cmp::Ordering;

use knit_types::Pattern;
use slotmap::SecondaryMap;
use tracing::{debug, instrument};

use super::classify::Classification;
use super::types::{ElevationExtremes, RowSet};
use crate::geometry::{FaceId, FaceProfile, PlanarPoint};

/// Mark the rows at the pattern's starting and ending poles.
///
/// The first row whose `min_y` is the global minimum and the first row whose
/// `max_y` is the global maximum are looked up; increment opens at the
/// minimum and closes at the maximum, decrement the other way round. A pole
/// without a matching row leaves its flag unset.
pub fn mark_extremal_rows(rows: &mut RowSet, extremes: Option<ElevationExtremes>) {
    let Some(extremes) = extremes else {
        return;
    };

    let min_row = rows.iter().position(|r| r.key.min_y == extremes.min_y);
    let max_row = rows.iter().position(|r| r.key.max_y == extremes.max_y);

    let (opening, closing) = match rows.pattern() {
        Pattern::Increment => (min_row, max_row),
        Pattern::Decrement => (max_row, min_row),
    };

    if let Some(i) = opening {
        rows.set_opening(i);
    }
    if let Some(i) = closing {
        rows.set_closing(i);
    }
    debug!(?opening, ?closing, "marked extremal rows");
}

/// Mean base-edge center of a row's faces in the X/Z plane.
pub fn row_centroid(faces: &[FaceId], profiles: &SecondaryMap<FaceId, FaceProfile>) -> PlanarPoint {
    if faces.is_empty() {
        return PlanarPoint::ORIGIN;
    }
    let n = faces.len() as f64;
    let (sx, sz) = faces.iter().fold((0.0, 0.0), |(sx, sz), &id| {
        let c = profiles[id].base_center;
        (sx + c.x, sz + c.z)
    });
    PlanarPoint::new(sx / n, sz / n)
}

/// Sort each row's faces by the bearing of their base center from the row
/// centroid, in descending degrees. Equal bearings keep their current order.
pub fn sort_row_faces(rows: &mut RowSet, profiles: &SecondaryMap<FaceId, FaceProfile>) {
    for faces in rows.faces_mut() {
        let centroid = row_centroid(faces, profiles);
        let mut bearings: Vec<(f64, FaceId)> = faces
            .iter()
            .map(|&id| (centroid.bearing_to(&profiles[id].planar_center()), id))
            .collect();

        // Vec::sort_by is stable.
        bearings.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        *faces = bearings.into_iter().map(|(_, id)| id).collect();
    }
}

/// Mark the opening/closing rows and put every row into stitch order.
#[instrument(skip(rows, classification), fields(rows = rows.len()))]
pub fn order_rows(rows: &mut RowSet, classification: &Classification) {
    sort_row_faces(rows, &classification.profiles);
    mark_extremal_rows(rows, classification.extremes);
}
