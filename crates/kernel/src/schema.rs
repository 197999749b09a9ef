//! Stitch schema: base lengths per row and the row-to-row shift ratios that
//! tell the knitter how the stitch count changes from one row to the next.

use knit_types::{RowSchema, ShiftPolicy, StitchSchema};
use slotmap::SecondaryMap;
use tracing::{debug, info, instrument};

use crate::config::PatternConfig;
use crate::error::RowError;
use crate::geometry::{FaceId, FaceProfile, round_to};
use crate::rows::RowSet;

/// Compute the stitch schema of an ordered row set.
///
/// Each face contributes the planar length of its base edge. The opening row
/// records its stitch length as the cast-on reference; the closing row
/// collapses to a point, so its lengths are forced to zero.
#[instrument(skip_all, fields(rows = rows.len(), policy = ?config.shift_policy))]
pub fn compute_schema(
    rows: &RowSet,
    profiles: &SecondaryMap<FaceId, FaceProfile>,
    config: &PatternConfig,
) -> Result<StitchSchema, RowError> {
    let mut cast_on_length = None;
    let mut schema_rows = Vec::with_capacity(rows.len());

    for row in rows {
        let mut lengths: Vec<f64> = row
            .faces
            .iter()
            .map(|&id| round_to(profiles[id].base_length(), config.decimals))
            .collect();

        if row.is_opening {
            cast_on_length = lengths.last().copied();
        }
        if row.is_closing {
            lengths.fill(0.0);
        }

        schema_rows.push(RowSchema {
            base_lengths: dedup_lengths(&lengths),
            stitch_count: row.len(),
            is_opening: row.is_opening,
            is_closing: row.is_closing,
        });
    }

    let shifts = shift_sequence(&schema_rows, config.shift_policy, config.decimals)?;

    info!(rows = schema_rows.len(), ?cast_on_length, "computed stitch schema");
    Ok(StitchSchema {
        cast_on_length,
        cast_on_stitches: schema_rows.first().map_or(0, |r| r.stitch_count),
        rows: schema_rows,
        shifts,
    })
}

/// Drop repeated lengths, keeping the first occurrence of each.
pub fn dedup_lengths(lengths: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(lengths.len());
    for &length in lengths {
        if !out.contains(&length) {
            out.push(length);
        }
    }
    out
}

/// The single length a row contributes to the shift ratio.
fn representative(row_index: usize, row: &RowSchema, policy: ShiftPolicy) -> Result<f64, RowError> {
    if policy == ShiftPolicy::Strict && row.base_lengths.len() > 1 {
        return Err(RowError::AmbiguousRowLength {
            row_index,
            lengths: row.base_lengths.clone(),
        });
    }
    Ok(row.base_lengths.first().copied().unwrap_or(0.0))
}

/// Ratio of each row's representative length to the previous row's.
///
/// The first row's shift is 1. A row following a zero-length row has no
/// ratio and gets `None`. An empty row list yields an empty sequence.
pub fn shift_sequence(
    rows: &[RowSchema],
    policy: ShiftPolicy,
    decimals: u32,
) -> Result<Vec<Option<f64>>, RowError> {
    let lengths = rows
        .iter()
        .enumerate()
        .map(|(i, row)| representative(i, row, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let mut shifts = Vec::with_capacity(lengths.len());
    for (i, &length) in lengths.iter().enumerate() {
        if i == 0 {
            shifts.push(Some(1.0));
            continue;
        }
        let previous = lengths[i - 1];
        if previous == 0.0 {
            debug!(row_index = i, "previous row has zero length, shift undefined");
            shifts.push(None);
            continue;
        }
        shifts.push(Some(round_to(length / previous, decimals)));
    }
    Ok(shifts)
}
