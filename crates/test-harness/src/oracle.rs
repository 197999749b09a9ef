//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a test collect all failures in one pass. The checks work on the
//! display-level output (row summaries, schema, color buffer), so they apply
//! equally to kernel results and to bridge responses.

use std::collections::HashSet;

use knit_kernel::RowPattern;
use knit_types::{Pattern, RowSummary, StitchSchema};

use crate::helpers::face_colors;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Row Oracles ─────────────────────────────────────────────────────────────

/// Rows must be ordered by `max_y`: ascending when increasing, descending
/// when decreasing.
pub fn check_row_monotonicity(rows: &[RowSummary], pattern: Pattern) -> OracleVerdict {
    let violation = rows.windows(2).position(|pair| match pattern {
        Pattern::Increment => pair[0].max_y > pair[1].max_y,
        Pattern::Decrement => pair[0].max_y < pair[1].max_y,
    });

    match violation {
        None => OracleVerdict::pass(
            "row_monotonicity",
            format!("{} rows ordered for {}", rows.len(), pattern),
        ),
        Some(i) => OracleVerdict::fail(
            "row_monotonicity",
            format!(
                "rows {} and {} out of order: max_y {} then {}",
                i,
                i + 1,
                rows[i].max_y,
                rows[i + 1].max_y
            ),
        ),
    }
}

/// Row keys must be pairwise distinct: faces sharing a key share a row.
pub fn check_distinct_row_keys(rows: &[RowSummary]) -> OracleVerdict {
    let mut seen = HashSet::new();
    for row in rows {
        let key = (row.base_y.to_bits(), row.min_y.to_bits(), row.max_y.to_bits());
        if !seen.insert(key) {
            return OracleVerdict::fail(
                "distinct_row_keys",
                format!(
                    "row {} repeats key ({}, {}, {})",
                    row.index, row.base_y, row.min_y, row.max_y
                ),
            );
        }
    }
    OracleVerdict::pass("distinct_row_keys", format!("{} distinct keys", rows.len()))
}

/// At most one row opens and at most one row closes the pattern.
pub fn check_opening_closing(rows: &[RowSummary]) -> OracleVerdict {
    let openings = rows.iter().filter(|r| r.is_opening).count();
    let closings = rows.iter().filter(|r| r.is_closing).count();

    if openings <= 1 && closings <= 1 {
        OracleVerdict::pass(
            "opening_closing",
            format!("{} opening, {} closing", openings, closings),
        )
    } else {
        OracleVerdict::fail(
            "opening_closing",
            format!(
                "expected at most one of each, found {} opening and {} closing",
                openings, closings
            ),
        )
    }
}

/// Check the number of rows against an expected count.
pub fn check_row_count(rows: &[RowSummary], expected: usize) -> OracleVerdict {
    if rows.len() == expected {
        OracleVerdict::pass_val(
            "row_count",
            format!("{} rows", rows.len()),
            rows.len() as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "row_count",
            format!("expected {} rows, got {}", expected, rows.len()),
            rows.len() as f64,
        )
    }
}

// ── Schema Oracles ──────────────────────────────────────────────────────────

/// The closing row collapses to a point: all its lengths are zero.
pub fn check_closing_lengths_zero(schema: &StitchSchema) -> OracleVerdict {
    let bad: Vec<usize> = schema
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_closing && r.base_lengths.iter().any(|&l| l != 0.0))
        .map(|(i, _)| i)
        .collect();

    if bad.is_empty() {
        OracleVerdict::pass("closing_lengths_zero", "closing row lengths are 0".to_string())
    } else {
        OracleVerdict::fail(
            "closing_lengths_zero",
            format!("closing rows with nonzero lengths: {:?}", bad),
        )
    }
}

/// One shift per row, starting at 1.
pub fn check_shift_sequence(schema: &StitchSchema) -> OracleVerdict {
    if schema.shifts.len() != schema.rows.len() {
        return OracleVerdict::fail(
            "shift_sequence",
            format!(
                "{} shifts for {} rows",
                schema.shifts.len(),
                schema.rows.len()
            ),
        );
    }
    match schema.shifts.first() {
        Some(&Some(first)) if first != 1.0 => OracleVerdict::fail_val(
            "shift_sequence",
            format!("first shift is {}, expected 1", first),
            first,
        ),
        Some(None) => OracleVerdict::fail("shift_sequence", "first shift is undefined".to_string()),
        _ => OracleVerdict::pass(
            "shift_sequence",
            format!("{} shifts", schema.shifts.len()),
        ),
    }
}

/// Row lengths are deduplicated: no row lists the same length twice.
pub fn check_lengths_deduplicated(schema: &StitchSchema) -> OracleVerdict {
    for (i, row) in schema.rows.iter().enumerate() {
        let distinct: HashSet<u64> = row.base_lengths.iter().map(|l| l.to_bits()).collect();
        if distinct.len() != row.base_lengths.len() {
            return OracleVerdict::fail(
                "lengths_deduplicated",
                format!("row {} repeats a length: {:?}", i, row.base_lengths),
            );
        }
    }
    OracleVerdict::pass(
        "lengths_deduplicated",
        format!("{} rows checked", schema.rows.len()),
    )
}

// ── Color Oracles ───────────────────────────────────────────────────────────

/// All three vertices of every face carry the same color.
pub fn check_face_color_uniformity(colors: &[f32]) -> OracleVerdict {
    if colors.len() % 9 != 0 {
        return OracleVerdict::fail(
            "face_color_uniformity",
            format!("buffer length {} is not a whole number of faces", colors.len()),
        );
    }

    let face_count = colors.len() / 9;
    let mixed: Vec<usize> = (0..face_count)
        .filter(|&f| match face_colors(colors, f) {
            Some([a, b, c]) => a != b || b != c,
            None => true,
        })
        .collect();

    if mixed.is_empty() {
        OracleVerdict::pass(
            "face_color_uniformity",
            format!("{} faces uniformly colored", face_count),
        )
    } else {
        OracleVerdict::fail(
            "face_color_uniformity",
            format!("{} faces with mixed colors, first {}", mixed.len(), mixed[0]),
        )
    }
}

/// The number of painted (non-white) faces equals the number of row faces.
pub fn check_colored_face_count(colors: &[f32], rows: &[RowSummary]) -> OracleVerdict {
    let expected: usize = rows.iter().map(|r| r.face_count).sum();
    let painted = (0..colors.len() / 9)
        .filter_map(|f| face_colors(colors, f))
        .filter(|[a, _, _]| *a != [1.0, 1.0, 1.0])
        .count();

    if painted == expected {
        OracleVerdict::pass_val(
            "colored_face_count",
            format!("{} faces painted", painted),
            painted as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "colored_face_count",
            format!("{} faces painted, {} faces in rows", painted, expected),
            painted as f64,
        )
    }
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Run every check that needs no expected values.
pub fn run_row_checks(
    rows: &[RowSummary],
    schema: &StitchSchema,
    colors: &[f32],
    pattern: Pattern,
) -> Vec<OracleVerdict> {
    vec![
        check_row_monotonicity(rows, pattern),
        check_distinct_row_keys(rows),
        check_opening_closing(rows),
        check_closing_lengths_zero(schema),
        check_shift_sequence(schema),
        check_lengths_deduplicated(schema),
        check_face_color_uniformity(colors),
        check_colored_face_count(colors, rows),
    ]
}

/// Run every check on a kernel result.
pub fn run_pattern_checks(result: &RowPattern) -> Vec<OracleVerdict> {
    run_row_checks(
        &result.summaries(),
        &result.schema,
        &result.colors.buffer,
        result.config.pattern,
    )
}
