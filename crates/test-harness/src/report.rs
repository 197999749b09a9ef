//! Structured text pattern reports.
//!
//! Reports are plain text, not JSON, so a failing test can print the whole
//! row table next to the oracle verdicts.

use std::fmt;

use knit_types::{Pattern, RowSummary, StitchSchema};

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};
use crate::workflow::PatternBuilder;

/// A complete pattern report with all sections.
pub struct PatternReport {
    pub pattern: Pattern,
    pub rows: Vec<RowSummary>,
    pub schema: StitchSchema,
    pub oracle_results: Vec<OracleVerdict>,
    pub warnings: Vec<String>,
}

impl PatternReport {
    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Knit Row Pattern Report ===\n\n");

        out.push_str(&format!(
            "Rows ({} rows, {} stitches, {}):\n",
            self.rows.len(),
            self.schema.total_stitches(),
            self.pattern,
        ));

        for (row, shift) in self.rows.iter().zip(&self.schema.shifts) {
            let mut tags = Vec::new();
            if row.is_opening {
                tags.push("OPENING");
            }
            if row.is_closing {
                tags.push("CLOSING");
            }
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };
            let shift = match shift {
                Some(ratio) => ratio.to_string(),
                None => "undefined".to_string(),
            };
            out.push_str(&format!(
                "  [{}] base y={:.3} span {:.3}..{:.3} | {} stitches | shift {}{}\n",
                row.index, row.base_y, row.min_y, row.max_y, row.face_count, shift, tags,
            ));
        }

        match self.schema.cast_on_length {
            Some(length) => out.push_str(&format!(
                "\nCast On: {} stitches of length {}\n",
                self.schema.cast_on_stitches, length
            )),
            None => out.push_str("\nCast On: none\n"),
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        if self.warnings.is_empty() {
            out.push_str("\nWarnings: none\n");
        } else {
            out.push_str(&format!("\nWarnings ({}):\n", self.warnings.len()));
            for w in &self.warnings {
                out.push_str(&format!("  {}\n", w));
            }
        }

        out
    }

    /// Whether every oracle passed.
    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }
}

impl fmt::Display for PatternReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl PatternBuilder {
    /// Generate a report of the last computation.
    pub fn report(&self) -> Result<PatternReport, HarnessError> {
        let last = self.last()?;
        let pattern = self.current_pattern();
        Ok(PatternReport {
            pattern,
            rows: last.rows.clone(),
            schema: last.schema.clone(),
            oracle_results: oracle::run_row_checks(&last.rows, &last.schema, &last.colors, pattern),
            warnings: last.warnings.iter().map(|w| format!("{:?}", w)).collect(),
        })
    }
}
