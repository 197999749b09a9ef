//! PatternBuilder: fluent API for scripting pattern sessions in tests.
//!
//! Wraps `knit_bridge::dispatch()` to test the real dispatch path, not a
//! simulation.

use knit_bridge::messages::*;
use knit_bridge::EngineState;
use knit_types::{Pattern, PatternWarning, RowSummary, ShiftPolicy, StitchSchema};
use pattern_format::PatternDocument;

use crate::helpers::*;
use crate::oracle::{self, OracleVerdict};

/// Payload of a `RowsComputed` response.
#[derive(Debug, Clone)]
pub struct ComputedRows {
    pub colors: Vec<f32>,
    pub rows: Vec<RowSummary>,
    pub schema: StitchSchema,
    pub warnings: Vec<PatternWarning>,
}

/// A fluent builder for driving and verifying pattern sessions in tests.
pub struct PatternBuilder {
    pub state: EngineState,
    pattern: Pattern,
    last: Option<ComputedRows>,
    history: Vec<(String, String)>,
    auto_check: bool,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
            pattern: Pattern::default(),
            last: None,
            history: Vec::new(),
            auto_check: false,
        }
    }

    /// Enable auto-checking: every computation runs all row oracles and
    /// fails on the first failing verdict.
    pub fn with_auto_check(mut self) -> Self {
        self.auto_check = true;
        self
    }

    // ── Mesh ────────────────────────────────────────────────────────────

    /// Load a non-indexed triangle buffer. Returns (vertex_count, face_count).
    pub fn load_positions(&mut self, positions: Vec<f32>) -> Result<(usize, usize), HarnessError> {
        let response = self.send(
            "LoadMesh",
            UiToEngine::LoadMesh {
                positions,
                vertices_per_face: 3,
            },
        )?;
        match response {
            EngineToUi::MeshLoaded {
                vertex_count,
                face_count,
            } => Ok((vertex_count, face_count)),
            other => Err(unexpected("LoadMesh", &other)),
        }
    }

    pub fn load_sphere(&mut self, meridians: usize, parallels: usize) -> Result<&mut Self, HarnessError> {
        self.load_positions(sphere_positions(1.0, meridians, parallels))?;
        Ok(self)
    }

    // ── Configuration ───────────────────────────────────────────────────

    pub fn pattern(&mut self, pattern: Pattern) -> Result<&mut Self, HarnessError> {
        self.configure("SetPattern", UiToEngine::SetPattern { pattern })?;
        self.pattern = pattern;
        Ok(self)
    }

    pub fn seed(&mut self, seed: u64) -> Result<&mut Self, HarnessError> {
        self.configure("SetSeed", UiToEngine::SetSeed { seed: Some(seed) })
    }

    pub fn shift_policy(&mut self, policy: ShiftPolicy) -> Result<&mut Self, HarnessError> {
        self.configure("SetShiftPolicy", UiToEngine::SetShiftPolicy { policy })
    }

    pub fn reset(&mut self) -> Result<&mut Self, HarnessError> {
        self.configure("Reset", UiToEngine::Reset)?;
        self.pattern = Pattern::default();
        Ok(self)
    }

    // ── Computation ─────────────────────────────────────────────────────

    /// Partition the loaded mesh and keep the result for later assertions.
    pub fn compute(&mut self) -> Result<&ComputedRows, HarnessError> {
        let response = self.send("ComputeRows", UiToEngine::ComputeRows)?;
        let computed = match response {
            EngineToUi::RowsComputed {
                colors,
                rows,
                schema,
                warnings,
            } => ComputedRows {
                colors,
                rows,
                schema,
                warnings,
            },
            other => return Err(unexpected("ComputeRows", &other)),
        };

        if self.auto_check {
            let verdicts =
                oracle::run_row_checks(&computed.rows, &computed.schema, &computed.colors, self.pattern);
            if let Some(failed) = verdicts.into_iter().find(|v| !v.passed) {
                return Err(HarnessError::OracleFailure {
                    oracle: failed.oracle_name,
                    detail: failed.detail,
                });
            }
        }

        Ok(self.last.insert(computed))
    }

    /// The result of the last successful computation.
    pub fn last(&self) -> Result<&ComputedRows, HarnessError> {
        self.last.as_ref().ok_or(HarnessError::NoRows)
    }

    /// Run every row oracle on the last computation.
    pub fn check_rows(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let last = self.last()?;
        Ok(oracle::run_row_checks(
            &last.rows,
            &last.schema,
            &last.colors,
            self.pattern,
        ))
    }

    // ── File Operations ─────────────────────────────────────────────────

    pub fn save(&mut self, name: &str) -> Result<String, HarnessError> {
        let response = self.send(
            "SavePattern",
            UiToEngine::SavePattern {
                name: name.to_string(),
            },
        )?;
        match response {
            EngineToUi::PatternSaved { json_data } => Ok(json_data),
            other => Err(unexpected("SavePattern", &other)),
        }
    }

    pub fn load(&mut self, json: &str) -> Result<PatternDocument, HarnessError> {
        let response = self.send(
            "LoadPattern",
            UiToEngine::LoadPattern {
                data: json.to_string(),
            },
        )?;
        match response {
            EngineToUi::PatternLoaded { document } => Ok(document),
            other => Err(unexpected("LoadPattern", &other)),
        }
    }

    // ── Assertions ──────────────────────────────────────────────────────

    pub fn assert_row_count(&self, expected: usize) -> Result<&Self, HarnessError> {
        let verdict = oracle::check_row_count(&self.last()?.rows, expected);
        if verdict.passed {
            Ok(self)
        } else {
            Err(HarnessError::AssertionFailed {
                detail: verdict.detail,
            })
        }
    }

    pub fn assert_no_warnings(&self) -> Result<&Self, HarnessError> {
        let warnings = &self.last()?.warnings;
        if warnings.is_empty() {
            Ok(self)
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!("expected no warnings, got {:?}", warnings),
            })
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn current_pattern(&self) -> Pattern {
        self.pattern
    }

    /// Get the dispatch history log: (message type, response type).
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Internal ────────────────────────────────────────────────────────

    fn send(&mut self, msg_type: &str, msg: UiToEngine) -> Result<EngineToUi, HarnessError> {
        let response = knit_bridge::dispatch(&mut self.state, msg);
        self.history
            .push((msg_type.to_string(), response_name(&response).to_string()));
        match response {
            EngineToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            other => Ok(other),
        }
    }

    fn configure(&mut self, msg_type: &str, msg: UiToEngine) -> Result<&mut Self, HarnessError> {
        match self.send(msg_type, msg)? {
            EngineToUi::ConfigChanged { .. } => {
                self.last = None;
                Ok(self)
            }
            other => Err(unexpected(msg_type, &other)),
        }
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn response_name(response: &EngineToUi) -> &'static str {
    match response {
        EngineToUi::MeshLoaded { .. } => "MeshLoaded",
        EngineToUi::ConfigChanged { .. } => "ConfigChanged",
        EngineToUi::RowsComputed { .. } => "RowsComputed",
        EngineToUi::PatternSaved { .. } => "PatternSaved",
        EngineToUi::PatternLoaded { .. } => "PatternLoaded",
        EngineToUi::Error { .. } => "Error",
    }
}

fn unexpected(msg_type: &str, response: &EngineToUi) -> HarnessError {
    HarnessError::UnexpectedResponse {
        msg_type: msg_type.to_string(),
        response: response_name(response).to_string(),
    }
}
