use pattern_format::{load_pattern, save_pattern};

use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// Failures never escape: they are reported as `EngineToUi::Error`.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

/// Dispatch a JSON-encoded UI message and return the JSON-encoded response.
pub fn dispatch_json(state: &mut EngineState, json_input: &str) -> String {
    let response = match parse_message(json_input) {
        Ok(msg) => dispatch(state, msg),
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    };
    encode_response(&response).unwrap_or_else(|e| {
        serde_json::json!({ "type": "Error", "message": e.to_string() }).to_string()
    })
}

pub fn parse_message(json_input: &str) -> Result<UiToEngine, BridgeError> {
    serde_json::from_str(json_input).map_err(|e| BridgeError::Serialization {
        reason: format!("failed to parse message: {e}"),
    })
}

pub fn encode_response(response: &EngineToUi) -> Result<String, BridgeError> {
    serde_json::to_string(response).map_err(|e| BridgeError::Serialization {
        reason: e.to_string(),
    })
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        // -- Mesh --
        UiToEngine::LoadMesh {
            positions,
            vertices_per_face,
        } => {
            let (vertex_count, face_count) = state.load_mesh(positions, vertices_per_face)?;
            Ok(EngineToUi::MeshLoaded {
                vertex_count,
                face_count,
            })
        }

        // -- Configuration --
        UiToEngine::SetPattern { pattern } => {
            state.set_pattern(pattern);
            Ok(config_changed_response(state))
        }

        UiToEngine::SetSeed { seed } => {
            state.set_seed(seed);
            Ok(config_changed_response(state))
        }

        UiToEngine::SetShiftPolicy { policy } => {
            state.set_shift_policy(policy);
            Ok(config_changed_response(state))
        }

        // -- Computation --
        UiToEngine::ComputeRows => {
            let result = state.compute()?;
            Ok(EngineToUi::RowsComputed {
                colors: result.colors.buffer.clone(),
                rows: result.summaries(),
                schema: result.schema.clone(),
                warnings: result.warnings.clone(),
            })
        }

        // -- File operations --
        UiToEngine::SavePattern { name } => {
            let document = state.document(&name)?;
            let json_data = save_pattern(&document)?;
            Ok(EngineToUi::PatternSaved { json_data })
        }

        UiToEngine::LoadPattern { data } => {
            let document = load_pattern(&data)?;
            state.loaded = Some(document.clone());
            Ok(EngineToUi::PatternLoaded { document })
        }

        UiToEngine::Reset => {
            state.reset();
            Ok(config_changed_response(state))
        }
    }
}

fn config_changed_response(state: &EngineState) -> EngineToUi {
    EngineToUi::ConfigChanged {
        config: state.config.clone(),
    }
}
