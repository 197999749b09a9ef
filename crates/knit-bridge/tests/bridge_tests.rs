use knit_bridge::messages::*;
use knit_bridge::*;
use knit_tessellation::{tessellate_cone, tessellate_sphere};
use knit_types::{Pattern, PatternWarning, ShiftPolicy};
use pattern_format::load_pattern;

// ── Helper functions ─────────────────────────────────────────────────────

fn sphere_positions() -> Vec<f32> {
    tessellate_sphere(1.0, 8, 4).to_non_indexed()
}

fn load(state: &mut EngineState, positions: Vec<f32>) -> EngineToUi {
    dispatch(
        state,
        UiToEngine::LoadMesh {
            positions,
            vertices_per_face: 3,
        },
    )
}

fn seeded_state(seed: u64) -> EngineState {
    let mut state = EngineState::new();
    load(&mut state, sphere_positions());
    dispatch(&mut state, UiToEngine::SetSeed { seed: Some(seed) });
    state
}

fn error_message(response: EngineToUi) -> String {
    match response {
        EngineToUi::Error { message } => message,
        other => panic!("expected Error, got {other:?}"),
    }
}

// ── Serde Round-Trip Tests ───────────────────────────────────────────────

#[test]
fn serde_roundtrip_load_mesh() {
    let msg = UiToEngine::LoadMesh {
        positions: vec![0.0; 9],
        vertices_per_face: 3,
    };
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: UiToEngine = serde_json::from_str(&json).unwrap();
    assert!(json.contains("\"type\":\"LoadMesh\""));
    assert!(matches!(
        deserialized,
        UiToEngine::LoadMesh { positions, vertices_per_face: 3 } if positions.len() == 9
    ));
}

#[test]
fn load_mesh_defaults_to_triangles() {
    let json = r#"{"type":"LoadMesh","positions":[0,0,0,1,0,0,0,1,0]}"#;
    let msg: UiToEngine = serde_json::from_str(json).unwrap();
    assert!(matches!(
        msg,
        UiToEngine::LoadMesh {
            vertices_per_face: 3,
            ..
        }
    ));
}

#[test]
fn serde_pattern_and_policy_tags() {
    let json = r#"{"type":"SetPattern","pattern":"decrement"}"#;
    let msg: UiToEngine = serde_json::from_str(json).unwrap();
    assert!(matches!(
        msg,
        UiToEngine::SetPattern {
            pattern: Pattern::Decrement
        }
    ));

    let json = r#"{"type":"SetShiftPolicy","policy":{"type":"Strict"}}"#;
    let msg: UiToEngine = serde_json::from_str(json).unwrap();
    assert!(matches!(
        msg,
        UiToEngine::SetShiftPolicy {
            policy: ShiftPolicy::Strict
        }
    ));
}

#[test]
fn serde_roundtrip_unit_messages() {
    for msg in [UiToEngine::ComputeRows, UiToEngine::Reset] {
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: UiToEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(
            std::mem::discriminant(&msg),
            std::mem::discriminant(&deserialized)
        );
    }
}

#[test]
fn serde_roundtrip_engine_error() {
    let msg = EngineToUi::Error {
        message: "something went wrong".to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: EngineToUi = serde_json::from_str(&json).unwrap();
    assert!(matches!(deserialized, EngineToUi::Error { .. }));
}

#[test]
fn serde_roundtrip_rows_computed() {
    let mut state = seeded_state(5);
    let response = dispatch(&mut state, UiToEngine::ComputeRows);
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"type\":\"RowsComputed\""));
    let deserialized: EngineToUi = serde_json::from_str(&json).unwrap();
    assert!(matches!(deserialized, EngineToUi::RowsComputed { .. }));
}

// ── Dispatch Tests ───────────────────────────────────────────────────────

#[test]
fn dispatch_load_mesh_reports_counts() {
    let mut state = EngineState::new();
    let response = load(&mut state, sphere_positions());
    match response {
        EngineToUi::MeshLoaded {
            vertex_count,
            face_count,
        } => {
            // 2 caps of 8 + 2 bands of 16
            assert_eq!(face_count, 48);
            assert_eq!(vertex_count, 48 * 3);
        }
        other => panic!("expected MeshLoaded, got {other:?}"),
    }
}

#[test]
fn dispatch_rejects_ragged_buffer() {
    let mut state = EngineState::new();
    let message = error_message(load(&mut state, vec![0.0; 10]));
    assert!(message.contains("not a multiple"), "{message}");
    assert!(state.positions.is_none());
}

#[test]
fn dispatch_rejects_quads() {
    let mut state = EngineState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::LoadMesh {
            positions: vec![0.0; 12],
            vertices_per_face: 4,
        },
    );
    assert!(error_message(response).contains("arity"));
    assert_eq!(state.config.vertices_per_face, 3);
}

#[test]
fn dispatch_compute_without_mesh_errors() {
    let mut state = EngineState::new();
    let message = error_message(dispatch(&mut state, UiToEngine::ComputeRows));
    assert_eq!(message, BridgeError::NoMesh.to_string());
}

#[test]
fn dispatch_compute_returns_rows_and_colors() {
    let mut state = seeded_state(11);
    let response = dispatch(&mut state, UiToEngine::ComputeRows);
    match response {
        EngineToUi::RowsComputed {
            colors,
            rows,
            schema,
            warnings,
        } => {
            assert_eq!(colors.len(), sphere_positions().len());
            assert_eq!(rows.len(), 4);
            assert!(rows[0].is_opening);
            assert!(rows[3].is_closing);
            assert_eq!(schema.shifts.len(), 4);
            assert!(warnings.is_empty());
        }
        other => panic!("expected RowsComputed, got {other:?}"),
    }
    assert_eq!(state.row_colors().len(), sphere_positions().len());
}

#[test]
fn dispatch_same_seed_same_colors() {
    let mut a = seeded_state(99);
    let mut b = seeded_state(99);
    dispatch(&mut a, UiToEngine::ComputeRows);
    dispatch(&mut b, UiToEngine::ComputeRows);
    assert_eq!(a.row_colors(), b.row_colors());
}

#[test]
fn dispatch_empty_mesh_warns() {
    let mut state = EngineState::new();
    load(&mut state, Vec::new());
    let response = dispatch(&mut state, UiToEngine::ComputeRows);
    match response {
        EngineToUi::RowsComputed { rows, warnings, .. } => {
            assert!(rows.is_empty());
            assert_eq!(warnings, vec![PatternWarning::EmptyRowSet { face_count: 0 }]);
        }
        other => panic!("expected RowsComputed, got {other:?}"),
    }
}

#[test]
fn dispatch_config_change_discards_result() {
    let mut state = seeded_state(3);
    dispatch(&mut state, UiToEngine::ComputeRows);
    assert!(state.result.is_some());

    let response = dispatch(
        &mut state,
        UiToEngine::SetPattern {
            pattern: Pattern::Decrement,
        },
    );
    match response {
        EngineToUi::ConfigChanged { config } => {
            assert_eq!(config.pattern, Pattern::Decrement);
            assert_eq!(config.seed, Some(3));
        }
        other => panic!("expected ConfigChanged, got {other:?}"),
    }
    assert!(state.result.is_none());
    assert!(state.row_colors().is_empty());
}

#[test]
fn dispatch_single_ring_cone() {
    let mut state = EngineState::new();
    load(&mut state, tessellate_cone(0.0, -1.0, 1.0, 6).to_non_indexed());
    let response = dispatch(&mut state, UiToEngine::ComputeRows);
    match response {
        EngineToUi::RowsComputed { rows, schema, .. } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].face_count, 6);
            assert!(rows[0].is_opening && rows[0].is_closing);
            assert_eq!(schema.shifts, vec![Some(1.0)]);
            assert_eq!(schema.cast_on_length, Some(1.0));
        }
        other => panic!("expected RowsComputed, got {other:?}"),
    }
}

#[test]
fn dispatch_reset_clears_everything() {
    let mut state = seeded_state(8);
    dispatch(&mut state, UiToEngine::ComputeRows);
    let response = dispatch(&mut state, UiToEngine::Reset);
    assert!(matches!(response, EngineToUi::ConfigChanged { .. }));
    assert!(state.positions.is_none());
    assert!(state.result.is_none());
    assert_eq!(state.config.seed, None);
}

// ── File Operation Tests ─────────────────────────────────────────────────

#[test]
fn dispatch_save_without_result_errors() {
    let mut state = EngineState::new();
    let message = error_message(dispatch(
        &mut state,
        UiToEngine::SavePattern {
            name: "Nothing".to_string(),
        },
    ));
    assert_eq!(message, BridgeError::NoResult.to_string());
}

#[test]
fn dispatch_save_produces_json() {
    let mut state = seeded_state(21);
    dispatch(&mut state, UiToEngine::ComputeRows);
    let response = dispatch(
        &mut state,
        UiToEngine::SavePattern {
            name: "Ball".to_string(),
        },
    );
    let json_data = match response {
        EngineToUi::PatternSaved { json_data } => json_data,
        other => panic!("expected PatternSaved, got {other:?}"),
    };

    let document = load_pattern(&json_data).unwrap();
    assert_eq!(document.metadata.name, "Ball");
    assert_eq!(document.rows.len(), 4);
}

#[test]
fn dispatch_load_restores_document() {
    let mut state = seeded_state(21);
    dispatch(&mut state, UiToEngine::ComputeRows);
    let saved = match dispatch(
        &mut state,
        UiToEngine::SavePattern {
            name: "Ball".to_string(),
        },
    ) {
        EngineToUi::PatternSaved { json_data } => json_data,
        other => panic!("expected PatternSaved, got {other:?}"),
    };

    let mut fresh = EngineState::new();
    let response = dispatch(&mut fresh, UiToEngine::LoadPattern { data: saved });
    match response {
        EngineToUi::PatternLoaded { document } => {
            assert_eq!(document.metadata.name, "Ball");
            assert_eq!(document.pattern, Pattern::Increment);
        }
        other => panic!("expected PatternLoaded, got {other:?}"),
    }
    assert!(fresh.loaded.is_some());
}

#[test]
fn dispatch_load_garbage_errors() {
    let mut state = EngineState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::LoadPattern {
            data: "{}".to_string(),
        },
    );
    assert!(error_message(response).starts_with("load error"));
}

// ── JSON Entry Point Tests ───────────────────────────────────────────────

#[test]
fn dispatch_json_reports_unparseable_message() {
    let mut state = EngineState::new();
    let json = dispatch_json(&mut state, r#"{"type":"NoSuchMessage"}"#);
    let response: EngineToUi = serde_json::from_str(&json).unwrap();
    let message = error_message(response);
    assert!(message.starts_with("serialization error: failed to parse message"));
}

#[test]
fn dispatch_json_runs_valid_message() {
    let mut state = EngineState::new();
    let json = dispatch_json(
        &mut state,
        r#"{"type":"LoadMesh","positions":[0,1,0,1,1,0,0,0,0]}"#,
    );
    let response: EngineToUi = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        response,
        EngineToUi::MeshLoaded {
            vertex_count: 3,
            face_count: 1,
        }
    ));
}

#[test]
fn parse_message_error_is_serialization() {
    let err = knit_bridge::dispatch::parse_message("not json").unwrap_err();
    assert!(matches!(err, BridgeError::Serialization { .. }));
}
