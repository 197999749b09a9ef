//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::EngineState;
use crate::messages::EngineToUi;

// Global engine state, single-threaded in the web worker.
thread_local! {
    static ENGINE_STATE: RefCell<Option<EngineState>> = const { RefCell::new(None) };
}

/// Initialize the engine. Must be called once before any other function.
///
/// Sets up panic hooks for better error messages and creates the engine state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    ENGINE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// The input should be a JSON-serialized `UiToEngine` message.
/// Returns a JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    ENGINE_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        match state.as_mut() {
            Some(state) => dispatch::dispatch_json(state, json_input),
            None => dispatch::encode_response(&EngineToUi::Error {
                message: "engine not initialized; call init() first".to_string(),
            })
            .unwrap_or_default(),
        }
    })
}

/// Per-vertex row colors of the last computation as a Float32Array.
///
/// The array is a copy, aligned with the loaded position buffer, and empty if
/// no rows were computed.
#[wasm_bindgen]
pub fn get_row_colors() -> js_sys::Float32Array {
    ENGINE_STATE.with(|cell| {
        let state = cell.borrow();
        match state.as_ref() {
            Some(state) => js_sys::Float32Array::from(state.row_colors()),
            None => js_sys::Float32Array::new_with_length(0),
        }
    })
}

/// Number of rows in the last computation.
#[wasm_bindgen]
pub fn get_row_count() -> usize {
    ENGINE_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|state| state.result.as_ref())
            .map_or(0, |result| result.rows.len())
    })
}
