//! Message bridge between a display layer and the row-partitioning kernel.
//!
//! The UI sends [`UiToEngine`] messages (as JSON on the web) and receives one
//! [`EngineToUi`] response per message. All state lives in [`EngineState`].

pub mod dispatch;
pub mod engine_state;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, dispatch_json};
pub use engine_state::{BridgeError, EngineState};
pub use messages::{EngineToUi, UiToEngine};
