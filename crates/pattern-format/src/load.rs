use serde::Deserialize;

use crate::document::PatternDocument;
use crate::errors::LoadError;
use crate::save::{FORMAT_ID, FORMAT_VERSION};

/// Envelope fields, read before the body so a foreign or newer file is
/// reported as such instead of as a parse error.
#[derive(Debug, Deserialize)]
struct Envelope {
    format: String,
    version: u32,
}

/// Deserialize a pattern from a JSON string.
///
/// Validates the format identifier and version.
pub fn load_pattern(json: &str) -> Result<PatternDocument, LoadError> {
    let envelope: Envelope =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if envelope.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(envelope.format));
    }

    if envelope.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: envelope.version,
            supported_version: FORMAT_VERSION,
        });
    }

    serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))
}
