use serde::Serialize;

use crate::document::PatternDocument;
use crate::errors::SaveError;

/// Format identifier written to every pattern file.
pub const FORMAT_ID: &str = "knit-rows";

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Serialize)]
struct PatternFile<'a> {
    format: &'a str,
    version: u32,
    #[serde(flatten)]
    document: &'a PatternDocument,
}

/// Serialize a pattern to a pretty-printed JSON string.
pub fn save_pattern(document: &PatternDocument) -> Result<String, SaveError> {
    let file = PatternFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        document,
    };
    serde_json::to_string_pretty(&file).map_err(|e| SaveError::Serialize(e.to_string()))
}
