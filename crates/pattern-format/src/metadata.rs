use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pattern metadata stored alongside the rows and schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub id: Uuid,
    /// Human-readable pattern name.
    pub name: String,
    /// When the pattern was first computed.
    pub created: DateTime<Utc>,
    /// When the pattern was last saved.
    pub modified: DateTime<Utc>,
    /// Name of the model the pattern was computed from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_model: Option<String>,
}

impl PatternMetadata {
    /// Create metadata with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created: now,
            modified: now,
            source_model: None,
        }
    }

    pub fn with_source_model(mut self, model: impl Into<String>) -> Self {
        self.source_model = Some(model.into());
        self
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
