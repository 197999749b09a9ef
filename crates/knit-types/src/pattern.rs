use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction in which rows are knitted along the vertical (Y) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Rows grow upward. A face's base edge is its highest edge and its
    /// lone apex vertex points down.
    #[default]
    Increment,
    /// Rows grow downward. A face's base edge is its lowest edge and its
    /// lone apex vertex points up.
    Decrement,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Increment => "increment",
            Pattern::Decrement => "decrement",
        }
    }

    /// Whether a face with the given elevation triple belongs to this direction.
    pub fn matches(&self, base_y: f64, min_y: f64, max_y: f64) -> bool {
        match self {
            Pattern::Increment => min_y < base_y,
            Pattern::Decrement => max_y > base_y,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "increment" | "incr" => Ok(Pattern::Increment),
            "decrement" | "decr" => Ok(Pattern::Decrement),
            other => Err(format!("unknown pattern direction: {other}")),
        }
    }
}

/// How a row's representative base length is picked when computing the
/// row-to-row shift ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShiftPolicy {
    /// Use the first distinct base length of each row (in stitch order).
    #[default]
    FirstLength,
    /// Reject rows with more than one distinct base length.
    Strict,
}
