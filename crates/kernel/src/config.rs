//! Configuration for a row-partitioning run.

use knit_types::{Pattern, ShiftPolicy};
use serde::{Deserialize, Serialize};

/// Vertices per face of a triangle list.
pub const TRIANGLE_VERTICES: usize = 3;

/// Coordinates per vertex (x, y, z).
pub const AXES_COUNT: usize = 3;

/// Color channels per vertex (r, g, b).
pub const COLOR_CHANNELS: usize = 3;

/// Parameters of one run over a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Direction in which rows grow.
    pub pattern: Pattern,
    /// Vertices per face in the position buffer. Only triangles are supported.
    pub vertices_per_face: usize,
    /// Decimal places kept for base lengths and shift ratios.
    pub decimals: u32,
    /// How a row's representative length is chosen for shift ratios.
    pub shift_policy: ShiftPolicy,
    /// Seed for row colors. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::Increment,
            vertices_per_face: TRIANGLE_VERTICES,
            decimals: 2,
            shift_policy: ShiftPolicy::FirstLength,
            seed: None,
        }
    }
}

impl PatternConfig {
    /// Rows grow upward from the lowest pole.
    pub fn increment() -> Self {
        Self {
            pattern: Pattern::Increment,
            ..Self::default()
        }
    }

    /// Rows grow downward from the highest pole.
    pub fn decrement() -> Self {
        Self {
            pattern: Pattern::Decrement,
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_shift_policy(mut self, policy: ShiftPolicy) -> Self {
        self.shift_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_vertices_per_face(mut self, vertices_per_face: usize) -> Self {
        self.vertices_per_face = vertices_per_face;
        self
    }

    /// Floats per face in the position buffer.
    pub fn face_stride(&self) -> usize {
        self.vertices_per_face * AXES_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constructors() {
        assert_eq!(PatternConfig::increment().pattern, Pattern::Increment);
        assert_eq!(PatternConfig::decrement().pattern, Pattern::Decrement);
        assert_eq!(PatternConfig::decrement().decimals, 2);
    }

    #[test]
    fn test_builder() {
        let config = PatternConfig::increment()
            .with_shift_policy(ShiftPolicy::Strict)
            .with_seed(Some(7))
            .with_decimals(3);
        assert_eq!(config.shift_policy, ShiftPolicy::Strict);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.decimals, 3);
        assert_eq!(config.face_stride(), 9);
    }
}
