//! Test harness for row-partitioning development.
//!
//! Provides programmatic tools for scripting pattern sessions through the
//! message bridge, verifying results at every step, and generating diagnostic
//! output.
//!
//! # Key Components
//!
//! - [`PatternBuilder`]: fluent API over `knit_bridge::dispatch()`
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`report`]: structured text pattern descriptions
//! - [`helpers`]: error type and mesh fixtures

pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::PatternReport;
pub use workflow::{ComputedRows, PatternBuilder};
