//! Row detection and ordering.
//!
//! Faces are grouped into horizontal rows in two pure passes:
//!
//! 1. [`classify_faces`] derives each face's base edge, folds the global
//!    elevation extremes and splits faces into those matching the pattern
//!    direction and those excluded from it.
//! 2. [`build_rows`] groups matched faces by elevation triple and re-admits
//!    the excluded cap faces touching the pole the direction would miss.
//!
//! [`order_rows`] then marks the opening and closing rows and sorts each
//! row's faces around its centroid into stitch order.

pub mod classify;
pub mod order;
pub mod types;

pub use classify::{Classification, build_rows, classify_faces};
pub use order::{mark_extremal_rows, order_rows, sort_row_faces};
pub use types::{ElevationExtremes, Row, RowKey, RowSet};
