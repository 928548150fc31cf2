//! Errors raised while building a query from user-supplied text.
//!
//! Running the pipeline never fails; only turning strings into sort keys
//! and presets can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown price preset: {0}")]
    UnknownPreset(String),
}
