//! Error types for the catalog crate.
//!
//! Everything that can go wrong while loading, indexing or validating
//! storage listings. The discovery pipeline itself never fails; these
//! errors only surface at the edges where fixture files are read and
//! written.

use thiserror::Error;

/// Errors that can occur while loading or manipulating the listing catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Fixture JSON couldn't be parsed
    ///
    /// `line` is the line reported by serde_json (0 when unknown)
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A listing field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The same listing id appeared twice in one fixture
    #[error("Duplicate listing id: {id}")]
    DuplicateListing { id: String },

    /// Referenced listing doesn't exist (e.g. toggling an unknown favorite)
    #[error("Missing reference: listing with id {id}")]
    MissingReference { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
