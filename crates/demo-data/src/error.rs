//! Error types for fixture loading.
//!
//! Semantic error enum for fixture parsing and file access, following the
//! project's error handling conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating a fixture set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    Io {
        /// Path to the fixture file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or missing required fields.
    #[error("invalid fixture JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The fixture schema version is not supported.
    #[error("unsupported fixture version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// A required collection contains no records.
    #[error("fixture collection '{collection}' contains no records")]
    EmptyCollection {
        /// Name of the empty collection.
        collection: &'static str,
    },
}
