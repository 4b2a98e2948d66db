//! Error taxonomy for the crate.
//!
//! `RddError` covers the collaborator level (file read / JSON parse /
//! malformed record set), the core reconciler (empty source, column-count
//! mismatch, missing column), and CLI validation (invalid arguments).

use std::fmt;
use std::path::PathBuf;

/// Unified error type returned across the crate.
#[derive(Debug)]
pub enum RddError {
    /// A source or target file could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A file's contents were not valid JSON.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON document was not a top-level array of flat objects.
    MalformedRecordSet { path: PathBuf, message: String },
    /// The source record set was empty.
    EmptySource,
    /// Source and target record sets have differing column counts.
    ColumnCountMismatch { source: usize, target: usize },
    /// A key or compared column was absent from a record.
    MissingColumn { column: String },
    /// Command-line arguments failed validation.
    InvalidArgs { message: String },
}

impl fmt::Display for RddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RddError::FileRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            RddError::JsonParse { path, source } => {
                write!(f, "failed to parse JSON from {}: {}", path.display(), source)
            }
            RddError::MalformedRecordSet { path, message } => {
                write!(f, "malformed record set in {}: {}", path.display(), message)
            }
            RddError::EmptySource => write!(f, "source record set is empty"),
            RddError::ColumnCountMismatch { source, target } => write!(
                f,
                "column counts differ: source has {} columns, target has {}",
                source, target
            ),
            RddError::MissingColumn { column } => write!(f, "missing column: {}", column),
            RddError::InvalidArgs { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RddError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RddError::FileRead { source, .. } => Some(source),
            RddError::JsonParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
