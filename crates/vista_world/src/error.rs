//! World loading errors

use std::path::PathBuf;
use thiserror::Error;
use vista_core::LocationId;

/// Errors raised while building or loading a location graph
#[derive(Debug, Error)]
pub enum WorldError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Content file did not parse
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// Two locations share a name
    #[error("Duplicate location: {0}")]
    DuplicateLocation(LocationId),
    /// A location has an empty name
    #[error("Location name must not be empty")]
    EmptyName,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WorldError>;
