//! Navigation errors

use thiserror::Error;
use vista_core::LocationId;

/// Errors that stop a navigation session from being usable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No starting location was configured
    #[error("No starting location configured")]
    NoStartingLocation,
    /// A location id is not part of the graph
    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NavigationError>;
