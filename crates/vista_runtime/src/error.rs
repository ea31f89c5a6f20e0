//! Runtime errors

use std::path::PathBuf;
use thiserror::Error;
use vista_navigation::NavigationError;
use vista_world::WorldError;

/// Anything that stops the explorer from starting
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file did not parse
    #[error("Invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
    /// World content failed to load
    #[error(transparent)]
    World(#[from] WorldError),
    /// Navigation could not start
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
