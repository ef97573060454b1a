//! Floor plan errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, configuring or reporting a floor plan.
///
/// Traversal of a loaded grid never fails; only the edges do.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unable to find floor plan '{}'", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read floor plan '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
