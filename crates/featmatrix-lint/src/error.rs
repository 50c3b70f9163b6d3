//! Error types for lint configuration assembly.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a lint configuration.
#[derive(Debug, Error)]
pub enum LintConfigError {
    /// The manifest could not be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest is not a JSON object with object-valued dependency maps.
    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The override table is not a map of plugin names to options.
    #[error("invalid plugin override table: {0}")]
    Overrides(#[from] serde_yaml::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize lint configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for lint configuration operations.
pub type Result<T> = std::result::Result<T, LintConfigError>;
