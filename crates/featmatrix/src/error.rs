//! Error types for loading, rendering and writing a capability matrix.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::render::RenderError;

/// Errors that can occur while producing a capability matrix.
///
/// Every failure aborts the run; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// An input file (features or styles) could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The features document is not valid JSON.
    #[error("{}: invalid JSON: {source}", path_label(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The features document parsed, but does not have the record shape.
    #[error("{}: {message}", path_label(.path))]
    Shape {
        path: Option<PathBuf>,
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration{}: {message}", config_location(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// The renderer failed to produce output.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The rendered output could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MatrixError {
    /// Create a shape error for an in-memory document.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            path: None,
            message: message.into(),
        }
    }

    /// Attach a source path to a parse or shape error that has none.
    pub(crate) fn at_path(self, at: impl Into<PathBuf>) -> Self {
        match self {
            Self::Json { path: None, source } => Self::Json {
                path: Some(at.into()),
                source,
            },
            Self::Shape {
                path: None,
                message,
            } => Self::Shape {
                path: Some(at.into()),
                message,
            },
            Self::Config {
                path: None,
                message,
            } => Self::Config {
                path: Some(at.into()),
                message,
            },
            other => other,
        }
    }
}

fn path_label(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "features document".to_string(),
    }
}

fn config_location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
