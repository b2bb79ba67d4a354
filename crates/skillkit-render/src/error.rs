//! Error types for artifact rendering

use skillkit_skills::SkillError;
use std::path::PathBuf;
use thiserror::Error;

/// Rendering and drift-check errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Scanning the skills directory failed
    #[error(transparent)]
    Skill(#[from] SkillError),

    /// Filesystem access failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be decoded or encoded
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        /// Path of the document
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A plugin manifest is valid JSON but not an object
    #[error("{} must contain a JSON object", path.display())]
    NotAnObject {
        /// Path of the manifest
        path: PathBuf,
    },
}

impl RenderError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, RenderError>;
