//! Error types for skill scanning and validation

use std::path::PathBuf;
use thiserror::Error;

/// Skill subsystem errors
///
/// Validation findings are reported as data, not through this type. These
/// variants cover failures that prevent a check from running at all.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Filesystem access failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be decoded
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        /// Path of the document
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A built-in pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl SkillError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillError>;
