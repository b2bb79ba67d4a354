//! Drift detection and artifact writing
//!
//! Checking only ever reads. Writing overwrites the target whole.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{RenderError, Result};

/// Freshly rendered content addressed to one target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Name used in report lines
    pub label: String,
    /// Target file
    pub path: PathBuf,
    /// Exact bytes the target should hold
    pub content: String,
}

/// Result of comparing an artifact with its target on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftStatus {
    /// Target matches byte-for-byte
    UpToDate,
    /// Target exists with different content
    OutOfDate,
    /// Target does not exist
    Missing,
}

impl RenderedArtifact {
    /// Create an artifact
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            content,
        }
    }

    /// Compare with the target without modifying it
    pub fn check(&self) -> Result<DriftStatus> {
        let current = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DriftStatus::Missing),
            Err(e) => return Err(RenderError::io(&self.path, e)),
        };

        let status = if current == self.content.as_bytes() {
            DriftStatus::UpToDate
        } else {
            DriftStatus::OutOfDate
        };
        debug!("{} at {:?}: {:?}", self.label, self.path, status);
        Ok(status)
    }

    /// Write the content to the target, creating parent folders
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
        }
        fs::write(&self.path, &self.content).map_err(|e| RenderError::io(&self.path, e))?;
        debug!("Wrote {} ({} bytes) to {:?}", self.label, self.content.len(), self.path);
        Ok(())
    }
}
