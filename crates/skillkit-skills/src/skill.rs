//! Skill record model
//!
//! Each skill is a folder containing SKILL.md with frontmatter, plus optional
//! `scripts/` and `references/` folders.

use std::path::{Path, PathBuf};

/// Manifest file name inside every skill folder
pub const MANIFEST_FILE: &str = "SKILL.md";
/// Folder holding runnable example scripts
pub const SCRIPTS_DIR: &str = "scripts";
/// Folder holding reference documents
pub const REFERENCES_DIR: &str = "references";
/// Extension of files listed as a skill's scripts
pub const SCRIPT_EXTENSION: &str = "py";

/// Maximum allowed name length, in characters
pub const MAX_NAME_LENGTH: usize = 64;
/// Maximum allowed description length, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// One discovered skill with a usable name and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    /// Skill name from frontmatter
    pub name: String,
    /// Skill description from frontmatter
    pub description: String,
    /// Script file names, sorted lexicographically
    pub scripts: Vec<String>,
    /// Skill folder the record was read from
    pub path: PathBuf,
}

impl SkillRecord {
    /// Build a record that is not tied to a folder on disk
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            scripts: Vec::new(),
            path: PathBuf::new(),
        }
    }

    /// Attach script names
    #[must_use]
    pub fn with_scripts<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts = scripts.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the folder the record came from
    #[must_use]
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = path.to_path_buf();
        self
    }

    /// Get the skill name
    pub fn name(&self) -> &str {
        &self.name
    }
}
