//! Skill discovery over a skills directory
//!
//! Scanning is permissive: a folder with no manifest, an unreadable manifest,
//! or missing `name`/`description` is skipped with a debug line and never
//! aborts the scan. The validator applies the strict rules.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, SkillError};
use crate::frontmatter;
use crate::skill::{SkillRecord, MANIFEST_FILE, SCRIPTS_DIR, SCRIPT_EXTENSION};

/// Folder-name prefix identifying skill units
pub const DEFAULT_SKILL_PREFIX: &str = "together-";

/// Walks a skills directory and loads skill records
#[derive(Debug, Clone)]
pub struct SkillScanner {
    root: PathBuf,
    prefix: String,
}

impl SkillScanner {
    /// Create a scanner over `root` using the default prefix
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: DEFAULT_SKILL_PREFIX.to_string(),
        }
    }

    /// Override the folder-name prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every prefixed subdirectory, sorted by name, whether or not it has a manifest
    pub fn unit_dirs(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            warn!("Skills directory does not exist: {:?}", self.root);
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| SkillError::io(&self.root, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SkillError::io(&self.root, e))?;
            let path = entry.path();
            let matches_prefix = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&self.prefix));

            if path.is_dir() && matches_prefix {
                dirs.push(path);
            }
        }

        dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(dirs)
    }

    /// Load every valid skill record, in folder-name order
    pub fn collect(&self) -> Result<Vec<SkillRecord>> {
        let mut records = Vec::new();

        for dir in self.unit_dirs()? {
            match load_record(&dir) {
                Ok(Some(record)) => {
                    debug!("Discovered skill: {} at {:?}", record.name, dir);
                    records.push(record);
                }
                Ok(None) => debug!("Skipping {:?}: no name/description", dir),
                Err(e) => debug!("Skipping {:?}: {}", dir, e),
            }
        }

        info!("Discovered {} skills in {:?}", records.len(), self.root);
        Ok(records)
    }
}

/// Load a skill record from one folder
///
/// Returns `Ok(None)` when the manifest is absent or lacks a non-empty
/// `name` or `description`.
pub fn load_record(dir: &Path) -> Result<Option<SkillRecord>> {
    let manifest = dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Ok(None);
    }

    let text = fs::read_to_string(&manifest).map_err(|e| SkillError::io(&manifest, e))?;
    let doc = frontmatter::parse(&text);

    let (Some(name), Some(description)) = (
        doc.frontmatter.non_empty("name"),
        doc.frontmatter.non_empty("description"),
    ) else {
        return Ok(None);
    };

    let scripts = list_scripts(&dir.join(SCRIPTS_DIR))?;

    Ok(Some(
        SkillRecord::new(name, description)
            .with_scripts(scripts)
            .with_path(dir),
    ))
}

/// Script file names in `scripts_dir`, sorted; empty when the folder is absent
pub fn list_scripts(scripts_dir: &Path) -> Result<Vec<String>> {
    if !scripts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(scripts_dir).map_err(|e| SkillError::io(scripts_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SkillError::io(scripts_dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION)
        {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn write_skill(root: &Path, dir: &str, manifest: &str) -> PathBuf {
        let path = root.join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(MANIFEST_FILE), manifest).unwrap();
        path
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let scanner = SkillScanner::new("/nonexistent/skills/root");
        assert!(scanner.collect().unwrap().is_empty());
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(
            tmp.path(),
            "together-video",
            "---\nname: together-video\ndescription: Video.\n---\n",
        );
        write_skill(
            tmp.path(),
            "together-audio",
            "---\nname: together-audio\ndescription: Audio.\n---\n",
        );
        write_skill(tmp.path(), "other-skill", "---\nname: other-skill\ndescription: x\n---\n");
        write_skill(tmp.path(), "together-broken", "no frontmatter here");
        write_skill(tmp.path(), "together-nodesc", "---\nname: together-nodesc\n---\n");
        fs::create_dir_all(tmp.path().join("together-empty")).unwrap();
        fs::write(tmp.path().join("together-file.md"), "not a dir").unwrap();

        let scanner = SkillScanner::new(tmp.path());
        let names: Vec<_> = scanner
            .collect()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["together-audio", "together-video"]);

        let dirs: Vec<_> = scanner
            .unit_dirs()
            .unwrap()
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            dirs,
            vec![
                "together-audio",
                "together-broken",
                "together-empty",
                "together-nodesc",
                "together-video"
            ]
        );
    }

    #[test]
    fn test_scripts_are_filtered_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "together-audio",
            "---\nname: together-audio\ndescription: Audio.\n---\n",
        );
        let scripts = dir.join(SCRIPTS_DIR);
        fs::create_dir_all(&scripts).unwrap();
        fs::write(scripts.join("tts_generate.py"), "").unwrap();
        fs::write(scripts.join("stt_transcribe.py"), "").unwrap();
        fs::write(scripts.join("README.md"), "").unwrap();
        fs::create_dir_all(scripts.join("helpers.py")).unwrap();

        let record = load_record(&dir).unwrap().unwrap();
        assert_eq!(record.scripts, vec!["stt_transcribe.py", "tts_generate.py"]);
        assert_eq!(record.path, dir);
    }

    #[test]
    fn test_custom_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "acme-search", "---\nname: acme-search\ndescription: s\n---\n");
        write_skill(
            tmp.path(),
            "together-audio",
            "---\nname: together-audio\ndescription: a\n---\n",
        );

        let records = SkillScanner::new(tmp.path())
            .with_prefix("acme-")
            .collect()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "acme-search");
    }
}
