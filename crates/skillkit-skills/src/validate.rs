//! Strict validation of skill folders
//!
//! Every check runs and every finding is collected; only a missing manifest
//! or a manifest without frontmatter short-circuits the remaining checks.

use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::Result;
use crate::frontmatter;
use crate::skill::{
    MANIFEST_FILE, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, REFERENCES_DIR, SCRIPTS_DIR,
};

/// Frontmatter keys a manifest may declare
pub const ALLOWED_FRONTMATTER_KEYS: &[&str] = &[
    "name",
    "description",
    "license",
    "allowed-tools",
    "metadata",
    "compatibility",
];

/// Lowercase alphanumeric segments joined by single hyphens, starting with a letter
const KEBAB_CASE_PATTERN: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

/// Markdown links into `references/` or `scripts/`
const LOCAL_LINK_PATTERN: &str = r"\[.*?\]\(((?:references|scripts)/[^)]+)\)";

/// One problem found in a skill folder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// No manifest document in the folder
    #[error("SKILL.md not found")]
    ManifestNotFound,

    /// Manifest exists but could not be read as UTF-8 text
    #[error("SKILL.md could not be read: {0}")]
    ManifestUnreadable(String),

    /// Manifest has no parsable frontmatter
    #[error("No YAML frontmatter found")]
    NoFrontmatter,

    /// `name` absent or empty
    #[error("Missing 'name' in frontmatter")]
    MissingName,

    /// `name` longer than the limit
    #[error("name exceeds 64 characters ({0})")]
    NameTooLong(usize),

    /// `name` is not kebab-case
    #[error("name '{0}' is not kebab-case")]
    NameNotKebabCase(String),

    /// `name` differs from the folder name
    #[error("name '{name}' does not match directory name '{dir_name}'")]
    NameMismatch {
        /// Declared name
        name: String,
        /// Folder name
        dir_name: String,
    },

    /// `description` absent or empty
    #[error("Missing 'description' in frontmatter")]
    MissingDescription,

    /// `description` longer than the limit
    #[error("description exceeds 1024 characters ({0})")]
    DescriptionTooLong(usize),

    /// `description` contains `<` or `>`
    #[error("description contains angle brackets")]
    DescriptionHasAngleBrackets,

    /// Frontmatter key outside [`ALLOWED_FRONTMATTER_KEYS`]
    #[error("Disallowed frontmatter key '{0}'")]
    DisallowedKey(String),

    /// `references/` or `scripts/` exists but holds nothing
    #[error("Empty {0}/ directory")]
    EmptyDirectory(&'static str),

    /// A body link points at a file that does not exist
    #[error("Referenced file not found: {0}")]
    MissingReference(String),
}

/// Findings for a single skill folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Folder that was validated
    pub dir: PathBuf,
    /// All findings, in check order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no issue was found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Folder name used in report headings
    pub fn dir_name(&self) -> String {
        self.dir
            .file_name()
            .map_or_else(|| self.dir.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Findings rendered with the folder path as prefix
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.issues
            .iter()
            .map(move |issue| format!("{}: {}", self.dir.display(), issue))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "OK    {}", self.dir_name())
        } else {
            write!(f, "FAIL  {}", self.dir_name())?;
            for message in self.messages() {
                write!(f, "\n      {message}")?;
            }
            Ok(())
        }
    }
}

/// Validator holding its compiled patterns
#[derive(Debug, Clone)]
pub struct SkillValidator {
    kebab_case: Regex,
    local_link: Regex,
}

impl SkillValidator {
    /// Compile the validation patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            kebab_case: Regex::new(KEBAB_CASE_PATTERN)?,
            local_link: Regex::new(LOCAL_LINK_PATTERN)?,
        })
    }

    /// True when `name` satisfies the kebab-case grammar
    pub fn is_kebab_case(&self, name: &str) -> bool {
        self.kebab_case.is_match(name)
    }

    /// Validate one skill folder
    pub fn validate_dir(&self, dir: &Path) -> ValidationReport {
        ValidationReport {
            dir: dir.to_path_buf(),
            issues: self.collect_issues(dir),
        }
    }

    fn collect_issues(&self, dir: &Path) -> Vec<ValidationIssue> {
        let manifest = dir.join(MANIFEST_FILE);
        if !manifest.is_file() {
            return vec![ValidationIssue::ManifestNotFound];
        }

        let text = match fs::read_to_string(&manifest) {
            Ok(text) => text,
            Err(e) => return vec![ValidationIssue::ManifestUnreadable(e.to_string())],
        };

        let doc = frontmatter::parse(&text);
        if doc.frontmatter.is_empty() {
            return vec![ValidationIssue::NoFrontmatter];
        }

        let mut issues = Vec::new();
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match doc.frontmatter.non_empty("name") {
            None => issues.push(ValidationIssue::MissingName),
            Some(name) => {
                let len = name.chars().count();
                if len > MAX_NAME_LENGTH {
                    issues.push(ValidationIssue::NameTooLong(len));
                }
                if !self.is_kebab_case(name) {
                    issues.push(ValidationIssue::NameNotKebabCase(name.to_string()));
                }
                if name != dir_name {
                    issues.push(ValidationIssue::NameMismatch {
                        name: name.to_string(),
                        dir_name: dir_name.clone(),
                    });
                }
            }
        }

        match doc.frontmatter.non_empty("description") {
            None => issues.push(ValidationIssue::MissingDescription),
            Some(description) => {
                let len = description.chars().count();
                if len > MAX_DESCRIPTION_LENGTH {
                    issues.push(ValidationIssue::DescriptionTooLong(len));
                }
                if description.contains(['<', '>']) {
                    issues.push(ValidationIssue::DescriptionHasAngleBrackets);
                }
            }
        }

        issues.extend(
            doc.frontmatter
                .keys()
                .filter(|key| !ALLOWED_FRONTMATTER_KEYS.contains(key))
                .map(|key| ValidationIssue::DisallowedKey(key.to_string())),
        );

        for sub in [REFERENCES_DIR, SCRIPTS_DIR] {
            if is_empty_dir(&dir.join(sub)) {
                issues.push(ValidationIssue::EmptyDirectory(sub));
            }
        }

        for captures in self.local_link.captures_iter(doc.body) {
            let target = &captures[1];
            if !dir.join(target).exists() {
                issues.push(ValidationIssue::MissingReference(target.to_string()));
            }
        }

        issues
    }
}

fn is_empty_dir(path: &Path) -> bool {
    path.is_dir()
        && fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
}
