//! Fixed repository layout the generators read from and write to

use skillkit_skills::SkillScanner;
use std::path::PathBuf;

/// Default skills folder, relative to the repository root
pub const DEFAULT_SKILLS_DIR: &str = "skills";
/// AGENTS.md template
pub const TEMPLATE_FILE: &str = "scripts/AGENTS_TEMPLATE.md";
/// Rendered agent guide
pub const AGENTS_FILE: &str = "AGENTS.md";
/// README holding the skills table
pub const README_FILE: &str = "README.md";
/// Marketplace descriptor
pub const MARKETPLACE_FILE: &str = ".claude-plugin/marketplace.json";
/// Source plugin manifest
pub const CLAUDE_PLUGIN_FILE: &str = ".claude-plugin/plugin.json";
/// Derived Cursor plugin manifest
pub const CURSOR_PLUGIN_FILE: &str = ".cursor-plugin/plugin.json";

/// Paths of every input and output, resolved against a repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Repository root
    pub root: PathBuf,
    /// Skills folder relative to the root
    pub skills_dir: String,
    /// Folder-name prefix identifying skill units
    pub skill_prefix: String,
}

impl RepoLayout {
    /// Layout rooted at `root` with default skills folder and prefix
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skills_dir: DEFAULT_SKILLS_DIR.to_string(),
            skill_prefix: skillkit_skills::scanner::DEFAULT_SKILL_PREFIX.to_string(),
        }
    }

    /// Override the skills folder
    #[must_use]
    pub fn with_skills_dir(mut self, skills_dir: impl Into<String>) -> Self {
        self.skills_dir = skills_dir.into();
        self
    }

    /// Override the skill folder prefix
    #[must_use]
    pub fn with_skill_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.skill_prefix = prefix.into();
        self
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute skills folder
    pub fn skills_path(&self) -> PathBuf {
        self.resolve(&self.skills_dir)
    }

    /// AGENTS.md template path
    pub fn template_path(&self) -> PathBuf {
        self.resolve(TEMPLATE_FILE)
    }

    /// AGENTS.md path
    pub fn agents_path(&self) -> PathBuf {
        self.resolve(AGENTS_FILE)
    }

    /// README.md path
    pub fn readme_path(&self) -> PathBuf {
        self.resolve(README_FILE)
    }

    /// Marketplace descriptor path
    pub fn marketplace_path(&self) -> PathBuf {
        self.resolve(MARKETPLACE_FILE)
    }

    /// Source plugin manifest path
    pub fn claude_plugin_path(&self) -> PathBuf {
        self.resolve(CLAUDE_PLUGIN_FILE)
    }

    /// Derived Cursor plugin manifest path
    pub fn cursor_plugin_path(&self) -> PathBuf {
        self.resolve(CURSOR_PLUGIN_FILE)
    }

    /// Scanner over the skills folder
    pub fn scanner(&self) -> SkillScanner {
        SkillScanner::new(self.skills_path()).with_prefix(self.skill_prefix.clone())
    }
}
