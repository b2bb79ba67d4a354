use serde::Deserialize;
use skillkit_render::layout::DEFAULT_SKILLS_DIR;
use skillkit_render::RepoLayout;
use skillkit_skills::scanner::DEFAULT_SKILL_PREFIX;
use std::path::{Path, PathBuf};

/// Local configuration file looked up in the working directory (extension optional)
const LOCAL_CONFIG_NAME: &str = "skillkit";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_skills_dir")]
    pub skills_dir: String,
    #[serde(default = "default_skill_prefix")]
    pub skill_prefix: String,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_skills_dir() -> String {
    DEFAULT_SKILLS_DIR.to_string()
}

fn default_skill_prefix() -> String {
    DEFAULT_SKILL_PREFIX.to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            skills_dir: default_skills_dir(),
            skill_prefix: default_skill_prefix(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. `./skillkit.toml` (optional), or the explicit `config_file` (required)
    /// 3. Environment variables with SKILLKIT__ prefix
    /// 4. Command-line root override (highest priority)
    ///
    /// Nothing is written to disk.
    pub fn load(config_file: Option<&Path>, root_override: Option<&str>) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = ::config::Config::builder();

        config_builder = match config_file {
            Some(path) => config_builder.add_source(::config::File::from(path)),
            None => config_builder
                .add_source(::config::File::with_name(LOCAL_CONFIG_NAME).required(false)),
        };

        config_builder =
            config_builder.add_source(::config::Environment::with_prefix("SKILLKIT").separator("__"));

        if let Some(root) = root_override {
            config_builder = config_builder.set_override("repository.root", root)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Repository layout described by this configuration
    pub fn layout(&self) -> RepoLayout {
        RepoLayout::new(expand_home(&self.repository.root))
            .with_skills_dir(self.repository.skills_dir.clone())
            .with_skill_prefix(self.repository.skill_prefix.clone())
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches(['/', '\\'])),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.repository.skill_prefix, "together-");
        assert_eq!(config.logging.level, "warn");

        let layout = config.layout();
        assert_eq!(layout.skills_path(), PathBuf::from("./skills"));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [repository]
            skills_dir = "catalog"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.repository.root, ".");
        assert_eq!(config.repository.skills_dir, "catalog");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_explicit_file_with_root_override() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[repository]\nroot = \"/from/file\"\nskill_prefix = \"acme-\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path()), Some("/from/cli")).unwrap();
        assert_eq!(config.repository.root, "/from/cli");
        assert_eq!(config.repository.skill_prefix, "acme-");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/repo"), home.join("repo"));
            assert_eq!(expand_home("~"), home);
        }
    }
}
