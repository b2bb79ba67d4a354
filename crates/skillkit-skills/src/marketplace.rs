//! Plugin marketplace descriptor and skill-set cross-check
//!
//! The descriptor is owned elsewhere; this module only reads it.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SkillError};

/// Marketplace descriptor listing plugins and the skills they bundle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceDescriptor {
    /// Declared plugins
    pub plugins: Vec<PluginEntry>,
}

/// One plugin entry in the descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluginEntry {
    /// Plugin name, when declared
    #[serde(default)]
    pub name: Option<String>,
    /// Skills bundled by this plugin
    #[serde(default)]
    pub skills: Vec<SkillDeclaration>,
}

/// A skill reference inside a plugin entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SkillDeclaration {
    /// Object form: `{ "name": "together-audio" }`
    Named {
        /// Skill name
        name: String,
    },
    /// Bare string form: `"together-audio"`
    Bare(String),
}

impl SkillDeclaration {
    /// Declared skill name
    pub fn name(&self) -> &str {
        match self {
            SkillDeclaration::Named { name } | SkillDeclaration::Bare(name) => name,
        }
    }
}

/// Accepted top-level shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorDocument {
    List(Vec<PluginEntry>),
    Wrapped {
        #[serde(default)]
        plugins: Vec<PluginEntry>,
    },
}

impl MarketplaceDescriptor {
    /// Decode a descriptor from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let plugins = match serde_json::from_str::<DescriptorDocument>(text)? {
            DescriptorDocument::List(plugins) | DescriptorDocument::Wrapped { plugins } => plugins,
        };
        Ok(Self { plugins })
    }

    /// Read and decode a descriptor file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SkillError::io(path, e))?;
        Self::from_json(&text).map_err(|source| SkillError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every skill name declared by any plugin
    pub fn declared_names(&self) -> BTreeSet<String> {
        self.plugins
            .iter()
            .flat_map(|plugin| plugin.skills.iter())
            .map(|skill| skill.name().to_string())
            .collect()
    }
}

/// Differences between discovered skills and declared skills
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceReport {
    /// Discovered skills the descriptor does not declare
    pub undeclared: BTreeSet<String>,
    /// Declared skills that were not discovered
    pub missing: BTreeSet<String>,
}

impl MarketplaceReport {
    /// True when both name sets agree
    pub fn is_consistent(&self) -> bool {
        self.undeclared.is_empty() && self.missing.is_empty()
    }

    /// Human-readable warnings, one per non-empty class
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.undeclared.is_empty() {
            warnings.push(format!(
                "Skills in SKILL.md but not in marketplace.json: {}",
                join_names(&self.undeclared)
            ));
        }
        if !self.missing.is_empty() {
            warnings.push(format!(
                "Skills in marketplace.json but not in SKILL.md: {}",
                join_names(&self.missing)
            ));
        }
        warnings
    }
}

fn join_names(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Compare discovered skill names against the descriptor
pub fn cross_check<'a, I>(skill_names: I, descriptor: &MarketplaceDescriptor) -> MarketplaceReport
where
    I: IntoIterator<Item = &'a str>,
{
    let discovered: BTreeSet<String> = skill_names.into_iter().map(str::to_string).collect();
    let declared = descriptor.declared_names();

    MarketplaceReport {
        undeclared: discovered.difference(&declared).cloned().collect(),
        missing: declared.difference(&discovered).cloned().collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shape() {
        let descriptor = MarketplaceDescriptor::from_json(
            r#"[
                {"name": "together-ai", "skills": [{"name": "B"}, {"name": "C"}]},
                {"name": "empty"}
            ]"#,
        )
        .unwrap();
        assert_eq!(descriptor.plugins.len(), 2);
        assert_eq!(
            descriptor.declared_names().into_iter().collect::<Vec<_>>(),
            vec!["B", "C"]
        );
    }

    #[test]
    fn test_wrapped_shape_with_bare_names() {
        let descriptor = MarketplaceDescriptor::from_json(
            r#"{"name": "market", "owner": {"name": "x"}, "plugins": [{"skills": ["A", {"name": "B", "path": "skills/B"}]}]}"#,
        )
        .unwrap();
        assert_eq!(
            descriptor.declared_names().into_iter().collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_symmetric_difference() {
        let descriptor =
            MarketplaceDescriptor::from_json(r#"[{"skills": [{"name": "B"}, {"name": "C"}]}]"#)
                .unwrap();
        let report = cross_check(["A", "B"], &descriptor);

        assert_eq!(report.undeclared.iter().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(report.missing.iter().collect::<Vec<_>>(), vec!["C"]);
        assert!(!report.is_consistent());
        assert_eq!(
            report.warnings(),
            vec![
                "Skills in SKILL.md but not in marketplace.json: A".to_string(),
                "Skills in marketplace.json but not in SKILL.md: C".to_string(),
            ]
        );
    }

    #[test]
    fn test_consistent() {
        let descriptor = MarketplaceDescriptor::from_json(r#"[{"skills": ["A"]}]"#).unwrap();
        let report = cross_check(["A"], &descriptor);
        assert!(report.is_consistent());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("marketplace.json");
        fs::write(&path, "{not json").unwrap();
        let err = MarketplaceDescriptor::load(&path).unwrap_err();
        assert!(matches!(err, SkillError::Json { .. }));
        assert!(err.to_string().contains("marketplace.json"));
    }
}
