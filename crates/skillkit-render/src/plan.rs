//! Generation plan: everything `generate` writes or checks, rendered in memory
//!
//! Building a plan never touches the targets. The caller decides whether to
//! write each artifact or compare it with disk.

use skillkit_skills::{
    cross_check, order_skills, MarketplaceDescriptor, MarketplaceReport, SkillRecord,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::drift::RenderedArtifact;
use crate::error::Result;
use crate::layout::{RepoLayout, AGENTS_FILE, MARKETPLACE_FILE, README_FILE, TEMPLATE_FILE};
use crate::readme::splice_table;
use crate::table::render_table;
use crate::template::render_agents;

/// Report label of the AGENTS.md artifact
pub const AGENTS_LABEL: &str = AGENTS_FILE;
/// Report label of the README table artifact
pub const README_LABEL: &str = "README.md skills table";

/// An artifact that was rendered, or the reason it could not be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedArtifact {
    /// Rendered and ready to write or check
    Ready(RenderedArtifact),
    /// A required input is absent or unreadable
    Unavailable {
        /// Name used in report lines
        label: String,
        /// Target the artifact would have been written to
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

impl PlannedArtifact {
    /// Name used in report lines
    pub fn label(&self) -> &str {
        match self {
            PlannedArtifact::Ready(artifact) => &artifact.label,
            PlannedArtifact::Unavailable { label, .. } => label,
        }
    }
}

/// Ordered skills plus both rendered artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Skills in display order
    pub skills: Vec<SkillRecord>,
    /// AGENTS.md, then the README table
    pub artifacts: Vec<PlannedArtifact>,
    /// Non-fatal notes, such as missing README markers
    pub warnings: Vec<String>,
}

impl GenerationPlan {
    /// Scan, order and render for `layout`
    pub fn build(layout: &RepoLayout) -> Result<Self> {
        let skills = order_skills(layout.scanner().collect()?);
        Ok(Self::render(layout, skills))
    }

    /// Render both artifacts for already ordered `skills`
    pub fn render(layout: &RepoLayout, skills: Vec<SkillRecord>) -> Self {
        let mut warnings = Vec::new();

        let agents = match read_input(&layout.template_path()) {
            Ok(template) => PlannedArtifact::Ready(RenderedArtifact::new(
                AGENTS_LABEL,
                layout.agents_path(),
                render_agents(&template, &skills),
            )),
            Err(reason) => PlannedArtifact::Unavailable {
                label: AGENTS_LABEL.to_string(),
                path: layout.agents_path(),
                reason: format!("template {TEMPLATE_FILE} {reason}"),
            },
        };

        let readme = match read_input(&layout.readme_path()) {
            Ok(current) => {
                let content = splice_table(&current, &render_table(&skills)).unwrap_or_else(|| {
                    debug!("README.md has no skills table markers");
                    warnings.push(format!(
                        "{README_FILE} missing skills table markers, skipping update"
                    ));
                    current
                });
                PlannedArtifact::Ready(RenderedArtifact::new(
                    README_LABEL,
                    layout.readme_path(),
                    content,
                ))
            }
            Err(reason) => PlannedArtifact::Unavailable {
                label: README_LABEL.to_string(),
                path: layout.readme_path(),
                reason: format!("{README_FILE} {reason}"),
            },
        };

        info!("Rendered artifacts for {} skills", skills.len());
        Self {
            skills,
            artifacts: vec![agents, readme],
            warnings,
        }
    }
}

fn read_input(path: &Path) -> std::result::Result<String, String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => "does not exist".to_string(),
        _ => format!("could not be read: {e}"),
    })
}

/// Outcome of the marketplace cross-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceCheck {
    /// Descriptor read and compared
    Checked(MarketplaceReport),
    /// Descriptor absent or undecodable
    Unavailable(String),
}

/// Compare `skills` with the marketplace descriptor under `layout`
pub fn check_marketplace(layout: &RepoLayout, skills: &[SkillRecord]) -> MarketplaceCheck {
    let path = layout.marketplace_path();
    if !path.is_file() {
        return MarketplaceCheck::Unavailable(format!("Missing {MARKETPLACE_FILE}"));
    }

    match MarketplaceDescriptor::load(&path) {
        Ok(descriptor) => MarketplaceCheck::Checked(cross_check(
            skills.iter().map(SkillRecord::name),
            &descriptor,
        )),
        Err(e) => MarketplaceCheck::Unavailable(e.to_string()),
    }
}
