//! Skillkit Render
//!
//! Turns ordered skill records into the generated repository artifacts and
//! detects drift between those renders and the files on disk.
//!
//! ## Artifacts
//!
//! - `AGENTS.md`, expanded from `scripts/AGENTS_TEMPLATE.md`
//! - the README skills table, spliced between two marker comments
//! - `.cursor-plugin/plugin.json`, derived from `.claude-plugin/plugin.json`
//!
//! Rendering is pure and deterministic; only [`RenderedArtifact::write`]
//! modifies the filesystem.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod cursor;
pub mod drift;
pub mod error;
pub mod layout;
pub mod plan;
pub mod readme;
pub mod table;
pub mod template;

pub use cursor::cursor_plugin_artifact;
pub use drift::{DriftStatus, RenderedArtifact};
pub use error::{RenderError, Result};
pub use layout::RepoLayout;
pub use plan::{check_marketplace, GenerationPlan, MarketplaceCheck, PlannedArtifact};
pub use readme::splice_table;
pub use table::render_table;
pub use template::render_agents;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DriftStatus, GenerationPlan, PlannedArtifact, RenderedArtifact, RepoLayout};
}
