//! Skillkit Skills
//!
//! Reads a folder of skill units (one `together-*` folder per skill, each
//! with a SKILL.md manifest) and turns it into ordered skill records.
//!
//! ## Features
//!
//! - Permissive frontmatter parsing that never fails
//! - Folder scanning with deterministic traversal and script discovery
//! - Priority ordering from a fixed name table
//! - Strict per-folder validation collecting every finding
//! - Cross-check against a plugin marketplace descriptor

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod error;
pub mod frontmatter;
pub mod marketplace;
pub mod ordering;
pub mod scanner;
pub mod skill;
pub mod validate;

pub use error::{Result, SkillError};
pub use frontmatter::{Frontmatter, ParsedDocument};
pub use marketplace::{cross_check, MarketplaceDescriptor, MarketplaceReport};
pub use ordering::{order_skills, PRIORITY_ORDER};
pub use scanner::{load_record, SkillScanner};
pub use skill::SkillRecord;
pub use validate::{SkillValidator, ValidationIssue, ValidationReport, ALLOWED_FRONTMATTER_KEYS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        order_skills, MarketplaceDescriptor, SkillError, SkillRecord, SkillScanner,
        SkillValidator,
    };
}
