//! AGENTS.md template expansion
//!
//! The template language has one scalar placeholder, one repeated block and
//! two per-item placeholders. Expansion is two-phase: locate the block, then
//! substitute. A template without a complete block only gets the scalar pass.

use skillkit_skills::SkillRecord;

/// Replaced everywhere with the number of skills
pub const SKILL_COUNT: &str = "{{skill_count}}";
/// Opens the repeated block; the item template starts on the next line
pub const BLOCK_START: &str = "{{#skills}}\n";
/// Closes the repeated block
pub const BLOCK_END: &str = "{{/skills}}";
/// Per-item skill name
pub const ITEM_NAME: &str = "{{name}}";
/// Per-item skill description
pub const ITEM_DESCRIPTION: &str = "{{description}}";

/// Byte range of the repeated block and the item template inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockRegion {
    start: usize,
    end: usize,
    item_start: usize,
    item_end: usize,
}

fn locate_block(text: &str) -> Option<BlockRegion> {
    let start = text.find(BLOCK_START)?;
    let item_start = start + BLOCK_START.len();
    let item_end = item_start + text[item_start..].find(BLOCK_END)?;
    Some(BlockRegion {
        start,
        end: item_end + BLOCK_END.len(),
        item_start,
        item_end,
    })
}

fn render_item(item_template: &str, skill: &SkillRecord) -> String {
    item_template
        .replace(ITEM_NAME, &skill.name)
        .replace(ITEM_DESCRIPTION, &skill.description)
}

/// Expand `template` for the ordered `skills`
pub fn render_agents(template: &str, skills: &[SkillRecord]) -> String {
    let output = template.replace(SKILL_COUNT, &skills.len().to_string());

    let Some(region) = locate_block(&output) else {
        return output;
    };

    let item_template = &output[region.item_start..region.item_end];
    let items: String = skills
        .iter()
        .map(|skill| render_item(item_template, skill))
        .collect();

    format!(
        "{}{}\n{}",
        &output[..region.start],
        items.trim_end_matches('\n'),
        &output[region.end..]
    )
}
