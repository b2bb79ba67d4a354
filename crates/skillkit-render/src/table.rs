//! README skills table

use skillkit_skills::SkillRecord;

/// Column titles and the separator row
pub const TABLE_HEADER: [&str; 2] = [
    "| Skill | Description | Scripts |",
    "|-------|-------------|---------|",
];

/// Longest description kept as-is, in characters
pub const MAX_SUMMARY_CHARS: usize = 120;
/// Characters kept before the ellipsis when a summary is cut
pub const TRUNCATED_CHARS: usize = 117;
/// Marks a hard-truncated summary
pub const ELLIPSIS: &str = "...";
/// Scripts cell for a skill without scripts
pub const NO_SCRIPTS: &str = "—";

/// First sentence of `description`, hard-truncated when still too long
///
/// The first sentence ends at the first `". "`; the period is kept and the
/// space dropped. Without a sentence break the whole description is used.
pub fn summarize_description(description: &str) -> String {
    let first_sentence = match description.find(". ") {
        Some(end) => format!("{}.", &description[..end]),
        None => description.to_string(),
    };

    if first_sentence.chars().count() > MAX_SUMMARY_CHARS {
        let mut cut: String = first_sentence.chars().take(TRUNCATED_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        first_sentence
    }
}

/// Back-quoted, comma-joined script names
pub fn format_scripts(scripts: &[String]) -> String {
    if scripts.is_empty() {
        return NO_SCRIPTS.to_string();
    }
    scripts
        .iter()
        .map(|script| format!("`{script}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One table row for `skill`
pub fn render_row(skill: &SkillRecord) -> String {
    format!(
        "| **{}** | {} | {} |",
        skill.name,
        summarize_description(&skill.description),
        format_scripts(&skill.scripts)
    )
}

/// Full table, header first, rows joined by newlines, no trailing newline
pub fn render_table(skills: &[SkillRecord]) -> String {
    TABLE_HEADER
        .iter()
        .map(|line| (*line).to_string())
        .chain(skills.iter().map(render_row))
        .collect::<Vec<_>>()
        .join("\n")
}
