//! Deterministic display order for skill records

use crate::skill::SkillRecord;

/// Preferred display order; names not listed here follow all listed ones
pub const PRIORITY_ORDER: &[&str] = &[
    "together-chat-completions",
    "together-images",
    "together-video",
    "together-audio",
    "together-embeddings",
    "together-fine-tuning",
    "together-batch-inference",
    "together-evaluations",
    "together-code-interpreter",
    "together-code-sandbox",
    "together-dedicated-endpoints",
    "together-dedicated-containers",
    "together-gpu-clusters",
];

/// Rank shared by every name absent from [`PRIORITY_ORDER`]
pub const UNLISTED_RANK: usize = usize::MAX;

/// Position of `name` in [`PRIORITY_ORDER`], or [`UNLISTED_RANK`]
pub fn priority_rank(name: &str) -> usize {
    PRIORITY_ORDER
        .iter()
        .position(|listed| *listed == name)
        .unwrap_or(UNLISTED_RANK)
}

/// Sort records by priority rank
///
/// The sort is stable, so unlisted records keep their input (folder-name)
/// order relative to each other.
pub fn order_skills(mut records: Vec<SkillRecord>) -> Vec<SkillRecord> {
    records.sort_by_key(|record| priority_rank(&record.name));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[SkillRecord]) -> Vec<&str> {
        records.iter().map(SkillRecord::name).collect()
    }

    #[test]
    fn test_listed_before_unlisted() {
        let ordered = order_skills(vec![
            SkillRecord::new("z-skill", "z"),
            SkillRecord::new("together-chat-completions", "chat"),
        ]);
        assert_eq!(names(&ordered), vec!["together-chat-completions", "z-skill"]);
    }

    #[test]
    fn test_priority_table_order() {
        let ordered = order_skills(vec![
            SkillRecord::new("together-audio", "a"),
            SkillRecord::new("together-images", "i"),
            SkillRecord::new("together-video", "v"),
        ]);
        assert_eq!(
            names(&ordered),
            vec!["together-images", "together-video", "together-audio"]
        );
    }

    #[test]
    fn test_unlisted_keep_input_order() {
        let ordered = order_skills(vec![
            SkillRecord::new("together-b-new", "b"),
            SkillRecord::new("together-audio", "a"),
            SkillRecord::new("together-a-new", "a"),
        ]);
        assert_eq!(
            names(&ordered),
            vec!["together-audio", "together-b-new", "together-a-new"]
        );
    }

    #[test]
    fn test_rank_lookup() {
        assert_eq!(priority_rank("together-chat-completions"), 0);
        assert_eq!(priority_rank("not-listed"), UNLISTED_RANK);
    }
}
