//! Splicing the skills table into README.md

/// Line after which the generated table starts
pub const TABLE_BEGIN_MARKER: &str = "<!-- BEGIN_SKILLS_TABLE -->";
/// Line at which the generated table ends
pub const TABLE_END_MARKER: &str = "<!-- END_SKILLS_TABLE -->";

/// Replace whatever sits between the table markers with `table`
///
/// Everything up to and including the begin marker, and everything from the
/// end marker onward, is kept byte-for-byte. Returns `None` when either
/// marker is absent (or the end marker only appears before the begin marker).
pub fn splice_table(readme: &str, table: &str) -> Option<String> {
    let begin = readme.find(TABLE_BEGIN_MARKER)? + TABLE_BEGIN_MARKER.len();
    let end = begin + readme[begin..].find(TABLE_END_MARKER)?;
    Some(format!("{}\n{}\n{}", &readme[..begin], table, &readme[end..]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_between_markers() {
        let readme = "# Title\n\n<!-- BEGIN_SKILLS_TABLE -->\nold table\n<!-- END_SKILLS_TABLE -->\n\nFooter\n";
        let out = splice_table(readme, "| new |").unwrap();
        assert_eq!(
            out,
            "# Title\n\n<!-- BEGIN_SKILLS_TABLE -->\n| new |\n<!-- END_SKILLS_TABLE -->\n\nFooter\n"
        );
    }

    #[test]
    fn test_splice_is_a_fixed_point() {
        let readme = "<!-- BEGIN_SKILLS_TABLE --><!-- END_SKILLS_TABLE -->";
        let once = splice_table(readme, "T").unwrap();
        let twice = splice_table(&once, "T").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_markers() {
        assert!(splice_table("no markers", "T").is_none());
        assert!(splice_table("<!-- BEGIN_SKILLS_TABLE -->", "T").is_none());
        assert!(splice_table("<!-- END_SKILLS_TABLE -->", "T").is_none());
        assert!(
            splice_table("<!-- END_SKILLS_TABLE -->\n<!-- BEGIN_SKILLS_TABLE -->", "T").is_none()
        );
    }
}
