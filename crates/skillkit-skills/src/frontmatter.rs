//! Frontmatter extraction for SKILL.md documents
//!
//! The metadata block is a flat `key: value` list between two `---`
//! delimiters. Parsing never fails: a document without a closed block yields
//! an empty [`Frontmatter`] and the original text as body, and callers decide
//! whether that makes the skill invalid.

/// Delimiter opening and closing the metadata block
pub const DELIMITER: &str = "---";

/// Flat, case-sensitive key/value mapping read from a metadata block
///
/// Keys keep the position of their first occurrence; a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a value, treating an empty string as absent
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Keys in first-occurrence order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key was parsed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// Result of splitting a document into metadata and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument<'a> {
    /// Parsed metadata, empty when the document has no closed block
    pub frontmatter: Frontmatter,
    /// Text after the closing delimiter, or the whole input
    pub body: &'a str,
}

impl<'a> ParsedDocument<'a> {
    fn without_frontmatter(text: &'a str) -> Self {
        Self {
            frontmatter: Frontmatter::default(),
            body: text,
        }
    }
}

/// Split `text` into its frontmatter mapping and remaining body
pub fn parse(text: &str) -> ParsedDocument<'_> {
    if !text.starts_with(DELIMITER) {
        return ParsedDocument::without_frontmatter(text);
    }

    let mut segments = text.splitn(3, DELIMITER);
    let (Some(_), Some(block), Some(body)) = (segments.next(), segments.next(), segments.next())
    else {
        return ParsedDocument::without_frontmatter(text);
    };

    let mut frontmatter = Frontmatter::default();
    for line in block.trim().lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim(), strip_quotes(value.trim()));
        }
    }

    ParsedDocument { frontmatter, body }
}

/// Remove one matching pair of surrounding double or single quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
