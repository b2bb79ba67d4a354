//! Cursor plugin manifest derived from the Claude plugin manifest
//!
//! The derived file is pretty-printed with two-space indentation and every
//! non-ASCII character escaped as `\uXXXX`, so it is byte-identical to
//! manifests produced by the existing Python tooling.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};

use crate::drift::RenderedArtifact;
use crate::error::{RenderError, Result};
use crate::layout::RepoLayout;

/// Key added to the derived manifest
pub const SKILLS_DIRECTORY_KEY: &str = "skills_directory";
/// Value of [`SKILLS_DIRECTORY_KEY`], independent of the configured skills folder
pub const SKILLS_DIRECTORY: &str = "skills";

/// Add the skills folder key to a manifest object
///
/// An existing key keeps its position; otherwise the key is appended.
/// Returns `None` when `manifest` is not an object.
pub fn derive_cursor_manifest(mut manifest: Value, skills_dir: &str) -> Option<Value> {
    manifest
        .as_object_mut()?
        .insert(SKILLS_DIRECTORY_KEY.to_string(), Value::String(skills_dir.to_string()));
    Some(manifest)
}

/// Pretty formatter that escapes everything outside printable ASCII
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::new(),
        }
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            // DEL is escaped along with everything above it
            if ch < '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `value` as indented, ASCII-only JSON
pub fn to_ascii_pretty(value: &Value) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, AsciiPrettyFormatter::new());
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render `.cursor-plugin/plugin.json` from `.claude-plugin/plugin.json`
pub fn cursor_plugin_artifact(layout: &RepoLayout) -> Result<RenderedArtifact> {
    let source_path = layout.claude_plugin_path();
    let text = fs::read_to_string(&source_path).map_err(|e| RenderError::io(&source_path, e))?;
    let manifest: Value = serde_json::from_str(&text).map_err(|source| RenderError::Json {
        path: source_path.clone(),
        source,
    })?;

    let derived = derive_cursor_manifest(manifest, SKILLS_DIRECTORY).ok_or_else(|| {
        RenderError::NotAnObject {
            path: source_path.clone(),
        }
    })?;

    let mut content = to_ascii_pretty(&derived).map_err(|source| RenderError::Json {
        path: source_path,
        source,
    })?;
    content.push('\n');

    Ok(RenderedArtifact::new(
        ".cursor-plugin/plugin.json",
        layout.cursor_plugin_path(),
        content,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_appended_and_order_kept() {
        let source: Value =
            serde_json::from_str(r#"{"name": "together", "version": "1.0.0", "author": {"name": "x"}}"#)
                .unwrap();
        let derived = derive_cursor_manifest(source, "skills").unwrap();
        let keys: Vec<_> = derived.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "version", "author", "skills_directory"]);
    }

    #[test]
    fn test_existing_key_replaced_in_place() {
        let source: Value =
            serde_json::from_str(r#"{"skills_directory": "old", "name": "together"}"#).unwrap();
        let derived = derive_cursor_manifest(source, "skills").unwrap();
        assert_eq!(derived, json!({"skills_directory": "skills", "name": "together"}));
        assert_eq!(
            derived.as_object().unwrap().keys().next().map(String::as_str),
            Some("skills_directory")
        );
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(derive_cursor_manifest(json!(["a"]), "skills").is_none());
    }

    #[test]
    fn test_artifact_content() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = RepoLayout::new(tmp.path());
        fs::create_dir_all(tmp.path().join(".claude-plugin")).unwrap();
        fs::write(
            layout.claude_plugin_path(),
            r#"{"name":"together","keywords":[]}"#,
        )
        .unwrap();

        let artifact = cursor_plugin_artifact(&layout).unwrap();
        assert_eq!(
            artifact.content,
            "{\n  \"name\": \"together\",\n  \"keywords\": [],\n  \"skills_directory\": \"skills\"\n}\n"
        );
        assert_eq!(artifact.path, layout.cursor_plugin_path());
    }

    #[test]
    fn test_non_ascii_escaped() {
        let value = json!({
            "description": "Chat \u{2014} images",
            "emoji": "\u{1F600}",
            "plain": "tab\tquote\"",
            "nested": ["caf\u{e9}"]
        });
        assert_eq!(
            to_ascii_pretty(&value).unwrap(),
            "{\n  \"description\": \"Chat \\u2014 images\",\n  \"emoji\": \"\\ud83d\\ude00\",\n  \"plain\": \"tab\\tquote\\\"\",\n  \"nested\": [\n    \"caf\\u00e9\"\n  ]\n}"
        );
    }

    #[test]
    fn test_non_ascii_keys_escaped() {
        let value = json!({"na\u{ef}ve": 1});
        assert_eq!(to_ascii_pretty(&value).unwrap(), "{\n  \"na\\u00efve\": 1\n}");
    }

    #[test]
    fn test_skills_directory_ignores_configured_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = RepoLayout::new(tmp.path()).with_skills_dir("catalog");
        fs::create_dir_all(tmp.path().join(".claude-plugin")).unwrap();
        fs::write(
            layout.claude_plugin_path(),
            r#"{"name":"together","description":"Chat \u2014 images"}"#,
        )
        .unwrap();

        let artifact = cursor_plugin_artifact(&layout).unwrap();
        assert_eq!(
            artifact.content,
            "{\n  \"name\": \"together\",\n  \"description\": \"Chat \\u2014 images\",\n  \"skills_directory\": \"skills\"\n}\n"
        );
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = cursor_plugin_artifact(&RepoLayout::new(tmp.path())).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
