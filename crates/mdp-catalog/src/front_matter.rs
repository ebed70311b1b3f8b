//! YAML front matter splitting and parsing.
//!
//! A front matter block opens on the first line of a document with `---`
//! (or `= yaml =`) and closes with a line holding the same marker or `...`.
//! A leading byte order mark is ignored.

use serde_json::{Map, Value};

/// Markers that may open a front matter block.
const OPENERS: [&str; 2] = ["---", "= yaml ="];

/// Marker that may close any front matter block.
const ALT_CLOSER: &str = "...";

/// Split a document into its front matter source and body.
///
/// Returns `(None, text)` when the document has no complete front matter
/// block.
pub(crate) fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let content = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some((first_line, rest)) = content.split_once('\n') else {
        return (None, text);
    };
    let opener = first_line.trim_end_matches('\r');
    if !OPENERS.contains(&opener) {
        return (None, text);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        let closes = trimmed
            .strip_prefix(opener)
            .or_else(|| trimmed.strip_prefix(ALT_CLOSER))
            .is_some_and(|tail| tail.trim().is_empty());
        if closes {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// Parse front matter source into an attribute mapping.
///
/// Empty or null front matter yields an empty mapping.
///
/// # Errors
///
/// Returns a message if the YAML is malformed or is not a mapping.
pub(crate) fn parse_attributes(source: &str) -> Result<Map<String, Value>, String> {
    if source.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_yaml::from_str::<Value>(source) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(Map::new()),
        Ok(other) => Err(format!(
            "front matter must be a mapping, found {}",
            value_kind(&other)
        )),
        Err(e) => Err(format!("Invalid YAML: {e}")),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    // ── split_front_matter tests ─────────────────────────────────────

    #[test]
    fn test_split_basic() {
        let text = "---\ntitle: Intro\n---\n# Body\n";
        assert_eq!(
            split_front_matter(text),
            (Some("title: Intro\n"), "# Body\n")
        );
    }

    #[test]
    fn test_split_without_front_matter() {
        let text = "# Just markdown\n";
        assert_eq!(split_front_matter(text), (None, text));
    }

    #[test]
    fn test_split_unclosed_block_is_body() {
        let text = "---\ntitle: Intro\n# Body\n";
        assert_eq!(split_front_matter(text), (None, text));
    }

    #[test]
    fn test_split_dots_closer() {
        let text = "---\na: 1\n...\nbody";
        assert_eq!(split_front_matter(text), (Some("a: 1\n"), "body"));
    }

    #[test]
    fn test_split_yaml_marker() {
        let text = "= yaml =\na: 1\n= yaml =\nbody";
        assert_eq!(split_front_matter(text), (Some("a: 1\n"), "body"));
    }

    #[test]
    fn test_split_crlf_and_bom() {
        let text = "\u{feff}---\r\na: 1\r\n---\r\nbody\r\n";
        assert_eq!(split_front_matter(text), (Some("a: 1\r\n"), "body\r\n"));
    }

    #[test]
    fn test_split_empty_block() {
        let text = "---\n---\nbody";
        assert_eq!(split_front_matter(text), (Some(""), "body"));
    }

    #[test]
    fn test_split_closer_at_end_of_file() {
        let text = "---\na: 1\n---";
        assert_eq!(split_front_matter(text), (Some("a: 1\n"), ""));
    }

    #[test]
    fn test_split_horizontal_rule_later_is_not_front_matter() {
        let text = "Intro\n---\nMore\n---\n";
        assert_eq!(split_front_matter(text), (None, text));
    }

    // ── parse_attributes tests ───────────────────────────────────────

    #[test]
    fn test_parse_mapping() {
        let attrs = parse_attributes("title: Intro\norder: 2\ntags: [a, b]\n").unwrap();
        assert_eq!(
            Value::Object(attrs),
            json!({"title": "Intro", "order": 2, "tags": ["a", "b"]})
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_attributes("").unwrap().is_empty());
        assert!(parse_attributes("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_null() {
        assert!(parse_attributes("~\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_non_mapping_fails() {
        let err = parse_attributes("- a\n- b\n").unwrap_err();
        assert!(err.contains("must be a mapping"));
    }

    #[test]
    fn test_parse_malformed_fails() {
        let err = parse_attributes("title: [unclosed\n").unwrap_err();
        assert!(err.starts_with("Invalid YAML"));
    }
}
