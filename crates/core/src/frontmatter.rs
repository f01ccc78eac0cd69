use serde_json::Value as JsonValue;
use thiserror::Error;

/// A document split into its YAML header and markdown body.
#[derive(Debug)]
pub struct SplitDocument<'a> {
    /// Parsed frontmatter as a JSON object.
    pub meta: JsonValue,
    /// Markdown content following the frontmatter block.
    pub body: &'a str,
}

/// Errors emitted while parsing or extracting frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (e.g., missing terminating `---`).
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Splits YAML frontmatter off the head of a document.
///
/// A UTF-8 BOM and blank lines before the opening fence are tolerated;
/// the returned body never includes the BOM. Documents without a
/// frontmatter block come back whole with an empty metadata object.
pub fn extract_frontmatter(input: &str) -> Result<SplitDocument<'_>, FrontmatterError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    match find_block(input)? {
        Some((block, body)) => Ok(SplitDocument {
            meta: parse_block(block)?,
            body,
        }),
        None => Ok(SplitDocument {
            meta: empty_object(),
            body: input,
        }),
    }
}

/// Locates the fenced block, returning `(yaml, body)` slices.
fn find_block(input: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let mut offset = 0usize;
    let mut lines = input.split_inclusive('\n');

    let block_start = loop {
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if trim_newline(line) == "---" {
            break offset;
        }
        return Ok(None);
    };

    let mut cursor = block_start;
    for line in lines {
        let line_start = cursor;
        cursor += line.len();
        let text = trim_newline(line);
        if text == "---" || text == "..." {
            let block = input[block_start..line_start].trim_end_matches(['\r', '\n']);
            return Ok(Some((block, &input[cursor..])));
        }
    }

    Err(FrontmatterError::Unterminated)
}

fn parse_block(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(empty_object());
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json =
        serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json {
        JsonValue::Null => Ok(empty_object()),
        value @ JsonValue::Object(_) => Ok(value),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

fn empty_object() -> JsonValue {
    JsonValue::Object(Default::default())
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> SplitDocument<'_> {
        extract_frontmatter(input).expect("frontmatter extraction should succeed")
    }

    #[test]
    fn returns_whole_document_when_no_frontmatter() {
        let result = extract("# Title\nBody");
        assert_eq!(result.body, "# Title\nBody");
        assert_eq!(result.meta, JsonValue::Object(Default::default()));
    }

    #[test]
    fn parses_basic_yaml() {
        let input = "---\ntitle: 插件设计与编程\nsidebar_position: 2\n---\n# Content";
        let result = extract(input);
        assert_eq!(result.body, "# Content");
        assert_eq!(
            result.meta.get("title").and_then(JsonValue::as_str),
            Some("插件设计与编程")
        );
        assert_eq!(
            result.meta.get("sidebar_position").and_then(JsonValue::as_i64),
            Some(2)
        );
    }

    #[test]
    fn handles_empty_block() {
        let result = extract("---\n---\n# Body");
        assert_eq!(result.meta, JsonValue::Object(Default::default()));
        assert_eq!(result.body, "# Body");
    }

    #[test]
    fn accepts_document_end_marker_as_closing_fence() {
        let result = extract("---\ntitle: test\n...\nBody");
        assert_eq!(
            result.meta.get("title").and_then(JsonValue::as_str),
            Some("test")
        );
        assert_eq!(result.body, "Body");
    }

    #[test]
    fn strips_bom_and_leading_blank_lines() {
        let input = "\u{feff}\n   \n---\nfoo: bar\n---\nBody";
        let result = extract(input);
        assert_eq!(
            result.meta.get("foo").and_then(JsonValue::as_str),
            Some("bar")
        );
        assert_eq!(result.body, "Body");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let input = "---\r\ntitle: test\r\n---\r\nBody";
        let result = extract(input);
        assert_eq!(
            result.meta.get("title").and_then(JsonValue::as_str),
            Some("test")
        );
        assert_eq!(result.body, "Body");
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let err = extract_frontmatter("---\ninvalid: [unterminated\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)), "{err:?}");
    }

    #[test]
    fn errors_on_unterminated_block() {
        let err = extract_frontmatter("---\ntitle: test").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = extract_frontmatter("---\n- one\n- two\n---\nBody").unwrap_err();
        assert!(matches!(err, FrontmatterError::InvalidRootType));
    }
}
