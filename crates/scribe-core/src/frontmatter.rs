//! YAML frontmatter extraction.
//!
//! Documents carry their metadata in a `---` delimited YAML block at the
//! top of the file:
//! ```markdown
//! ---
//! title: "Intro to Widgets"
//! date: "2024-06-01"
//! tags: [widgets, basics]
//! ---
//!
//! Body content here.
//! ```
//!
//! A document without a leading fence is not an error: it simply has no
//! metadata, and the whole input is its body.

use crate::document::Metadata;
use crate::error::ScribeError;

/// Split raw document text into its frontmatter YAML and body.
///
/// Returns `None` if the document has no opening fence. Otherwise returns
/// `(yaml, body)` where `body` is everything after the closing fence,
/// byte-for-byte (one trailing newline of the fence line is consumed).
///
/// # Errors
///
/// Returns [`ScribeError::Parse`] if an opening fence has no closing fence.
pub fn split_frontmatter(content: &str) -> Result<Option<(&str, &str)>, ScribeError> {
    let Some(rest) = content.strip_prefix("---") else {
        return Ok(None);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        // "---something" is a regular first line, not a fence.
        return Ok(None);
    };

    let (yaml_end, fence_end) = if rest.starts_with("---") {
        (0, 3)
    } else {
        let pos = rest.find("\n---").ok_or_else(|| {
            ScribeError::Parse("no closing '---' frontmatter fence found".to_string())
        })?;
        (pos, pos + 4)
    };

    let yaml = &rest[..yaml_end];
    let body = &rest[fence_end..];
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    Ok(Some((yaml, body)))
}

/// Extract frontmatter metadata and body from raw document text.
///
/// Without an opening fence this returns an empty metadata map and the whole
/// input as body; callers decide whether required fields are missing.
///
/// # Errors
///
/// Returns [`ScribeError::Parse`] for an unclosed fence, invalid YAML, a
/// header that is not a mapping, or non-string header keys. The error carries
/// no path; the caller attaches path context when reporting.
pub fn extract(content: &str) -> Result<(Metadata, &str), ScribeError> {
    let Some((yaml, body)) = split_frontmatter(content)? else {
        return Ok((Metadata::new(), content));
    };

    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| ScribeError::Parse(e.to_string()))?;

    let metadata = match value {
        serde_yaml::Value::Null => Metadata::new(),
        serde_yaml::Value::Mapping(map) => {
            let mut metadata = Metadata::new();
            for (key, value) in map {
                let serde_yaml::Value::String(key) = key else {
                    return Err(ScribeError::Parse(
                        "frontmatter keys must be strings".to_string(),
                    ));
                };
                metadata.insert(key, yaml_to_json(value)?);
            }
            metadata
        }
        _ => {
            return Err(ScribeError::Parse(
                "frontmatter must be a YAML mapping".to_string(),
            ))
        }
    };

    Ok((metadata, body))
}

/// Convert a YAML value into its JSON equivalent.
///
/// Date-like scalars arrive as strings; the validator is responsible for
/// checking their shape.
fn yaml_to_json(value: serde_yaml::Value) -> Result<serde_json::Value, ScribeError> {
    use serde_json::Value as Json;

    Ok(match value {
        serde_yaml::Value::Null => Json::Null,
        serde_yaml::Value::Bool(b) => Json::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::from(i)
            } else if let Some(u) = n.as_u64() {
                Json::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                serde_json::Number::from_f64(f).map(Json::Number).ok_or_else(|| {
                    ScribeError::Parse("non-finite number in frontmatter".to_string())
                })?
            }
        }
        serde_yaml::Value::String(s) => Json::String(s),
        serde_yaml::Value::Sequence(seq) => Json::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (key, value) in map {
                let serde_yaml::Value::String(key) = key else {
                    return Err(ScribeError::Parse(
                        "frontmatter keys must be strings".to_string(),
                    ));
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Json::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}
