//! Frontmatter schema validation.
//!
//! Every document must carry `title`, `description`, `tags`, `date`,
//! `author`, and `slug`. Checks accumulate findings rather than
//! short-circuiting, so one pass over a document reports every problem it
//! has. The validator knows nothing about the filesystem beyond the relative
//! path string it is handed.

use chrono::NaiveDate;
use serde_json::Value;

use crate::document::Metadata;

/// Fields that must be present (and truthy) in every document's frontmatter.
pub const REQUIRED_FIELDS: [&str; 6] =
    ["title", "description", "tags", "date", "author", "slug"];

/// A single validation problem. One finding per independent problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
}

impl Finding {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validate one document's frontmatter against the schema.
///
/// `relative_path` is the document's path relative to the content root,
/// slash-separated; it drives the slug correspondence check. Returns all
/// findings for the document, in check order.
#[must_use]
pub fn validate(metadata: &Metadata, relative_path: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for field in REQUIRED_FIELDS {
        if !is_present(metadata.get(field)) {
            findings.push(Finding::new(format!("Missing required field '{field}'")));
        }
    }

    if let Some(date) = metadata.get("date").filter(|v| is_present(Some(*v))) {
        if !is_valid_date(&scalar_text(date)) {
            findings.push(Finding::new("Invalid date format. Use YYYY-MM-DD format."));
        }
    }

    if let Some(tags) = metadata.get("tags").filter(|v| is_present(Some(*v))) {
        if !tags.is_array() {
            findings.push(Finding::new("Tags must be an array"));
        }
    }

    if let Some(slug) = metadata.get("slug").filter(|v| is_present(Some(*v))) {
        let slug = scalar_text(slug);
        if !is_valid_slug(&slug) {
            findings.push(Finding::new(
                "Invalid slug format. Use only lowercase letters, numbers, and hyphens.",
            ));
        }

        // Independent of the format check; both findings can coexist.
        let expected = expected_slug(relative_path);
        if slug != expected {
            findings.push(Finding::new(format!(
                "Slug '{slug}' doesn't match the expected format based on file path. \
                 Expected: '{expected}'"
            )));
        }
    }

    findings
}

/// The slug a document at `relative_path` must declare: extension stripped,
/// path separators replaced by hyphens. Slugs are derivable from filesystem
/// location alone, so they cannot collide across directories.
#[must_use]
pub fn expected_slug(relative_path: &str) -> String {
    let path = relative_path.replace('\\', "/");
    let stem = match path.rfind('.') {
        // Only strip a dot in the final path component.
        Some(pos) if !path[pos..].contains('/') => &path[..pos],
        _ => path.as_str(),
    };
    stem.replace('/', "-")
}

/// Strict `YYYY-MM-DD` check: the literal digit pattern plus calendar
/// normalization. `2024-02-30` matches the pattern but is not a real date
/// and must be rejected; chrono alone would accept shapes like `2024-6-1`,
/// so both halves are needed.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let pattern_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());

    pattern_ok && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Slug charset check: non-empty, lowercase letters, digits, and hyphens.
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Whether a field counts as present: absent, null, `false`, `0`, and the
/// empty string all count as missing.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Text form of a scalar for the date/slug checks. Non-string scalars fall
/// back to their JSON rendering so checks fail with a message instead of
/// panicking.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
