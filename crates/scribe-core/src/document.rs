//! Document record — one markdown file's worth of extracted content.

use std::collections::BTreeMap;

/// Frontmatter metadata: arbitrary keys, dynamic values.
///
/// A `BTreeMap` rather than a `HashMap` so that serialized output is
/// deterministic: regenerating the index over an unchanged tree must
/// produce byte-identical bytes.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A single document under the content root.
///
/// Constructed fresh on every run by reading from disk, never mutated
/// afterwards. `path` is relative to the content root and always uses `/`
/// separators regardless of platform.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Path relative to the content root, slash-separated.
    pub path: String,

    /// Parsed frontmatter fields.
    pub metadata: Metadata,

    /// Everything below the frontmatter block, byte-for-byte.
    pub body: String,
}

impl DocumentRecord {
    /// The document's category: its containing directory relative to the
    /// content root. Empty for root-level documents.
    #[must_use]
    pub fn category(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        }
    }
}
