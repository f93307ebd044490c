//! Aggregate content index building.
//!
//! Collects every document's frontmatter into a single `{ "tutorials": [...] }`
//! structure sorted by date, newest first. Unlike the validator this is
//! deliberately tolerant: a document only needs `title`, `description`,
//! `date`, and `slug` to be included, and anything else in its frontmatter
//! passes through untouched.

use std::cmp::Reverse;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::document::{DocumentRecord, Metadata};

/// The minimum fields a document needs to appear in the index.
pub const INDEX_REQUIRED_FIELDS: [&str; 4] = ["title", "description", "date", "slug"];

/// One index entry: the document's frontmatter merged with its derived
/// `category` and `path`.
pub type IndexEntry = Metadata;

/// The serialized index artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ContentIndex {
    pub tutorials: Vec<IndexEntry>,
}

/// A document skipped during index building, with the fields it lacked.
/// Warnings never fail the build; the caller decides where to log them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexWarning {
    pub path: String,
    pub missing: Vec<String>,
}

impl fmt::Display for IndexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing required frontmatter in {}: {}",
            self.path,
            self.missing.join(", ")
        )
    }
}

/// Build the aggregate index from extracted documents.
///
/// Documents missing any of [`INDEX_REQUIRED_FIELDS`] are excluded and
/// reported as warnings. Surviving entries are sorted by calendar date
/// descending; the sort is stable, so equal dates keep traversal order, and
/// entries whose date does not parse sort last.
#[must_use]
pub fn build_index(documents: &[DocumentRecord]) -> (ContentIndex, Vec<IndexWarning>) {
    let mut warnings = Vec::new();
    let mut keyed: Vec<(Option<NaiveDate>, IndexEntry)> = Vec::new();

    for doc in documents {
        let missing: Vec<String> = INDEX_REQUIRED_FIELDS
            .iter()
            .filter(|field| !crate::validate::is_present(doc.metadata.get(**field)))
            .map(|field| (*field).to_string())
            .collect();

        if !missing.is_empty() {
            warnings.push(IndexWarning {
                path: doc.path.clone(),
                missing,
            });
            continue;
        }

        let mut entry = doc.metadata.clone();
        entry.insert("category".to_string(), Value::String(doc.category().to_string()));
        entry.insert("path".to_string(), Value::String(doc.path.clone()));

        keyed.push((entry_date(&entry), entry));
    }

    // Calendar comparison, not lexical: stays correct if the date format
    // ever loosens. Stable, so ties keep traversal order.
    keyed.sort_by_key(|(date, _)| Reverse(*date));

    let tutorials = keyed.into_iter().map(|(_, entry)| entry).collect();
    (ContentIndex { tutorials }, warnings)
}

fn entry_date(entry: &IndexEntry) -> Option<NaiveDate> {
    match entry.get("date") {
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        _ => None,
    }
}
