//! The two runs over a content tree: validate everything, or collect
//! everything into the aggregate index.
//!
//! Both contain per-document failures at the document boundary: an
//! unreadable file or a malformed header becomes a finding (or warning)
//! naming that document, and the run continues with its siblings. Only a
//! missing content root aborts a run, and that is caught before either
//! pipeline starts (see [`FsSource::open`](crate::source::FsSource::open)).

use std::path::Path;

use scribe_core::{frontmatter, validate, ContentIndex, DocumentRecord, Result, ScribeError};

use crate::report::{TaggedFinding, ValidationReport};
use crate::source::ContentSource;
use crate::walk::{walk, WalkEvent};

/// Validate every document under the source.
///
/// Findings arrive in discovery order: walk errors and per-document errors
/// interleaved with schema findings, each tagged with its path.
#[must_use]
pub fn run_validation(source: &dyn ContentSource, extension: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    for event in walk(source, extension) {
        match event {
            WalkEvent::Error(err) => report.findings.push(TaggedFinding {
                path: err.path,
                message: format!("Error reading directory: {}", err.message),
            }),
            WalkEvent::File(path) => {
                let findings = validate_one(source, &path);
                report
                    .findings
                    .extend(findings.into_iter().map(|message| TaggedFinding {
                        path: path.clone(),
                        message,
                    }));
            }
        }
    }

    report
}

fn validate_one(source: &dyn ContentSource, path: &str) -> Vec<String> {
    let content = match source.read_file(path) {
        Ok(content) => content,
        Err(e) => return vec![format!("Error processing document: {e}")],
    };

    match frontmatter::extract(&content) {
        Ok((metadata, _body)) => validate::validate(&metadata, path)
            .into_iter()
            .map(|finding| finding.message)
            .collect(),
        Err(e) => vec![format!("Error processing document: {e}")],
    }
}

/// Read and extract every document under the source, for index building.
///
/// Documents that cannot be read or whose header does not parse are skipped
/// and reported as warnings; they never abort the run.
#[must_use]
pub fn collect_documents(
    source: &dyn ContentSource,
    extension: &str,
) -> (Vec<DocumentRecord>, Vec<TaggedFinding>) {
    let mut documents = Vec::new();
    let mut warnings = Vec::new();

    for event in walk(source, extension) {
        match event {
            WalkEvent::Error(err) => warnings.push(TaggedFinding {
                path: err.path,
                message: format!("Error reading directory: {}", err.message),
            }),
            WalkEvent::File(path) => match read_document(source, &path) {
                Ok(record) => documents.push(record),
                Err(e) => warnings.push(TaggedFinding {
                    path,
                    message: format!("Error processing document: {e}"),
                }),
            },
        }
    }

    (documents, warnings)
}

fn read_document(source: &dyn ContentSource, path: &str) -> Result<DocumentRecord> {
    let content = source.read_file(path)?;
    let (metadata, body) = frontmatter::extract(&content)?;
    Ok(DocumentRecord {
        path: path.to_string(),
        metadata,
        body: body.to_string(),
    })
}

/// Write the index artifact: pretty JSON plus a trailing newline, fully
/// overwriting whatever was there. Regenerating over an unchanged tree
/// produces identical bytes.
pub fn write_index(index: &ContentIndex, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(index)
        .map_err(|e| ScribeError::Serialization(e.to_string()))?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
