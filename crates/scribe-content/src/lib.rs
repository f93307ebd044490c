//! # scribe-content
//!
//! Everything between the filesystem and the scribe-core logic:
//! - [`source`] — the [`ContentSource`] listing/reading abstraction
//! - [`walk`] — depth-first traversal of a content tree
//! - [`pipeline`] — the validation and index-generation runs
//! - [`report`] — path-tagged findings and the run report
//!
//! Core extraction and validation stay free of filesystem concerns; this
//! crate is the only place that knows how to turn a directory tree into
//! document records.

pub mod pipeline;
pub mod report;
pub mod source;
pub mod walk;

pub use pipeline::{collect_documents, run_validation, write_index};
pub use report::{TaggedFinding, ValidationReport};
pub use source::{ContentSource, DirEntry, FsSource};
