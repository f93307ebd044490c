//! # scribe-core
//!
//! Core types and logic for the scribe content pipeline:
//! - [`frontmatter`] — YAML frontmatter extraction
//! - [`DocumentRecord`] — one markdown document's path, metadata, and body
//! - [`validate`] — the frontmatter schema validator
//! - [`index`] — the aggregate content index builder
//! - Error hierarchy ([`ScribeError`])
//!
//! This crate never touches the filesystem; it operates on document text and
//! relative paths handed to it by a content source.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod index;
pub mod validate;

pub use document::{DocumentRecord, Metadata};
pub use error::{Result, ScribeError};
pub use index::{ContentIndex, IndexEntry, IndexWarning};
pub use validate::Finding;
