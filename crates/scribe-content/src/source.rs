//! Content source abstraction.
//!
//! The walk and the pipelines only ever ask "what is in this directory?"
//! and "what does this file contain?" — anything answering those two
//! questions can back a run. [`FsSource`] answers from a directory on disk;
//! [`MemorySource`] answers from an in-memory map, which keeps the
//! traversal and pipeline logic unit-testable without touching a real
//! filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use scribe_core::ScribeError;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// A readable tree of content. Paths are relative to the content root and
/// slash-separated on every platform; the empty string names the root.
pub trait ContentSource {
    /// List the entries of a directory.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; callers record it against the
    /// directory and keep traversing siblings.
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>>;

    /// Read a file's full text content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; callers record it against the
    /// document and keep going.
    fn read_file(&self, path: &str) -> io::Result<String>;
}

/// A content source backed by a directory on disk.
#[derive(Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Open a content root.
    ///
    /// # Errors
    ///
    /// Returns [`ScribeError::Content`] if the root does not exist or is not
    /// a directory. This is the one fatal condition: without a root there
    /// is nothing to traverse.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ScribeError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ScribeError::Content(format!(
                "content root does not exist or is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// The root directory this source reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in rel.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }
}

impl ContentSource for FsSource {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntry { name, is_dir });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}

/// An in-memory content source: a map from relative file path to content.
/// Directories are implied by the paths.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a slash-separated relative path.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentSource for MemorySource {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };

        // name -> is_dir; BTreeMap dedupes subdirectories.
        let mut names: BTreeMap<String, bool> = BTreeMap::new();
        for path in self.files.keys() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((subdir, _)) => names.insert(subdir.to_string(), true),
                None => names.insert(rest.to_string(), false),
            };
        }

        if names.is_empty() && !dir.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {dir}"),
            ));
        }

        Ok(names
            .into_iter()
            .map(|(name, is_dir)| DirEntry { name, is_dir })
            .collect())
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}
