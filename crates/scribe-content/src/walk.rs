//! Depth-first traversal of a content tree.
//!
//! Produces events in discovery order. Directory entries are visited sorted
//! by name so two runs over the same tree yield the same sequence, which in
//! turn keeps the generated artifact byte-identical across runs. A
//! directory that cannot be listed becomes an [`WalkEvent::Error`] for that
//! directory alone; siblings are still visited.

use tracing::debug;

use crate::source::ContentSource;

/// A problem encountered while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkError {
    /// The directory that could not be listed ("." for the root).
    pub path: String,
    pub message: String,
}

/// One traversal event, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A document file with the requested extension, as a relative path.
    File(String),
    /// A directory that could not be listed.
    Error(WalkError),
}

/// Walk the tree rooted at the source, collecting files whose name ends in
/// `.{extension}`.
#[must_use]
pub fn walk(source: &dyn ContentSource, extension: &str) -> Vec<WalkEvent> {
    let mut events = Vec::new();
    let suffix = format!(".{extension}");
    walk_dir(source, "", &suffix, &mut events);
    events
}

fn walk_dir(source: &dyn ContentSource, dir: &str, suffix: &str, events: &mut Vec<WalkEvent>) {
    let mut entries = match source.list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            events.push(WalkEvent::Error(WalkError {
                path: if dir.is_empty() { ".".to_string() } else { dir.to_string() },
                message: e.to_string(),
            }));
            return;
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let shown = if dir.is_empty() { "." } else { dir };
    debug!(dir = shown, entries = entries.len(), "walking");

    for entry in entries {
        let path = if dir.is_empty() {
            entry.name.clone()
        } else {
            format!("{dir}/{}", entry.name)
        };

        if entry.is_dir {
            walk_dir(source, &path, suffix, events);
        } else if entry.name.ends_with(suffix) {
            events.push(WalkEvent::File(path));
        }
    }
}
