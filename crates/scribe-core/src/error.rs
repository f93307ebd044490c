//! Error types for scribe.

use thiserror::Error;

/// Top-level result type for scribe operations.
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Top-level error type for scribe.
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Frontmatter is present but malformed (unclosed fence, bad YAML,
    /// non-mapping header). Carries no path; callers attach path context
    /// when reporting.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Problems with the content tree itself (e.g. a missing content root).
    #[error("content error: {0}")]
    Content(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = ScribeError::Parse("unclosed frontmatter fence".to_string());
        assert!(err.to_string().contains("unclosed frontmatter fence"));

        let err = ScribeError::Content("content root does not exist".to_string());
        assert!(err.to_string().contains("content root"));
    }
}
