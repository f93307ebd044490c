//! Optional `scribe.toml` configuration.
//!
//! Looked up in the working directory; every field has a default, so a
//! missing file just means defaults:
//! ```toml
//! content_dir = "tutorials"
//! output = "meta.json"
//! extension = "md"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Pipeline configuration. CLI arguments override these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the content tree.
    pub content_dir: String,

    /// Index artifact filename, written next to the content root.
    pub output: String,

    /// Document file extension, without the dot.
    pub extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "tutorials".to_string(),
            output: "meta.json".to_string(),
            extension: "md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load `scribe.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed; a broken
    /// config is fatal rather than silently ignored.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join("scribe.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.content_dir, "tutorials");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scribe.toml"), "content_dir = \"docs\"\n").unwrap();
        let config = SiteConfig::load(dir.path()).unwrap();
        assert_eq!(config.content_dir, "docs");
        assert_eq!(config.output, "meta.json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scribe.toml"), "contnet_dir = \"docs\"\n").unwrap();
        assert!(SiteConfig::load(dir.path()).is_err());
    }
}
