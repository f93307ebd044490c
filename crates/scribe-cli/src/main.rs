//! scribe — frontmatter validation and index generation for markdown
//! content trees.
//!
//! Two single-pass commands over a content root:
//! - `scribe validate` checks every document's frontmatter against the
//!   schema and exits non-zero if anything is wrong.
//! - `scribe generate` compiles `meta.json`, the aggregate index sorted by
//!   date, newest first.

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use scribe_content::{collect_documents, run_validation, write_index, FsSource};
use scribe_core::index::build_index;

use crate::config::SiteConfig;

#[derive(Parser)]
#[command(name = "scribe")]
#[command(version)]
#[command(about = "Frontmatter validation and index generation for markdown content trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate frontmatter across the whole content tree
    Validate {
        /// Content root (defaults to the configured content_dir)
        root: Option<PathBuf>,
    },
    /// Generate the aggregate content index
    #[command(alias = "gen")]
    Generate {
        /// Content root (defaults to the configured content_dir)
        root: Option<PathBuf>,
        /// Where to write the index (defaults next to the content root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = SiteConfig::load(Path::new("."))?;

    match cli.command {
        Commands::Validate { root } => {
            let root = root.unwrap_or_else(|| PathBuf::from(&config.content_dir));
            let source = FsSource::open(root)?;
            let report = run_validation(&source, &config.extension);

            if report.passed() {
                println!("All tutorials validated successfully!");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Validation failed with the following errors:");
                for finding in &report.findings {
                    eprintln!("- {finding}");
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Generate { root, output } => {
            let root = root.unwrap_or_else(|| PathBuf::from(&config.content_dir));
            let source = FsSource::open(root)?;

            let (documents, warnings) = collect_documents(&source, &config.extension);
            for warning in &warnings {
                warn!("{warning}");
            }

            let (index, skipped) = build_index(&documents);
            for warning in &skipped {
                warn!("{warning}");
            }

            let output = output.unwrap_or_else(|| default_output(source.root(), &config.output));
            write_index(&index, &output)?;
            println!(
                "Wrote {} entries to {}",
                index.tutorials.len(),
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// The default artifact location: a sibling of the content root.
fn default_output(root: &Path, filename: &str) -> PathBuf {
    match root.parent() {
        Some(parent) => parent.join(filename),
        None => PathBuf::from(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_a_sibling_of_the_root() {
        assert_eq!(
            default_output(Path::new("site/tutorials"), "meta.json"),
            PathBuf::from("site/meta.json")
        );
        assert_eq!(
            default_output(Path::new("tutorials"), "meta.json"),
            PathBuf::from("meta.json")
        );
    }
}
