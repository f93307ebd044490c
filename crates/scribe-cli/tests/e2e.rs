//! End-to-end tests for the scribe CLI.
//!
//! Tests invoke the `scribe` binary as a subprocess against content trees
//! built in temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn scribe_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scribe"));
    cmd.current_dir(dir);
    cmd
}

/// Write a document whose frontmatter is fully valid for its location.
fn write_valid_doc(root: &Path, rel: &str, date: &str) {
    let slug = rel.trim_end_matches(".md").replace('/', "-");
    write_doc(root, rel, &slug, date);
}

fn write_doc(root: &Path, rel: &str, slug: &str, date: &str) {
    let content = format!(
        "---\n\
         title: \"Title of {rel}\"\n\
         description: \"Description of {rel}\"\n\
         tags: [guide, test]\n\
         date: \"{date}\"\n\
         author: \"Jordan\"\n\
         slug: \"{slug}\"\n\
         ---\n\n\
         Body of {rel}.\n"
    );
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("tutorials");
    write_valid_doc(&root, "intro.md", "2024-01-01");
    write_valid_doc(&root, "guides/setup.md", "2023-05-05");
    write_valid_doc(&root, "guides/deep/dive.md", "2024-06-01");
    dir
}

// === validate ===

#[test]
fn validate_passes_on_a_clean_tree() {
    let dir = setup_tree();
    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All tutorials validated successfully!"));
}

#[test]
fn validate_fails_with_one_line_per_finding() {
    let dir = setup_tree();
    let root = dir.path().join("tutorials");
    // Wrong slug and a bad date in one document: two findings.
    write_doc(&root, "guides/broken.md", "not-the-right-slug", "2024-02-30");

    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation failed with the following errors:"));
    assert!(stderr.contains("- guides/broken.md: Invalid date format. Use YYYY-MM-DD format."));
    assert!(stderr.contains("Expected: 'guides-broken'"));
}

#[test]
fn validate_reports_missing_fields() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("tutorials");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("bare.md"),
        "---\ntitle: \"Only a title\"\n---\nBody.\n",
    )
    .unwrap();

    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    for field in ["description", "tags", "date", "author", "slug"] {
        assert!(
            stderr.contains(&format!("Missing required field '{field}'")),
            "missing finding for {field}; stderr: {stderr}"
        );
    }
    assert!(!stderr.contains("Missing required field 'title'"));
}

#[test]
fn validate_without_content_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("content root"));
}

#[test]
fn malformed_document_does_not_hide_findings_elsewhere() {
    let dir = setup_tree();
    let root = dir.path().join("tutorials");
    fs::write(root.join("mangled.md"), "---\ntitle: [unclosed\n---\n").unwrap();
    write_doc(&root, "guides/off.md", "wrong", "2024-01-01");

    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mangled.md: Error processing document"));
    assert!(stderr.contains("guides/off.md"));
}

// === generate ===

#[test]
fn generate_writes_sorted_index_next_to_root() {
    let dir = setup_tree();
    let output = scribe_in(dir.path()).arg("generate").output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("meta.json")).unwrap()).unwrap();
    let tutorials = meta["tutorials"].as_array().unwrap();
    assert_eq!(tutorials.len(), 3);

    let dates: Vec<&str> = tutorials
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-06-01", "2024-01-01", "2023-05-05"]);

    assert_eq!(tutorials[0]["category"], "guides/deep");
    assert_eq!(tutorials[0]["path"], "guides/deep/dive.md");
    assert_eq!(tutorials[0]["author"], "Jordan");
}

#[test]
fn generate_skips_documents_missing_index_fields() {
    let dir = setup_tree();
    let root = dir.path().join("tutorials");
    fs::write(
        root.join("incomplete.md"),
        "---\ntitle: \"No description\"\ndate: \"2024-04-04\"\nslug: \"incomplete\"\n---\n",
    )
    .unwrap();

    let output = scribe_in(dir.path()).arg("generate").output().unwrap();
    assert!(output.status.success(), "warnings must not affect exit status");

    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("meta.json")).unwrap()).unwrap();
    let paths: Vec<&str> = meta["tutorials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert!(!paths.contains(&"incomplete.md"));
    assert_eq!(paths.len(), 3);
}

#[test]
fn generate_twice_produces_identical_bytes() {
    let dir = setup_tree();
    assert!(scribe_in(dir.path()).arg("generate").output().unwrap().status.success());
    let first = fs::read(dir.path().join("meta.json")).unwrap();

    assert!(scribe_in(dir.path()).arg("generate").output().unwrap().status.success());
    let second = fs::read(dir.path().join("meta.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn generate_honors_output_flag() {
    let dir = setup_tree();
    let out = dir.path().join("elsewhere.json");
    let output = scribe_in(dir.path())
        .args(["generate", "--output"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.exists());
    assert!(!dir.path().join("meta.json").exists());
}

// === config ===

#[test]
fn config_file_changes_the_content_root() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scribe.toml"), "content_dir = \"docs\"\n").unwrap();
    let root = dir.path().join("docs");
    write_valid_doc(&root, "intro.md", "2024-01-01");

    let output = scribe_in(dir.path()).arg("validate").output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn explicit_root_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scribe.toml"), "content_dir = \"docs\"\n").unwrap();
    let root = dir.path().join("other");
    write_valid_doc(&root, "intro.md", "2024-01-01");

    let output = scribe_in(dir.path())
        .args(["validate", "other"])
        .output()
        .unwrap();
    assert!(output.status.success());
}
