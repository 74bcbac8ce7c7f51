// Tests for `sarifdump <path>` output.

use std::path::Path;
use std::process::Command;

use serde_json::json;
use tempfile::TempDir;

use crate::common::{location, sarif_log, sarifdump_bin, write_file};

fn run_in(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(sarifdump_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("SARIFDUMP_KEEP_GOING")
        .env_remove("SARIFDUMP_PATTERN")
        .env_remove("SARIFDUMP_VERBOSE")
        .output()
        .expect("Failed to run sarifdump")
}

#[test]
fn test_dump_current_directory() {
    let dir = TempDir::new().unwrap();
    let doc = sarif_log(json!([{
        "level": "error",
        "message": { "text": "null pointer dereference" },
        "ruleId": "null-deref",
        "locations": [location(None, "foo.c", 42, Some(5))]
    }]));
    write_file(dir.path(), "foo.c.sarif", &doc.to_string());

    let output = run_in(dir.path(), &["."]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "foo.c:42:5: error: null pointer dereference [null-deref]\n");
}

#[test]
fn test_uris_resolve_against_document_directory() {
    let dir = TempDir::new().unwrap();
    let doc = sarif_log(json!([{
        "message": { "text": "m" },
        "locations": [location(None, "main.c", 1, None)]
    }]));
    write_file(dir.path(), "build/sub/main.c.sarif", &doc.to_string());

    let output = run_in(dir.path(), &["build"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("{}:1: m\n", Path::new("build").join("sub").join("main.c").display());
    assert_eq!(stdout, expected);
}

#[test]
fn test_documents_dumped_in_name_order_with_fresh_state() {
    let dir = TempDir::new().unwrap();
    let doc = |text: &str| {
        sarif_log(json!([{
            "message": { "text": text },
            "locations": [location(Some("main"), "a.c", 1, None)]
        }]))
        .to_string()
    };
    write_file(dir.path(), "b.sarif", &doc("from b"));
    write_file(dir.path(), "a.sarif", &doc("from a"));
    write_file(dir.path(), "ignored.json", &doc("never"));

    let output = run_in(dir.path(), &["."]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "In function 'main':\na.c:1: from a\nIn function 'main':\na.c:1: from b\n"
    );
}

#[test]
fn test_single_file_argument() {
    let dir = TempDir::new().unwrap();
    let doc = sarif_log(json!([{ "message": { "text": "only" } }]));
    write_file(dir.path(), "report.json", &doc.to_string());

    let output = run_in(dir.path(), &["report.json"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "only\n");
}

#[test]
fn test_pattern_flag() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "x.sarif.json",
        &sarif_log(json!([{ "message": { "text": "json suffix" } }])).to_string(),
    );
    write_file(
        dir.path(),
        "y.sarif",
        &sarif_log(json!([{ "message": { "text": "plain suffix" } }])).to_string(),
    );

    let output = run_in(dir.path(), &["--pattern", "*.sarif.json", "."]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "json suffix\n");
}

#[test]
fn test_config_file_excludes_directory() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "sarifdump.json",
        &json!({ "exclude": ["vendor"] }).to_string(),
    );
    write_file(
        dir.path(),
        "vendor/v.sarif",
        &sarif_log(json!([{ "message": { "text": "vendored" } }])).to_string(),
    );
    write_file(
        dir.path(),
        "src/s.sarif",
        &sarif_log(json!([{ "message": { "text": "ours" } }])).to_string(),
    );

    let output = run_in(dir.path(), &["."]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ours\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "a.sarif",
        &sarif_log(json!([{ "message": { "text": "m" } }])).to_string(),
    );

    let output = run_in(dir.path(), &["--verbose", "."]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "m\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sarifdump: reading"), "stderr: {stderr}");
    assert!(stderr.contains("from gcc with 1 result(s)"), "stderr: {stderr}");
    assert!(stderr.contains("SARIF 2.1.0 with 1 run(s), 1 result(s)"), "stderr: {stderr}");
}

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["."]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
