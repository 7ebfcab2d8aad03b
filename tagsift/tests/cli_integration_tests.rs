// tagsift/tests/cli_integration_tests.rs
//! Command-line integration tests for the `tagsift` binary.
//!
//! These run the compiled executable with `assert_cmd`, feeding input through
//! arguments, files and stdin, and check stdout, stderr and exit status.
//! `tempfile` keeps configuration and output files isolated per test.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn tagsift() -> Command {
    let mut cmd = Command::cargo_bin("tagsift").unwrap();
    cmd.env_remove("TAGSIFT_CONFIG");
    cmd
}

#[test]
fn test_sanitize_inline_prints_input_and_output() {
    tagsift()
        .args(["sanitize", "<script>alert('XSS');</script><b>Bold</b>"])
        .assert()
        .success()
        .stdout("Input: <script>alert('XSS');</script><b>Bold</b>\nOutput: <b></b>\n");
}

#[test]
fn test_sanitize_from_stdin_plain() {
    tagsift()
        .args(["-q", "sanitize", "--plain"])
        .write_stdin("<p>para</p><iframe src=x><u>\n")
        .assert()
        .success()
        .stdout("<p></p><u></u>\n");
}

#[test]
fn test_sanitize_open_only_form() {
    tagsift()
        .args(["sanitize", "--plain", "--form", "open-only", "<b><i>"])
        .assert()
        .success()
        .stdout("<b><i>\n");
}

#[test]
fn test_sanitize_text_without_tags() {
    tagsift()
        .args(["sanitize", "--plain", "nothing to see"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("No allow-listed tags found"));
}

#[test]
fn test_sanitize_strips_attributes() {
    tagsift()
        .args(["sanitize", "--plain", r#"<b class="x" onclick="y">"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("onclick").not())
        .stdout(predicate::str::contains("class").not());
}

#[test]
fn test_sanitize_with_custom_config_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "allowed_tags: [em, strong]\nemission_form: open_only")?;

    tagsift()
        .args(["sanitize", "--plain", "--config"])
        .arg(config.path())
        .arg("<b><em><strong x=1>")
        .assert()
        .success()
        .stdout("<em><strong>\n");
    Ok(())
}

#[test]
fn test_sanitize_input_and_output_files() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    write!(input, "<a href=\"javascript:x\">link</a>")?;
    let output = NamedTempFile::new()?;

    tagsift()
        .args(["sanitize"])
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Writing sanitized content to file"));

    assert_eq!(fs::read_to_string(output.path())?, "<a></a>\n");
    Ok(())
}

#[test]
fn test_sanitize_rejects_oversized_input() {
    tagsift()
        .args(["sanitize", "--max-input-bytes", "3", "<b><i>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum allowed"));
}

#[test]
fn test_sanitize_rejects_oversized_stdin() {
    tagsift()
        .args(["sanitize", "--max-input-bytes", "16"])
        .write_stdin("<b>".repeat(100))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("exceeds maximum allowed (16 bytes)"));
}

#[test]
fn test_scan_rejects_oversized_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    write!(input, "{}", "<script>".repeat(50))?;

    tagsift()
        .args(["scan", "--max-input-bytes", "32", "-i"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum allowed (32 bytes)"));
    Ok(())
}

#[test]
fn test_sanitize_unknown_config_fails() {
    tagsift()
        .args(["sanitize", "--config", "definitely-not-a-config", "<b>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_scan_json() -> Result<()> {
    let out = tagsift()
        .args(["-q", "scan", "--json", "<b>x</b><script>"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["tag_name"], "b");
    assert_eq!(items[0]["classification"], "safe");
    assert_eq!(items[1]["tag_name"], "/b");
    assert_eq!(items[1]["classification"], "unsafe");
    Ok(())
}

#[test]
fn test_scan_fail_over_threshold() {
    tagsift()
        .args(["scan", "--fail-over-threshold", "0", "<script>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the threshold"));
}

#[test]
fn test_allow_list_default() {
    tagsift()
        .args(["allow-list"])
        .assert()
        .success()
        .stdout("Emission form: open_close\na\nb\ni\np\nu\n");
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    tagsift()
        .args(["-d", "sanitize", "--plain", "<b>"])
        .assert()
        .success()
        .stdout("<b></b>\n")
        .stderr(predicate::str::contains("Starting sanitize operation."));
}
