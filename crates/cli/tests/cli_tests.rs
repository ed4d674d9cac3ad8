//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("newsnex")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("news_article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe\n  CEO at Acme Corp\n  Confidence: 95 (high)"))
        .stderr(predicate::str::contains("Found 5 profiles"));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("news_article.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tom Brown"));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("news_article.html")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = value.as_array().unwrap();
    assert_eq!(profiles.len(), 5);
    assert_eq!(profiles[0]["name"], "Jane Doe");
    assert_eq!(profiles[0]["role"], "CEO");
    assert_eq!(profiles[0]["company"], "Acme Corp");
    assert_eq!(profiles[0]["confidence"], 95);
}

#[test]
fn test_cli_json_pretty() {
    cmd()
        .args(["-f", "json", "--pretty", &get_fixture_path("news_article.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {"));
}

#[test]
fn test_cli_csv_format() {
    cmd()
        .args(["-f", "csv", &get_fixture_path("news_article.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,role,company,quote,confidence\n"))
        .stdout(predicate::str::contains("Tom Brown,Representative,Globex,Tom Brown of Globex declined to comment.,90"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("profiles.csv");

    cmd()
        .args(["-f", "csv", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("news_article.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn test_cli_min_confidence() {
    cmd()
        .args(["--min-confidence", "90", &get_fixture_path("news_article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("Tom Brown"))
        .stdout(predicate::str::contains("Mark Lee").not());
}

#[test]
fn test_cli_min_confidence_out_of_range() {
    cmd()
        .args(["--min-confidence", "101", &get_fixture_path("news_article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_dedup_policy() {
    cmd()
        .args(["--dedup", "highest-confidence", &get_fixture_path("container_article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mark Smith\n  leads research at Initech"));

    cmd()
        .args(["--dedup", "newest", &get_fixture_path("container_article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_content_mode() {
    cmd()
        .args(["--content", &get_fixture_path("news_article.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Acme closes merger with rival firm Jane Doe"))
        .stdout(predicate::str::contains("Galaxy").not());
}

#[test]
fn test_cli_no_profiles() {
    cmd()
        .args(["-f", "json", &get_fixture_path("nav_only.html")])
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("No profiles found in the article"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_invalid_url() {
    cmd()
        .arg("ftp://example.com/article")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid URL"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "markdown", &get_fixture_path("news_article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_input() {
    cmd().assert().failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("news_article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("NewsNex"))
        .stderr(predicate::str::contains("[4/4]"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newsnex"));
}
