//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn landing_page_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("landing-page").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("LANDING_PAGE_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn video_id_recognized() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["video-id", "https://www.youtube.com/watch?v=ABC123&t=10s"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ABC123\n"));
}

#[test]
fn video_id_unrecognized_fails() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["video-id", "https://vimeo.com/123"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not a recognized video link"));
}

#[test]
fn video_id_bare_identifier_is_not_accepted() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["video-id", "ABC123"])
        .assert()
        .code(1);
}

#[test]
fn video_id_json_reports_unrecognized() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["video-id", "--json", "not a url"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"recognized\": false"))
        .stdout(predicate::str::contains("\"embed_url\": null"));
}

#[test]
fn since_invalid_birth_date_falls_back_to_now() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["since", "--birth-date", "someday"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Né depuis 0 jours 00 heures 00 minutes",
        ))
        .stderr(predicate::str::contains("someday"));
}

#[test]
fn broken_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "brand_name = [").unwrap();
    landing_page_bin(&dir)
        .args(["since", "--birth-date", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Né depuis "))
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_values() {
    let dir = TempDir::new().unwrap();
    for (key, value) in [
        ("birth_date", "someday"),
        ("youtube_url", "https://vimeo.com/1"),
        ("modules.youtube_background", "maybe"),
        ("copyright_year", "-3"),
        ("social_links.facebook", "facebook"),
    ] {
        landing_page_bin(&dir)
            .args(["config", "set", key, value])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(key));
    }
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn zero_interval_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["--watch", "--interval", "0"])
        .assert()
        .code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .arg("publish")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("publish"));
}

#[test]
fn config_set_negative_number_reaches_validation() {
    let dir = TempDir::new().unwrap();
    landing_page_bin(&dir)
        .args(["config", "set", "splash_min_duration_ms", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not be negative"));
}
