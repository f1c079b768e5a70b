//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../lightbnb-db/fixtures/properties.json"
);

fn property_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "owner_id": 2,
            "title": "Harbour loft",
            "thumbnail_photo_url": "t.jpg",
            "cover_photo_url": "c.jpg",
            "cost_per_night": 14500,
            "number_of_bedrooms": 1,
            "country": "Canada",
            "street": "9 Water St",
            "city": "Vancouver",
            "province": "British Columbia",
            "post_code": "V6B"
        }}"#
    )
    .unwrap();
    file
}

// === Help Tests ===

#[test]
fn test_properties_search_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties").arg("search").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimum nightly price in dollars"));
}

#[test]
fn test_reservations_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("reservations").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--guest-id"));
}

#[test]
fn test_user_get_requires_key() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("user").arg("get");

    cmd.assert().failure();
}

#[test]
fn test_fixture_requires_mock() {
    let file = property_file();
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties")
        .arg("add")
        .arg("--file")
        .arg(file.path())
        .arg("--fixture")
        .arg(FIXTURE);

    cmd.assert().failure();
}

// === Mock Store Tests ===

#[test]
fn test_mock_add_assigns_first_id() {
    let file = property_file();
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties")
        .arg("add")
        .arg("--mock")
        .arg("--file")
        .arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"city\": \"Vancouver\""));
}

#[test]
fn test_mock_add_continues_fixture_ids() {
    let file = property_file();
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties")
        .arg("add")
        .arg("--mock")
        .arg("--fixture")
        .arg(FIXTURE)
        .arg("--file")
        .arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 3"));
}

#[test]
fn test_mock_add_rejects_bad_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"title\": 5}}").unwrap();

    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties")
        .arg("add")
        .arg("--mock")
        .arg("--file")
        .arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property JSON"));
}
