#![cfg(unix)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run keyarmor with HOME and config isolated inside `home`.
fn keyarmor(home: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("keyarmor");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("KEYARMOR_GPG")
        .env_remove("KEYARMOR_CACHE_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cache_shows_empty_slot() {
    let home = assert_fs::TempDir::new().unwrap();

    keyarmor(&home)
        .arg("cache")
        .assert()
        .success()
        .stdout(predicate::str::contains(".keyarmor_key_cache"))
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn cache_describes_stored_record() {
    let home = assert_fs::TempDir::new().unwrap();
    // "armor" in base64
    home.child(".keyarmor_key_cache")
        .write_str(r#"{"keyId":"ABC123","body":"YXJtb3I="}"#)
        .unwrap();

    keyarmor(&home)
        .arg("cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC123"))
        .stdout(predicate::str::contains("5 bytes"))
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn cache_reports_unreadable_file_without_failing() {
    let home = assert_fs::TempDir::new().unwrap();
    home.child(".keyarmor_key_cache").write_str("garbage").unwrap();

    keyarmor(&home)
        .arg("cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable"));
}

#[test]
fn cache_disabled_is_reported() {
    let home = assert_fs::TempDir::new().unwrap();

    keyarmor(&home)
        .args(["--no-cache", "cache"])
        .assert()
        .success()
        .stderr(predicate::str::contains("disabled"));
}

#[test]
fn status_reports_missing_gpg_and_cache_path() {
    let home = assert_fs::TempDir::new().unwrap();

    keyarmor(&home)
        .arg("--gpg")
        .arg(home.path().join("no-such-gpg"))
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable"))
        .stdout(predicate::str::contains(".keyarmor_key_cache"));
}
