//! Runs the compiled `cbh` binary against temporary directories.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;

fn read_json(dir: &Path) -> serde_json::Value {
    let bytes = std::fs::read(dir.join("server.json")).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_no_flags_writes_app_only() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG").arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("server.json file successfully created at"));

    assert_eq!(
        read_json(tmp.path()),
        serde_json::json!({"app": {"cfengine": "adobe@2018"}})
    );
}

#[test]
fn test_empty_path_writes_into_working_directory() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG").current_dir(tmp.path()).arg("");
    cmd.assert().success();

    assert_eq!(read_json(tmp.path())["app"]["cfengine"], "adobe@2018");
}

#[test]
fn test_flags_populate_web_block() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .args(["-n", "site", "-H", "example.com", "-p", "8080"])
        .arg(tmp.path());
    cmd.assert().success();

    let value = read_json(tmp.path());
    assert_eq!(value["name"], "site");
    assert_eq!(value["web"]["host"], "example.com");
    assert_eq!(value["web"]["http"]["port"], 8080);
}

#[test]
fn test_loopback_host_is_ignored() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .args(["--host", "127.0.0.1"])
        .arg(tmp.path());
    cmd.assert().success();

    assert!(read_json(tmp.path()).get("web").is_none());
}

#[test]
fn test_declining_overwrite_keeps_file_and_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("server.json");
    std::fs::write(&target, b"{\"keep\": true}").unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .args(["-p", "9000"])
        .arg(tmp.path())
        .write_stdin("N\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("do you want to overwrite it(y/N)?"))
        .stdout(predicate::str::contains("Exiting..."));

    assert_eq!(std::fs::read(&target).unwrap(), b"{\"keep\": true}");
}

#[test]
fn test_invalid_answer_asks_again() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("server.json"), b"old").unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .arg(tmp.path())
        .write_stdin("maybe\nn\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Please enter either 'y' or 'N'"));

    assert_eq!(std::fs::read(tmp.path().join("server.json")).unwrap(), b"old");
}

#[test]
fn test_confirming_overwrite_replaces_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("server.json"), b"old").unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .args(["-p", "9000"])
        .arg(tmp.path())
        .write_stdin("y\n");
    cmd.assert().success();

    assert_eq!(read_json(tmp.path())["web"]["http"]["port"], 9000);
}

#[test]
fn test_overwrite_flag_never_prompts() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("server.json"), b"old").unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG")
        .args(["-o", "-n", "fresh"])
        .arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(y/N)?").not());

    assert_eq!(read_json(tmp.path())["name"], "fresh");
}

#[test]
fn test_closed_stdin_during_prompt_is_a_fault() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("server.json"), b"old").unwrap();

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG").arg(tmp.path()).write_stdin("");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("confirmation prompt failed"));

    assert_eq!(std::fs::read(tmp.path().join("server.json")).unwrap(), b"old");
}

#[test]
fn test_missing_directory_exits_with_write_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");

    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.env_remove("RUST_LOG").arg(&missing);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("specified directory does not exist"));

    assert!(!missing.exists());
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("cbh");
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("cbh"));
}
