use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with the config store pinned to a temp directory, so tests never
/// touch the user's real configuration.
fn msg2phone(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("msg2phone").unwrap();
    cmd.env("MSG2PHONE_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("msg2phone").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Push notifications to your phone"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("msg2phone").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("msg2phone"));
}

#[test]
fn test_no_subcommand_prints_help_with_exit_code_1() {
    let config_dir = TempDir::new().unwrap();
    msg2phone(&config_dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_config_writes_url() {
    let config_dir = TempDir::new().unwrap();
    msg2phone(&config_dir)
        .args(["config", "--url", "https://example.com/send/ABC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved url to"));

    let content = std::fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(content.contains("url = \"https://example.com/send/ABC\""));
}

#[test]
fn test_config_overwrites_previous_url() {
    let config_dir = TempDir::new().unwrap();
    msg2phone(&config_dir)
        .args(["config", "--url", "https://example.com/send/OLD"])
        .assert()
        .success();
    msg2phone(&config_dir)
        .args(["config", "--url", "https://example.com/send/NEW"])
        .assert()
        .success();

    let content = std::fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(content.contains("NEW"));
    assert!(!content.contains("OLD"));
}

#[test]
fn test_config_write_error_exits_2() {
    let config_dir = TempDir::new().unwrap();
    // A file where the config directory should be makes the write fail.
    let blocked = config_dir.path().join("blocked");
    std::fs::write(&blocked, "not a directory").unwrap();

    let mut cmd = Command::cargo_bin("msg2phone").unwrap();
    cmd.env("MSG2PHONE_CONFIG_DIR", &blocked)
        .args(["config", "--url", "https://example.com/send/ABC"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error writing config"));
}

#[test]
fn test_send_without_config_is_a_silent_noop() {
    let config_dir = TempDir::new().unwrap();
    msg2phone(&config_dir)
        .args(["send", "-t", "title", "-m", "message"])
        .assert()
        .success();
}

#[test]
fn test_send_requires_title_and_message() {
    let config_dir = TempDir::new().unwrap();
    msg2phone(&config_dir).arg("send").assert().failure();
    msg2phone(&config_dir)
        .args(["send", "-t", "title"])
        .assert()
        .failure();
}
