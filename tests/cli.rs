use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn multistep(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("multistep").unwrap();
    cmd.env("MULTISTEP_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn keys_lists_navigation_shortcuts() {
    let dir = TempDir::new().unwrap();
    multistep(&dir)
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("Navigation"))
        .stdout(predicate::str::contains("Next step"))
        .stdout(predicate::str::contains("Alt+1"));
}

#[test]
fn config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    multistep(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Label position:           Below"))
        .stdout(predicate::str::contains("default theme"));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    multistep(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"label_position\": \"below\""));
}

#[test]
fn config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "wizard": { "label_position": "left", "show_navigation": false, "styles": {} } }"#,
    )
    .unwrap();

    multistep(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show navigation:          false"))
        .stdout(predicate::str::contains("Label position:           Left"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn demo_rejects_unknown_label_position() {
    let dir = TempDir::new().unwrap();
    multistep(&dir)
        .args(["demo", "--label-position", "sideways"])
        .assert()
        .failure();
}
