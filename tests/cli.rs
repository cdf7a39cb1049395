use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pinemark_cmd() -> Command {
    Command::cargo_bin("pinemark").expect("binary exists")
}

#[test]
fn pinemark_help_prints_usage() {
    pinemark_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Annotation overlay engine for the Pine screen marker",
        ));
}

#[test]
fn no_flags_prints_usage() {
    pinemark_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--check-config"));
}

#[test]
fn check_config_reports_defaults_with_temp_config_home() {
    let temp = TempDir::new().unwrap();

    pinemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("#DB2777"));
}

#[test]
fn init_config_writes_example_file() {
    let temp = TempDir::new().unwrap();

    pinemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    // A second run refuses to clobber the existing file.
    pinemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn show_settings_prints_default_binding() {
    let temp = TempDir::new().unwrap();

    pinemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .arg("--show-settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl+Alt+P"));
}
