use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn demo() -> Command {
    let mut cmd = Command::cargo_bin("creational-patterns").unwrap();
    cmd.arg("--no-color").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_covers_every_family() {
    demo()
        .assert()
        .success()
        .stdout(predicate::str::contains("[CPU] 12345 phone series"))
        .stdout(predicate::str::contains("[CPU] 12345 Laptop series"))
        .stdout(predicate::str::contains("[CPU] 12345 Tablet series"))
        .stdout(predicate::str::contains("[GET]\n[POST]\n[PUT]\n[DELETE]\n"));
}

#[test]
fn test_factory_method_only() {
    demo()
        .args(["--demo", "factory-method"])
        .assert()
        .success()
        .stdout("--- Calling app_factory ---\n\n[GET]\n[POST]\n[PUT]\n[DELETE]\n");
}

#[test]
fn test_single_family() {
    demo()
        .args(["--demo", "abstract-factory", "--family", "laptop"])
        .assert()
        .success()
        .stdout(
            "--- Calling app_accessory_factory ---\n\n\
             [CPU] 12345 Laptop series\n\
             [MEMORY] 64 Laptop capacity in GB\n\
             [DISPLAY] Laptop resolution\n",
        );
}

#[test]
fn test_no_factory_guard() {
    demo()
        .args(["--demo", "abstract-factory", "--no-factory"])
        .assert()
        .success()
        .stdout("--- Calling app_accessory_factory ---\n\n--- No factory provided ---\n");
}

#[test]
fn test_config_file_arguments() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "demo = \"abstract-factory\"\nfamilies = [\"tablet\"]\n\n[accessory]\nseries = \"S9\"\ncapacity_gb = 12"
    )
    .unwrap();

    demo()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[CPU] S9 Tablet series"))
        .stdout(predicate::str::contains("[MEMORY] 12 Tablet capacity in GB"))
        .stdout(predicate::str::contains("[GET]").not());
}

#[test]
fn test_unknown_family_suggests() {
    demo()
        .args(["--family", "labtop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'laptop'?"));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[accessory]\ncapacity_gb = 0").unwrap();

    demo()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be positive"));
}
