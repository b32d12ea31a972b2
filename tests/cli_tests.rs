use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clinic_config(dir: &TempDir) -> std::path::PathBuf {
    let db_path = dir.path().join("clinic.db");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[database]\nurl = \"{}\"\n\n[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n",
            db_path.display()
        ),
    )
    .expect("write config");
    config_path
}

fn vetclinic() -> Command {
    Command::cargo_bin("vetclinic").expect("binary built")
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[database]\nurl = \"\"\n").unwrap();

    vetclinic()
        .args(["--config"])
        .arg(&config_path)
        .args(["client", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("database.url"));
}

#[test]
fn cli_returns_nonzero_on_missing_explicit_config() {
    vetclinic()
        .args(["--config", "/nonexistent/vetclinic.toml", "client", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn client_add_list_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = clinic_config(&dir);

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args([
            "client",
            "add",
            "--name",
            "Ana",
            "--surname",
            "Reyes",
            "--address",
            "12 Calle Mayor",
            "--phone",
            "555-0101",
            "--email",
            "ana@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered client"));

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ana@example.com"));

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["client", "remove", "--email", "ana@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed client"));

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients registered."));
}

#[test]
fn removing_unknown_pet_reports_noop_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let config = clinic_config(&dir);

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["pet", "remove", "--id", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pet with that id."));
}

#[test]
fn duplicate_client_email_fails_with_database_error() {
    let dir = TempDir::new().unwrap();
    let config = clinic_config(&dir);

    let add = |cmd: &mut Command| {
        cmd.arg("--config").arg(&config).args([
            "client",
            "add",
            "--name",
            "Ana",
            "--surname",
            "Reyes",
            "--address",
            "12 Calle Mayor",
            "--phone",
            "555-0101",
            "--email",
            "ana@example.com",
        ]);
    };

    let mut first = vetclinic();
    add(&mut first);
    first.assert().success();

    let mut second = vetclinic();
    add(&mut second);
    second
        .assert()
        .failure()
        .stderr(predicate::str::contains("database error"));
}

#[test]
fn check_db_reports_reachable() {
    let dir = TempDir::new().unwrap();
    let config = clinic_config(&dir);

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["check", "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database reachable"));
}

#[test]
fn appointment_add_writes_audit_log() {
    let dir = TempDir::new().unwrap();
    let config = clinic_config(&dir);

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args([
            "client", "add", "--name", "Ana", "--surname", "Reyes", "--address", "x",
            "--phone", "1", "--email", "ana@example.com",
        ])
        .assert()
        .success();

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args([
            "pet",
            "add",
            "--name",
            "Bobby",
            "--species",
            "dog",
            "--breed",
            "beagle",
            "--birth-date",
            "2021-06-01",
            "--client-id",
            "1",
        ])
        .assert()
        .success();

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args([
            "vet", "add", "--name", "Marta", "--surname", "Gil", "--specialty", "surgery",
            "--phone", "2", "--email", "marta@clinic.example",
        ])
        .assert()
        .success();

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args([
            "appointment",
            "add",
            "--date",
            "2026-03-14",
            "--time",
            "10:30:00",
            "--pet-id",
            "1",
            "--vet-id",
            "1",
            "--description",
            "annual checkup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked appointment"));

    vetclinic()
        .arg("--config")
        .arg(&config)
        .args(["appointment", "audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("annual checkup"));
}
