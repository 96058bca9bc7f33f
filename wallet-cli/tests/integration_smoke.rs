//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn wallet(workdir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    // Keep a developer's .env and shell settings out of the picture.
    cmd.current_dir(workdir.path())
        .env_remove("DATABASE_URL")
        .env_remove("PORT")
        .env_remove("HOST")
        .env_remove("DB_MAX_CONNECTIONS");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    wallet(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    wallet(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DATABASE_URL"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_serve_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    wallet(&dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_fails_fast_on_bad_database_url() {
    let dir = tempfile::tempdir().unwrap();
    wallet(&dir)
        .args(["serve", "--database-url", "not-a-database-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}

#[test]
fn test_init_db_fails_fast_on_bad_database_url() {
    let dir = tempfile::tempdir().unwrap();
    wallet(&dir)
        .args(["init-db", "--database-url", "not-a-database-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}
