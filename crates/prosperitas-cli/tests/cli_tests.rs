use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create an offline, colorless Command bound to a database
fn prosperitas_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prosperitas").expect("Failed to find prosperitas binary");
    cmd.arg("--no-color")
        .arg("--offline")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

#[test]
fn test_cli_default_shows_dashboard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"))
        .stdout(predicate::str::contains("- Progress: 0% (0/14 lessons)"))
        .stdout(predicate::str::contains("Psicologia do Investidor"))
        .stdout(predicate::str::contains(
            "O sucesso financeiro é o resultado de pequenos hábitos diários.",
        ));
}

#[test]
fn test_cli_creates_missing_parent_directories() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("nested").join("dir").join("cli_test.db");

    prosperitas_cmd(&db_path).arg("dashboard").assert().success();
    assert!(db_path.exists());
}

#[test]
fn test_cli_complete_unlocks_next_lesson() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["lesson", "complete", "m1-l1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed lesson m1-l1 (+100 points)."))
        .stdout(predicate::str::contains("Unlocked lesson m1-l2."))
        .stdout(predicate::str::contains("Total points: 100"));

    prosperitas_cmd(&db_path)
        .args(["lesson", "complete", "m1-l1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already completed"))
        .stdout(predicate::str::contains("Total points: 100"));

    prosperitas_cmd(&db_path)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 7% (1/14 lessons)"))
        .stdout(predicate::str::contains("- Points: 100"))
        .stdout(predicate::str::contains("Last saved:"));
}

#[test]
fn test_cli_locked_lesson_is_refused() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["lesson", "show", "m1-l2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is locked"));

    prosperitas_cmd(&db_path)
        .args(["lesson", "complete", "m3-l1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is locked"));
}

#[test]
fn test_cli_unknown_lesson_is_refused() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["lesson", "favorite", "m9-l9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lesson m9-l9 not found"));
}

#[test]
fn test_cli_show_lesson_offline() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["lesson", "show", "m2-l1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Orçamento Inabalável"))
        .stdout(predicate::str::contains("- Module: Domínio do Fluxo"))
        .stdout(predicate::str::contains("modo offline"))
        .stdout(predicate::str::contains("Next lesson: Proteção Patrimonial `m2-l2`"));
}

#[test]
fn test_cli_favorites_toggle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite lessons yet."));

    prosperitas_cmd(&db_path)
        .args(["lesson", "favorite", "m4-l2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added lesson m4-l2 to favorites."));

    prosperitas_cmd(&db_path)
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("O Poder do Tempo"));

    prosperitas_cmd(&db_path)
        .args(["lesson", "favorite", "m4-l2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed lesson m4-l2 from favorites."));
}

#[test]
fn test_cli_library_filters() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .arg("library")
        .assert()
        .success()
        .stdout(predicate::str::contains("## O Despertar da Riqueza"))
        .stdout(predicate::str::contains("## Império Próprio"));

    prosperitas_cmd(&db_path)
        .args(["library", "--category", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Máquina de Juros Compostos"))
        .stdout(predicate::str::contains("## Império Próprio").not());

    prosperitas_cmd(&db_path)
        .args(["library", "--search", "nothing-matches-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules match your search."));
}

#[test]
fn test_cli_simulate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args([
            "simulate", "--initial", "1000", "--monthly", "100", "--rate", "0", "--years", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 2 | R$ 3.400 | R$ 3.400 | R$ 0 |"))
        .stdout(predicate::str::contains("## After 2 years"));
}

#[test]
fn test_cli_simulate_clamps_inputs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["simulate", "--initial", "-50", "--years", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Initial deposit: R$ 0"))
        .stdout(predicate::str::contains("## After 50 years"));
}

#[test]
fn test_cli_quote_offline() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("pequenos hábitos diários"));
}

#[test]
fn test_cli_reset_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prosperitas_cmd(&db_path)
        .args(["lesson", "complete", "m1-l1"])
        .assert()
        .success();

    prosperitas_cmd(&db_path)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    prosperitas_cmd(&db_path)
        .args(["reset", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress erased."));

    prosperitas_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("- Points: 0"));
}
