use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn solve_one_push_level() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["solve", "tests/fixtures/one-push.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found solution"))
        .stdout(predicate::str::contains("1 push"));
}

#[test]
fn solve_corner_deadlock_reports_no_solution() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["solve", "tests/fixtures/corner-deadlock.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No solution"));
}

#[test]
fn solve_tiny_budget_reports_budget_exhausted() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["solve", "tests/fixtures/one-push.txt", "--max-iters", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gave up after 0 iterations"));
}

#[test]
fn solve_malformed_board_fails() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["solve", "tests/fixtures/malformed-no-player.txt"])
        .assert()
        .failure();
}

#[test]
fn solve_missing_file_fails() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["solve", "tests/fixtures/does-not-exist.txt"])
        .assert()
        .failure();
}

#[test]
fn generate_with_seed_produces_a_solvable_board_deterministically() {
    let run = |seed: &str| {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .args([
                "generate",
                "--width",
                "8",
                "--height",
                "8",
                "--boxes",
                "2",
                "--walls",
                "4",
                "--seed",
                seed,
            ])
            .output()
            .unwrap()
    };

    let first = run("123");
    let second = run("123");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn replay_prints_every_board_in_the_path() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(["replay", "tests/fixtures/one-push.txt", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Push 0/1"))
        .stdout(predicate::str::contains("Push 1/1"));
}
