//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn assessor() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("assessor").unwrap()
}

fn init_in(dir: &TempDir) {
    assessor().current_dir(dir.path()).arg("init").assert().success();
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    assessor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created evaluations/example.toml"))
        .stdout(predicate::str::contains("Created answers/example.json"));

    assert!(dir.path().join("evaluations/example.toml").exists());
    assert!(dir.path().join("answers/example.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    assessor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_example_evaluation() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    assessor()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--evaluation")
        .arg("evaluations/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 questions"))
        .stdout(predicate::str::contains("All evaluation files valid"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    assessor()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--evaluation")
        .arg("evaluations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Angular Fundamentals Quiz"));
}

#[test]
fn validate_nonexistent_file() {
    assessor()
        .arg("validate")
        .arg("--evaluation")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_perfect_answers() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    assessor()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--evaluation")
        .arg("evaluations/example.toml")
        .arg("--answers")
        .arg("answers/example.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100% (6/6 correct), passed"));
}

#[test]
fn grade_partial_answers() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    // 3 of 6 correct: 104 misses the loose match, 105 and 106 unanswered.
    std::fs::write(
        dir.path().join("answers/partial.json"),
        r#"{"101": "b", "102": true, "103": "b", "104": "nope"}"#,
    )
    .unwrap();

    assessor()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--evaluation")
        .arg("evaluations/example.toml")
        .arg("--answers")
        .arg("answers/partial.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 50% (3/6 correct), failed"))
        .stdout(predicate::str::contains("(unanswered)"));
}

#[test]
fn grade_json_format_and_output_file() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    assessor()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--evaluation")
        .arg("evaluations/example.toml")
        .arg("--answers")
        .arg("answers/example.json")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg("result.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));

    let written = std::fs::read_to_string(dir.path().join("result.json")).unwrap();
    let result: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(result["score"], 100);
    assert_eq!(result["totalQuestions"], 6);
    assert_eq!(result["reviews"].as_array().unwrap().len(), 6);
    // Enum fields travel in the wire form.
    assert_eq!(result["reviews"][1]["type"], "TRUE_FALSE");
}

#[test]
fn grade_rejects_bad_answers_json() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);
    std::fs::write(dir.path().join("answers/bad.json"), "not json").unwrap();

    assessor()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--evaluation")
        .arg("evaluations/example.toml")
        .arg("--answers")
        .arg("answers/bad.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse answers JSON"));
}

#[test]
fn stats_over_directory() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    // A second, completed evaluation so the average is visible.
    std::fs::write(
        dir.path().join("evaluations/completed.toml"),
        r#"
[evaluation]
id = 2
title = "UX Evaluation Assignment"
course = "Product Design Studio"
type = "Assignment"
status = "Completed"
duration_minutes = 45
passing_score = 65
score = 88

[[questions]]
id = 301
type = "ShortAnswer"
prompt = "List two accessibility considerations for forms."
points = 20
correct_answer = "labels"
"#,
    )
    .unwrap();

    assessor()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--evaluations")
        .arg("evaluations")
        .assert()
        .success()
        .stdout(predicate::str::contains("UX Evaluation Assignment"))
        .stdout(predicate::str::contains(
            "Total: 2  Completed: 1  Pending: 1  Average score: 88%",
        ));
}

#[test]
fn stats_on_empty_directory_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("evaluations")).unwrap();

    assessor()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--evaluations")
        .arg("evaluations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no evaluation files found"));
}
