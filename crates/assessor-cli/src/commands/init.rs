//! The `assessor init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create example evaluation
    std::fs::create_dir_all("evaluations")?;
    let evaluation_path = std::path::Path::new("evaluations/example.toml");
    if evaluation_path.exists() {
        println!("evaluations/example.toml already exists, skipping.");
    } else {
        std::fs::write(evaluation_path, EXAMPLE_EVALUATION)?;
        println!("Created evaluations/example.toml");
    }

    // Create example answers
    std::fs::create_dir_all("answers")?;
    let answers_path = std::path::Path::new("answers/example.json");
    if answers_path.exists() {
        println!("answers/example.json already exists, skipping.");
    } else {
        std::fs::write(answers_path, EXAMPLE_ANSWERS)?;
        println!("Created answers/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: assessor validate --evaluation evaluations/example.toml");
    println!("  2. Run: assessor grade --evaluation evaluations/example.toml --answers answers/example.json");

    Ok(())
}

const EXAMPLE_EVALUATION: &str = r#"[evaluation]
id = 1
title = "Angular Fundamentals Quiz"
description = "Core Angular concepts and architecture basics."
course = "Angular Foundations"
type = "Quiz"
duration_minutes = 20
passing_score = 70

[[questions]]
id = 101
type = "MCQ"
prompt = "Which Angular feature enables dependency injection?"
points = 10
correct_answer = "b"
options = [
    { id = "a", text = "NgZone" },
    { id = "b", text = "Providers" },
    { id = "c", text = "Signals" },
    { id = "d", text = "Pipes" },
]

[[questions]]
id = 102
type = "TrueFalse"
prompt = "Standalone components can be used without NgModules."
points = 10
correct_answer = true

[[questions]]
id = 103
type = "MCQ"
prompt = "Which directive renders a template based on a condition?"
points = 10
correct_answer = "b"
options = [
    { id = "a", text = "ngFor" },
    { id = "b", text = "ngIf" },
    { id = "c", text = "ngSwitch" },
    { id = "d", text = "ngClass" },
]

[[questions]]
id = 104
type = "ShortAnswer"
prompt = "Name one benefit of using Angular Material."
points = 10
correct_answer = "consistency"

[[questions]]
id = 105
type = "MCQ"
prompt = "What does RxJS primarily handle in Angular apps?"
points = 10
correct_answer = "b"
options = [
    { id = "a", text = "State management only" },
    { id = "b", text = "Asynchronous streams" },
    { id = "c", text = "Routing" },
    { id = "d", text = "DOM manipulation" },
]

[[questions]]
id = 106
type = "TrueFalse"
prompt = "Angular signals are used for styling components."
points = 10
correct_answer = false
"#;

const EXAMPLE_ANSWERS: &str = r#"{
  "101": "b",
  "102": true,
  "103": "b",
  "104": "Visual consistency across components",
  "105": "b",
  "106": false
}
"#;
