//! TOML evaluation file parser.
//!
//! Loads evaluations and their questions from TOML files and directories,
//! and validates them for authoring mistakes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    AnswerOption, AnswerValue, Evaluation, EvaluationStatus, EvaluationType, Question,
    QuestionType,
};

/// An evaluation together with its questions, as authored in one file.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationBundle {
    pub evaluation: Evaluation,
    pub questions: Vec<Question>,
}

/// Intermediate TOML structure for parsing evaluation files.
#[derive(Debug, Deserialize)]
struct TomlEvaluationFile {
    evaluation: TomlEvaluationHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlEvaluationHeader {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    course: String,
    #[serde(default = "default_type", rename = "type")]
    kind: String,
    #[serde(default)]
    status: Option<String>,
    duration_minutes: u32,
    passing_score: u32,
    #[serde(default)]
    score: Option<u32>,
}

fn default_type() -> String {
    "Quiz".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    prompt: String,
    #[serde(default = "default_points")]
    points: u32,
    #[serde(default)]
    options: Vec<TomlOption>,
    #[serde(default)]
    correct_answer: Option<AnswerValue>,
}

fn default_points() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    id: String,
    text: String,
}

/// Parse a single TOML file into an `EvaluationBundle`.
pub fn parse_evaluation(path: &Path) -> Result<EvaluationBundle> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read evaluation file: {}", path.display()))?;

    parse_evaluation_str(&content, path)
}

/// Parse a TOML string into an `EvaluationBundle` (useful for testing).
pub fn parse_evaluation_str(content: &str, source_path: &Path) -> Result<EvaluationBundle> {
    let parsed: TomlEvaluationFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let kind: EvaluationType = parsed
        .evaluation
        .kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let status: EvaluationStatus = parsed
        .evaluation
        .status
        .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
        .transpose()?
        .unwrap_or(EvaluationStatus::NotStarted);

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionType = q.kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
            Ok(Question {
                id: q.id,
                kind,
                prompt: q.prompt,
                points: q.points,
                options: q
                    .options
                    .into_iter()
                    .map(|o| AnswerOption {
                        id: o.id,
                        text: o.text,
                    })
                    .collect(),
                correct_answer: q.correct_answer,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let evaluation = Evaluation {
        id: parsed.evaluation.id,
        title: parsed.evaluation.title,
        description: parsed.evaluation.description,
        course: parsed.evaluation.course,
        kind,
        status,
        duration_minutes: parsed.evaluation.duration_minutes,
        passing_score: parsed.evaluation.passing_score,
        score: parsed.evaluation.score,
        question_count: questions.len(),
    };

    Ok(EvaluationBundle {
        evaluation,
        questions,
    })
}

/// Recursively load all `.toml` evaluation files from a directory.
pub fn load_evaluation_directory(dir: &Path) -> Result<Vec<EvaluationBundle>> {
    let mut bundles = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            bundles.extend(load_evaluation_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_evaluation(&path) {
                Ok(bundle) => bundles.push(bundle),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    bundles.sort_by_key(|b| b.evaluation.id);
    Ok(bundles)
}

/// A warning from evaluation validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate an evaluation for common authoring issues.
pub fn validate_evaluation(bundle: &EvaluationBundle) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bundle.evaluation.passing_score > 100 {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "passing score {} is above 100",
                bundle.evaluation.passing_score
            ),
        });
    }

    if bundle.evaluation.duration_minutes == 0 {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "duration is zero minutes".into(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for question in &bundle.questions {
        if !seen_ids.insert(question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: format!("duplicate question ID: {}", question.id),
            });
        }

        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "prompt is empty".into(),
            });
        }

        if question.correct_answer.is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "no correct answer; the question will always grade as incorrect".into(),
            });
        }

        match question.kind {
            QuestionType::Mcq => {
                if question.options.len() < 2 {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id),
                        message: "multiple-choice question has fewer than 2 options".into(),
                    });
                }
                if let Some(AnswerValue::Text(answer)) = &question.correct_answer {
                    if !question.options.iter().any(|o| &o.id == answer) {
                        warnings.push(ValidationWarning {
                            question_id: Some(question.id),
                            message: format!("correct answer '{answer}' matches no option id"),
                        });
                    }
                } else if question.correct_answer.is_some() {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id),
                        message: "multiple-choice correct answer must be an option id".into(),
                    });
                }
            }
            QuestionType::TrueFalse => {
                if matches!(question.correct_answer, Some(AnswerValue::Text(_))) {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id),
                        message: "true/false correct answer must be a boolean".into(),
                    });
                }
            }
            QuestionType::ShortAnswer => {
                if matches!(question.correct_answer, Some(AnswerValue::Bool(_))) {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id),
                        message: "short-answer correct answer must be text".into(),
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[evaluation]
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
]

[[questions]]
id = 102
type = "TrueFalse"
prompt = "Standalone components can be used without NgModules."
correct_answer = true

[[questions]]
id = 104
type = "ShortAnswer"
prompt = "Name one benefit of using Angular Material."
correct_answer = "consistency"
"#;

    fn parse_sample() -> EvaluationBundle {
        parse_evaluation_str(SAMPLE, &PathBuf::from("sample.toml")).unwrap()
    }

    #[test]
    fn parses_header_and_questions() {
        let bundle = parse_sample();
        assert_eq!(bundle.evaluation.id, 1);
        assert_eq!(bundle.evaluation.kind, EvaluationType::Quiz);
        assert_eq!(bundle.evaluation.status, EvaluationStatus::NotStarted);
        assert_eq!(bundle.evaluation.question_count, 3);
        assert_eq!(bundle.questions.len(), 3);

        let mcq = &bundle.questions[0];
        assert_eq!(mcq.kind, QuestionType::Mcq);
        assert_eq!(mcq.options.len(), 2);
        assert_eq!(mcq.correct_answer, Some("b".into()));

        let tf = &bundle.questions[1];
        assert_eq!(tf.kind, QuestionType::TrueFalse);
        assert_eq!(tf.correct_answer, Some(true.into()));
        assert_eq!(tf.points, 10);
    }

    #[test]
    fn rejects_unknown_question_type() {
        let content = SAMPLE.replace("type = \"MCQ\"", "type = \"Essay\"");
        let err = parse_evaluation_str(&content, &PathBuf::from("sample.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown question type"));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(parse_evaluation_str("not toml [", &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn valid_file_yields_no_warnings() {
        assert!(validate_evaluation(&parse_sample()).is_empty());
    }

    #[test]
    fn validation_flags_authoring_mistakes() {
        let mut bundle = parse_sample();
        bundle.evaluation.passing_score = 120;
        bundle.questions[0].options.truncate(1);
        bundle.questions[1].correct_answer = Some("yes".into());
        bundle.questions[2].correct_answer = None;

        let warnings = validate_evaluation(&bundle);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("above 100")));
        assert!(messages.iter().any(|m| m.contains("fewer than 2 options")));
        assert!(messages.iter().any(|m| m.contains("matches no option id")));
        assert!(messages.iter().any(|m| m.contains("must be a boolean")));
        assert!(messages.iter().any(|m| m.contains("no correct answer")));
    }

    #[test]
    fn validation_flags_duplicate_question_ids() {
        let mut bundle = parse_sample();
        bundle.questions[1].id = 101;
        let warnings = validate_evaluation(&bundle);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("duplicate question ID")));
    }

    #[test]
    fn loads_directory_of_evaluations() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("quiz.toml"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();

        let bundles = load_evaluation_directory(dir.path()).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].evaluation.title, "Angular Fundamentals Quiz");
    }
}
