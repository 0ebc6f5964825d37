//! The `assessor grade` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;

use assessor_core::grading::EvaluationResult;
use assessor_core::model::{AnswerMap, QuestionType};
use assessor_core::parser;
use assessor_store::{AttemptService, MemoryStore};

pub async fn execute(
    evaluation_path: PathBuf,
    answers_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let bundle = parser::parse_evaluation(&evaluation_path)?;

    for warning in parser::validate_evaluation(&bundle) {
        match warning.question_id {
            Some(id) => eprintln!("Warning: question {id}: {}", warning.message),
            None => eprintln!("Warning: {}", warning.message),
        }
    }

    let answers_json = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers file: {}", answers_path.display()))?;
    let answers: AnswerMap = serde_json::from_str(&answers_json)
        .with_context(|| format!("failed to parse answers JSON: {}", answers_path.display()))?;

    // Run the real submission flow against an in-memory store.
    let store = Arc::new(MemoryStore::new());
    let evaluation_id = bundle.evaluation.id;
    assessor_store::repository::EvaluationRepository::save(store.as_ref(), bundle.evaluation)
        .await?;
    store.insert_questions(evaluation_id, bundle.questions).await;

    let service = AttemptService::new(store.clone(), store.clone());
    for (question_id, answer) in answers {
        service.save_answer(evaluation_id, question_id, answer).await?;
    }
    let result = service.submit(evaluation_id).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => print_result(&result),
        other => anyhow::bail!("unknown format: {other}"),
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write result to {}", path.display()))?;
        eprintln!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &EvaluationResult) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your Answer", "Correct Answer", "Verdict"]);

    for review in &result.reviews {
        let user = review
            .user_answer
            .as_ref()
            .map(|a| a.as_text())
            .unwrap_or_else(|| "(unanswered)".to_string());
        let verdict = if review.is_correct { "correct" } else { "incorrect" };
        let kind_note = match review.kind {
            QuestionType::ShortAnswer => " (loose match)",
            _ => "",
        };

        table.add_row(vec![
            review.question_id.to_string(),
            review.prompt.clone(),
            user,
            review.correct_answer.as_text(),
            format!("{verdict}{kind_note}"),
        ]);
    }

    println!("{table}");
    println!(
        "Score: {}% ({}/{} correct), {} (passing score {}%)",
        result.score,
        result.correct_count,
        result.total_questions,
        if result.passed { "passed" } else { "failed" },
        result.passing_score,
    );
}
