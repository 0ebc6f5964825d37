//! The evaluation grading engine.
//!
//! Pure functions only: given questions, their correct answers, and a
//! learner's submitted answers, produce a scored result with per-question
//! review records. No I/O, no shared state, no failure modes; absent or
//! malformed data degrades to "incorrect" rather than erroring, so the
//! engine can grade any snapshot the caller hands it.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerMap, AnswerOption, AnswerValue, Evaluation, Question, QuestionType};

/// Explanation attached to short-answer reviews, since their matching is
/// deliberately loose.
pub const SHORT_ANSWER_EXPLANATION: &str = "Responses are matched loosely for quick feedback.";

/// Per-question review record derived during grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub question_id: u32,
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Options carried through unchanged for display.
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// The submitted value, or `None` if the question was unanswered.
    pub user_answer: Option<AnswerValue>,
    pub correct_answer: AnswerValue,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// The graded outcome of one evaluation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub evaluation_id: u32,
    /// Percentage score, 0-100.
    pub score: u32,
    pub passing_score: u32,
    pub passed: bool,
    pub total_questions: usize,
    pub correct_count: usize,
    pub reviews: Vec<QuestionReview>,
}

/// Decide whether a submitted answer is correct.
///
/// Unanswered is always incorrect. Short answers match loosely: the trimmed,
/// lowercased user text must contain the lowercased correct text as a
/// substring. Everything else is exact equality with no coercion between
/// text and boolean values.
pub fn compare_answer(
    user_answer: Option<&AnswerValue>,
    correct_answer: &AnswerValue,
    kind: QuestionType,
) -> bool {
    let Some(user_answer) = user_answer else {
        return false;
    };

    if kind == QuestionType::ShortAnswer {
        return user_answer
            .as_text()
            .trim()
            .to_lowercase()
            .contains(&correct_answer.as_text().to_lowercase());
    }

    user_answer == correct_answer
}

/// Build one review per question, in question order.
///
/// A question missing its correct answer compares against empty text and
/// still produces a review; the output length always equals the input
/// length.
pub fn build_reviews(questions: &[Question], answers: &AnswerMap) -> Vec<QuestionReview> {
    questions
        .iter()
        .map(|question| {
            let user_answer = answers.get(&question.id).cloned();
            let correct_answer = question
                .correct_answer
                .clone()
                .unwrap_or_else(|| AnswerValue::Text(String::new()));
            let is_correct = compare_answer(user_answer.as_ref(), &correct_answer, question.kind);

            QuestionReview {
                question_id: question.id,
                prompt: question.prompt.clone(),
                kind: question.kind,
                options: question.options.clone(),
                user_answer,
                correct_answer,
                is_correct,
                explanation: (question.kind == QuestionType::ShortAnswer)
                    .then(|| SHORT_ANSWER_EXPLANATION.to_string()),
            }
        })
        .collect()
}

/// Grade a complete answer snapshot against an evaluation.
///
/// Deterministic and side-effect free; grading the same snapshot twice
/// yields identical results, so it is safe to call for both in-progress
/// previews and final submission.
pub fn grade_evaluation(
    evaluation: &Evaluation,
    questions: &[Question],
    answers: &AnswerMap,
) -> EvaluationResult {
    let reviews = build_reviews(questions, answers);
    let correct_count = reviews.iter().filter(|r| r.is_correct).count();
    let score = score_percent(correct_count, questions.len());
    let passing_score = evaluation.passing_score;

    EvaluationResult {
        evaluation_id: evaluation.id,
        score,
        passing_score,
        passed: score >= passing_score,
        total_questions: questions.len(),
        correct_count,
        reviews,
    }
}

/// Rounded percentage, `0` when there are no questions.
pub fn score_percent(correct_count: usize, total_questions: usize) -> u32 {
    if total_questions == 0 {
        return 0;
    }
    (correct_count as f64 / total_questions as f64 * 100.0).round() as u32
}
