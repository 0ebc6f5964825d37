//! Core data model types for assessor.
//!
//! These are the fundamental types the entire assessor system uses to
//! represent evaluations, questions, submitted answers, and attempts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A learner's submitted value for a single question.
///
/// Tagged variant instead of an untyped string/boolean union so comparison
/// logic can match exhaustively. The untagged serde form accepts both JSON
/// `"b"` and `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Text(String),
}

impl AnswerValue {
    /// Render the value as text for loose matching ("true"/"false" for bools).
    pub fn as_text(&self) -> String {
        match self {
            AnswerValue::Bool(b) => b.to_string(),
            AnswerValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

/// Stored answers keyed by question id. Absent entries mean "not answered."
pub type AnswerMap = BTreeMap<u32, AnswerValue>;

/// Question kinds supported by the grading engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Mcq,
    TrueFalse,
    ShortAnswer,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Mcq => write!(f, "MCQ"),
            QuestionType::TrueFalse => write!(f, "TrueFalse"),
            QuestionType::ShortAnswer => write!(f, "ShortAnswer"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcq" | "multiple_choice" | "multiplechoice" => Ok(QuestionType::Mcq),
            "truefalse" | "true_false" => Ok(QuestionType::TrueFalse),
            "shortanswer" | "short_answer" => Ok(QuestionType::ShortAnswer),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// One selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option identifier (e.g. "a"). The correct answer references this id.
    pub id: String,
    /// Display text.
    pub text: String,
}

/// A single evaluation question.
///
/// The serialized form uses the backend's camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question identifier.
    pub id: u32,
    /// Question kind.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// The prompt shown to the learner.
    pub prompt: String,
    /// Points assigned by the author. Scoring is uniform per question; this
    /// is carried for display only.
    #[serde(default)]
    pub points: u32,
    /// Options, present only for multiple-choice questions.
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// The expected answer. `None` is tolerated and grades as incorrect.
    #[serde(default)]
    pub correct_answer: Option<AnswerValue>,
}

/// Evaluation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationType {
    Quiz,
    Exam,
    Assignment,
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationType::Quiz => write!(f, "Quiz"),
            EvaluationType::Exam => write!(f, "Exam"),
            EvaluationType::Assignment => write!(f, "Assignment"),
        }
    }
}

impl FromStr for EvaluationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiz" => Ok(EvaluationType::Quiz),
            "exam" => Ok(EvaluationType::Exam),
            "assignment" => Ok(EvaluationType::Assignment),
            other => Err(format!("unknown evaluation type: {other}")),
        }
    }
}

/// Lifecycle status of an evaluation for the current learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationStatus::NotStarted => write!(f, "Not Started"),
            EvaluationStatus::InProgress => write!(f, "In Progress"),
            EvaluationStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for EvaluationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "").as_str() {
            "notstarted" => Ok(EvaluationStatus::NotStarted),
            "inprogress" => Ok(EvaluationStatus::InProgress),
            "completed" => Ok(EvaluationStatus::Completed),
            other => Err(format!("unknown evaluation status: {other}")),
        }
    }
}

/// An evaluation (quiz, exam, or assignment) as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Unique evaluation identifier.
    pub id: u32,
    /// Title shown on the dashboard.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Course the evaluation belongs to.
    #[serde(default)]
    pub course: String,
    /// Evaluation kind.
    #[serde(rename = "type")]
    pub kind: EvaluationType,
    /// Current status for the learner.
    #[serde(default = "default_status")]
    pub status: EvaluationStatus,
    /// Wall-clock duration allowed for an attempt.
    pub duration_minutes: u32,
    /// Minimum score (0-100) required to pass.
    pub passing_score: u32,
    /// Achieved score, present once the evaluation was completed.
    #[serde(default)]
    pub score: Option<u32>,
    /// Number of questions, for display before questions are loaded.
    #[serde(default)]
    pub question_count: usize,
}

fn default_status() -> EvaluationStatus {
    EvaluationStatus::NotStarted
}

/// A learner's in-progress answers for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    /// The evaluation being attempted.
    pub evaluation_id: u32,
    /// Answers recorded so far, keyed by question id.
    #[serde(default)]
    pub answers: AnswerMap,
    /// When the attempt was started.
    pub started_at: DateTime<Utc>,
}

impl Attempt {
    /// Start a fresh attempt with no answers.
    pub fn new(evaluation_id: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            evaluation_id,
            answers: AnswerMap::new(),
            started_at,
        }
    }

    /// Record (or overwrite) the answer for a question.
    pub fn record(&mut self, question_id: u32, answer: AnswerValue) {
        self.answers.insert(question_id, answer);
    }

    /// Seconds left on the attempt clock at `now`, clamped at zero.
    ///
    /// The timer itself runs outside the engine; callers use this to decide
    /// when to trigger submission of the answers as they stand.
    pub fn remaining_seconds(&self, duration_minutes: u32, now: DateTime<Utc>) -> u64 {
        let allowed = i64::from(duration_minutes) * 60;
        let elapsed = (now - self.started_at).num_seconds();
        allowed.saturating_sub(elapsed).max(0) as u64
    }
}
