//! Attempt and submission flow.
//!
//! `AttemptService` owns the two collaborators the grading engine serves:
//! the attempt-submission flow and the results-retrieval flow. It keeps all
//! state behind the repository traits; grading itself stays pure.

use std::sync::Arc;

use chrono::Utc;

use assessor_core::catalog::FormationSummary;
use assessor_core::grading::{grade_evaluation, EvaluationResult};
use assessor_core::model::{AnswerValue, Attempt, Evaluation, EvaluationStatus};
use assessor_core::stats::{dashboard_stats, DashboardStats};

use crate::error::StoreError;
use crate::repository::{AttemptRepository, CatalogRepository, EvaluationRepository};

/// Drives attempts against stored evaluations.
pub struct AttemptService {
    evaluations: Arc<dyn EvaluationRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl AttemptService {
    pub fn new(
        evaluations: Arc<dyn EvaluationRepository>,
        attempts: Arc<dyn AttemptRepository>,
    ) -> Self {
        Self {
            evaluations,
            attempts,
        }
    }

    /// Record one answer, creating the attempt on first write.
    ///
    /// The first recorded answer also moves a not-started evaluation to
    /// `In Progress`.
    pub async fn save_answer(
        &self,
        evaluation_id: u32,
        question_id: u32,
        answer: AnswerValue,
    ) -> Result<(), StoreError> {
        let evaluation = self.require(evaluation_id).await?;

        let mut attempt = match self.attempts.get(evaluation_id).await? {
            Some(attempt) => attempt,
            None => {
                tracing::info!(evaluation_id, "starting attempt");
                Attempt::new(evaluation_id, Utc::now())
            }
        };
        attempt.record(question_id, answer);
        self.attempts.save(attempt).await?;

        if evaluation.status == EvaluationStatus::NotStarted {
            self.evaluations
                .save(Evaluation {
                    status: EvaluationStatus::InProgress,
                    ..evaluation
                })
                .await?;
        }

        Ok(())
    }

    /// The in-progress attempt, `None` before the first saved answer.
    pub async fn attempt(&self, evaluation_id: u32) -> Result<Option<Attempt>, StoreError> {
        self.attempts.get(evaluation_id).await
    }

    /// Grade the stored answer snapshot and complete the evaluation.
    ///
    /// The first submission wins: once the evaluation is completed with a
    /// score, later submissions do not re-grade or re-mark; they behave like
    /// `result`. The timer-expiry path calls this too, grading the answers
    /// as they stand.
    pub async fn submit(&self, evaluation_id: u32) -> Result<EvaluationResult, StoreError> {
        let evaluation = self.require(evaluation_id).await?;

        if evaluation.status == EvaluationStatus::Completed && evaluation.score.is_some() {
            tracing::warn!(evaluation_id, "already submitted; returning stored result");
            return self.result(evaluation_id).await;
        }

        let questions = self.evaluations.questions(evaluation_id).await?;
        let answers = self
            .attempts
            .get(evaluation_id)
            .await?
            .map(|a| a.answers)
            .unwrap_or_default();

        let result = grade_evaluation(&evaluation, &questions, &answers);
        tracing::info!(
            evaluation_id,
            score = result.score,
            passed = result.passed,
            "evaluation submitted"
        );

        self.evaluations
            .save(Evaluation {
                status: EvaluationStatus::Completed,
                score: Some(result.score),
                ..evaluation
            })
            .await?;

        Ok(result)
    }

    /// Rebuild the result for an evaluation from its stored answers.
    ///
    /// Reviews are always recomputed; the persisted score is authoritative
    /// when present, otherwise the score is recomputed as well.
    pub async fn result(&self, evaluation_id: u32) -> Result<EvaluationResult, StoreError> {
        let evaluation = self.require(evaluation_id).await?;
        let questions = self.evaluations.questions(evaluation_id).await?;
        let answers = self
            .attempts
            .get(evaluation_id)
            .await?
            .map(|a| a.answers)
            .unwrap_or_default();

        let mut result = grade_evaluation(&evaluation, &questions, &answers);
        if let Some(score) = evaluation.score {
            result.score = score;
            result.passed = score >= evaluation.passing_score;
        }
        Ok(result)
    }

    /// Headline numbers over every stored evaluation.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        let evaluations = self.evaluations.list().await?;
        Ok(dashboard_stats(&evaluations))
    }

    async fn require(&self, evaluation_id: u32) -> Result<Evaluation, StoreError> {
        self.evaluations
            .get(evaluation_id)
            .await?
            .ok_or(StoreError::EvaluationNotFound(evaluation_id))
    }
}

/// Assemble the admin dashboard rows from the catalog.
pub async fn dashboard_rows(
    catalog: &dyn CatalogRepository,
) -> Result<Vec<FormationSummary>, StoreError> {
    let mut rows = Vec::new();
    for formation in catalog.list().await? {
        let Some(id) = formation.id else {
            continue;
        };
        let kpis = catalog.kpis(id).await?;
        if let Some(row) = FormationSummary::from_formation(&formation, kpis) {
            rows.push(row);
        }
    }
    Ok(rows)
}
