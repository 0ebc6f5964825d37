//! Repository trait definitions.
//!
//! These async traits are the seam between the pure grading/aggregation
//! logic and whatever persistence backs it. `memory::MemoryStore`
//! implements all of them; a REST-backed implementation would slot in the
//! same way.

use async_trait::async_trait;

use assessor_core::catalog::{Formation, FormationKpis};
use assessor_core::model::{Attempt, Evaluation, Question};

use crate::error::StoreError;

/// Storage for evaluations and their questions.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Fetch one evaluation, `None` if the id is unknown.
    async fn get(&self, id: u32) -> Result<Option<Evaluation>, StoreError>;

    /// All evaluations, in insertion order.
    async fn list(&self) -> Result<Vec<Evaluation>, StoreError>;

    /// Insert or update. An evaluation with id `0` is treated as new and
    /// assigned the next free id; the stored copy is returned.
    async fn save(&self, evaluation: Evaluation) -> Result<Evaluation, StoreError>;

    /// Remove an evaluation and anything stored under it.
    async fn delete(&self, id: u32) -> Result<(), StoreError>;

    /// The questions of one evaluation, empty if none were stored.
    async fn questions(&self, evaluation_id: u32) -> Result<Vec<Question>, StoreError>;
}

/// Storage for the learner's attempts, one per evaluation.
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// The attempt for an evaluation, `None` if never started.
    async fn get(&self, evaluation_id: u32) -> Result<Option<Attempt>, StoreError>;

    /// Insert or replace the attempt for its evaluation.
    async fn save(&self, attempt: Attempt) -> Result<(), StoreError>;
}

/// Storage for the course catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch one formation, `None` if the id is unknown.
    async fn get(&self, id: u32) -> Result<Option<Formation>, StoreError>;

    /// All formations, in insertion order.
    async fn list(&self) -> Result<Vec<Formation>, StoreError>;

    /// Insert or update. A formation without an id is treated as new and
    /// assigned the next free id; the stored copy is returned.
    async fn save(&self, formation: Formation) -> Result<Formation, StoreError>;

    /// Remove a formation.
    async fn delete(&self, id: u32) -> Result<(), StoreError>;

    /// Usage indicators for one formation; zeroes when none were recorded.
    async fn kpis(&self, id: u32) -> Result<FormationKpis, StoreError>;
}
