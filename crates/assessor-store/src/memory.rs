//! In-memory store backing all repository traits.
//!
//! Safe to share across tasks: every collection sits behind its own
//! `tokio::sync::RwLock`. Useful as the test double and as the backing
//! store of the CLI, which grades one evaluation per invocation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use assessor_core::catalog::{Formation, FormationKpis};
use assessor_core::model::{Attempt, Evaluation, Question};

use crate::error::StoreError;
use crate::repository::{AttemptRepository, CatalogRepository, EvaluationRepository};

/// In-memory implementation of every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    evaluations: RwLock<Vec<Evaluation>>,
    questions: RwLock<HashMap<u32, Vec<Question>>>,
    attempts: RwLock<HashMap<u32, Attempt>>,
    formations: RwLock<Vec<Formation>>,
    kpis: RwLock<HashMap<u32, FormationKpis>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the questions of one evaluation, replacing any existing set.
    pub async fn insert_questions(&self, evaluation_id: u32, questions: Vec<Question>) {
        self.questions.write().await.insert(evaluation_id, questions);
    }

    /// Record usage indicators for a formation.
    pub async fn insert_kpis(&self, formation_id: u32, kpis: FormationKpis) {
        self.kpis.write().await.insert(formation_id, kpis);
    }
}

#[async_trait]
impl EvaluationRepository for MemoryStore {
    async fn get(&self, id: u32) -> Result<Option<Evaluation>, StoreError> {
        Ok(self
            .evaluations
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Evaluation>, StoreError> {
        Ok(self.evaluations.read().await.clone())
    }

    async fn save(&self, mut evaluation: Evaluation) -> Result<Evaluation, StoreError> {
        let mut evaluations = self.evaluations.write().await;

        if evaluation.id == 0 {
            let next_id = evaluations.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            evaluation.id = next_id;
            evaluations.push(evaluation.clone());
            return Ok(evaluation);
        }

        match evaluations.iter_mut().find(|e| e.id == evaluation.id) {
            Some(existing) => *existing = evaluation.clone(),
            None => evaluations.push(evaluation.clone()),
        }
        Ok(evaluation)
    }

    async fn delete(&self, id: u32) -> Result<(), StoreError> {
        let mut evaluations = self.evaluations.write().await;
        let before = evaluations.len();
        evaluations.retain(|e| e.id != id);
        if evaluations.len() == before {
            return Err(StoreError::EvaluationNotFound(id));
        }
        self.questions.write().await.remove(&id);
        self.attempts.write().await.remove(&id);
        Ok(())
    }

    async fn questions(&self, evaluation_id: u32) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .read()
            .await
            .get(&evaluation_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl AttemptRepository for MemoryStore {
    async fn get(&self, evaluation_id: u32) -> Result<Option<Attempt>, StoreError> {
        Ok(self.attempts.read().await.get(&evaluation_id).cloned())
    }

    async fn save(&self, attempt: Attempt) -> Result<(), StoreError> {
        self.attempts
            .write()
            .await
            .insert(attempt.evaluation_id, attempt);
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn get(&self, id: u32) -> Result<Option<Formation>, StoreError> {
        Ok(self
            .formations
            .read()
            .await
            .iter()
            .find(|f| f.id == Some(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Formation>, StoreError> {
        Ok(self.formations.read().await.clone())
    }

    async fn save(&self, mut formation: Formation) -> Result<Formation, StoreError> {
        let mut formations = self.formations.write().await;

        let Some(id) = formation.id else {
            let next_id = formations.iter().filter_map(|f| f.id).max().unwrap_or(0) + 1;
            formation.id = Some(next_id);
            formations.push(formation.clone());
            return Ok(formation);
        };

        match formations.iter_mut().find(|f| f.id == Some(id)) {
            Some(existing) => *existing = formation.clone(),
            None => formations.push(formation.clone()),
        }
        Ok(formation)
    }

    async fn delete(&self, id: u32) -> Result<(), StoreError> {
        let mut formations = self.formations.write().await;
        let before = formations.len();
        formations.retain(|f| f.id != Some(id));
        if formations.len() == before {
            return Err(StoreError::FormationNotFound(id));
        }
        self.kpis.write().await.remove(&id);
        Ok(())
    }

    async fn kpis(&self, id: u32) -> Result<FormationKpis, StoreError> {
        Ok(self.kpis.read().await.get(&id).copied().unwrap_or_default())
    }
}
