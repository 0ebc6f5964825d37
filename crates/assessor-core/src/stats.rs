//! Dashboard aggregation over in-memory lists.
//!
//! Both dashboards work the same way: the caller supplies the full list it
//! already holds and gets back small derived aggregates. Nothing here
//! touches a repository.

use serde::{Deserialize, Serialize};

use crate::catalog::FormationSummary;
use crate::model::{Evaluation, EvaluationStatus};

/// Headline numbers of the learner's evaluation dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded average over evaluations that carry a score; `0` when none do.
    pub average_score: u32,
}

/// Aggregate the evaluation dashboard stats.
pub fn dashboard_stats(evaluations: &[Evaluation]) -> DashboardStats {
    let total = evaluations.len();
    let completed = evaluations
        .iter()
        .filter(|e| e.status == EvaluationStatus::Completed)
        .count();
    let scores: Vec<u32> = evaluations.iter().filter_map(|e| e.score).collect();
    let average_score = if scores.is_empty() {
        0
    } else {
        (scores.iter().sum::<u32>() as f64 / scores.len() as f64).round() as u32
    };

    DashboardStats {
        total,
        completed,
        pending: total - completed,
        average_score,
    }
}

/// Headline numbers of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_students: u32,
    pub total_revenue: f64,
    pub active_formations: usize,
    /// Mean of per-formation ratings; `0` for an empty catalog.
    pub overall_rating: f64,
}

/// Aggregate the admin dashboard stats over all formation rows.
pub fn global_stats(summaries: &[FormationSummary]) -> GlobalStats {
    let total_students = summaries.iter().map(|s| s.kpis.enrolled_count).sum();
    let total_revenue = summaries.iter().map(|s| s.kpis.revenue).sum();
    let active_formations = summaries.iter().filter(|s| s.published).count();
    let overall_rating = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.kpis.average_rating).sum::<f64>() / summaries.len() as f64
    };

    GlobalStats {
        total_students,
        total_revenue,
        active_formations,
        overall_rating,
    }
}

/// Publication filter of the admin dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    fn matches(self, published: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => published,
            StatusFilter::Draft => !published,
        }
    }
}

/// Filter dashboard rows by a free-text query and a publication filter.
///
/// The query matches case-insensitively against title and category name; an
/// empty query matches everything.
pub fn filter_summaries<'a>(
    summaries: &'a [FormationSummary],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a FormationSummary> {
    let query = query.to_lowercase();
    summaries
        .iter()
        .filter(|s| {
            let matches_query = s.title.to_lowercase().contains(&query)
                || s.category_name.to_lowercase().contains(&query);
            matches_query && status.matches(s.published)
        })
        .collect()
}
