//! The `assessor stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use assessor_core::parser;
use assessor_core::stats::dashboard_stats;

pub fn execute(evaluations_dir: PathBuf) -> Result<()> {
    let bundles = parser::load_evaluation_directory(&evaluations_dir)?;
    anyhow::ensure!(
        !bundles.is_empty(),
        "no evaluation files found in {}",
        evaluations_dir.display()
    );

    let evaluations: Vec<_> = bundles.iter().map(|b| b.evaluation.clone()).collect();
    let stats = dashboard_stats(&evaluations);

    let mut table = Table::new();
    table.set_header(vec!["Title", "Course", "Type", "Status", "Score"]);
    for evaluation in &evaluations {
        table.add_row(vec![
            evaluation.title.clone(),
            evaluation.course.clone(),
            evaluation.kind.to_string(),
            evaluation.status.to_string(),
            evaluation
                .score
                .map(|s| format!("{s}%"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");

    println!(
        "Total: {}  Completed: {}  Pending: {}  Average score: {}%",
        stats.total, stats.completed, stats.pending, stats.average_score
    );
    Ok(())
}
