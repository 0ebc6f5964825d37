//! The `assessor validate` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use assessor_core::parser;

pub fn execute(path: PathBuf) -> Result<()> {
    let files = collect_toml_files(&path)?;
    anyhow::ensure!(!files.is_empty(), "no evaluation files found in {}", path.display());

    let mut warning_count = 0usize;
    for file in &files {
        let bundle = parser::parse_evaluation(file)?;
        println!(
            "{}: \"{}\" ({} questions)",
            file.display(),
            bundle.evaluation.title,
            bundle.questions.len()
        );

        for warning in parser::validate_evaluation(&bundle) {
            warning_count += 1;
            match warning.question_id {
                Some(id) => println!("  warning: question {id}: {}", warning.message),
                None => println!("  warning: {}", warning.message),
            }
        }
    }

    if warning_count > 0 {
        println!(
            "All evaluation files valid ({} files, {warning_count} warnings)",
            files.len()
        );
    } else {
        println!("All evaluation files valid ({} files)", files.len());
    }
    Ok(())
}

fn collect_toml_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    anyhow::ensure!(path.is_dir(), "no such file or directory: {}", path.display());

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
    {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            files.extend(collect_toml_files(&entry_path)?);
        } else if entry_path.extension().is_some_and(|ext| ext == "toml") {
            files.push(entry_path);
        }
    }
    files.sort();
    Ok(files)
}
