//! assessor CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "assessor", version, about = "Evaluation grading and authoring tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade an answers file against an evaluation
    Grade {
        /// Path to the .toml evaluation file
        #[arg(long)]
        evaluation: PathBuf,

        /// Path to the answers JSON (question id -> submitted value)
        #[arg(long)]
        answers: PathBuf,

        /// Write the full result JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate evaluation TOML files
    Validate {
        /// Path to an evaluation file or directory
        #[arg(long)]
        evaluation: PathBuf,
    },

    /// Show dashboard statistics over a directory of evaluations
    Stats {
        /// Directory of evaluation .toml files
        #[arg(long)]
        evaluations: PathBuf,
    },

    /// Create a starter evaluation and answers file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("assessor=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            evaluation,
            answers,
            output,
            format,
        } => commands::grade::execute(evaluation, answers, output, format).await,
        Commands::Validate { evaluation } => commands::validate::execute(evaluation),
        Commands::Stats { evaluations } => commands::stats::execute(evaluations),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
