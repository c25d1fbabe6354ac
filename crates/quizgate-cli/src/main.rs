//! quizgate CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use quizgate_core::engine::ReviewEngine;
use quizgate_core::model::Feedback;

mod commands;

#[derive(Parser)]
#[command(name = "quizgate", version, about = "Review and export generated quizzes")]
struct Cli {
    /// Base URL of the generation service (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a generation's scoring progress and export readiness
    Status {
        /// Generation id
        #[arg(long)]
        generation: u64,
    },

    /// List all stored generations
    List,

    /// Append a custom question to a generation
    AddQuestion {
        /// Generation id
        #[arg(long)]
        generation: u64,

        /// Question text
        #[arg(long)]
        question: String,
    },

    /// Have the service generate additional questions
    Generate {
        /// Generation id
        #[arg(long)]
        generation: u64,

        /// Number of questions to generate
        #[arg(long)]
        count: u32,
    },

    /// Score one answer choice
    Score {
        /// Generation id
        #[arg(long)]
        generation: u64,

        /// Question id
        #[arg(long)]
        question: u64,

        /// Answer choice id
        #[arg(long)]
        answer: u64,

        /// Label: correct, incorrect, or unselected
        #[arg(long)]
        feedback: Feedback,
    },

    /// Delete a generation
    Delete {
        /// Generation id
        #[arg(long)]
        generation: u64,

        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },

    /// Export a fully scored quiz to the external form system
    Export {
        /// Generation id
        #[arg(long)]
        generation: u64,

        /// Destination email for the form link
        #[arg(long)]
        email: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgate=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = quizgate_client::load_config_from(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let service = Arc::new(quizgate_client::HttpQuizService::from_config(&config));
    let engine = ReviewEngine::new(service);

    match cli.command {
        Commands::Status { generation } => commands::status::execute(&engine, generation).await,
        Commands::List => commands::list::execute(&engine).await,
        Commands::AddQuestion {
            generation,
            question,
        } => commands::add_question::execute(&engine, generation, &question).await,
        Commands::Generate { generation, count } => {
            commands::generate::execute(&engine, generation, count).await
        }
        Commands::Score {
            generation,
            question,
            answer,
            feedback,
        } => commands::score::execute(&engine, generation, question, answer, feedback).await,
        Commands::Delete { generation, yes } => {
            commands::delete::execute(&engine, generation, yes).await
        }
        Commands::Export { generation, email } => {
            commands::export::execute(&engine, generation, &email).await
        }
        Commands::Init => commands::init::execute(),
    }
}
