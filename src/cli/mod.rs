// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`    — trains the sentiment model on a labelled corpus
//   2. `classify` — loads (or trains) the model and judges a text

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, TrainArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "tweet-sentiment",
    version = "0.1.0",
    about = "Train a naive-Bayes sentiment model on labelled tweets, then classify text."
)]
pub struct Cli {
    /// The subcommand to run (train or classify)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => Self::run_train(args),
            Commands::Classify(args) => Self::run_classify(args),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a TrainConfig and hands off to Layer 2.
    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on corpus in: {}", args.corpus_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("Training complete. Model saved.");
        Ok(())
    }

    /// Handles the `classify` subcommand.
    /// Loads the model (training first if necessary) and prints
    /// the judgment for the given text.
    fn run_classify(args: ClassifyArgs) -> Result<()> {
        use crate::application::classify_use_case::ClassifyUseCase;
        use crate::domain::traits::SentimentScorer;

        // Build the use case with model and corpus directory paths
        let use_case = ClassifyUseCase::new(args.model_dir, args.corpus_dir)?;

        // Run inference and print the result
        let judgment = use_case.classify(&args.text)?;
        println!(
            "\nSentiment: {} ({:+}) | confidence {:.3}",
            judgment.polarity, judgment.signed, judgment.confidence,
        );
        Ok(())
    }
}
