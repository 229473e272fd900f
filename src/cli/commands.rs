// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `classify`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, bool, etc.)

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the sentiment model on a labelled tweet corpus
    Train(TrainArgs),

    /// Classify a piece of text using the trained model
    Classify(ClassifyArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory containing positive_tweets.json / negative_tweets.json
    #[arg(long, default_value = "data/corpus")]
    pub corpus_dir: String,

    /// Directory to save the trained model and vocabulary
    #[arg(long, default_value = "model")]
    pub model_dir: String,

    /// Laplace smoothing constant — keeps unseen word/class
    /// combinations from getting probability zero
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Fraction of examples used for training; the rest are
    /// held out to measure accuracy
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Keep original letter case instead of lowercasing tokens
    #[arg(long)]
    pub preserve_case: bool,

    /// Keep elongated character runs ("soooo") instead of
    /// squeezing them down to three characters
    #[arg(long)]
    pub keep_repeats: bool,

    /// Skip stemming — tokens keep their full word form
    #[arg(long)]
    pub no_stemming: bool,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            corpus_dir:            a.corpus_dir,
            model_dir:             a.model_dir,
            alpha:                 a.alpha,
            train_fraction:        a.train_fraction,
            preserve_case:         a.preserve_case,
            reduce_repeated_chars: !a.keep_repeats,
            apply_stemming:        !a.no_stemming,
        }
    }
}

/// All arguments for the `classify` command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// The text to classify
    #[arg(long)]
    pub text: String,

    /// Directory with the corpus files — used to train
    /// automatically when no model has been saved yet
    #[arg(long, default_value = "data/corpus")]
    pub corpus_dir: String,

    /// Directory where the model was saved during training
    #[arg(long, default_value = "model")]
    pub model_dir: String,
}
