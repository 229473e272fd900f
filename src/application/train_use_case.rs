// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the labelled corpus     (Layer 4 - data)
//   Step 2: Normalise + tokenise tweets  (Layer 4 - data)
//   Step 3: Shuffle and split train/val  (Layer 4 - data)
//   Step 4: Build the vocabulary         (Layer 5 - ml)
//   Step 5: Estimate model parameters    (Layer 5 - ml)
//   Step 6: Evaluate held-out accuracy   (Layer 5 - ml)
//   Step 7: Log run metrics              (Layer 6 - infra)
//   Step 8: Save config + artifacts      (Layer 6 - infra)
//
// Training is a one-shot batch operation: no checkpointing,
// no resumption. It either completes and the artifacts are
// saved wholesale, or it is rerun from scratch.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::TweetCorpusLoader,
    normalizer::Normalizer,
    splitter::split_train_val,
    tokenizer::TweetTokenizer,
};
use crate::domain::example::LabeledExample;
use crate::domain::traits::CorpusSource;
use crate::infra::{
    metrics::{MetricsLogger, RunMetrics},
    model_store::ModelStore,
};
use crate::ml::{trainer, vocabulary::Vocabulary};

// ─── Training Configuration ──────────────────────────────────────────────────
// Every knob for a training run, injected from the CLI — nothing
// is a compiled-in constant. Serialisable so it can be saved to
// disk and reloaded at inference time: the classify path rebuilds
// its tokenizer from these exact flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub corpus_dir: String,
    pub model_dir: String,
    /// Laplace smoothing constant (must be positive)
    pub alpha: f64,
    /// Fraction of examples used for fitting, rest for evaluation
    pub train_fraction: f64,
    pub preserve_case: bool,
    pub reduce_repeated_chars: bool,
    pub apply_stemming: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            corpus_dir: "data/corpus".to_string(),
            model_dir: "model".to_string(),
            alpha: 1.0,
            train_fraction: 0.8,
            preserve_case: false,
            reduce_repeated_chars: true,
            apply_stemming: true,
        }
    }
}

impl TrainConfig {
    /// Build the tokenizer carrying this config's flags.
    /// Used by both training and inference so token forms
    /// always line up with the persisted vocabulary.
    pub fn tokenizer(&self) -> TweetTokenizer {
        TweetTokenizer::new()
            .preserve_case(self.preserve_case)
            .reduce_repeated_chars(self.reduce_repeated_chars)
            .apply_stemming(self.apply_stemming)
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        ensure!(cfg.alpha > 0.0, "alpha must be positive (got {})", cfg.alpha);
        ensure!(
            (0.0..=1.0).contains(&cfg.train_fraction),
            "train_fraction must be in [0, 1] (got {})",
            cfg.train_fraction,
        );

        // ── Step 1: Load the labelled corpus ──────────────────────────────────
        tracing::info!("Loading corpus from '{}'", cfg.corpus_dir);
        let loader = TweetCorpusLoader::new(&cfg.corpus_dir);
        let raw_tweets = loader.load_all()?;
        ensure!(
            !raw_tweets.is_empty(),
            "Corpus at '{}' is empty — nothing to train on",
            cfg.corpus_dir,
        );

        // ── Step 2: Normalise and tokenise every tweet ────────────────────────
        // URLs and mentions become placeholders before tokenisation,
        // so each distinct link does not become its own feature
        let normalizer = Normalizer::new();
        let tokenizer = cfg.tokenizer();

        let examples: Vec<LabeledExample> = raw_tweets
            .into_iter()
            .map(|(text, label)| {
                LabeledExample::new(tokenizer.tokenize(&normalizer.normalize(&text)), label)
            })
            .collect();
        tracing::info!("Tokenised {} examples", examples.len());

        // ── Step 3: Train/validation split ────────────────────────────────────
        // Shuffle first — the corpus files are grouped by label
        let (train_examples, val_examples) = split_train_val(examples, cfg.train_fraction);
        ensure!(
            !train_examples.is_empty(),
            "Training split is empty — corpus too small for train_fraction {}",
            cfg.train_fraction,
        );
        tracing::info!(
            "Split: {} train, {} validation",
            train_examples.len(),
            val_examples.len()
        );

        // ── Step 4: Build the vocabulary from the training split ──────────────
        // Built once here, immutable afterwards. The same object is
        // persisted with the model so inference sees identical features.
        let vocab = Vocabulary::from_examples(&train_examples);
        ensure!(!vocab.is_empty(), "Vocabulary is empty after tokenisation");
        tracing::info!("Vocabulary: {} distinct words", vocab.len());

        // ── Step 5: Estimate the naive-Bayes parameters ───────────────────────
        let model = trainer::train_model(&train_examples, &vocab, cfg.alpha);

        // ── Step 6: Held-out evaluation ───────────────────────────────────────
        let val_accuracy = trainer::evaluate(&model, &vocab, &val_examples);
        if val_examples.is_empty() {
            tracing::warn!("No validation examples — skipping accuracy check");
        } else {
            println!(
                "Held-out accuracy: {:.1}% on {} examples",
                val_accuracy * 100.0,
                val_examples.len(),
            );
        }

        // ── Step 7: Log run metrics ───────────────────────────────────────────
        let metrics = MetricsLogger::new(&cfg.model_dir)?;
        metrics.log(&RunMetrics::new(
            train_examples.len(),
            val_examples.len(),
            vocab.len(),
            val_accuracy,
        ))?;

        // ── Step 8: Save config and artifacts ─────────────────────────────────
        // Config first, then the model/vocabulary pair as one unit
        let store = ModelStore::new(&cfg.model_dir);
        store.save_config(cfg)?;
        store.save(&model, &vocab)?;

        tracing::info!("Training complete — artifacts saved to '{}'", cfg.model_dir);
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_corpus(dir: &std::path::Path) {
        fs::create_dir_all(dir).unwrap();
        let positive: String = [
            "I love this so much",
            "what a great day",
            "this is awesome",
            "feeling really happy today",
            "best news ever",
        ]
        .iter()
        .map(|t| format!("{{\"text\": \"{t}\"}}\n"))
        .collect();
        let negative: String = [
            "I hate this",
            "what a terrible day",
            "this is awful",
            "feeling really sad today",
            "worst news ever",
        ]
        .iter()
        .map(|t| format!("{{\"text\": \"{t}\"}}\n"))
        .collect();

        fs::write(dir.join("positive_tweets.json"), positive).unwrap();
        fs::write(dir.join("negative_tweets.json"), negative).unwrap();
    }

    #[test]
    fn test_end_to_end_training_saves_artifacts() {
        let base = std::env::temp_dir().join("tweet_sentiment_train_test");
        fs::remove_dir_all(&base).ok();
        let corpus_dir = base.join("corpus");
        let model_dir = base.join("model");
        write_corpus(&corpus_dir);

        let cfg = TrainConfig {
            corpus_dir: corpus_dir.to_str().unwrap().to_string(),
            model_dir: model_dir.to_str().unwrap().to_string(),
            // Small corpus: train on everything, skip evaluation
            train_fraction: 1.0,
            ..TrainConfig::default()
        };

        TrainUseCase::new(cfg).execute().unwrap();

        let store = ModelStore::new(model_dir.to_str().unwrap());
        assert!(store.is_complete());
        let (model, vocab) = store.load().unwrap();
        assert_eq!(model.vocab_size(), vocab.len());
        assert!(model_dir.join("metrics.csv").exists());

        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let base = std::env::temp_dir().join("tweet_sentiment_train_empty");
        fs::remove_dir_all(&base).ok();
        fs::create_dir_all(base.join("corpus")).unwrap();

        let cfg = TrainConfig {
            corpus_dir: base.join("corpus").to_str().unwrap().to_string(),
            model_dir: base.join("model").to_str().unwrap().to_string(),
            ..TrainConfig::default()
        };

        assert!(TrainUseCase::new(cfg).execute().is_err());
        fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn test_invalid_hyperparameters_rejected() {
        let cfg = TrainConfig {
            alpha: 0.0,
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute().is_err());

        let cfg = TrainConfig {
            train_fraction: 1.5,
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute().is_err());
    }
}
