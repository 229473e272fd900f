// ============================================================
// Layer 2 — Classify Use Case
// ============================================================
// Builds the inference-side service object:
//
//   1. If the persisted artifacts are missing, run the full
//      training pipeline first — a one-time latency spike,
//      not an error.
//   2. Load the model + vocabulary pair and the training
//      config, and rebuild the tokenizer with the exact flags
//      used at training time.
//   3. Hand classification calls to the SentimentClassifier.
//
// Corrupt artifacts are NOT retrained around: load() fails and
// the error propagates. Silently replacing a model someone
// trained deliberately would hide the corruption.

use anyhow::Result;

use crate::application::train_use_case::{TrainConfig, TrainUseCase};
use crate::data::normalizer::Normalizer;
use crate::domain::judgment::Judgment;
use crate::domain::traits::SentimentScorer;
use crate::infra::model_store::ModelStore;
use crate::ml::classifier::SentimentClassifier;

pub struct ClassifyUseCase {
    classifier: SentimentClassifier,
}

impl ClassifyUseCase {
    /// Load (or train, then load) the model and assemble the
    /// classifier. After this returns, classification can never
    /// hit an "uninitialized model" state — an unloadable model
    /// fails construction instead.
    pub fn new(model_dir: String, corpus_dir: String) -> Result<Self> {
        let store = ModelStore::new(&model_dir);

        // Missing artifacts → train automatically from the corpus.
        // Visible as startup latency, never surfaced as an error.
        if !store.is_complete() {
            tracing::info!(
                "No persisted model in '{}' — training from '{}' first",
                model_dir,
                corpus_dir,
            );
            let cfg = TrainConfig {
                corpus_dir,
                model_dir,
                ..TrainConfig::default()
            };
            TrainUseCase::new(cfg).execute()?;
        }

        // Load both artifacts together; corrupt blobs are fatal here
        let (model, vocab) = store.load()?;

        // Tokenise exactly as training did — the flags travel with
        // the model in train_config.json
        let train_cfg = store.load_config()?;
        let tokenizer = train_cfg.tokenizer();

        Ok(Self {
            classifier: SentimentClassifier::new(Normalizer::new(), tokenizer, vocab, model),
        })
    }
}

impl SentimentScorer for ClassifyUseCase {
    fn classify(&self, text: &str) -> Result<Judgment> {
        Ok(self.classifier.classify(text))
    }
}
