// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the two persisted artifacts the classifier
// needs, plus the configuration that produced them:
//
//   model/
//     model.json         ← trained naive-Bayes parameters
//     vocabulary.json    ← the words the model was trained on
//     train_config.json  ← how the corpus was tokenised
//
// The model and vocabulary are one logical unit: a model is
// meaningless against any other vocabulary. save() writes both
// via temp-file + rename so a crash mid-write never leaves a
// half-written blob behind, and load() reads both together —
// no partial or streaming load.
//
// Failure policy (deliberate asymmetry):
//   - Missing files  → is_complete() returns false, the caller
//     retrains. Recoverable.
//   - Corrupt files  → load() fails with context. Fatal — the
//     process cannot proceed without a valid model.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::SentimentModel;
use crate::ml::vocabulary::Vocabulary;

const MODEL_FILE: &str = "model.json";
const VOCAB_FILE: &str = "vocabulary.json";
const CONFIG_FILE: &str = "train_config.json";

/// Manages saving and loading of the persisted model artifacts.
/// All files live in the configured directory.
pub struct ModelStore {
    /// Path to the directory where artifacts are stored
    dir: PathBuf,
}

impl ModelStore {
    /// Create a new ModelStore.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = PathBuf::from(dir.into());
        // create_dir_all creates parent directories too, like `mkdir -p`
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// True when both artifacts exist — the signal that a
    /// previous training run completed and saved successfully
    pub fn is_complete(&self) -> bool {
        self.dir.join(MODEL_FILE).exists() && self.dir.join(VOCAB_FILE).exists()
    }

    /// Persist the trained model and its vocabulary as one unit.
    pub fn save(&self, model: &SentimentModel, vocab: &Vocabulary) -> Result<()> {
        self.write_atomic(MODEL_FILE, model)?;
        self.write_atomic(VOCAB_FILE, vocab)?;

        tracing::debug!(
            "Saved model ({} words) to '{}'",
            vocab.len(),
            self.dir.display()
        );
        Ok(())
    }

    /// Load the trained model and its vocabulary together.
    /// A corrupt or unreadable artifact is fatal — there is no
    /// way to proceed without a valid model.
    pub fn load(&self) -> Result<(SentimentModel, Vocabulary)> {
        let model: SentimentModel = self.read_json(MODEL_FILE).with_context(|| {
            format!(
                "Cannot load model from '{}'. Have you trained first?",
                self.dir.join(MODEL_FILE).display()
            )
        })?;

        let vocab: Vocabulary = self.read_json(VOCAB_FILE).with_context(|| {
            format!(
                "Cannot load vocabulary from '{}'",
                self.dir.join(VOCAB_FILE).display()
            )
        })?;

        // The invariant the store exists to protect
        anyhow::ensure!(
            model.vocab_size() == vocab.len(),
            "Model was trained against {} words but vocabulary holds {} — \
             the artifacts are from different training runs",
            model.vocab_size(),
            vocab.len(),
        );

        tracing::info!("Loaded model with {} word vocabulary", vocab.len());
        Ok((model, vocab))
    }

    /// Save the training configuration so inference can rebuild
    /// the exact tokenizer used at training time.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        self.write_atomic(CONFIG_FILE, cfg)?;
        tracing::debug!("Saved training config to '{}'", self.dir.display());
        Ok(())
    }

    /// Load the training configuration back.
    pub fn load_config(&self) -> Result<TrainConfig> {
        self.read_json(CONFIG_FILE).with_context(|| {
            format!(
                "Cannot read config from '{}'. \
                 Make sure you have run 'train' before 'classify'.",
                self.dir.join(CONFIG_FILE).display()
            )
        })
    }

    /// Serialise a value to pretty JSON and move it into place
    /// atomically: write to a .tmp sibling, then rename. rename(2)
    /// on the same filesystem either fully succeeds or not at all.
    fn write_atomic<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        let path = self.dir.join(filename);
        let tmp = self.dir.join(format!("{filename}.tmp"));

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Cannot move '{}' into place", tmp.display()))?;

        Ok(())
    }

    /// Read and deserialise one JSON artifact
    fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.dir.join(filename);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        let value = serde_json::from_str(&json)
            .with_context(|| format!("'{}' is corrupt", path.display()))?;
        Ok(value)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::LabeledExample;
    use crate::domain::polarity::Polarity;
    use crate::ml::trainer::train_model;

    fn ex(words: &[&str], label: Polarity) -> LabeledExample {
        LabeledExample::new(words.iter().map(|w| w.to_string()).collect(), label)
    }

    fn temp_store(name: &str) -> ModelStore {
        let dir = std::env::temp_dir().join(format!("tweet_sentiment_store_{name}"));
        fs::remove_dir_all(&dir).ok();
        ModelStore::new(dir.to_str().unwrap())
    }

    fn trained_pair() -> (SentimentModel, Vocabulary) {
        let corpus = vec![
            ex(&["good", "great"], Polarity::Positive),
            ex(&["bad", "awful"], Polarity::Negative),
        ];
        let vocab = Vocabulary::from_examples(&corpus);
        let model = train_model(&corpus, &vocab, 1.0);
        (model, vocab)
    }

    #[test]
    fn test_incomplete_until_saved() {
        let store = temp_store("incomplete");
        assert!(!store.is_complete());

        let (model, vocab) = trained_pair();
        store.save(&model, &vocab).unwrap();
        assert!(store.is_complete());
    }

    #[test]
    fn test_save_load_round_trip_is_idempotent() {
        let store = temp_store("roundtrip");
        let (model, vocab) = trained_pair();
        store.save(&model, &vocab).unwrap();

        // Load twice — both copies must judge identically,
        // bit for bit
        let (m1, v1) = store.load().unwrap();
        let (m2, v2) = store.load().unwrap();
        assert_eq!(v1.words(), v2.words());

        let extractor = crate::ml::features::FeatureExtractor::new();
        let features = extractor.extract(&v1, &["good".to_string()]);
        let a = m1.predict(&features);
        let b = m2.predict(&features);
        assert_eq!(a.polarity, b.polarity);
        assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
    }

    #[test]
    fn test_corrupt_artifact_is_fatal() {
        let store = temp_store("corrupt");
        let (model, vocab) = trained_pair();
        store.save(&model, &vocab).unwrap();

        // Truncate the model blob mid-JSON
        fs::write(store.dir.join(MODEL_FILE), "{\"log_priors\": [").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_mismatched_artifacts_rejected() {
        let store = temp_store("mismatch");
        let (model, _) = trained_pair();

        // Save a vocabulary from a different (larger) run
        let other = vec![
            ex(&["a", "b", "c", "d", "e"], Polarity::Positive),
            ex(&["f", "g"], Polarity::Negative),
        ];
        let other_vocab = Vocabulary::from_examples(&other);
        store.save(&model, &other_vocab).unwrap();

        assert!(store.load().is_err());
    }
}
