// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - TweetCorpusLoader implements CorpusSource
//   - A future CsvCorpusLoader could also implement CorpusSource
//   - The application layer only sees CorpusSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.

use anyhow::Result;

use crate::domain::judgment::Judgment;
use crate::domain::polarity::Polarity;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can load a labelled tweet corpus.
///
/// Implementations:
///   - TweetCorpusLoader → reads JSON-lines positive/negative files
///   - (future) CsvCorpusLoader → reads a labelled CSV export
pub trait CorpusSource {
    /// Load every (raw text, label) pair available from this source.
    fn load_all(&self) -> Result<Vec<(String, Polarity)>>;
}

// ─── SentimentScorer ──────────────────────────────────────────────────────────
/// Any component that can assign a polarity judgment to raw text.
///
/// Implementations:
///   - ClassifyUseCase → naive-Bayes model over presence features
///   - (future) LexiconScorer → word-list lookup scoring
pub trait SentimentScorer {
    /// Classify one piece of text and return its judgment.
    /// Never fails on empty or unknown text — the model falls
    /// back to a prior-only decision.
    fn classify(&self, text: &str) -> Result<Judgment>;
}
