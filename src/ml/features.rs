// ============================================================
// Layer 5 — Feature Extractor
// ============================================================
// Converts a token sequence into the fixed-vocabulary
// presence-indicator vector the model consumes: one boolean
// per vocabulary word, true when the word appears anywhere in
// the (deduplicated) input.
//
// Runtime is O(|tokens| + |V|): the input is collected into a
// HashSet once, then each vocabulary word is a single lookup.
//
// The feature vector is transient — recomputed on every
// classification call, never stored.

use std::collections::HashSet;

use crate::ml::vocabulary::Vocabulary;

/// Turns token sequences into presence-indicator vectors
/// against a fixed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature vector for one token sequence.
    /// The result always has exactly `vocab.len()` entries, in
    /// vocabulary order. Words outside the vocabulary contribute
    /// nothing — they are silently ignored.
    pub fn extract(&self, vocab: &Vocabulary, tokens: &[String]) -> Vec<bool> {
        // Deduplicate: presence, not frequency, is the feature
        let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();

        vocab
            .words()
            .iter()
            .map(|word| present.contains(word.as_str()))
            .collect()
    }

    /// How many input tokens fall outside the vocabulary —
    /// reported as a feature-mismatch note at inference time.
    pub fn unseen_count(&self, vocab: &Vocabulary, tokens: &[String]) -> usize {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        distinct.iter().filter(|w| !vocab.contains(w)).count()
    }
}
