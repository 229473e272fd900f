// ============================================================
// Layer 5 — Vocabulary
// ============================================================
// The ordered set of distinct word tokens observed in the
// training corpus. Built once at training time, immutable
// afterwards, persisted next to the model parameters.
//
// Two views of the same data are kept:
//   - words:  sorted Vec — defines the feature-vector order
//   - index:  HashMap word → position — O(1) membership and
//             position lookups at inference time
//
// The invariant that matters: the feature vector presented at
// inference time must be built against the same vocabulary used
// at training time, or the model's probabilities are meaningless.
// Persisting the vocabulary with the model enforces this.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::domain::example::LabeledExample;

/// An immutable, ordered set of distinct words.
/// Serialises as a plain JSON array of words; the lookup index
/// is rebuilt on deserialisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    /// Distinct words in sorted order — position defines the
    /// feature index each word occupies
    words: Vec<String>,

    /// word → position lookup
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary from every token in the training examples.
    /// A BTreeSet gives deduplication and sorted order in one pass.
    pub fn from_examples(examples: &[LabeledExample]) -> Self {
        let distinct: BTreeSet<String> = examples
            .iter()
            .flat_map(|ex| ex.tokens.iter().cloned())
            .collect();

        Self::from_words(distinct.into_iter().collect())
    }

    /// Build from an already-deduplicated, ordered word list
    fn from_words(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Self { words, index }
    }

    /// Position of a word in the feature vector, if it was seen
    /// at training time
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// O(1) membership test
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of words — also the feature-vector length
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in feature-vector order
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.words
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::polarity::Polarity;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_deduplicates_and_sorts() {
        let examples = vec![
            LabeledExample::new(toks(&["b", "a", "b"]), Polarity::Positive),
            LabeledExample::new(toks(&["c", "a"]), Polarity::Negative),
        ];
        let vocab = Vocabulary::from_examples(&examples);

        assert_eq!(vocab.words(), &["a", "b", "c"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_lookup() {
        let examples = vec![LabeledExample::new(toks(&["x", "y"]), Polarity::Positive)];
        let vocab = Vocabulary::from_examples(&examples);

        assert!(vocab.contains("x"));
        assert!(!vocab.contains("z"));
        assert_eq!(vocab.index_of("y"), Some(1));
        assert_eq!(vocab.index_of("z"), None);
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let examples = vec![LabeledExample::new(
            toks(&["m", "k", "z"]),
            Polarity::Positive,
        )];
        let vocab = Vocabulary::from_examples(&examples);

        let json = serde_json::to_string(&vocab).unwrap();
        let back: Vocabulary = serde_json::from_str(&json).unwrap();

        assert_eq!(back.words(), vocab.words());
        assert_eq!(back.index_of("z"), vocab.index_of("z"));
    }
}
