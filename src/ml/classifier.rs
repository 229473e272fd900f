// ============================================================
// Layer 5 — Sentiment Classifier (Inference Engine)
// ============================================================
// The loaded-model service object: owns the normaliser, the
// tokenizer (configured exactly as at training time), the
// vocabulary, and the trained parameters, and runs the full
// inference pipeline:
//
//   raw text → Normalizer → TweetTokenizer → FeatureExtractor
//            → SentimentModel → Judgment
//
// The classifier can only be constructed around a complete
// model + vocabulary pair, so "classify before load" is
// unrepresentable. Inference is synchronous and stateless per
// call; the shared state is immutable after construction, so
// concurrent callers need no locking.

use crate::data::normalizer::Normalizer;
use crate::data::tokenizer::TweetTokenizer;
use crate::domain::judgment::Judgment;
use crate::ml::features::FeatureExtractor;
use crate::ml::model::SentimentModel;
use crate::ml::vocabulary::Vocabulary;

pub struct SentimentClassifier {
    normalizer: Normalizer,
    tokenizer: TweetTokenizer,
    extractor: FeatureExtractor,
    vocabulary: Vocabulary,
    model: SentimentModel,
}

impl SentimentClassifier {
    /// Assemble a classifier from a loaded (or freshly trained)
    /// model and the vocabulary it was trained against.
    /// The tokenizer must carry the same flags used at training
    /// time or token forms will not line up with the vocabulary.
    pub fn new(
        normalizer: Normalizer,
        tokenizer: TweetTokenizer,
        vocabulary: Vocabulary,
        model: SentimentModel,
    ) -> Self {
        Self {
            normalizer,
            tokenizer,
            extractor: FeatureExtractor::new(),
            vocabulary,
            model,
        }
    }

    /// Classify one piece of raw text.
    /// Never fails: empty input and never-seen words degrade to
    /// a prior-only decision inside the model.
    pub fn classify(&self, text: &str) -> Judgment {
        let normalized = self.normalizer.normalize(text);
        let tokens = self.tokenizer.tokenize(&normalized);

        // Words the training corpus never produced are silently
        // excluded from the feature vector — note the mismatch so
        // vocabulary drift is visible in the logs
        let unseen = self.extractor.unseen_count(&self.vocabulary, &tokens);
        if unseen > 0 {
            tracing::debug!(
                "Feature mismatch: {} of {} distinct tokens outside training vocabulary",
                unseen,
                tokens.len(),
            );
        }

        let features = self.extractor.extract(&self.vocabulary, &tokens);
        self.model.predict(&features)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::LabeledExample;
    use crate::domain::polarity::Polarity;
    use crate::ml::trainer::train_model;

    /// Train a tiny end-to-end classifier through the real
    /// normalise → tokenize → extract pipeline.
    fn tiny_classifier() -> SentimentClassifier {
        let normalizer = Normalizer::new();
        let tokenizer = TweetTokenizer::new();

        let raw = [
            ("I love this so much", Polarity::Positive),
            ("what a great day", Polarity::Positive),
            ("loving every minute", Polarity::Positive),
            ("I hate this", Polarity::Negative),
            ("what a terrible day", Polarity::Negative),
            ("worst thing ever", Polarity::Negative),
        ];

        let examples: Vec<LabeledExample> = raw
            .iter()
            .map(|(text, label)| {
                LabeledExample::new(tokenizer.tokenize(&normalizer.normalize(text)), *label)
            })
            .collect();

        let vocab = Vocabulary::from_examples(&examples);
        let model = train_model(&examples, &vocab, 1.0);

        SentimentClassifier::new(normalizer, tokenizer, vocab, model)
    }

    #[test]
    fn test_positive_and_negative_text() {
        let c = tiny_classifier();

        let j = c.classify("I love this great day");
        assert_eq!(j.polarity, Polarity::Positive);
        assert_eq!(j.signed, 1);

        let j = c.classify("this is the worst, I hate it");
        assert_eq!(j.polarity, Polarity::Negative);
        assert_eq!(j.signed, -1);
    }

    #[test]
    fn test_url_and_mention_scenario() {
        // URLs and mentions must be gone before feature extraction
        let c = tiny_classifier();
        let tokens = c
            .tokenizer
            .tokenize(&c.normalizer.normalize("I love this! http://example.com @someuser"));

        assert!(tokens.iter().all(|t| !t.contains("http")));
        assert!(tokens.iter().all(|t| t != "someuser"));
        assert_eq!(tokens.iter().filter(|t| *t == "__url").count(), 1);
        assert_eq!(tokens.iter().filter(|t| *t == "__handle").count(), 1);

        // Still classifies positive — the sentiment words survive
        assert_eq!(c.classify("I love this! http://example.com @someuser").polarity,
            Polarity::Positive);
    }

    #[test]
    fn test_empty_string_never_panics() {
        let c = tiny_classifier();
        let j = c.classify("");
        // Balanced toy corpus: either class is acceptable, but the
        // call must succeed and confidence must be a probability
        assert!(j.confidence >= 0.5 && j.confidence <= 1.0);
    }

    #[test]
    fn test_unknown_words_fall_back_to_priors() {
        let c = tiny_classifier();
        let j = c.classify("zxqv wvut");
        assert!(j.confidence.is_finite());
    }
}
