// ============================================================
// Layer 5 — Trainer
// ============================================================
// One-shot batch parameter estimation for the Bernoulli
// naive-Bayes model:
//
//   P(class)            = examples with that label / all examples
//   P(present_w | class) = (count_w,c + α) / (n_c + 2α)
//
// where count_w,c is the number of class-c examples whose
// (deduplicated) token set contains word w, n_c is the number
// of class-c examples, and α is the Laplace smoothing constant.
// The +2α denominator covers the two outcomes of each Bernoulli
// feature (present / absent), so no probability is ever zero.
//
// Training runs offline, proportional to corpus size, with no
// checkpointing — it either completes and the result is saved
// wholesale, or it is rerun from scratch.

use std::collections::HashSet;

use crate::domain::example::LabeledExample;
use crate::domain::polarity::Polarity;
use crate::ml::features::FeatureExtractor;
use crate::ml::model::SentimentModel;
use crate::ml::vocabulary::Vocabulary;

/// Estimate model parameters from labelled examples.
///
/// `vocab` must have been built from the same (or a superset of
/// the) examples — words outside it are ignored by counting.
pub fn train_model(
    examples: &[LabeledExample],
    vocab: &Vocabulary,
    alpha: f64,
) -> SentimentModel {
    assert!(alpha > 0.0, "smoothing constant must be positive");

    // ── Count examples per class ──────────────────────────────────────────────
    let mut class_counts = [0usize; 2];
    for ex in examples {
        class_counts[ex.label.index()] += 1;
    }
    let total = examples.len() as f64;

    // ── Count word presence per class ─────────────────────────────────────────
    // presence_counts[c][i] = how many class-c examples contain vocab word i
    let mut presence_counts = [vec![0usize; vocab.len()], vec![0usize; vocab.len()]];

    for ex in examples {
        let c = ex.label.index();
        // Deduplicate — an example contributes one presence per word,
        // no matter how often the word repeats inside it
        let distinct: HashSet<&str> = ex.tokens.iter().map(String::as_str).collect();

        for word in distinct {
            if let Some(i) = vocab.index_of(word) {
                presence_counts[c][i] += 1;
            }
        }
    }

    // ── Priors and smoothed conditionals, stored as logs ──────────────────────
    let log_priors = [
        (class_counts[0] as f64 / total).ln(),
        (class_counts[1] as f64 / total).ln(),
    ];

    let mut log_present = [vec![0.0; vocab.len()], vec![0.0; vocab.len()]];
    let mut log_absent = [vec![0.0; vocab.len()], vec![0.0; vocab.len()]];

    for c in 0..2 {
        let n_c = class_counts[c] as f64;
        for i in 0..vocab.len() {
            let count = presence_counts[c][i] as f64;
            let p = (count + alpha) / (n_c + 2.0 * alpha);
            log_present[c][i] = p.ln();
            log_absent[c][i] = (1.0 - p).ln();
        }
    }

    tracing::info!(
        "Trained on {} examples ({} positive, {} negative), vocabulary of {} words",
        examples.len(),
        class_counts[Polarity::Positive.index()],
        class_counts[Polarity::Negative.index()],
        vocab.len(),
    );

    SentimentModel::from_parameters(log_priors, log_present, log_absent, alpha)
}

/// Fraction of held-out examples the model labels correctly.
/// Returns 0.0 for an empty evaluation set.
pub fn evaluate(model: &SentimentModel, vocab: &Vocabulary, examples: &[LabeledExample]) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }

    let extractor = FeatureExtractor::new();
    let correct = examples
        .iter()
        .filter(|ex| {
            let features = extractor.extract(vocab, &ex.tokens);
            model.predict(&features).polarity == ex.label
        })
        .count();

    correct as f64 / examples.len() as f64
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn ex(words: &[&str], label: Polarity) -> LabeledExample {
        LabeledExample::new(words.iter().map(|w| w.to_string()).collect(), label)
    }

    fn toy_corpus() -> Vec<LabeledExample> {
        vec![
            ex(&["good", "great", "awesome"], Polarity::Positive),
            ex(&["excellent", "amazing", "good"], Polarity::Positive),
            ex(&["love", "great", "fun"], Polarity::Positive),
            ex(&["bad", "terrible", "awful"], Polarity::Negative),
            ex(&["horrible", "worst", "bad"], Polarity::Negative),
            ex(&["hate", "terrible", "boring"], Polarity::Negative),
        ]
    }

    #[test]
    fn test_recovers_training_labels() {
        let corpus = toy_corpus();
        let vocab = Vocabulary::from_examples(&corpus);
        let model = train_model(&corpus, &vocab, 1.0);

        // Every training example should classify back to its own
        // label on a corpus this cleanly separated
        let acc = evaluate(&model, &vocab, &corpus);
        assert_eq!(acc, 1.0);
    }

    #[test]
    fn test_held_out_accuracy_beats_chance() {
        let corpus = toy_corpus();
        let vocab = Vocabulary::from_examples(&corpus);
        let model = train_model(&corpus, &vocab, 1.0);

        let held_out = vec![
            ex(&["good", "fun"], Polarity::Positive),
            ex(&["awful", "boring"], Polarity::Negative),
            ex(&["love", "awesome"], Polarity::Positive),
            ex(&["worst", "hate"], Polarity::Negative),
        ];

        let acc = evaluate(&model, &vocab, &held_out);
        assert!(acc > 0.6, "held-out accuracy {acc} not above chance");
    }

    #[test]
    fn test_empty_evaluation_set() {
        let corpus = toy_corpus();
        let vocab = Vocabulary::from_examples(&corpus);
        let model = train_model(&corpus, &vocab, 1.0);
        assert_eq!(evaluate(&model, &vocab, &[]), 0.0);
    }

    #[test]
    fn test_smoothing_avoids_zero_probabilities() {
        let corpus = toy_corpus();
        let vocab = Vocabulary::from_examples(&corpus);
        let model = train_model(&corpus, &vocab, 1.0);

        // "awesome" never appears in a negative example, but a
        // feature vector containing it must still yield a finite
        // posterior for both classes
        let extractor = FeatureExtractor::new();
        let features = extractor.extract(&vocab, &["awesome".to_string()]);
        let j = model.predict(&features);
        assert!(j.confidence.is_finite());
        assert_eq!(j.polarity, Polarity::Positive);
    }

    #[test]
    #[should_panic]
    fn test_zero_alpha_rejected() {
        let corpus = toy_corpus();
        let vocab = Vocabulary::from_examples(&corpus);
        let _ = train_model(&corpus, &vocab, 0.0);
    }
}
