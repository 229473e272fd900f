// ============================================================
// Layer 5 — Trained Classifier State
// ============================================================
// The immutable result of training: class priors and, for every
// vocabulary word, the Bernoulli conditional probability of the
// word being present given each class. All probabilities are
// stored as logs for numerical stability — multiplying hundreds
// of small probabilities underflows f64, summing logs does not.
//
// Inference applies the naive-Bayes independence assumption:
//
//   log P(class | features) ∝ log P(class)
//       + Σ_w  log P(present_w | class)   if feature w is true
//       + Σ_w  log P(absent_w  | class)   if feature w is false
//
// The two class scores are then softmax-normalised so the
// caller receives a proper posterior probability as confidence.
//
// The state is never mutated after training — retraining
// replaces it wholesale.

use serde::{Deserialize, Serialize};

use crate::domain::judgment::Judgment;
use crate::domain::polarity::Polarity;

/// Trained naive-Bayes parameters. Created by the trainer,
/// persisted as JSON, loaded read-only for inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModel {
    /// log P(class), indexed by Polarity::index()
    log_priors: [f64; 2],

    /// log P(word present | class), indexed [class][vocab position]
    log_present: [Vec<f64>; 2],

    /// log P(word absent | class), same indexing
    log_absent: [Vec<f64>; 2],

    /// The Laplace smoothing constant the model was trained with
    alpha: f64,
}

impl SentimentModel {
    /// Assemble a model from already-estimated parameters.
    /// Only the trainer calls this.
    pub(crate) fn from_parameters(
        log_priors: [f64; 2],
        log_present: [Vec<f64>; 2],
        log_absent: [Vec<f64>; 2],
        alpha: f64,
    ) -> Self {
        Self {
            log_priors,
            log_present,
            log_absent,
            alpha,
        }
    }

    /// The vocabulary size this model was trained against —
    /// feature vectors must have exactly this many entries
    pub fn vocab_size(&self) -> usize {
        self.log_present[0].len()
    }

    /// Classify one feature vector.
    ///
    /// When no feature is present (empty input, or input made
    /// entirely of words never seen at training time) the
    /// decision falls back to the class priors alone — the
    /// majority class wins with low confidence. Never fails.
    pub fn predict(&self, features: &[bool]) -> Judgment {
        let any_present = features.iter().any(|&f| f);

        let scores: [f64; 2] = if any_present {
            [
                self.class_score(Polarity::Positive, features),
                self.class_score(Polarity::Negative, features),
            ]
        } else {
            // Prior-only decision
            self.log_priors
        };

        // Softmax over the two log scores → posterior of the winner
        let max = scores[0].max(scores[1]);
        let exp: [f64; 2] = [(scores[0] - max).exp(), (scores[1] - max).exp()];
        let sum = exp[0] + exp[1];

        let winner = if scores[0] >= scores[1] {
            Polarity::Positive
        } else {
            Polarity::Negative
        };

        Judgment::new(winner, exp[winner.index()] / sum)
    }

    /// Unnormalised log posterior of one class
    fn class_score(&self, class: Polarity, features: &[bool]) -> f64 {
        let c = class.index();
        let mut score = self.log_priors[c];

        for (i, &present) in features.iter().enumerate().take(self.vocab_size()) {
            score += if present {
                self.log_present[c][i]
            } else {
                self.log_absent[c][i]
            };
        }

        score
    }
}
