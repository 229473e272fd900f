// ============================================================
// Layer 3 — LabeledExample Domain Type
// ============================================================
// One training example: the token sequence of a tweet together
// with its polarity label. Exists only during training —
// the trained model keeps probabilities, not examples.

use serde::{Deserialize, Serialize};

use crate::domain::polarity::Polarity;

/// A tokenised tweet paired with its sentiment label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledExample {
    /// The normalised, tokenised words of the tweet
    pub tokens: Vec<String>,

    /// Which corpus file the tweet came from
    pub label: Polarity,
}

impl LabeledExample {
    /// Create a new LabeledExample
    pub fn new(tokens: Vec<String>, label: Polarity) -> Self {
        Self { tokens, label }
    }
}
