// ============================================================
// Layer 3 — Judgment Domain Type
// ============================================================
// The output of one classification call: the winning polarity,
// its signed form (+1 / -1), and the normalised posterior
// probability of the winning class.

use serde::{Deserialize, Serialize};

use crate::domain::polarity::Polarity;

/// The result of classifying one piece of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Judgment {
    /// The winning sentiment class
    pub polarity: Polarity,

    /// +1 for positive, -1 for negative — the form callers
    /// that only need a sign consume
    pub signed: i8,

    /// Posterior probability of the winning class, in [0.5, 1.0]
    /// for a two-class model (the winner is at least as likely
    /// as the loser)
    pub confidence: f64,
}

impl Judgment {
    pub fn new(polarity: Polarity, confidence: f64) -> Self {
        Self {
            polarity,
            signed: polarity.signed(),
            confidence,
        }
    }
}
