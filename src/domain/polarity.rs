// ============================================================
// Layer 3 — Polarity Domain Type
// ============================================================
// The two sentiment classes this system distinguishes.
// Everything downstream — corpus files, model parameters,
// judgments — is indexed by one of these two values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive/negative sentiment judgment for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// The signed label callers receive: +1 for positive, -1 otherwise.
    pub fn signed(self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }

    /// Position used to index per-class parameter vectors —
    /// positive is always 0, negative always 1.
    pub fn index(self) -> usize {
        match self {
            Polarity::Positive => 0,
            Polarity::Negative => 1,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}
