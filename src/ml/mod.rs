// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// This layer contains the naive-Bayes machinery. No other
// layer computes probabilities — only this one.
//
// What's in this layer:
//
//   vocabulary.rs — The ordered set of distinct words observed
//                   at training time. Immutable once built.
//                   Set-backed for O(1) membership tests.
//
//   features.rs   — Presence-indicator feature extraction:
//                   token sequence → one boolean per
//                   vocabulary word.
//
//   model.rs      — The trained classifier state: class priors
//                   and per-word Bernoulli conditionals, plus
//                   log-posterior inference.
//
//   trainer.rs    — Parameter estimation from labelled
//                   examples, with Laplace smoothing, and
//                   held-out accuracy evaluation.
//
//   classifier.rs — The inference engine: owns the normaliser,
//                   tokenizer, vocabulary and model, and turns
//                   raw text into a Judgment.
//
// Reference: naive-Bayes independence assumption —
//            P(class | features) ∝ P(class) · Π P(feature | class)

/// Training-time vocabulary (ordered set of words)
pub mod vocabulary;

/// Presence-indicator feature extraction
pub mod features;

/// Trained classifier state and posterior inference
pub mod model;

/// Parameter estimation and held-out evaluation
pub mod trainer;

/// Inference engine — full text → judgment pipeline
pub mod classifier;
