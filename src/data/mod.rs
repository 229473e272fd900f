// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw corpus files
// all the way to token sequences ready for the model.
//
// The pipeline flows in this order:
//
//   positive_tweets.json / negative_tweets.json
//       │
//       ▼
//   TweetCorpusLoader → reads JSON-lines files, extracts text + label
//       │
//       ▼
//   Normalizer        → replaces URLs and @-mentions with placeholders
//       │
//       ▼
//   TweetTokenizer    → splits into words, case-folds, squeezes
//       │               repeated characters, stems
//       ▼
//   split_train_val   → shuffles and splits into train/validation
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.

/// Loads labelled tweets from JSON-lines corpus files
pub mod loader;

/// Replaces URLs and user mentions with fixed placeholder tokens
pub mod normalizer;

/// Splits normalised text into cleaned word tokens
pub mod tokenizer;

/// Porter-style suffix stripping for English words
pub mod stemmer;

/// Shuffles and splits data into train/validation sets
pub mod splitter;
