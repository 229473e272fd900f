// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO regex, serde_json plumbing, or CLI types
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no corpus files needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.

// The positive/negative polarity label
pub mod polarity;

// A tokenised tweet paired with its polarity label
pub mod example;

// The result of classifying one piece of text
pub mod judgment;

// Core abstractions (traits) that other layers implement
pub mod traits;
