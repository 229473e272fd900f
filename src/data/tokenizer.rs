// ============================================================
// Layer 4 — Tweet Tokenizer
// ============================================================
// Splits normalised text into a sequence of word tokens.
//
// Tweet text is messier than prose, so beyond whitespace
// splitting the tokenizer:
//   - strips punctuation from word edges (keeps "don't" intact,
//     drops the "!" from "this!")
//   - case-folds unless preserve_case is set
//   - squeezes runs of 3+ repeated characters down to 3
//     ("soooooo" → "sooo") so elongated words share one
//     vocabulary entry
//   - stems each token when apply_stemming is set
//
// Deterministic, pure function of input and configuration —
// the same text tokenised twice gives identical sequences.

use crate::data::stemmer::Stemmer;

/// Configurable tweet tokenizer.
#[derive(Debug, Clone)]
pub struct TweetTokenizer {
    /// Keep the original letter case instead of lowercasing
    preserve_case: bool,
    /// Squeeze runs of 3+ repeated characters down to 3
    reduce_repeated_chars: bool,
    /// Reduce each token to its stem
    apply_stemming: bool,
    /// The stemming transform used when apply_stemming is set
    stemmer: Stemmer,
}

impl TweetTokenizer {
    /// Create a tokenizer with the defaults the original corpus
    /// was built with: lowercase, squeeze repeats, stem.
    pub fn new() -> Self {
        Self {
            preserve_case: false,
            reduce_repeated_chars: true,
            apply_stemming: true,
            stemmer: Stemmer::new(),
        }
    }

    /// Keep the original letter case
    pub fn preserve_case(mut self, on: bool) -> Self {
        self.preserve_case = on;
        self
    }

    /// Squeeze elongated character runs
    pub fn reduce_repeated_chars(mut self, on: bool) -> Self {
        self.reduce_repeated_chars = on;
        self
    }

    /// Apply stemming per token
    pub fn apply_stemming(mut self, on: bool) -> Self {
        self.apply_stemming = on;
        self
    }

    /// Tokenise one piece of normalised text.
    /// Empty or all-punctuation input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            // Strip punctuation from the edges only — inner
            // apostrophes and placeholder underscores survive
            let cleaned =
                word.trim_matches(|c: char| !c.is_alphanumeric() && c != '_' && c != '\'');

            if cleaned.is_empty() {
                continue;
            }

            let mut token = if self.preserve_case {
                cleaned.to_string()
            } else {
                cleaned.to_lowercase()
            };

            if self.reduce_repeated_chars {
                token = squeeze_repeats(&token);
            }

            if self.apply_stemming {
                token = self.stemmer.stem(&token);
            }

            tokens.push(token);
        }

        tokens
    }
}

impl Default for TweetTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse every run of 3 or more identical characters to
/// exactly 3: "yaaaaay" → "yaaay", "soo" → "soo" (unchanged).
fn squeeze_repeats(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in token.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        // Keep at most 3 of any repeated character
        if run <= 3 {
            out.push(c);
        }
    }

    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let t = TweetTokenizer::new().apply_stemming(false);
        assert_eq!(t.tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_edge_punctuation_stripped() {
        let t = TweetTokenizer::new().apply_stemming(false);
        assert_eq!(t.tokenize("great, day!"), vec!["great", "day"]);
    }

    #[test]
    fn test_inner_apostrophe_kept() {
        let t = TweetTokenizer::new().apply_stemming(false);
        assert_eq!(t.tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_placeholders_survive() {
        let t = TweetTokenizer::new().apply_stemming(false);
        let tokens = t.tokenize("look __url via __handle");
        assert!(tokens.contains(&"__url".to_string()));
        assert!(tokens.contains(&"__handle".to_string()));
    }

    #[test]
    fn test_repeat_squeezing() {
        let t = TweetTokenizer::new().apply_stemming(false);
        assert_eq!(t.tokenize("sooooooo gooood"), vec!["sooo", "goood"]);
        // Runs shorter than 3 are untouched
        assert_eq!(t.tokenize("soo good"), vec!["soo", "good"]);
    }

    #[test]
    fn test_preserve_case() {
        let t = TweetTokenizer::new().preserve_case(true).apply_stemming(false);
        assert_eq!(t.tokenize("Hello"), vec!["Hello"]);
    }

    #[test]
    fn test_empty_input_gives_empty_sequence() {
        let t = TweetTokenizer::new();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn test_determinism() {
        let t = TweetTokenizer::new();
        let text = "Loving thiiiiis! Sooo much fun with @friends";
        assert_eq!(t.tokenize(text), t.tokenize(text));
    }

    #[test]
    fn test_stemming_applied() {
        let t = TweetTokenizer::new();
        let tokens = t.tokenize("loving it");
        assert!(tokens.contains(&"love".to_string()));
    }
}
