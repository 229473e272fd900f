// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Replaces URLs and @-mentions in raw tweet text with fixed
// placeholder tokens before tokenisation.
//
// Why replace instead of delete?
//   The fact that a tweet contains a link or mentions someone
//   is itself a (weak) sentiment signal. Mapping every URL to
//   the single token "__url" keeps that signal while stopping
//   each distinct link from bloating the vocabulary.
//
// Malformed text has no error path — anything that fails to
// match the patterns simply passes through unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder written in place of every matched URL
pub const URL_PLACEHOLDER: &str = "__url";

/// Placeholder written in place of every matched @-mention
pub const HANDLE_PLACEHOLDER: &str = "__handle";

// Compiled once on first use. The patterns are deliberately pragmatic:
// scheme-or-www URLs and 1-to-20 character Twitter handles.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s]+").unwrap());
static HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]{1,20}").unwrap());

/// Strips URLs and user mentions from raw text via pattern substitution.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Replace URLs with the placeholder token
    replace_urls: bool,
    /// Replace @-mentions with the placeholder token
    replace_handles: bool,
}

impl Normalizer {
    /// Create a normalizer with both replacements enabled
    pub fn new() -> Self {
        Self {
            replace_urls: true,
            replace_handles: true,
        }
    }

    /// Enable/disable URL replacement
    pub fn replace_urls(mut self, on: bool) -> Self {
        self.replace_urls = on;
        self
    }

    /// Enable/disable handle replacement
    pub fn replace_handles(mut self, on: bool) -> Self {
        self.replace_handles = on;
        self
    }

    /// Normalise one piece of raw text. Pure — no side effects.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_string();

        if self.replace_urls {
            out = URL_REGEX.replace_all(&out, URL_PLACEHOLDER).into_owned();
        }
        if self.replace_handles {
            out = HANDLE_REGEX
                .replace_all(&out, HANDLE_PLACEHOLDER)
                .into_owned();
        }

        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
