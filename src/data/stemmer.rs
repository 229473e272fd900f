// ============================================================
// Layer 4 — Stemmer
// ============================================================
// Reduces English words to an approximate root form so that
// morphological variants ("love", "loved", "loving") land on
// the same vocabulary entry.
//
// This is a compact Porter-style suffix stripper: step 1
// (plurals, -ed/-ing, -y), a suffix-rewrite table for the
// common derivational endings, and a final long-word cleanup.
// The output is a stem, not a dictionary word — "studies"
// becomes "studi", which is fine because training and
// inference stem identically.
//
// Reference: Porter (1980), "An algorithm for suffix stripping"

/// Derivational suffix rewrites applied after step 1.
/// Ordered longest-first within each matching group so the
/// most specific suffix wins.
const SUFFIX_REWRITES: [(&str, &str); 18] = [
    ("ational", "ate"),
    ("ization", "ize"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("tional", "tion"),
    ("biliti", "ble"),
    ("ation", "ate"),
    ("ousli", "ous"),
    ("entli", "ent"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("ness", ""),
];

/// Suffixes dropped entirely from long words (measure > 1).
const LONG_WORD_SUFFIXES: [&str; 10] = [
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "al", "er",
];

/// Porter-style stemmer for English tokens.
#[derive(Debug, Clone, Default)]
pub struct Stemmer;

impl Stemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a single word. Deterministic, pure.
    /// Non-ASCII tokens (emoji, accented words) and very short
    /// words are returned unchanged — the algorithm's byte-level
    /// suffix rules are only valid for plain ASCII English.
    pub fn stem(&self, word: &str) -> String {
        if !word.is_ascii() || word.len() <= 2 {
            return word.to_string();
        }

        let mut w = word.to_lowercase();

        // ── Step 1a: plurals ──────────────────────────────────────────────────
        if w.ends_with("sses") || w.ends_with("ies") {
            w.truncate(w.len() - 2);
        } else if !w.ends_with("ss") && w.ends_with('s') {
            w.truncate(w.len() - 1);
        }

        // ── Step 1b: -ed / -ing ───────────────────────────────────────────────
        let mut stripped_verb_suffix = false;
        if w.ends_with("eed") {
            if measure(&w[..w.len() - 3]) > 0 {
                w.truncate(w.len() - 1); // "agreed" → "agree"
            }
        } else if let Some(stem) = w.strip_suffix("ed") {
            if has_vowel(stem) {
                w.truncate(w.len() - 2);
                stripped_verb_suffix = true;
            }
        } else if let Some(stem) = w.strip_suffix("ing") {
            if has_vowel(stem) {
                w.truncate(w.len() - 3);
                stripped_verb_suffix = true;
            }
        }

        // After stripping a verb suffix the stem may need repair:
        // "lov" → "love", "runn" → "run", "fil" → "file"
        if stripped_verb_suffix {
            if w.ends_with("at") || w.ends_with("bl") || w.ends_with("iz") {
                w.push('e');
            } else if ends_double_consonant(&w)
                && !w.ends_with('l')
                && !w.ends_with('s')
                && !w.ends_with('z')
            {
                w.truncate(w.len() - 1);
            } else if measure(&w) == 1 && ends_cvc(&w) {
                w.push('e');
            }
        }

        // ── Step 1c: terminal -y → -i when a vowel precedes it ────────────────
        if w.ends_with('y') && has_vowel(&w[..w.len() - 1]) {
            w.truncate(w.len() - 1);
            w.push('i');
        }

        // ── Step 2/3: derivational suffix table ───────────────────────────────
        for (suffix, replacement) in SUFFIX_REWRITES {
            if let Some(stem) = w.strip_suffix(suffix) {
                if measure(stem) > 0 {
                    w = format!("{stem}{replacement}");
                }
                break;
            }
        }

        // ── Step 4: drop residual suffixes from long words ────────────────────
        for suffix in LONG_WORD_SUFFIXES {
            if let Some(stem) = w.strip_suffix(suffix) {
                if measure(stem) > 1 {
                    w.truncate(stem.len());
                }
                break;
            }
        }

        w
    }
}

/// True if the character is one of the five English vowels
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// True if any character in the word is a vowel
fn has_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// The Porter "measure": the number of vowel→consonant
/// transitions, a rough syllable count. "tree" = 0, "trouble" = 1.
fn measure(word: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;

    for c in word.chars() {
        let v = is_vowel(c);
        if !v && prev_vowel {
            count += 1;
        }
        prev_vowel = v;
    }

    count
}

/// True if the word ends with a doubled consonant ("runn", "hopp")
fn ends_double_consonant(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) => a == b && !is_vowel(a),
        _ => false,
    }
}

/// True if the word ends consonant-vowel-consonant where the
/// final consonant is not w, x, or y ("fil" yes, "box" no)
fn ends_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let [a, b, c] = [
        chars[chars.len() - 3],
        chars[chars.len() - 2],
        chars[chars.len() - 1],
    ];
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}
