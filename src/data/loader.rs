// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads the labelled tweet corpus from two JSON-lines files:
//
//   {corpus_dir}/positive_tweets.json
//   {corpus_dir}/negative_tweets.json
//
// Each line is one JSON object with at least a "text" field
// (the twitter_samples export format). The filename decides
// the label — there are no per-tweet labels inside the files.
//
// A malformed line is logged and skipped rather than failing
// the whole load — one bad tweet should not abort training.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::polarity::Polarity;
use crate::domain::traits::CorpusSource;

/// The two fixed corpus filenames, paired with the label they carry.
const CORPUS_FILES: [(&str, Polarity); 2] = [
    ("positive_tweets.json", Polarity::Positive),
    ("negative_tweets.json", Polarity::Negative),
];

/// One line of a corpus file. Tweets carry many more fields
/// (id, user, entities, ...) — serde ignores what we don't declare.
#[derive(Debug, Deserialize)]
struct TweetRecord {
    text: String,
}

/// Loads labelled tweets from a directory of JSON-lines files.
/// Implements the CorpusSource trait from Layer 3.
pub struct TweetCorpusLoader {
    /// Path to the directory containing the corpus files
    dir: String,
}

impl TweetCorpusLoader {
    /// Create a new TweetCorpusLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Implement the CorpusSource trait so the application layer
/// can call load_all() without knowing about the file format
impl CorpusSource for TweetCorpusLoader {
    fn load_all(&self) -> Result<Vec<(String, Polarity)>> {
        let dir = Path::new(&self.dir);

        // If the directory doesn't exist, return empty rather than crashing.
        // The training use case decides whether an empty corpus is fatal.
        if !dir.exists() {
            tracing::warn!(
                "Corpus directory '{}' does not exist — returning empty corpus",
                self.dir
            );
            return Ok(Vec::new());
        }

        let mut tweets = Vec::new();

        for (filename, label) in CORPUS_FILES {
            let path = dir.join(filename);

            if !path.exists() {
                tracing::warn!("Corpus file '{}' is missing — skipping", path.display());
                continue;
            }

            let loaded = load_single_file(&path, label)?;
            tracing::debug!(
                "Loaded {} tweets from '{}' ({})",
                loaded.len(),
                path.display(),
                label
            );
            tweets.extend(loaded);
        }

        tracing::info!("Successfully loaded {} labelled tweets", tweets.len());
        Ok(tweets)
    }
}

/// Parse a single JSON-lines corpus file.
/// Every parsed tweet gets the label carried by the filename.
fn load_single_file(path: &Path, label: Polarity) -> Result<Vec<(String, Polarity)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let mut tweets = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        // Blank lines are common at end-of-file — just skip them
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<TweetRecord>(line) {
            Ok(record) => tweets.push((record.text, label)),
            // Log a warning but continue — don't fail on one bad line
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed line {} in '{}': {}",
                    lineno + 1,
                    path.display(),
                    e
                );
            }
        }
    }

    Ok(tweets)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_returns_empty() {
        let loader = TweetCorpusLoader::new("definitely/not/a/real/dir");
        let tweets = loader.load_all().unwrap();
        assert!(tweets.is_empty());
    }

    #[test]
    fn test_parses_json_lines() {
        let dir = std::env::temp_dir().join("tweet_sentiment_loader_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("positive_tweets.json"),
            "{\"text\": \"great day\"}\nnot json at all\n{\"text\": \"love it\"}\n",
        )
        .unwrap();

        let loader = TweetCorpusLoader::new(dir.to_str().unwrap());
        let tweets = loader.load_all().unwrap();

        // The malformed middle line is skipped, the rest survive
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].0, "great day");
        assert!(tweets.iter().all(|(_, l)| *l == Polarity::Positive));

        fs::remove_dir_all(&dir).ok();
    }
}
