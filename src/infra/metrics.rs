// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records one row of metrics per training run to a CSV file.
//
// Why log metrics to CSV?
//   - Easy to open in a spreadsheet
//   - Lets you compare runs after changing alpha or the
//     tokenizer flags
//   - Provides a permanent record of each training run
//
// Metrics recorded per run:
//   - train_examples: how many examples the model was fit on
//   - val_examples:   size of the held-out set
//   - vocab_size:     distinct words in the training split
//   - val_accuracy:   fraction of held-out examples labelled
//                     correctly (the regression threshold the
//                     tests guard is >0.6)
//
// Output file: {model_dir}/metrics.csv

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

/// One row of metrics data for a single training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Number of examples the parameters were estimated from
    pub train_examples: usize,

    /// Number of held-out examples used for evaluation
    pub val_examples: usize,

    /// Vocabulary size — also the feature-vector length
    pub vocab_size: usize,

    /// Fraction of held-out examples labelled correctly.
    /// 0.0 when the validation set was empty.
    pub val_accuracy: f64,
}

impl RunMetrics {
    pub fn new(
        train_examples: usize,
        val_examples: usize,
        vocab_size: usize,
        val_accuracy: f64,
    ) -> Self {
        Self {
            train_examples,
            val_examples,
            vocab_size,
            val_accuracy,
        }
    }
}

/// Appends run metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Write the header only if the file is new —
        // this allows appending across runs
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "train_examples,val_examples,vocab_size,val_accuracy")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one run's metrics as a new row in the CSV.
    pub fn log(&self, m: &RunMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{},{:.6}",
            m.train_examples, m.val_examples, m.vocab_size, m.val_accuracy,
        )?;

        tracing::debug!(
            "Logged run metrics: {} train, {} val, accuracy {:.4}",
            m.train_examples,
            m.val_examples,
            m.val_accuracy,
        );

        Ok(())
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
