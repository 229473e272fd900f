// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Randomly shuffles examples and splits them into two sets:
//   - Training set:   used to estimate model probabilities
//   - Validation set: used to measure accuracy on unseen data
//
// Why shuffle before splitting?
//   The corpus files are ordered — all positive tweets first,
//   then all negative. Without shuffling, the validation set
//   would contain only one class. Shuffling ensures both sets
//   have a representative mix.
//
// Split ratio: 80% training, 20% validation (configurable)
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom
// which is the standard unbiased shuffle algorithm.

use rand::seq::SliceRandom;

/// Randomly shuffle `examples` and split into (train, validation).
///
/// # Arguments
/// * `examples`       - All available examples (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.8 = 80%
///
/// # Returns
/// A tuple (train_examples, val_examples)
pub fn split_train_val<T>(mut examples: Vec<T>, train_fraction: f64) -> (Vec<T>, Vec<T>) {
    let mut rng = rand::thread_rng();

    // Fisher-Yates shuffle — every permutation is equally likely
    examples.shuffle(&mut rng);

    let total = examples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    let val = examples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        examples.len(),
        val.len(),
    );

    (examples, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val) = split_train_val(items, 0.8);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(), 20);
    }

    #[test]
    fn test_all_items_preserved() {
        // No items should be lost in the split
        let items: Vec<usize> = (0..50).collect();
        let (train, val) = split_train_val(items, 0.7);
        assert_eq!(train.len() + val.len(), 50);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, val) = split_train_val(items, 0.8);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        // 1.0 fraction means everything goes to training
        let items: Vec<usize> = (0..10).collect();
        let (train, val) = split_train_val(items, 1.0);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
