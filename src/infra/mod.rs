// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   model_store.rs — Model and vocabulary persistence
//                    Serialises the trained parameters and the
//                    vocabulary to JSON blobs under the model
//                    directory, written atomically via
//                    temp-file + rename, and loads them back
//                    together before first inference use.
//                    Also saves/loads the TrainConfig so
//                    inference tokenises exactly as training did.
//
//   metrics.rs     — Training metrics logging
//                    Appends one CSV row per training run
//                    (example counts, vocabulary size, held-out
//                    accuracy) for later analysis.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap file blobs for a database)
//   - Keeps other layers focused on their core logic

/// Model + vocabulary saving and loading
pub mod model_store;

/// Training metrics CSV logger
pub mod metrics;
