// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a gzipped review file and a labeled,
// split index set.
//
// The pipeline flows in this order:
//
//   reviews.json.gz
//       │
//       ▼
//   GzJsonLinesLoader → decompresses, parses the first N lines
//       │
//       ▼
//   ReviewFrame       → column-oriented table, one column per key
//       │
//       ▼
//   mark_positive     → adds the boolean "target" column
//       │
//       ▼
//   split_train_test  → partitions row indices + labels
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            flate2 / serde_json crate documentation

/// Reads gzip-compressed JSON lines into a ReviewFrame
pub mod loader;

/// The column-oriented review table
pub mod frame;

/// Derives the sentiment label from the star rating
pub mod labeler;

/// Shuffles and splits row indices into train/test sets
pub mod splitter;

/// Gzip fixture helpers shared by unit tests
#[cfg(test)]
pub mod fixtures;
