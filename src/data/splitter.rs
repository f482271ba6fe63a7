// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Randomly permutes the row index set together with its labels
// and cuts it into a test part and a training part:
//
//   indices: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
//   labels:  [T, F, T, T, F, T, T, F, T, T]
//       │ shuffle (pairs stay together)
//       ▼
//   test  = first ceil(test_size * n) pairs
//   train = the rest
//
// Each label travels with its index, so
// train_labels[i] is always the label of row train_indices[i].
//
// Passing a seed makes the permutation reproducible;
// without one the OS entropy source seeds the generator.
//
// Split ratio: 80% training, 20% test (configurable)
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::error::{DataError, SchemaError};

/// Fraction of rows held out for testing when the caller does not say
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// The four partitions of a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainTestSplit {
    pub train_indices: Vec<usize>,
    pub test_indices:  Vec<usize>,
    pub train_labels:  Vec<bool>,
    pub test_labels:   Vec<bool>,
}

impl TrainTestSplit {
    pub fn train_len(&self) -> usize {
        self.train_indices.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_indices.len()
    }
}

/// Shuffle `indices` with their `labels` and split off `test_size` of them.
///
/// # Arguments
/// * `indices`   - Row indices of the table (e.g. `frame.index()`)
/// * `labels`    - One label per index, same order
/// * `test_size` - Fraction for the test set; clamped into [0, 1]
/// * `seed`      - Fixed seed for a reproducible split
pub fn split_train_test(
    indices:   Vec<usize>,
    labels:    Vec<bool>,
    test_size: f64,
    seed:      Option<u64>,
) -> Result<TrainTestSplit, DataError> {
    if indices.len() != labels.len() {
        return Err(SchemaError::LengthMismatch {
            column:   "labels".to_string(),
            expected: indices.len(),
            actual:   labels.len(),
        }
        .into());
    }

    let test_size = clamp_fraction(test_size);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut pairs: Vec<(usize, bool)> = indices.into_iter().zip(labels).collect();
    pairs.shuffle(&mut rng);

    // Round the test share up, so any non-zero fraction of a
    // non-empty table holds out at least one row
    let total   = pairs.len();
    let n_test  = ((total as f64) * test_size).ceil() as usize;
    let n_test  = n_test.min(total);

    let train = pairs.split_off(n_test);
    let test  = pairs;

    let (train_indices, train_labels): (Vec<usize>, Vec<bool>) = train.into_iter().unzip();
    let (test_indices,  test_labels):  (Vec<usize>, Vec<bool>) = test.into_iter().unzip();

    tracing::debug!(
        "Dataset split: {} training, {} test ({}% / {}%)",
        train_indices.len(),
        test_indices.len(),
        (train_indices.len() * 100) / total.max(1),
        (test_indices.len()  * 100) / total.max(1),
    );

    Ok(TrainTestSplit { train_indices, test_indices, train_labels, test_labels })
}

/// Keep a fraction inside [0, 1]; NaN falls back to the default.
fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        tracing::warn!("test_size is NaN, using {}", DEFAULT_TEST_SIZE);
        return DEFAULT_TEST_SIZE;
    }
    if !(0.0..=1.0).contains(&fraction) {
        tracing::warn!("test_size {} is outside [0, 1], clamping", fraction);
    }
    fraction.clamp(0.0, 1.0)
}
