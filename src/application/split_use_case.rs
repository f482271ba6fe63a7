// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Prepares a classifier dataset in order:
//
//   Step 1: Load the first max_lines reviews   (Layer 4 - loader)
//   Step 2: Derive the "target" label          (Layer 4 - labeler)
//   Step 3: Pull "target" out as y, the rest
//           of the table stays as X            (Layer 4 - frame)
//   Step 4: Split X's row index with y         (Layer 4 - splitter)
//
// The result is a SplitSummary the CLI can print as text or JSON.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use std::fmt;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    labeler::{labels_from, mark_positive, TARGET_COLUMN},
    loader::GzJsonLinesLoader,
    splitter::{split_train_test, TrainTestSplit, DEFAULT_TEST_SIZE},
};
use crate::domain::traits::RecordSource;

// ─── Split Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub data_path: String,
    pub max_lines: usize,
    pub test_size: f64,
    pub seed:      Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            data_path: "data/reviews_Video_Games_5.json.gz".to_string(),
            max_lines: 10_000,
            test_size: DEFAULT_TEST_SIZE,
            seed:      None,
        }
    }
}

// ─── SplitSummary ─────────────────────────────────────────────────────────────
/// What a split run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    /// Rows loaded from the file
    pub rows: usize,

    /// Feature columns left after "target" was popped
    pub feature_columns: Vec<String>,

    /// Rows labeled positive
    pub positives: usize,

    pub split: TrainTestSplit,
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows loaded:     {}", self.rows)?;
        writeln!(f, "Positive rows:   {} ({} negative)", self.positives, self.rows - self.positives)?;
        writeln!(f, "Feature columns: {}", self.feature_columns.join(", "))?;
        write!(
            f,
            "Train / test:    {} / {}",
            self.split.train_len(),
            self.split.test_len()
        )
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Execute the load → label → split pipeline end to end
    pub fn execute(&self) -> Result<SplitSummary> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        tracing::info!("Loading up to {} reviews from '{}'", cfg.max_lines, cfg.data_path);
        let frame = GzJsonLinesLoader::new(&cfg.data_path)
            .load(cfg.max_lines)
            .with_context(|| format!("Cannot load reviews from '{}'", cfg.data_path))?;
        tracing::info!("Loaded {} rows, {} columns", frame.height(), frame.width());

        // ── Step 2: Label ─────────────────────────────────────────────────────
        let mut frame = mark_positive(frame).context("Cannot label reviews")?;

        // ── Step 3: Separate y from X ─────────────────────────────────────────
        let target = frame
            .pop_column(TARGET_COLUMN)
            .ok_or_else(|| anyhow!("Labeled table has no '{TARGET_COLUMN}' column"))?;
        let labels    = labels_from(&target)?;
        let positives = labels.iter().filter(|&&y| y).count();

        // ── Step 4: Split ─────────────────────────────────────────────────────
        let split = split_train_test(frame.index().collect(), labels, cfg.test_size, cfg.seed)
            .context("Cannot split dataset")?;
        tracing::info!(
            "Split {} rows into {} train / {} test",
            frame.height(),
            split.train_len(),
            split.test_len()
        );

        Ok(SplitSummary {
            rows:            frame.height(),
            feature_columns: frame.column_names().map(str::to_string).collect(),
            positives,
            split,
        })
    }
}
