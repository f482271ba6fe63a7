// ============================================================
// Layer 2 — PreviewUseCase
// ============================================================
// Loads the first few reviews, labels them, and hands the
// table back for display.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{frame::ReviewFrame, labeler::mark_positive, loader::GzJsonLinesLoader};
use crate::domain::traits::RecordSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub data_path: String,
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            data_path: "data/reviews_Video_Games_5.json.gz".to_string(),
            max_lines: 1,
        }
    }
}

pub struct PreviewUseCase {
    config: PreviewConfig,
}

impl PreviewUseCase {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Load and label `max_lines` rows
    pub fn execute(&self) -> Result<ReviewFrame> {
        let cfg    = &self.config;
        let loader = GzJsonLinesLoader::new(&cfg.data_path);

        let frame = loader
            .load(cfg.max_lines)
            .with_context(|| format!("Cannot load reviews from '{}'", cfg.data_path))?;

        mark_positive(frame).context("Cannot label reviews")
    }
}
