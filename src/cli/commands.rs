// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `preview` and `split`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::preview_use_case::PreviewConfig;
use crate::application::split_use_case::SplitConfig;
use crate::data::splitter::DEFAULT_TEST_SIZE;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the first few labeled reviews
    Preview(PreviewArgs),

    /// Load, label, and split reviews into train/test indices
    Split(SplitArgs),
}

/// Arguments for the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Gzip-compressed JSON-lines review file
    #[arg(long, default_value = "data/reviews_Video_Games_5.json.gz")]
    pub data_path: String,

    /// How many lines to read from the top of the file
    #[arg(long, default_value_t = 1)]
    pub max_lines: usize,
}

impl From<PreviewArgs> for PreviewConfig {
    fn from(a: PreviewArgs) -> Self {
        PreviewConfig {
            data_path: a.data_path,
            max_lines: a.max_lines,
        }
    }
}

/// Arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Gzip-compressed JSON-lines review file
    #[arg(long, default_value = "data/reviews_Video_Games_5.json.gz")]
    pub data_path: String,

    /// Maximum number of reviews to load
    #[arg(long, default_value_t = 10_000)]
    pub max_lines: usize,

    /// Fraction of rows held out for testing
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full split (indices and labels) as JSON
    #[arg(long)]
    pub json: bool,
}

/// Convert CLI SplitArgs into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<&SplitArgs> for SplitConfig {
    fn from(a: &SplitArgs) -> Self {
        SplitConfig {
            data_path: a.data_path.clone(),
            max_lines: a.max_lines,
            test_size: a.test_size,
            seed:      a.seed,
        }
    }
}
