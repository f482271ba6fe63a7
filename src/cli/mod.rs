// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and routes each
// subcommand to its use case in Layer 2.
//
//   1. `preview` — load and label a few rows, print the table
//   2. `split`   — load, label, and split; print a summary
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PreviewArgs, SplitArgs};

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "review-sentiment-prep",
    version,
    about = "Load gzipped JSON-lines reviews, label sentiment, and split into train/test sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Preview(args) => run_preview(args),
            Commands::Split(args)   => run_split(args),
        }
    }
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    use crate::application::preview_use_case::PreviewUseCase;

    let frame = PreviewUseCase::new(args.into()).execute()?;
    println!("{frame}");
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    tracing::info!("Preparing train/test split from: {}", args.data_path);

    let summary = SplitUseCase::new((&args).into()).execute()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::SplitConfig;

    #[test]
    fn test_split_defaults() {
        let cli = Cli::try_parse_from(["review-sentiment-prep", "split"]).unwrap();
        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        let cfg = SplitConfig::from(&args);
        assert_eq!(cfg.max_lines, 10_000);
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.seed,      None);
        assert!(!args.json);
    }

    #[test]
    fn test_preview_flags() {
        let cli = Cli::try_parse_from([
            "review-sentiment-prep", "preview", "--data-path", "x.json.gz", "--max-lines", "3",
        ])
        .unwrap();
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.data_path, "x.json.gz");
        assert_eq!(args.max_lines, 3);
    }

    #[test]
    fn test_negative_max_lines_rejected() {
        assert!(Cli::try_parse_from(["review-sentiment-prep", "preview", "--max-lines", "-1"]).is_err());
    }
}
