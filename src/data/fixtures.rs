// Test-only helpers for writing small gzip JSON-lines fixtures.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;

/// Gzip `lines` (joined with '\n', trailing newline included) into `dir/name`.
pub fn write_gz_lines(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create fixture file");

    let mut encoder = GzEncoder::new(file, Compression::default());
    for line in lines {
        writeln!(encoder, "{line}").expect("write fixture line");
    }
    encoder.finish().expect("finish gzip stream");
    path
}

/// One line of the reference review dataset with the given rating.
pub fn review_line(id: usize, overall: f64) -> String {
    json!({
        "reviewerID":     format!("R{id:04}"),
        "asin":           format!("B{id:09}"),
        "reviewerName":   format!("reviewer {id}"),
        "helpful":        [id % 3, 3],
        "reviewText":     format!("Review body number {id}."),
        "overall":        overall,
        "summary":        format!("Summary {id}"),
        "unixReviewTime": 1_341_792_000 + id as i64,
        "reviewTime":     "07 9, 2012",
    })
    .to_string()
}

/// `count` reference-schema lines cycling through ratings 1.0..=5.0
pub fn review_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|id| review_line(id, (id % 5 + 1) as f64))
        .collect()
}
