// ============================================================
// Layer 4 — Review Loader
// ============================================================
// Reads a gzip-compressed JSON-lines file into a ReviewFrame.
//
// File format:
//   gzip( {"reviewerID": ..., "overall": 5.0, ...}\n
//         {"reviewerID": ..., "overall": 3.0, ...}\n
//         ... )
//
// Every decompressed line is one complete JSON object.
//
// Loading rules:
//   - Only the first `max_lines` lines are decoded; anything
//     after that is never parsed, even if it is broken
//   - The first line that is not a JSON object stops the load
//     with DataError::Parse carrying its 0-based index;
//     no partial frame is returned
//   - The file is opened even for max_lines = 0, so a missing
//     file is always reported
//   - The file handle lives only for the duration of the call
//
// MultiGzDecoder keeps reading past the end of the first gzip
// member, the same way `zcat` treats concatenated archives.
//
// Reference: Rust Book §9 (Error Handling)
//            flate2 crate documentation

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde_json::{Map, Value};

use crate::data::frame::ReviewFrame;
use crate::domain::error::DataError;
use crate::domain::traits::RecordSource;

/// How many lines to read when the caller does not say
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Upper bound on the up-front record buffer, so a huge
/// `max_lines` does not reserve memory the file cannot fill
const PREALLOC_LIMIT: usize = 4096;

/// Loads reviews from a gzip-compressed JSON-lines file.
/// Implements the RecordSource trait from Layer 3.
pub struct GzJsonLinesLoader {
    path: PathBuf,
}

impl GzJsonLinesLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for GzJsonLinesLoader {
    fn load(&self, max_lines: usize) -> Result<ReviewFrame, DataError> {
        let file       = File::open(&self.path)?;
        let mut reader = BufReader::new(MultiGzDecoder::new(file));

        let mut records: Vec<Map<String, Value>> =
            Vec::with_capacity(max_lines.min(PREALLOC_LIMIT));
        let mut line = Vec::new();

        while records.len() < max_lines {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            // serde_json tolerates the trailing "\n" / "\r\n"
            let index  = records.len();
            let record = serde_json::from_slice::<Map<String, Value>>(&line)
                .map_err(|source| DataError::Parse { line: index, source })?;
            records.push(record);
        }

        let frame = ReviewFrame::from_records(records);
        tracing::debug!(
            "Loaded {} records ({} columns) from '{}'",
            frame.height(),
            frame.width(),
            self.path.display()
        );
        Ok(frame)
    }
}

/// Read at most `max_lines` records from the gzipped file at `path`.
pub fn read_reviews(path: impl AsRef<Path>, max_lines: usize) -> Result<ReviewFrame, DataError> {
    GzJsonLinesLoader::new(path.as_ref()).load(max_lines)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{review_line, review_lines, write_gz_lines};
    use crate::domain::review::REVIEW_COLUMNS;
    use std::collections::BTreeSet;
    use std::io::Write;

    #[test]
    fn test_row_count_is_bounded_by_request_and_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_gz_lines(dir.path(), "reviews.json.gz", &review_lines(3));

        for (requested, expected) in [(0, 0), (1, 1), (2, 2), (3, 3), (5, 3), (1000, 3)] {
            let frame = read_reviews(&path, requested).unwrap();
            assert_eq!(frame.height(), expected, "max_lines = {requested}");
        }
    }

    #[test]
    fn test_zero_lines_gives_empty_frame() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = write_gz_lines(dir.path(), "reviews.json.gz", &review_lines(3));
        let frame = read_reviews(&path, 0).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(),  0);
    }

    #[test]
    fn test_reference_column_set() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_gz_lines(dir.path(), "reviews.json.gz", &review_lines(20));

        let expected: BTreeSet<&str> = REVIEW_COLUMNS.into_iter().collect();
        for n in [1, 7, DEFAULT_MAX_LINES] {
            let frame = read_reviews(&path, n).unwrap();
            let found: BTreeSet<&str> = frame.column_names().collect();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_rows_keep_input_order() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = write_gz_lines(dir.path(), "reviews.json.gz", &review_lines(4));
        let frame = read_reviews(&path, 4).unwrap();
        let ids: Vec<String> = frame
            .column("reviewerID")
            .unwrap()
            .cells()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(ids, vec!["R0000", "R0001", "R0002", "R0003"]);
    }

    #[test]
    fn test_malformed_line_reports_its_index() {
        let dir   = tempfile::tempdir().unwrap();
        let lines = vec![
            review_line(0, 5.0),
            "{\"reviewerID\": \"R0001\", \"overall\": ".to_string(),
            review_line(2, 4.0),
        ];
        let path = write_gz_lines(dir.path(), "broken.json.gz", &lines);

        let err = read_reviews(&path, 3).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));
        assert_eq!(err.parse_line(), Some(1));
    }

    #[test]
    fn test_malformed_line_beyond_bound_is_never_parsed() {
        let dir   = tempfile::tempdir().unwrap();
        let lines = vec![review_line(0, 5.0), "not json".to_string()];
        let path  = write_gz_lines(dir.path(), "broken.json.gz", &lines);

        let frame = read_reviews(&path, 1).unwrap();
        assert_eq!(frame.height(), 1);
    }

    #[test]
    fn test_non_object_line_is_a_parse_error() {
        let dir   = tempfile::tempdir().unwrap();
        let lines = vec!["[1, 2, 3]".to_string()];
        let path  = write_gz_lines(dir.path(), "array.json.gz", &lines);

        let err = read_reviews(&path, 1).unwrap_err();
        assert_eq!(err.parse_line(), Some(0));
    }

    #[test]
    fn test_crlf_line_endings() {
        let dir   = tempfile::tempdir().unwrap();
        let lines = vec![format!("{}\r", review_line(0, 5.0)), review_line(1, 2.0)];
        let path  = write_gz_lines(dir.path(), "crlf.json.gz", &lines);

        let frame = read_reviews(&path, 10).unwrap();
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn test_concatenated_gzip_members_are_all_read() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("multi.json.gz");

        let mut bytes = Vec::new();
        for id in 0..2 {
            let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::fast());
            writeln!(enc, "{}", review_line(id, 4.0)).unwrap();
            bytes.extend(enc.finish().unwrap());
        }
        std::fs::write(&path, bytes).unwrap();

        assert_eq!(read_reviews(&path, 10).unwrap().height(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error_even_for_zero_lines() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_reviews(dir.path().join("nope.json.gz"), 0).unwrap_err();
        match err {
            DataError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_through_trait() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = write_gz_lines(dir.path(), "reviews.json.gz", &review_lines(2));
        let loader = GzJsonLinesLoader::new(&path);
        assert_eq!(loader.path(), path.as_path());

        let reviews = loader.load(2).unwrap().reviews().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].reviewer_id, "R0000");
        assert_eq!(reviews[1].overall,     2.0);
        assert_eq!(reviews[0].target,      None);
    }
}
