// ============================================================
// Layer 3 — Data Errors
// ============================================================
// The loader and labeler surface exactly two data problems:
//
//   Parse  — a line inside the requested range is not a JSON object
//   Schema — the table does not have the shape labeling needs
//
// File-system problems (missing file, permissions, corrupt gzip
// stream) are passed through untouched as Io.
//
// The application layer wraps these in anyhow with extra context;
// keeping them as a typed enum here lets callers (and tests)
// match on the exact failure.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use thiserror::Error;

/// Every error the data layer can return.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening, reading, or decompressing the source failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Line `line` (0-based) is not a valid JSON object
    #[error("line {line} is not a valid JSON object: {source}")]
    Parse {
        line:   usize,
        #[source]
        source: serde_json::Error,
    },

    /// The table is missing something an operation needs
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Shape problems in a loaded table.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("required column '{column}' is absent")]
    MissingColumn { column: String },

    /// A rating cell that is missing, null, or not a number.
    #[error("row {row}: column '{column}' must hold a number, found {found}")]
    InvalidRating {
        column: String,
        row:    usize,
        found:  String,
    },

    #[error("row {row}: column '{column}' must hold a boolean, found {found}")]
    InvalidLabel {
        column: String,
        row:    usize,
        found:  String,
    },

    #[error("column '{column}' has {actual} values but the table has {expected} rows")]
    LengthMismatch {
        column:   String,
        expected: usize,
        actual:   usize,
    },

    /// A row that does not deserialize into the typed review struct
    #[error("row {row} does not match the review schema: {source}")]
    InvalidRow {
        row:    usize,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    /// The 0-based line index for a parse failure, if this is one.
    pub fn parse_line(&self) -> Option<usize> {
        match self {
            DataError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
