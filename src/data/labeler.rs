// ============================================================
// Layer 4 — Sentiment Labeler
// ============================================================
// Derives the binary "target" column from the star rating:
//
//   overall >= 4.0  → true  (positive review)
//   overall <  4.0  → false
//
// The threshold is inclusive: exactly 4.0 is positive,
// 3.9999 is not. No rounding happens.
//
// Every rating must be a JSON number. A missing key, a null,
// or a string such as "5" stops labeling with
// SchemaError::InvalidRating for that row instead of quietly
// becoming false.
//
// Labeling never touches existing columns. Running it twice
// replaces "target" with identical values rather than adding
// a second column.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::data::frame::{Column, ReviewFrame};
use crate::domain::error::{DataError, SchemaError};
use crate::domain::record::Cell;

/// Column holding the star rating
pub const RATING_COLUMN: &str = "overall";

/// Column the label is written to
pub const TARGET_COLUMN: &str = "target";

/// Lowest rating that counts as positive
pub const POSITIVE_THRESHOLD: f64 = 4.0;

/// True when a star rating counts as positive sentiment.
pub fn is_positive(stars: f64) -> bool {
    stars >= POSITIVE_THRESHOLD
}

/// Return `frame` with a boolean "target" column derived from "overall".
pub fn mark_positive(mut frame: ReviewFrame) -> Result<ReviewFrame, DataError> {
    let ratings = frame
        .column(RATING_COLUMN)
        .ok_or_else(|| SchemaError::MissingColumn {
            column: RATING_COLUMN.to_string(),
        })?;

    let targets = ratings
        .cells()
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            cell.as_f64()
                .map(|stars| Cell::from(is_positive(stars)))
                .ok_or_else(|| SchemaError::InvalidRating {
                    column: RATING_COLUMN.to_string(),
                    row,
                    found:  cell.describe(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    frame.set_column(Column::new(TARGET_COLUMN, targets))?;

    tracing::debug!("Labeled {} rows", frame.height());
    Ok(frame)
}

/// Read a label column back as plain booleans.
pub fn labels_from(column: &Column) -> Result<Vec<bool>, SchemaError> {
    column
        .cells()
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            cell.as_bool().ok_or_else(|| SchemaError::InvalidLabel {
                column: column.name().to_string(),
                row,
                found:  cell.describe(),
            })
        })
        .collect()
}

/// The "target" column of a labeled frame as booleans.
pub fn target_labels(frame: &ReviewFrame) -> Result<Vec<bool>, DataError> {
    let column = frame
        .column(TARGET_COLUMN)
        .ok_or_else(|| SchemaError::MissingColumn {
            column: TARGET_COLUMN.to_string(),
        })?;
    Ok(labels_from(column)?)
}
