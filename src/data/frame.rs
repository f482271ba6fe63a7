// ============================================================
// Layer 4 — ReviewFrame (column-oriented table)
// ============================================================
// Holds the loaded records as columns rather than rows:
//
//   records (rows)                         ReviewFrame (columns)
//   {"asin": "A", "overall": 5.0}          asin    : ["A",  "B"]
//   {"asin": "B", "overall": 3.0,    →     overall : [5.0,  3.0]
//    "summary": "meh"}                     summary : [<missing>, "meh"]
//
// Column set   = union of keys seen across all records
// Column order = first appearance of each key
// Row order    = input order
//
// A record without some key gets Cell::Missing in that column,
// so every column always has exactly `height` cells.
//
// The frame also implements burn's Dataset trait, yielding one
// Record per row, so it can be handed to a burn DataLoader.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §8 (Collections)

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use burn::data::dataset::Dataset;
use serde_json::{Map, Value};

use crate::domain::error::{DataError, SchemaError};
use crate::domain::record::{Cell, Record};
use crate::domain::review::Review;

/// Widest a cell may be when the frame is printed
const DISPLAY_CELL_WIDTH: usize = 24;

// ─── Column ───────────────────────────────────────────────────────────────────
/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name:  String,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self { name: name.into(), cells }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }
}

// ─── ReviewFrame ──────────────────────────────────────────────────────────────
/// The in-memory table of loaded records plus derived columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFrame {
    columns: Vec<Column>,
    height:  usize,
}

impl ReviewFrame {
    /// Stack parsed JSON objects into columns.
    ///
    /// Zero records gives a frame with zero rows AND zero columns,
    /// since no keys were ever observed.
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let height = records.len();

        let mut columns:   Vec<Column>            = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (row, record) in records.into_iter().enumerate() {
            for (key, value) in record {
                // First time we see a key: open a column full of Missing
                let pos = match positions.get(&key).copied() {
                    Some(pos) => pos,
                    None => {
                        let pos = columns.len();
                        columns.push(Column::new(key.clone(), vec![Cell::Missing; height]));
                        positions.insert(key, pos);
                        pos
                    }
                };
                columns[pos].cells[row] = Cell::Value(value);
            }
        }

        Self { columns, height }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Column names in first-appearance order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Add a column, or replace the one with the same name in place.
    /// The column must have one cell per row.
    pub fn set_column(&mut self, column: Column) -> Result<(), SchemaError> {
        if column.len() != self.height {
            return Err(SchemaError::LengthMismatch {
                column:   column.name,
                expected: self.height,
                actual:   column.cells.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None           => self.columns.push(column),
        }
        Ok(())
    }

    /// Remove a column and hand it back, leaving the rest untouched.
    pub fn pop_column(&mut self, name: &str) -> Option<Column> {
        let pos = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(pos))
    }

    /// Row index set, `0..height`
    pub fn index(&self) -> Range<usize> {
        0..self.height
    }

    /// One row as column name → cell
    pub fn row(&self, index: usize) -> Option<Record> {
        if index >= self.height {
            return None;
        }

        Some(
            self.columns
                .iter()
                .map(|c| (c.name.clone(), c.cells[index].clone()))
                .collect(),
        )
    }

    /// Convert every row into the typed review struct.
    /// Missing cells are left out so optional fields fall back
    /// to their defaults.
    pub fn reviews(&self) -> Result<Vec<Review>, DataError> {
        self.index()
            .map(|row| {
                let object: Map<String, Value> = self
                    .columns
                    .iter()
                    .filter_map(|c| match &c.cells[row] {
                        Cell::Missing  => None,
                        Cell::Value(v) => Some((c.name.clone(), v.clone())),
                    })
                    .collect();

                serde_json::from_value::<Review>(Value::Object(object))
                    .map_err(|source| SchemaError::InvalidRow { row, source }.into())
            })
            .collect()
    }
}

/// Lets the frame plug straight into burn's data pipeline.
impl Dataset<Record> for ReviewFrame {
    fn get(&self, index: usize) -> Option<Record> {
        self.row(index)
    }

    fn len(&self) -> usize {
        self.height
    }
}

/// Compact text preview, one line per row.
impl fmt::Display for ReviewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self
            .column_names()
            .map(|n| clip(n, DISPLAY_CELL_WIDTH))
            .collect();
        writeln!(f, "   | {}", header.join(" | "))?;

        for row in self.index() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| clip(&c.cells[row].to_string(), DISPLAY_CELL_WIDTH))
                .collect();
            writeln!(f, "{row:>2} | {}", cells.join(" | "))?;
        }

        write!(f, "[{} rows x {} columns]", self.height, self.width())
    }
}

/// Flatten newlines and cut long text with a trailing "..."
fn clip(text: &str, width: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut out: String = flat.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
