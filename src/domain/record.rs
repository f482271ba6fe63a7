// ============================================================
// Layer 3 — Cell and Record
// ============================================================
// A review line has no enforced schema: any key may appear and
// any JSON value may sit under it. When rows with different keys
// are stacked into one table, some rows have no value for some
// columns.
//
// Instead of relying on absence, each table cell is explicit:
//
//   Cell::Missing        → the key did not appear in that record
//   Cell::Value(v)       → the key appeared, v may still be JSON null
//
// A Record is one row viewed as column name → Cell.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            serde_json::Value documentation

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// One row of the table, keyed by column name.
pub type Record = BTreeMap<String, Cell>;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// The record this row came from had no such key
    Missing,
    /// The key was present with this value
    Value(Value),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// The underlying JSON value, or None for a missing cell
    pub fn value(&self) -> Option<&Value> {
        match self {
            Cell::Missing  => None,
            Cell::Value(v) => Some(v),
        }
    }

    /// Numeric view of the cell. Only JSON numbers qualify;
    /// strings such as "4.0" are not coerced.
    pub fn as_f64(&self) -> Option<f64> {
        self.value().and_then(Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value().and_then(Value::as_bool)
    }

    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Cell::Missing               => "a missing value".to_string(),
            Cell::Value(Value::Null)    => "null".to_string(),
            Cell::Value(Value::String(s)) => format!("string {s:?}"),
            Cell::Value(other)          => other.to_string(),
        }
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self {
        Cell::Value(v)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Value(Value::Bool(b))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing                 => write!(f, "<missing>"),
            Cell::Value(Value::String(s)) => write!(f, "{s}"),
            Cell::Value(v)                => write!(f, "{v}"),
        }
    }
}
