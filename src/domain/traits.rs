// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer asks for "the first N records" without
// knowing whether they come from a gzipped file, a plain file,
// or an in-memory fixture.
//
// Implementations:
//   - GzJsonLinesLoader → gzip-compressed JSON-lines file
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::data::frame::ReviewFrame;
use crate::domain::error::DataError;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce a table of at most `max_lines` records.
pub trait RecordSource {
    /// Load the first `min(max_lines, available)` records, in order.
    /// Fails on the first record that cannot be parsed.
    fn load(&self, max_lines: usize) -> Result<ReviewFrame, DataError>;
}
