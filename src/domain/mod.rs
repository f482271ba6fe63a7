// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types that describe what a review dataset IS:
//
//   record.rs — one JSON line as a tagged-union row (Cell / Record)
//   review.rs — the typed row for the reference review schema
//   error.rs  — the error kinds the data layer can raise
//   traits.rs — the RecordSource abstraction loaders implement
//
// Rules for this layer:
//   - NO file I/O here
//   - NO burn types here
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Cell and Record: the schema-less row representation
pub mod record;

/// Typed review row for the known dataset schema
pub mod review;

/// DataError and SchemaError
pub mod error;

/// Core abstractions other layers implement
pub mod traits;
