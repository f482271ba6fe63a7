// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal per use
// case. Both are plain callable entry points; nothing runs
// just because a module was loaded.
//
// Rules for this layer:
//   - No parsing or labeling logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and error context
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load a handful of labeled rows for a quick look
pub mod preview_use_case;

// Load, label, and split the dataset for a classifier
pub mod split_use_case;
