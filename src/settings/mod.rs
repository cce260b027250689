//! Folder-level import settings, snapshot diffs and templates.

/// Snapshot comparison.
pub mod diff;
/// Settings model and JSON persistence.
pub mod model;
/// Named settings templates.
pub mod templates;
