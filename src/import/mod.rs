//! Texture import: settings resolution, slicing and the on-disk asset tree.

/// Asset path conventions.
pub mod paths;
/// Filesystem-backed asset store.
pub mod store;
/// Per-texture import resolution.
pub mod texture;
