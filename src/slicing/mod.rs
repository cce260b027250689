//! Grid slicing and pivot-map detection.
//!
//! Everything here is a pure function of its inputs: the planner resolves a grid from image
//! dimensions, the slicer validates and filters its cells against pixel data, and the pivot
//! resolver scans a pivot map for a marker color.

/// Slicing configuration types.
pub mod config;
/// Grid planning.
pub mod grid;
/// Pivot-map marker search.
pub mod pivot;
/// Slice validation, blank filtering and emission.
pub mod slicer;
