//! Owned RGBA bitmaps and decoding from encoded image files.

/// In-memory bitmap and the pixel-source boundary.
pub mod bitmap;
/// Decoding through the `image` crate.
pub mod decode;
