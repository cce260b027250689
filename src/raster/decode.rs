use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{ImporterError, ImporterResult},
    raster::bitmap::Bitmap,
};

/// Decode an encoded image (PNG, TGA, ...) into a straight-alpha [`Bitmap`].
pub fn decode_bitmap(bytes: &[u8]) -> ImporterResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ImporterError::image(format!("decode image from memory: {e}")))?;
    Ok(Bitmap::from_image(&dyn_img.to_rgba8()))
}

/// Read and decode an image file.
pub fn load_bitmap(path: impl AsRef<Path>) -> ImporterResult<Bitmap> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_bitmap(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
