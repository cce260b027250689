use crate::{
    foundation::core::{Border, Color, SliceRect, Vec2},
    foundation::error::{ImporterError, ImporterResult},
    raster::bitmap::{Bitmap, PixelSource},
    slicing::config::{SliceConfig, SpriteAlignment},
    slicing::grid::plan_grid,
    slicing::pivot::pivot_for_rect,
};

/// One emitted sprite.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSlice {
    /// `<texture>_<index>`.
    pub name: String,
    /// Dense, 0-based emission index.
    pub index: usize,
    /// Pixel rectangle, bottom-up.
    pub rect: SliceRect,
    /// Pivot fraction.
    pub pivot: Vec2,
    /// Alignment tag; `Custom` when the pivot came from a pivot map.
    pub alignment: SpriteAlignment,
    /// Nine-slice border.
    pub border: Border,
}

/// `true` when every pixel has zero alpha. An empty block counts as blank.
pub fn is_blank(pixels: &[Color]) -> bool {
    pixels.iter().all(|p| p.is_transparent())
}

/// Cut `image` into sprites according to `config`.
///
/// Cells outside the image are skipped, blank cells are skipped unless
/// `include_blank_slices` is set, and when the pivot map is enabled and supplied each
/// surviving slice takes its pivot from the first marker pixel inside its own block.
#[tracing::instrument(
    skip(image, pivot_map, config),
    fields(width = image.width(), height = image.height(), pivot_map = pivot_map.is_some())
)]
pub fn slice_texture<S: PixelSource + ?Sized>(
    texture_name: &str,
    image: &S,
    pivot_map: Option<&Bitmap>,
    config: &SliceConfig,
) -> ImporterResult<Vec<SpriteSlice>> {
    let plan = plan_grid(image.width(), image.height(), config)?;
    let pivot_map = pivot_map.filter(|_| config.pivot_map_enabled);

    let mut out = Vec::new();
    for rect in plan.bounded_rects() {
        let pixels = image.pixels(rect).ok_or_else(|| {
            ImporterError::validation(format!(
                "pixel source refused in-bounds rect {rect:?} of a {}x{} image",
                image.width(),
                image.height()
            ))
        })?;

        if is_blank(&pixels) && !config.include_blank_slices {
            tracing::debug!(?rect, "blank slice skipped");
            continue;
        }

        let matched = pivot_map.and_then(|map| pivot_for_rect(map, rect, config.pivot_map_color));
        let (alignment, pivot) = match matched {
            Some(pivot) => (SpriteAlignment::Custom, pivot),
            None => (config.pivot.alignment, config.pivot.pivot),
        };

        let index = out.len();
        out.push(SpriteSlice {
            name: format!("{texture_name}_{index}"),
            index,
            rect,
            pivot,
            alignment,
            border: config.border,
        });
    }

    tracing::debug!(
        emitted = out.len(),
        candidates = plan.cell_count(),
        "slicing finished"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/slicing/slicer.rs"]
mod tests;
