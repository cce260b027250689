use crate::{
    foundation::core::{Color, PixelPos, SliceRect, Vec2},
    raster::bitmap::Bitmap,
};

/// First pixel of `image` matching `target`, scanning rows top to bottom and each row left to
/// right. Channels are compared with [`Color::approx_eq`].
pub fn find_pivot(image: &Bitmap, target: Color) -> Option<PixelPos> {
    let width = image.width() as usize;
    if width == 0 {
        return None;
    }
    image
        .as_slice()
        .iter()
        .position(|px| px.approx_eq(target))
        .map(|idx| PixelPos::new((idx % width) as u32, (idx / width) as u32))
}

/// Pivot for a whole texture, normalized by the pivot map's full size.
pub fn pivot_for_image(pivot_map: &Bitmap, target: Color) -> Option<Vec2> {
    find_pivot(pivot_map, target).map(|pos| pos.to_fraction(pivot_map.width(), pivot_map.height()))
}

/// Pivot for one slice: the pivot map is cropped to `rect` and the match is normalized by the
/// crop's size. A rect that does not fit the pivot map yields no pivot.
pub fn pivot_for_rect(pivot_map: &Bitmap, rect: SliceRect, target: Color) -> Option<Vec2> {
    let Some(block) = pivot_map.crop(rect) else {
        tracing::warn!(
            ?rect,
            map_width = pivot_map.width(),
            map_height = pivot_map.height(),
            "slice does not fit the pivot map, keeping default pivot"
        );
        return None;
    };
    find_pivot(&block, target).map(|pos| pos.to_fraction(block.width(), block.height()))
}

#[cfg(test)]
#[path = "../../tests/unit/slicing/pivot.rs"]
mod tests;
