use crate::foundation::core::{Color, SliceRect};
use crate::foundation::error::{ImporterError, ImporterResult};
use crate::foundation::math::f32_to_unorm8;

/// Read-only access to the pixels of a source image.
///
/// Rectangles are expressed bottom-up (see [`SliceRect`]); the returned block is laid out in
/// the source's native order, top row first.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Pixels covered by `rect`, or `None` when `rect` is not inside the image.
    fn pixels(&self, rect: SliceRect) -> Option<Vec<Color>>;
}

/// Owned RGBA image, row-major with row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Wrap a pixel vector. `pixels.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> ImporterResult<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(ImporterError::validation(format!(
                "bitmap {width}x{height} needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Build from tightly packed straight RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> ImporterResult<Self> {
        if rgba.len() % 4 != 0 {
            return Err(ImporterError::validation(
                "rgba8 buffer length must be a multiple of 4",
            ));
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Color::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Convert an already decoded `image` buffer.
    pub fn from_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Color::from_rgba8(p.0)).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert back into an 8-bit `image` buffer.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[self.index(x, y)];
            image::Rgba([
                f32_to_unorm8(c.r),
                f32_to_unorm8(c.g),
                f32_to_unorm8(c.b),
                f32_to_unorm8(c.a),
            ])
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in native order.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 is the top row).
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Overwrite the pixel at column `x`, row `y`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Copy the block covered by a bottom-up `rect` into a new bitmap.
    pub fn crop(&self, rect: SliceRect) -> Option<Self> {
        if !rect.fits_within(self.width, self.height) {
            return None;
        }
        let top = self.height - rect.y - rect.height;
        let mut pixels = Vec::with_capacity(rect.area() as usize);
        for row in top..top + rect.height {
            let start = self.index(rect.x, row);
            pixels.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Some(Self {
            width: rect.width,
            height: rect.height,
            pixels,
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl PixelSource for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self, rect: SliceRect) -> Option<Vec<Color>> {
        self.crop(rect).map(|b| b.pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
