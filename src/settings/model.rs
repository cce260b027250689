use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    foundation::core::{Border, Color, Vec2},
    foundation::error::{ImporterError, ImporterResult},
    slicing::config::{PivotSettings, PixelVec, SliceConfig, SliceMode, SpriteAlignment},
};

/// Texture sizes accepted for `max_size`.
pub const MAX_SIZES: [u32; 9] = [32, 64, 128, 256, 512, 1024, 2048, 4096, 8192];

/// Whether a texture yields one sprite or a sheet of slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteMode {
    /// One sprite covering the whole texture.
    #[default]
    Single,
    /// A grid of sprites.
    Multiple,
}

/// Sampling filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Bilinear filtering.
    Bilinear,
    /// Nearest-neighbour, no filtering.
    #[default]
    Point,
    /// Trilinear filtering.
    Trilinear,
}

/// Requested storage format, resolved by the host's compressor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureFormat {
    /// Platform default compressed format.
    Compressed,
    /// 16 bits per pixel.
    Bits16,
    /// Uncompressed 32 bits per pixel.
    #[default]
    Truecolor,
    /// Crunch-compressed.
    Crunched,
}

/// Build target with its own texture settings.
///
/// Declaration order is the iteration order of override maps.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Web player.
    Web,
    /// Desktop standalone.
    Standalone,
    /// iOS.
    #[serde(rename = "iphone")]
    IPhone,
    /// Android.
    Android,
    /// Tizen.
    Tizen,
    /// WebGL.
    #[serde(rename = "webgl")]
    WebGL,
    /// Samsung TV.
    SamsungTv,
}

impl Platform {
    /// Every platform in declaration order.
    pub const ALL: [Platform; 7] = [
        Platform::Web,
        Platform::Standalone,
        Platform::IPhone,
        Platform::Android,
        Platform::Tizen,
        Platform::WebGL,
        Platform::SamsungTv,
    ];

    /// Host-facing platform label.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Web => "Web",
            Platform::Standalone => "Standalone",
            Platform::IPhone => "iPhone",
            Platform::Android => "Android",
            Platform::Tizen => "Tizen",
            Platform::WebGL => "WebGL",
            Platform::SamsungTv => "Samsung TV",
        }
    }
}

/// Per-platform replacement for the default size/format settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlatformOverride {
    /// Storage format.
    pub format: TextureFormat,
    /// Maximum texture size.
    pub max_size: u32,
    /// Compression quality, 0..=100.
    pub compression_quality: u8,
    /// Split alpha into a separate texture (Android ETC1).
    pub allows_alpha_split: bool,
}

impl Default for PlatformOverride {
    fn default() -> Self {
        Self {
            format: TextureFormat::Truecolor,
            max_size: 2048,
            compression_quality: 50,
            allows_alpha_split: false,
        }
    }
}

/// Grid slicing parameters for `Multiple` sprite mode.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlicingSettings {
    /// How the grid is sized.
    pub mode: SliceMode,
    /// Cell width.
    pub slice_width: i32,
    /// Cell height.
    pub slice_height: i32,
    /// Column count.
    pub cols: i32,
    /// Row count.
    pub rows: i32,
    /// Border applied to every slice.
    pub border: Border,
    /// Grid origin offset.
    pub offset: PixelVec,
    /// Gap between cells.
    pub padding: PixelVec,
    /// Keep fully transparent slices.
    pub include_blank_slices: bool,
}

impl Default for SlicingSettings {
    fn default() -> Self {
        Self {
            mode: SliceMode::ByCellSize,
            slice_width: 64,
            slice_height: 64,
            cols: 1,
            rows: 1,
            border: Border::default(),
            offset: PixelVec::default(),
            padding: PixelVec::default(),
            include_blank_slices: false,
        }
    }
}

/// Import settings shared by every texture in a folder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Master switch; disabled settings leave textures untouched.
    pub enabled: bool,
    /// Sprite atlas packing tag.
    pub packing_tag: String,
    /// Sprite pixels per world unit.
    pub pixels_per_unit: f32,
    /// Generate mipmaps.
    pub generate_mipmaps: bool,
    /// Single sprite or sliced sheet.
    pub sprite_mode: SpriteMode,
    /// Sampling filter.
    pub filter_mode: FilterMode,
    /// Default pivot alignment.
    pub alignment: SpriteAlignment,
    /// Default pivot fraction, used with `Custom` alignment.
    pub pivot: Vec2,
    /// Read pivots from a `_pivotmap` companion image.
    pub pivot_map_enabled: bool,
    /// Pivot marker color.
    pub pivot_map_color: Color,
    /// Default maximum texture size.
    pub max_size: u32,
    /// Default storage format.
    pub format: TextureFormat,
    /// Default compression quality, 0..=100.
    pub compression_quality: u8,
    /// Platform-specific overrides; absent platforms use the defaults.
    pub platform_overrides: BTreeMap<Platform, PlatformOverride>,
    /// Replace slice metadata on every import (`Multiple` mode only).
    pub override_sprite_editor_settings: bool,
    /// Grid slicing parameters.
    pub slicing: SlicingSettings,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            packing_tag: String::new(),
            pixels_per_unit: 100.0,
            generate_mipmaps: false,
            sprite_mode: SpriteMode::Single,
            filter_mode: FilterMode::Point,
            alignment: SpriteAlignment::Center,
            pivot: Vec2::new(0.5, 0.5),
            pivot_map_enabled: false,
            pivot_map_color: Color::RED,
            max_size: 2048,
            format: TextureFormat::Truecolor,
            compression_quality: 50,
            platform_overrides: BTreeMap::new(),
            override_sprite_editor_settings: false,
            slicing: SlicingSettings::default(),
        }
    }
}

impl ImportSettings {
    /// Parse settings from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ImporterResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ImporterError::serde(format!("parse import settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ImporterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open import settings '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> ImporterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ImporterError::serde(format!("serialize import settings: {e}")))
    }

    /// Write pretty JSON to `path`, creating parent directories.
    pub fn to_path(&self, path: impl AsRef<Path>) -> ImporterResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create settings dir '{}'", parent.display()))?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("write import settings '{}'", path.display()))?;
        Ok(())
    }

    /// Reject values no importer could honor.
    ///
    /// Grid size and counts are checked by [`crate::plan_grid`] only when a texture is
    /// actually sliced, so a non-slicing folder may carry any leftover slicing values.
    pub fn validate(&self) -> ImporterResult<()> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(ImporterError::validation(
                "pixels_per_unit must be a positive number",
            ));
        }
        validate_size_and_quality("default", self.max_size, self.compression_quality)?;
        for (platform, ov) in &self.platform_overrides {
            validate_size_and_quality(platform.label(), ov.max_size, ov.compression_quality)?;
        }
        if !(0.0..=1.0).contains(&self.pivot.x) || !(0.0..=1.0).contains(&self.pivot.y) {
            return Err(ImporterError::validation(format!(
                "pivot ({}, {}) must lie in [0, 1]",
                self.pivot.x, self.pivot.y
            )));
        }
        Ok(())
    }

    /// Pivot defaults in the form the slicer consumes.
    pub fn pivot_settings(&self) -> PivotSettings {
        PivotSettings {
            alignment: self.alignment,
            pivot: self.pivot,
        }
    }

    /// Slicing configuration for one import.
    pub fn slice_config(&self) -> SliceConfig {
        let s = &self.slicing;
        SliceConfig {
            mode: s.mode,
            slice_width: s.slice_width,
            slice_height: s.slice_height,
            cols: s.cols,
            rows: s.rows,
            padding: s.padding,
            offset: s.offset,
            border: s.border,
            include_blank_slices: s.include_blank_slices,
            pivot: self.pivot_settings(),
            pivot_map_enabled: self.pivot_map_enabled,
            pivot_map_color: self.pivot_map_color,
        }
    }

    /// The alpha-split flag carried by the Android override, if any.
    pub fn allows_alpha_split(&self) -> bool {
        self.platform_overrides
            .get(&Platform::Android)
            .is_some_and(|ov| ov.allows_alpha_split)
    }
}

fn validate_size_and_quality(scope: &str, max_size: u32, quality: u8) -> ImporterResult<()> {
    if !MAX_SIZES.contains(&max_size) {
        return Err(ImporterError::validation(format!(
            "{scope}: max_size {max_size} is not one of {MAX_SIZES:?}"
        )));
    }
    if quality > 100 {
        return Err(ImporterError::validation(format!(
            "{scope}: compression_quality {quality} exceeds 100"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/settings/model.rs"]
mod tests;
