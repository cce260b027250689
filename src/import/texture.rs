use std::collections::BTreeMap;

use crate::{
    foundation::core::Vec2,
    foundation::error::ImporterResult,
    import::paths::{is_pivot_map, texture_name_from_path},
    raster::bitmap::Bitmap,
    settings::model::{
        FilterMode, ImportSettings, Platform, PlatformOverride, SpriteMode, TextureFormat,
    },
    slicing::config::SpriteAlignment,
    slicing::pivot::pivot_for_image,
    slicing::slicer::{SpriteSlice, slice_texture},
};

/// Effective texture settings handed to the host importer before it processes pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextureImportSettings {
    /// Single sprite or sliced sheet.
    pub sprite_mode: SpriteMode,
    /// Pixels per world unit.
    pub pixels_per_unit: f32,
    /// Pivot alignment; `Custom` when a pivot map supplied the pivot.
    pub alignment: SpriteAlignment,
    /// Pivot fraction.
    pub pivot: Vec2,
    /// Generate mipmaps.
    pub generate_mipmaps: bool,
    /// Sampling filter.
    pub filter_mode: FilterMode,
    /// Default maximum size.
    pub max_size: u32,
    /// Default storage format.
    pub format: TextureFormat,
    /// Default compression quality.
    pub compression_quality: u8,
    /// Sprite atlas packing tag.
    pub packing_tag: String,
    /// Alpha split flag, taken from the Android override.
    pub allows_alpha_split: bool,
    /// Keep pixels CPU-readable after import (set for pivot maps).
    pub readable: bool,
    /// Every platform in declared order: `Some` to apply an override, `None` to clear it.
    pub platforms: BTreeMap<Platform, Option<PlatformOverride>>,
}

/// Result of importing one texture.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImportOutcome {
    /// Asset path the outcome belongs to.
    pub asset_path: String,
    /// Texture-level settings.
    pub texture: TextureImportSettings,
    /// Slice metadata, present when the texture is sliced by the importer.
    pub slices: Option<Vec<SpriteSlice>>,
}

/// Resolve the texture-level settings for `asset_path`.
///
/// In `Single` mode with the pivot map enabled, a supplied pivot map sets the texture pivot
/// from its first marker pixel; a missing map or marker keeps the configured pivot.
pub fn resolve_texture_settings(
    settings: &ImportSettings,
    asset_path: &str,
    pivot_map: Option<&Bitmap>,
) -> TextureImportSettings {
    let mut alignment = settings.alignment;
    let mut pivot = settings.pivot;
    if settings.pivot_map_enabled && settings.sprite_mode == SpriteMode::Single {
        if let Some(found) =
            pivot_map.and_then(|map| pivot_for_image(map, settings.pivot_map_color))
        {
            alignment = SpriteAlignment::Custom;
            pivot = found;
        }
    }

    let platforms = Platform::ALL
        .into_iter()
        .map(|p| (p, settings.platform_overrides.get(&p).copied()))
        .collect();

    TextureImportSettings {
        sprite_mode: settings.sprite_mode,
        pixels_per_unit: settings.pixels_per_unit,
        alignment,
        pivot,
        generate_mipmaps: settings.generate_mipmaps,
        filter_mode: settings.filter_mode,
        max_size: settings.max_size,
        format: settings.format,
        compression_quality: settings.compression_quality,
        packing_tag: settings.packing_tag.clone(),
        allows_alpha_split: settings.allows_alpha_split(),
        readable: is_pivot_map(asset_path),
        platforms,
    }
}

/// Whether the importer owns the slice metadata of `asset_path`.
pub fn slices_texture(settings: &ImportSettings, asset_path: &str) -> bool {
    settings.enabled
        && settings.sprite_mode == SpriteMode::Multiple
        && settings.override_sprite_editor_settings
        && !is_pivot_map(asset_path)
}

/// Import one texture: resolve its texture settings and, when the importer owns its slices,
/// cut it into sprites. Returns `None` when `settings` are disabled.
#[tracing::instrument(skip(image, pivot_map, settings), fields(enabled = settings.enabled))]
pub fn import_texture(
    asset_path: &str,
    image: &Bitmap,
    pivot_map: Option<&Bitmap>,
    settings: &ImportSettings,
) -> ImporterResult<Option<ImportOutcome>> {
    if !settings.enabled {
        tracing::debug!("import settings disabled, texture left untouched");
        return Ok(None);
    }
    settings.validate()?;

    let texture = resolve_texture_settings(settings, asset_path, pivot_map);
    let slices = if slices_texture(settings, asset_path) {
        let name = texture_name_from_path(asset_path);
        Some(slice_texture(
            name,
            image,
            pivot_map,
            &settings.slice_config(),
        )?)
    } else {
        None
    };

    Ok(Some(ImportOutcome {
        asset_path: asset_path.to_string(),
        texture,
        slices,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/import/texture.rs"]
mod tests;
