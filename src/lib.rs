//! Sprite importer: per-folder texture import settings with grid slicing and pivot maps.
//!
//! Artists describe once per folder how raw images become sprites (pivot, slicing grid,
//! compression, per-platform overrides). Every (re)import of a texture in that folder
//! resolves those settings into concrete texture settings and, for sprite sheets, a list of
//! slices.
//!
//! # Pipeline overview
//!
//! 1. **Locate**: the folder's `sprite_import_settings.json` governs every texture beside it.
//! 2. **Resolve**: [`resolve_texture_settings`] turns settings into [`TextureImportSettings`],
//!    reading a whole-texture pivot from the `_pivotmap` companion in single-sprite mode.
//! 3. **Slice**: [`plan_grid`] enumerates grid cells, [`slice_texture`] drops out-of-bounds and
//!    blank cells and resolves per-slice pivots with [`find_pivot`].
//!
//! Slicing and pivot detection are pure and deterministic; IO is confined to [`AssetStore`],
//! [`TemplateStore`] and the settings (de)serializers.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// Folder import flow.
pub mod import;
/// Bitmaps and decoding.
pub mod raster;
/// Settings model.
pub mod settings;
/// Slicing core.
pub mod slicing;

pub use foundation::core::{Border, Color, PixelPos, SliceRect, Vec2};
pub use foundation::error::{ImporterError, ImporterResult};
pub use import::paths::{
    PIVOT_MAP_SUFFIX, SETTINGS_FILE_NAME, is_pivot_map, is_texture_path, normalize_rel_path,
    pivot_map_path, settings_path_for, texture_name_from_path,
};
pub use import::store::AssetStore;
pub use import::texture::{
    ImportOutcome, TextureImportSettings, import_texture, resolve_texture_settings,
    slices_texture,
};
pub use raster::bitmap::{Bitmap, PixelSource};
pub use raster::decode::{decode_bitmap, load_bitmap};
pub use settings::diff::SettingsDiff;
pub use settings::model::{
    FilterMode, ImportSettings, MAX_SIZES, Platform, PlatformOverride, SlicingSettings,
    SpriteMode, TextureFormat,
};
pub use settings::templates::TemplateStore;
pub use slicing::config::{PivotSettings, PixelVec, SliceConfig, SliceMode, SpriteAlignment};
pub use slicing::grid::{GridCell, GridPlan, plan_grid};
pub use slicing::pivot::{find_pivot, pivot_for_image, pivot_for_rect};
pub use slicing::slicer::{SpriteSlice, is_blank, slice_texture};
