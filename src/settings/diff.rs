use crate::settings::model::{ImportSettings, Platform};

/// Which parts of a settings snapshot changed between two versions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDiff {
    /// The master switch flipped.
    pub enabled: bool,
    /// Texture-level fields (mode, ppu, filter, size, format, quality, tag, mipmaps).
    pub texture: bool,
    /// Default pivot or pivot-map fields.
    pub pivot: bool,
    /// Grid slicing fields, including the sprite-editor override flag.
    pub slicing: bool,
    /// Platforms whose override was added, removed or edited, in declared order.
    pub platforms: Vec<Platform>,
}

impl SettingsDiff {
    /// Compare two snapshots.
    pub fn between(old: &ImportSettings, new: &ImportSettings) -> Self {
        let texture = old.packing_tag != new.packing_tag
            || old.pixels_per_unit != new.pixels_per_unit
            || old.generate_mipmaps != new.generate_mipmaps
            || old.sprite_mode != new.sprite_mode
            || old.filter_mode != new.filter_mode
            || old.max_size != new.max_size
            || old.format != new.format
            || old.compression_quality != new.compression_quality;
        let pivot = old.alignment != new.alignment
            || old.pivot != new.pivot
            || old.pivot_map_enabled != new.pivot_map_enabled
            || old.pivot_map_color != new.pivot_map_color;
        let slicing = old.slicing != new.slicing
            || old.override_sprite_editor_settings != new.override_sprite_editor_settings;
        let platforms = Platform::ALL
            .into_iter()
            .filter(|p| old.platform_overrides.get(p) != new.platform_overrides.get(p))
            .collect();

        Self {
            enabled: old.enabled != new.enabled,
            texture,
            pivot,
            slicing,
            platforms,
        }
    }

    /// `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        !self.enabled && !self.texture && !self.pivot && !self.slicing && self.platforms.is_empty()
    }

    /// Whether textures in the folder must be imported again to reflect `new`.
    ///
    /// Edits to settings that stay disabled on both sides have no visible effect.
    pub fn requires_reimport(&self, new: &ImportSettings) -> bool {
        if self.is_empty() {
            return false;
        }
        self.enabled || new.enabled
    }
}

impl ImportSettings {
    /// Compare `self` (the previous snapshot) against `new`.
    pub fn diff(&self, new: &ImportSettings) -> SettingsDiff {
        SettingsDiff::between(self, new)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/diff.rs"]
mod tests;
