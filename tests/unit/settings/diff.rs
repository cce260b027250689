use super::*;
use crate::foundation::core::Color;
use crate::settings::model::{PlatformOverride, SpriteMode};

#[test]
fn identical_snapshots_have_empty_diff() {
    let a = ImportSettings::default();
    let d = a.diff(&a.clone());
    assert!(d.is_empty());
    assert!(!d.requires_reimport(&a));
}

#[test]
fn groups_are_reported_independently() {
    let old = ImportSettings::default();

    let mut new = old.clone();
    new.sprite_mode = SpriteMode::Multiple;
    let d = old.diff(&new);
    assert!(d.texture && !d.pivot && !d.slicing && !d.enabled);

    let mut new = old.clone();
    new.pivot_map_color = Color::WHITE;
    assert!(old.diff(&new).pivot);

    let mut new = old.clone();
    new.slicing.cols = 3;
    assert!(old.diff(&new).slicing);

    let mut new = old.clone();
    new.override_sprite_editor_settings = true;
    assert!(old.diff(&new).slicing);
}

#[test]
fn platform_changes_listed_in_declared_order() {
    let mut old = ImportSettings::default();
    old.platform_overrides
        .insert(Platform::Tizen, PlatformOverride::default());

    let mut new = ImportSettings::default();
    new.platform_overrides
        .insert(Platform::Web, PlatformOverride::default());
    new.platform_overrides.insert(
        Platform::Android,
        PlatformOverride {
            max_size: 512,
            ..PlatformOverride::default()
        },
    );

    let d = old.diff(&new);
    assert_eq!(
        d.platforms,
        vec![Platform::Web, Platform::Android, Platform::Tizen]
    );
}

#[test]
fn reimport_needed_only_when_enabled_on_either_side() {
    let mut off = ImportSettings::default();
    off.enabled = false;
    let mut off_edited = off.clone();
    off_edited.pixels_per_unit = 32.0;
    assert!(!off.diff(&off_edited).requires_reimport(&off_edited));

    let mut on = off.clone();
    on.enabled = true;
    let d = off.diff(&on);
    assert!(d.enabled);
    assert!(d.requires_reimport(&on));

    // Turning the importer off also reimports, restoring host defaults.
    let d = on.diff(&off);
    assert!(d.requires_reimport(&off));
}
