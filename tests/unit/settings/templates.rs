use super::*;
use crate::settings::model::SpriteMode;

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_templates").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn missing_directory_lists_nothing() {
    let store = TemplateStore::new(fresh_dir("missing"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn save_list_and_load() {
    let store = TemplateStore::new(fresh_dir("save_list_load"));
    let mut sheet = ImportSettings::default();
    sheet.sprite_mode = SpriteMode::Multiple;

    store.save("sheet", &sheet, false).unwrap();
    store.save("icons", &ImportSettings::default(), false).unwrap();
    std::fs::write(store.dir().join("notes.txt"), "ignored").unwrap();

    assert_eq!(store.list().unwrap(), vec!["icons", "sheet"]);
    assert!(store.contains("sheet").unwrap());
    assert_eq!(store.load("sheet").unwrap(), sheet);
}

#[test]
fn save_refuses_to_overwrite_unless_asked() {
    let store = TemplateStore::new(fresh_dir("overwrite"));
    store.save("a", &ImportSettings::default(), false).unwrap();

    let mut changed = ImportSettings::default();
    changed.pixels_per_unit = 16.0;
    assert!(store.save("a", &changed, false).is_err());
    store.save("a", &changed, true).unwrap();
    assert_eq!(store.load("a").unwrap().pixels_per_unit, 16.0);
}

#[test]
fn bad_names_are_rejected() {
    let store = TemplateStore::new(fresh_dir("bad_names"));
    for name in ["", "  ", " pad", "..", "a/b", "a\\b"] {
        assert!(
            matches!(
                store.save(name, &ImportSettings::default(), true),
                Err(ImporterError::Validation(_))
            ),
            "{name:?}"
        );
    }
    assert!(store.load("nope").is_err());
}

#[test]
fn apply_copies_template_into_folder() {
    let root = fresh_dir("apply");
    let store = TemplateStore::new(root.join("templates"));
    let mut t = ImportSettings::default();
    t.packing_tag = "enemies".to_string();
    store.save("enemy", &t, false).unwrap();

    let folder = root.join("art").join("enemies");
    let dest = store.apply_to_folder("enemy", &folder).unwrap();
    assert_eq!(dest, folder.join(SETTINGS_FILE_NAME));
    assert_eq!(ImportSettings::from_path(&dest).unwrap(), t);
}

#[test]
fn touches_templates_checks_containment() {
    let store = TemplateStore::new("assets/templates");
    assert!(store.touches_templates(&["assets/templates/a.json"]));
    assert!(store.touches_templates(&["x.png", "assets/templates/sub/b.json"]));
    assert!(!store.touches_templates(&["assets/templates"]));
    assert!(!store.touches_templates(&["assets/templates_old/a.json"]));
    assert!(!store.touches_templates::<&str>(&[]));
}
