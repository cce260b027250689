use crate::foundation::error::{ImporterError, ImporterResult};

/// File name of the per-folder import settings.
pub const SETTINGS_FILE_NAME: &str = "sprite_import_settings.json";

/// Token inserted before the extension to name a texture's pivot map.
pub const PIVOT_MAP_SUFFIX: &str = "_pivotmap";

/// Normalize a relative asset path: `/` separators, no `.` segments, no `..`, no leading `/`.
pub fn normalize_rel_path(source: &str) -> ImporterResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ImporterError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(ImporterError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ImporterError::validation(
                "asset paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ImporterError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

fn split_dir(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, path),
    }
}

/// File name without its final extension: `"art/hero.run.png"` -> `"hero.run"`.
pub fn texture_name_from_path(path: &str) -> &str {
    let (_, file) = split_dir(path);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Sibling pivot-map path: `"art/hero.png"` -> `"art/hero_pivotmap.png"`.
pub fn pivot_map_path(path: &str) -> String {
    let (dir, file) = split_dir(path);
    let file = match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}{PIVOT_MAP_SUFFIX}.{ext}"),
        _ => format!("{file}{PIVOT_MAP_SUFFIX}"),
    };
    match dir {
        Some(dir) => format!("{dir}/{file}"),
        None => file,
    }
}

/// `true` for pivot-map images, which configure other textures and are never sliced.
///
/// Only the file name is inspected: textures inside a folder whose name contains
/// `_pivotmap` are still ordinary textures.
pub fn is_pivot_map(path: &str) -> bool {
    split_dir(path).1.contains(PIVOT_MAP_SUFFIX)
}

/// `true` when the extension names an image format the decoder understands.
pub fn is_texture_path(path: &str) -> bool {
    image::ImageFormat::from_path(split_dir(path).1).is_ok()
}

/// Settings file governing the asset at `path` (its folder's settings).
pub fn settings_path_for(path: &str) -> String {
    match split_dir(path).0 {
        Some(dir) => format!("{dir}/{SETTINGS_FILE_NAME}"),
        None => SETTINGS_FILE_NAME.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/import/paths.rs"]
mod tests;
