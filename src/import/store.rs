use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{ImporterError, ImporterResult},
    import::paths::{
        SETTINGS_FILE_NAME, is_pivot_map, is_texture_path, normalize_rel_path, pivot_map_path,
        settings_path_for,
    },
    import::texture::{ImportOutcome, import_texture},
    raster::bitmap::Bitmap,
    raster::decode::load_bitmap,
    settings::model::ImportSettings,
};

/// Filesystem-backed asset tree: textures, their pivot maps and per-folder settings.
///
/// All paths passed in are relative to the store root and are normalized first.
#[derive(Clone, Debug)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a relative asset path.
    pub fn resolve(&self, rel: &str) -> ImporterResult<PathBuf> {
        Ok(self.root.join(normalize_rel_path(rel)?))
    }

    /// Settings governing the asset at `rel`, or `None` when its folder has none.
    pub fn load_settings_for(&self, rel: &str) -> ImporterResult<Option<ImportSettings>> {
        let path = self.root.join(settings_path_for(&normalize_rel_path(rel)?));
        if !path.is_file() {
            return Ok(None);
        }
        ImportSettings::from_path(path).map(Some)
    }

    /// Decode the texture at `rel`.
    pub fn load_texture(&self, rel: &str) -> ImporterResult<Bitmap> {
        load_bitmap(self.resolve(rel)?)
    }

    /// Decode the pivot map beside `rel`; a missing file is `None`.
    pub fn load_pivot_map_for(&self, rel: &str) -> ImporterResult<Option<Bitmap>> {
        let path = self.root.join(pivot_map_path(&normalize_rel_path(rel)?));
        if !path.is_file() {
            return Ok(None);
        }
        load_bitmap(path).map(Some)
    }

    /// Import the texture at `rel` with its folder's settings.
    ///
    /// Returns `None` when the folder has no settings or they are disabled.
    #[tracing::instrument(skip(self))]
    pub fn import(&self, rel: &str) -> ImporterResult<Option<ImportOutcome>> {
        let rel = normalize_rel_path(rel)?;
        let Some(settings) = self.load_settings_for(&rel)? else {
            tracing::debug!("no import settings for folder");
            return Ok(None);
        };
        if !settings.enabled {
            return Ok(None);
        }

        let image = self.load_texture(&rel)?;
        let pivot_map = if settings.pivot_map_enabled && !is_pivot_map(&rel) {
            let map = self.load_pivot_map_for(&rel)?;
            if map.is_none() {
                tracing::debug!("pivot map enabled but not present, using configured pivot");
            }
            map
        } else {
            None
        };

        import_texture(&rel, &image, pivot_map.as_ref(), &settings)
    }

    /// Re-import assets that were moved into place.
    ///
    /// Only the destination folder of the first moved path is consulted; when it has enabled
    /// settings every moved texture is imported again. Paths without an image extension, such
    /// as the settings file travelling with its folder, are skipped. Moves into unmanaged
    /// folders yield nothing.
    pub fn reimport_moved<S: AsRef<str>>(&self, moved: &[S]) -> ImporterResult<Vec<ImportOutcome>> {
        let Some(first) = moved.first() else {
            return Ok(Vec::new());
        };
        let managed = self
            .load_settings_for(first.as_ref())?
            .is_some_and(|s| s.enabled);
        if !managed {
            return Ok(Vec::new());
        }

        let mut out = Vec::with_capacity(moved.len());
        for path in moved {
            let path = path.as_ref();
            if !is_texture_path(path) {
                tracing::debug!(path, "moved asset is not a texture, skipped");
                continue;
            }
            if let Some(outcome) = self.import(path)? {
                out.push(outcome);
            }
        }
        Ok(out)
    }

    /// Write default settings into `folder`. Existing settings are kept unless `overwrite`.
    pub fn init_settings(&self, folder: &str, overwrite: bool) -> ImporterResult<PathBuf> {
        let dir = if folder.trim().is_empty() || folder == "." {
            self.root.clone()
        } else {
            self.resolve(folder)?
        };
        let path = dir.join(SETTINGS_FILE_NAME);
        if path.exists() && !overwrite {
            return Err(ImporterError::validation(format!(
                "import settings '{}' already exist",
                path.display()
            )));
        }
        ImportSettings::default().to_path(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/import/store.rs"]
mod tests;
