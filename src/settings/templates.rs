use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{ImporterError, ImporterResult},
    import::paths::SETTINGS_FILE_NAME,
    settings::model::ImportSettings,
};

const TEMPLATE_EXTENSION: &str = "json";

/// Named, reusable [`ImportSettings`] stored as JSON files in one directory.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Template directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sorted template names. A missing directory has no templates.
    pub fn list(&self) -> ImporterResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("list templates in '{}'", self.dir.display()))
                    .into());
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("list templates in '{}'", self.dir.display()))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// `true` when a template called `name` exists.
    pub fn contains(&self, name: &str) -> ImporterResult<bool> {
        Ok(self.path_for(name)?.is_file())
    }

    /// Load the template called `name`.
    pub fn load(&self, name: &str) -> ImporterResult<ImportSettings> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(ImporterError::validation(format!(
                "template '{name}' does not exist"
            )));
        }
        ImportSettings::from_path(path)
    }

    /// Save `settings` as template `name`. An existing template is only replaced when
    /// `overwrite` is set.
    pub fn save(
        &self,
        name: &str,
        settings: &ImportSettings,
        overwrite: bool,
    ) -> ImporterResult<PathBuf> {
        let path = self.path_for(name)?;
        if path.exists() && !overwrite {
            return Err(ImporterError::validation(format!(
                "template '{name}' already exists"
            )));
        }
        settings.validate()?;
        settings.to_path(&path)?;
        tracing::debug!(template = name, path = %path.display(), "template saved");
        Ok(path)
    }

    /// Copy template `name` into `folder` as its import settings, replacing any existing
    /// settings there. Returns the written settings path.
    pub fn apply_to_folder(&self, name: &str, folder: impl AsRef<Path>) -> ImporterResult<PathBuf> {
        let settings = self.load(name)?;
        let dest = folder.as_ref().join(SETTINGS_FILE_NAME);
        settings.to_path(&dest)?;
        tracing::debug!(template = name, dest = %dest.display(), "template applied");
        Ok(dest)
    }

    /// Whether any of `changed` lies inside the template directory, meaning template listings
    /// must be refreshed.
    pub fn touches_templates<P: AsRef<Path>>(&self, changed: &[P]) -> bool {
        changed
            .iter()
            .any(|p| p.as_ref() != self.dir && p.as_ref().starts_with(&self.dir))
    }

    fn path_for(&self, name: &str) -> ImporterResult<PathBuf> {
        validate_template_name(name)?;
        Ok(self.dir.join(format!("{name}.{TEMPLATE_EXTENSION}")))
    }
}

fn validate_template_name(name: &str) -> ImporterResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ImporterError::validation("template name must be non-empty"));
    }
    if trimmed != name {
        return Err(ImporterError::validation(format!(
            "template name '{name}' has leading or trailing whitespace"
        )));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ImporterError::validation(format!(
            "template name '{name}' must not be a path"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/settings/templates.rs"]
mod tests;
