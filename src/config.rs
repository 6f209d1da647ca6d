use crate::builder::MAX_RECORDS;
use crate::error::{GeneratorError, Result, ResultExt as _};
use crate::summary::DEFAULT_PREVIEW_ROWS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "dataset_generator";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Root of the bundled datasets; catalog paths are resolved against it.
    pub data_dir: PathBuf,
    /// Dataset the automatic generator samples from, relative to `data_dir`.
    pub source_file: PathBuf,
    /// Rows shown in head and tail previews.
    pub preview_rows: usize,
    /// Fixed seed for reproducible sampling; `None` draws from OS entropy.
    pub sample_seed: Option<u64>,
    /// Record limit for custom datasets (1..=500). Set to 50 to match the
    /// reduced form.
    pub builder_max_rows: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            source_file: PathBuf::from("data.csv"),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sample_seed: None,
            builder_max_rows: MAX_RECORDS,
        }
    }
}

impl GeneratorSettings {
    pub fn source_path(&self) -> PathBuf {
        self.data_dir.join(&self.source_file)
    }

    /// # Errors
    ///
    /// `Config` when `preview_rows` is zero or `builder_max_rows` is outside 1..=500.
    pub fn validate(&self) -> Result<()> {
        if self.preview_rows == 0 {
            return Err(GeneratorError::Config(
                "preview_rows must be at least 1".to_owned(),
            ));
        }
        if !(1..=MAX_RECORDS).contains(&self.builder_max_rows) {
            return Err(GeneratorError::Config(format!(
                "builder_max_rows must be between 1 and {MAX_RECORDS}, got {}",
                self.builder_max_rows
            )));
        }
        Ok(())
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Read settings from a JSON file. Missing keys take their defaults.
///
/// # Errors
///
/// I/O failure, malformed JSON, or values rejected by [`GeneratorSettings::validate`].
pub fn load_settings(path: &Path) -> Result<GeneratorSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings: GeneratorSettings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Settings from the per-user config directory, or defaults when the file is
/// absent or unusable.
pub fn load_app_settings() -> GeneratorSettings {
    let Some(path) = get_settings_path() else {
        return GeneratorSettings::default();
    };
    if !path.exists() {
        return GeneratorSettings::default();
    }

    match load_settings(&path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Ignoring unusable settings file");
            GeneratorSettings::default()
        }
    }
}

/// # Errors
///
/// I/O or serialization failure.
pub fn save_settings(path: &Path, settings: &GeneratorSettings) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content).context("Failed to write settings file")
}
