//! On-disk locations and the small settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::theme::LIGHT_THEME;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".car-info-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "car_info.db";
const SETTINGS_FILE_NAME: &str = "settings.toml";
const LOG_FILE_NAME: &str = "car-info-manager.log";

/// Logo shown in the header, relative to the working directory.
pub const DEFAULT_LOGO_PATH: &str = "logo_converted.png";
/// File name prefilled in the export prompt.
pub const DEFAULT_EXPORT_FILE: &str = "cars.xlsx";

/// Files the application reads and writes, all under one data directory.
#[derive(Debug, Clone)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the data directory inside the user's home.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn default_database(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Create the data directory if it is missing.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context("failed to create data directory")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the active theme. Rewritten after every toggle.
    pub theme: String,
    /// Overrides the database location when set.
    pub database_path: Option<PathBuf>,
    pub export_file_name: String,
    pub logo_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: LIGHT_THEME.to_string(),
            database_path: None,
            export_file_name: DEFAULT_EXPORT_FILE.to_string(),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("failed to parse settings at {}: {}", path.display(), err);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    /// Write settings to `path`, replacing the previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("failed to create settings directory")?;
        }
        let contents = toml::to_string_pretty(self).context("failed to serialize settings")?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, contents).context("failed to write settings")?;
        fs::rename(&tmp, path).context("failed to replace settings file")?;
        Ok(())
    }

    /// Database file to open: the override if present, otherwise the default
    /// location inside the data directory.
    pub fn database_path(&self, paths: &AppPaths) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| paths.default_database())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::in_dir(dir.path().join("data"));
        assert!(!paths.data_dir().exists());

        paths.ensure_data_dir().unwrap();
        assert!(paths.data_dir().is_dir());
        for file in [paths.default_database(), paths.settings_file(), paths.log_file()] {
            assert_eq!(file.parent(), Some(paths.data_dir()));
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"darkly\"\n").unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.theme, "darkly");
        assert_eq!(settings.export_file_name, DEFAULT_EXPORT_FILE);
        assert!(settings.database_path.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            theme: "darkly".into(),
            database_path: Some(dir.path().join("other.db")),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn database_override_wins() {
        let paths = AppPaths::in_dir("/tmp/cars");
        let mut settings = Settings::default();
        assert_eq!(settings.database_path(&paths), PathBuf::from("/tmp/cars/car_info.db"));

        settings.database_path = Some(PathBuf::from("/srv/cars.db"));
        assert_eq!(settings.database_path(&paths), PathBuf::from("/srv/cars.db"));
    }
}
