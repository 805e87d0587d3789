//! On-disk `config.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory for this platform")]
    NoConfigDir,
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode default config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Reads the config file, seeding it with defaults on first run.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Opens the store in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when the platform has no home directory.
    pub fn open() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::at)
            .ok_or(ConfigError::NoConfigDir)
    }

    #[must_use]
    pub const fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn default_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Loads `path`, or the default file when `path` is `None`.
    ///
    /// A missing file is written out with defaults. A file that fails to
    /// parse is kept untouched and defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or the defaults
    /// cannot be written.
    pub fn load(&self, path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path.map_or_else(|| self.default_file(), Path::to_path_buf);

        if !path.exists() {
            info!(path = %path.display(), "Writing default config");
            let config = AppConfig::default();
            write_atomically(&path, &toml::to_string_pretty(&config)?)?;
            return Ok(config);
        }

        let raw = fs::read_to_string(&path)?;
        match toml::from_str::<AppConfig>(&raw) {
            Ok(config) => {
                debug!(path = %path.display(), "Config loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring malformed config");
                Ok(AppConfig::default())
            }
        }
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
