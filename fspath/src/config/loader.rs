//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".fspath";

/// File name of the user config.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config().unwrap() {
///     println!("pattern: {}", config.pattern());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `~/.fspath/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        let path = Self::user_config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Validation`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        contents.parse::<Config>().map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Location of the user config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the home directory cannot be
    /// determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })?;
        Ok(home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}
