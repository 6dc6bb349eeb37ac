//! Environment variable handling for configuration overrides.

use std::env;

use crate::config::schema::{Config, SortKey};
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Glob override.
pub const PATTERN_ENV: &str = "FSPATH_PATTERN";
/// Sort order override.
pub const SORT_ENV: &str = "FSPATH_SORT";
/// Output format override.
pub const FORMAT_ENV: &str = "FSPATH_FORMAT";
/// Recursion override.
pub const RECURSIVE_ENV: &str = "FSPATH_RECURSIVE";

/// Applies `FSPATH_*` environment variables on top of file configuration.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value is not
    /// understood.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(pattern) = env::var(PATTERN_ENV) {
            config.pattern = Some(pattern);
        }

        if let Ok(sort) = env::var(SORT_ENV) {
            config.sort = Some(SortKey::parse(&sort).map_err(|_| Error::Validation {
                field: SORT_ENV.into(),
                message: format!("unknown sort order '{sort}'"),
            })?);
        }

        if let Ok(format) = env::var(FORMAT_ENV) {
            config.format = Some(OutputFormat::parse(&format).map_err(|_| Error::Validation {
                field: FORMAT_ENV.into(),
                message: format!("unknown output format '{format}'"),
            })?);
        }

        if let Ok(val) = env::var(RECURSIVE_ENV) {
            config.recursive = Some(Self::parse_bool(RECURSIVE_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean environment value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, in any
    /// case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for anything else.
    pub fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: var_name.into(),
                message: format!("invalid boolean value '{value}'"),
            }),
        }
    }
}
