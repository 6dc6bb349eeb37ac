//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::listing::compile_pattern;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let broken = Config { pattern: Some("[a-".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty pattern or one that does
    /// not compile.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref pattern) = config.pattern {
            Self::validate_pattern(pattern)?;
        }
        Ok(())
    }

    fn validate_pattern(pattern: &str) -> Result<()> {
        if pattern.is_empty() {
            return Err(Error::Validation {
                field: "pattern".into(),
                message: "pattern cannot be empty".into(),
            });
        }
        compile_pattern(pattern).map_err(|e| Error::Validation {
            field: "pattern".into(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
