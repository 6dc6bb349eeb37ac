//! Rendering of listings and `stat` records.
//!
//! Three formats are supported: plain text for terminals, JSON and CSV for
//! scripts.

mod formatters;
mod record;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::Path;

pub use formatters::{CsvFormatter, JsonFormatter, PlainFormatter};
pub use record::{EntryKind, PathInfo};

/// Renders paths and path records as text.
pub trait OutputFormatter {
    /// Format a list of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_paths(&self, paths: &[Path]) -> Result<String>;

    /// Format a list of `stat` records.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_records(&self, records: &[PathInfo]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use fspath::OutputFormat;
///
/// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::default().to_string(), "plain");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Plain,
    /// A JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl OutputFormat {
    /// Parse `plain`, `json` or `csv`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::Validation {
                field: "format".to_string(),
                message: format!("unknown output format '{name}' (expected plain, json or csv)"),
            }),
        }
    }

    /// Create a formatter for this format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}
