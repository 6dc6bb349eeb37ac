//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::listing::{ListOptions, SortOrder, MATCH_ALL};
use crate::output::OutputFormat;
use crate::walk::WalkOptions;

/// Settings shared by the listing and walking commands.
///
/// Every field is optional so that layers can be merged; the accessors
/// supply the defaults.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, SortKey};
///
/// let config: Config = serde_yaml::from_str("pattern: '*.rs'\nsort: lexical\n").unwrap();
/// assert_eq!(config.pattern(), "*.rs");
/// assert_eq!(config.sort, Some(SortKey::Lexical));
/// assert!(!config.recursive());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob applied to base names.
    pub pattern: Option<String>,

    /// Ordering of listed entries.
    pub sort: Option<SortKey>,

    /// Output format for listings and `stat`.
    pub format: Option<OutputFormat>,

    /// Whether `walk` descends into subdirectories.
    pub recursive: Option<bool>,
}

/// Named orderings that can be written in a config file.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Directories first, then by path text.
    #[default]
    DirsFirst,
    /// By path text only.
    Lexical,
}

impl SortKey {
    /// The ordering this name stands for.
    #[must_use]
    pub fn order(self) -> SortOrder {
        match self {
            Self::DirsFirst => SortOrder::DirsFirst,
            Self::Lexical => SortOrder::Lexical,
        }
    }

    /// Parse `dirs-first` or `lexical`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] for any other name.
    pub fn parse(name: &str) -> crate::Result<Self> {
        match SortOrder::parse(name)? {
            SortOrder::Lexical => Ok(Self::Lexical),
            _ => Ok(Self::DirsFirst),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirsFirst => write!(f, "dirs-first"),
            Self::Lexical => write!(f, "lexical"),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = crate::Error;

    /// Parse YAML text.
    fn from_str(text: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

impl Config {
    /// Glob applied to base names, `*` if unset.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(MATCH_ALL)
    }

    /// Ordering, directories first if unset.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort.unwrap_or_default()
    }

    /// Output format, plain if unset.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether walks recurse, `false` if unset.
    #[must_use]
    pub fn recursive(&self) -> bool {
        self.recursive.unwrap_or(false)
    }

    /// Listing options for these settings.
    #[must_use]
    pub fn list_options(&self) -> ListOptions {
        ListOptions::new()
            .with_pattern(self.pattern())
            .with_sort(self.sort_key().order())
    }

    /// Walk options for these settings.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::new()
            .with_pattern(self.pattern())
            .with_sort(self.sort_key().order())
            .recursive(self.recursive())
    }
}
