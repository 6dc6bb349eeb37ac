//! Layered configuration merging.

use crate::config::schema::Config;

/// Merges configuration layers; later layers win field by field.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigMerger};
///
/// let low = Config { pattern: Some("*.rs".into()), recursive: Some(true), ..Default::default() };
/// let high = Config { pattern: Some("*.md".into()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.pattern(), "*.md");
/// assert!(result.recursive());
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge<I>(layers: I) -> Config
    where
        I: IntoIterator<Item = Config>,
    {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, &layer);
        }
        result
    }

    /// Overwrite `target` with every field `source` sets.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.pattern.is_some() {
            target.pattern.clone_from(&source.pattern);
        }
        if source.sort.is_some() {
            target.sort = source.sort;
        }
        if source.format.is_some() {
            target.format = source.format;
        }
        if source.recursive.is_some() {
            target.recursive = source.recursive;
        }
    }
}
