//! Output formatter implementations.

use serde::Serialize;

use crate::path::Path;
use crate::{Error, Result};

use super::{OutputFormatter, PathInfo};

const MISSING: &str = "-";

/// One path per line; `stat` records as aligned columns.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_paths(&self, paths: &[Path]) -> Result<String> {
        Ok(paths
            .iter()
            .map(Path::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_records(&self, records: &[PathInfo]) -> Result<String> {
        let lines: Vec<String> = records
            .iter()
            .map(|info| {
                format!(
                    "{:<7} {:>6} {:<10} {:<10} {:>10} {:<25} {}",
                    info.kind.as_str(),
                    info.mode.as_deref().unwrap_or(MISSING),
                    info.user.as_deref().unwrap_or(MISSING),
                    info.group.as_deref().unwrap_or(MISSING),
                    info.size,
                    info.modified.as_deref().unwrap_or(MISSING),
                    info.path,
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// A pretty-printed JSON array.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_paths(&self, paths: &[Path]) -> Result<String> {
        Self::render(paths)
    }

    fn format_records(&self, records: &[PathInfo]) -> Result<String> {
        Self::render(records)
    }
}

/// CSV with a header row.
pub struct CsvFormatter;

impl CsvFormatter {
    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer.into_inner().map_err(|e| csv_error(&e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| csv_error(&e.to_string()))?;
        Ok(text.trim_end().to_string())
    }
}

fn csv_error(message: &str) -> Error {
    Error::Validation {
        field: "csv_output".to_string(),
        message: format!("failed to write CSV: {message}"),
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_paths(&self, paths: &[Path]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["path"])
            .map_err(|e| csv_error(&e.to_string()))?;
        for path in paths {
            writer
                .write_record([path.as_str()])
                .map_err(|e| csv_error(&e.to_string()))?;
        }
        Self::finish(writer)
    }

    fn format_records(&self, records: &[PathInfo]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| csv_error(&e.to_string()))?;
        }
        Self::finish(writer)
    }
}
