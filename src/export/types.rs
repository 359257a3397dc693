//! Export types and options.

use std::path::PathBuf;

use crate::config::{Config, ExportFormat};

/// Options for writing an export file.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Export format
    pub format: ExportFormat,
    /// Directory the file is written to (created when missing)
    pub output_dir: PathBuf,
    /// Custom filename stem, sanitized before use
    pub output_file: Option<String>,
    /// Append a `_YYYYmmdd_HHMMSS` timestamp to the stem
    pub include_timestamp: bool,
}

impl From<&Config> for ExportOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.output_format,
            output_dir: config.output_dir.clone(),
            output_file: config.output_file.clone(),
            include_timestamp: config.include_timestamp,
        }
    }
}
