//! Export of enriched company records.
//!
//! This module writes the results of a run to a single file:
//! - CSV: flattened view (one row per company, `OUTPUT_FIELDS` columns)
//! - JSON: full records with nested domain candidates and a metadata header
//! - Excel: workbook with company rows, run statistics and per-candidate rows
//!
//! Filenames are `<stem>[_YYYYmmdd_HHMMSS].<ext>` inside the output directory.

mod csv;
mod excel;
mod json;
mod row;
mod types;

use std::path::PathBuf;

use chrono::{DateTime, Local, SecondsFormat};

use crate::config::{ExportFormat, DEFAULT_FILENAME_PREFIX};
use crate::error_handling::ExportError;
use crate::models::EnrichedRecord;
use crate::utils::sanitize_filename;

pub use self::csv::export_csv;
pub use excel::export_excel;
pub use json::export_json;
pub use row::ExportRow;
pub use types::ExportOptions;

/// Builds the export filename.
///
/// A custom name is sanitized; when it is absent or sanitizes to nothing the
/// default prefix is used instead.
pub fn generate_filename(
    format: ExportFormat,
    custom_name: Option<&str>,
    timestamp: Option<&DateTime<Local>>,
) -> String {
    let mut stem = custom_name
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME_PREFIX.to_string());

    if let Some(timestamp) = timestamp {
        stem = format!("{stem}_{}", timestamp.format("%Y%m%d_%H%M%S"));
    }

    format!("{stem}{}", format.extension())
}

/// Writes `records` according to `options` and returns the file path.
///
/// The output directory is created when missing.
///
/// # Errors
///
/// Returns `ExportError` if the directory or file cannot be created or a
/// record cannot be serialized.
pub fn export_records(
    records: &[EnrichedRecord],
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let now = Local::now();
    std::fs::create_dir_all(&options.output_dir)?;

    let filename = generate_filename(
        options.format,
        options.output_file.as_deref(),
        options.include_timestamp.then_some(&now),
    );
    let path = options.output_dir.join(filename);
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, false);

    match options.format {
        ExportFormat::Csv => export_csv(records, &path, &timestamp)?,
        ExportFormat::Json => export_json(records, &path, &timestamp)?,
        ExportFormat::Excel => export_excel(records, &path, &timestamp)?,
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::CompanyRecord;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_generate_filename_default_prefix() {
        assert_eq!(
            generate_filename(ExportFormat::Csv, None, None),
            format!("{DEFAULT_FILENAME_PREFIX}.csv")
        );
    }

    #[test]
    fn test_generate_filename_with_timestamp() {
        assert_eq!(
            generate_filename(ExportFormat::Json, Some("demo_data"), Some(&fixed_time())),
            "demo_data_20250309_140507.json"
        );
    }

    #[test]
    fn test_generate_filename_sanitizes_custom_name() {
        assert_eq!(
            generate_filename(ExportFormat::Csv, Some("a<b>:c"), None),
            "a_b_c.csv"
        );
        assert_eq!(
            generate_filename(ExportFormat::Csv, Some("???"), None),
            format!("{DEFAULT_FILENAME_PREFIX}.csv")
        );
    }

    #[test]
    fn test_export_records_creates_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = ExportOptions {
            format: ExportFormat::Json,
            output_dir: dir.path().join("nested").join("output"),
            output_file: Some("run".to_string()),
            include_timestamp: false,
        };
        let records = vec![EnrichedRecord::new(
            CompanyRecord::named("Acme GmbH"),
            Vec::new(),
        )];

        let path = export_records(&records, &options).expect("export");
        assert_eq!(path, options.output_dir.join("run.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_export_records_excel() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = ExportOptions {
            format: ExportFormat::Excel,
            output_dir: dir.path().to_path_buf(),
            output_file: Some("run".to_string()),
            include_timestamp: false,
        };
        let records = vec![EnrichedRecord::new(
            CompanyRecord::named("Acme GmbH"),
            Vec::new(),
        )];

        let path = export_records(&records, &options).expect("export");
        assert_eq!(path, dir.path().join("run.xlsx"));
        assert!(path.exists());
    }

    #[test]
    fn test_export_records_timestamped_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = ExportOptions {
            format: ExportFormat::Csv,
            output_dir: dir.path().to_path_buf(),
            output_file: None,
            include_timestamp: true,
        };

        let path = export_records(&[], &options).expect("export");
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name");
        // prefix + "_" + 8 digits + "_" + 6 digits + ".csv"
        assert!(name.starts_with(DEFAULT_FILENAME_PREFIX));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), DEFAULT_FILENAME_PREFIX.len() + 1 + 8 + 1 + 6 + 4);
    }
}
