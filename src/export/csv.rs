//! CSV export.
//!
//! Flattened view for spreadsheets: a header from `OUTPUT_FIELDS` and one row
//! per company.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;

use crate::config::OUTPUT_FIELDS;
use crate::error_handling::ExportError;
use crate::models::EnrichedRecord;

use super::row::ExportRow;

/// Writes `records` to `path` as CSV.
///
/// The header is always written, so an empty input yields a header-only file
/// (and a warning in the log).
///
/// # Returns
///
/// The number of rows written.
pub fn export_csv(
    records: &[EnrichedRecord],
    path: &Path,
    scrape_timestamp: &str,
) -> Result<usize, ExportError> {
    if records.is_empty() {
        log::warn!("No data to export, writing header only to {}", path.display());
    }

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(OUTPUT_FIELDS)?;
    for record in records {
        writer.serialize(ExportRow::new(record, scrape_timestamp))?;
    }
    writer.flush()?;

    log::info!(
        "Exported {} companies to CSV: {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}
