//! JSON export.
//!
//! Full records under a small metadata header:
//!
//! ```json
//! {
//!   "metadata": { "export_timestamp": "...", "total_companies": 1, "fields": [...] },
//!   "companies": [ { "company_name": "...", "generated_domains": [...], ... } ]
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error_handling::ExportError;
use crate::models::EnrichedRecord;

#[derive(Serialize)]
struct Metadata<'a> {
    export_timestamp: &'a str,
    total_companies: usize,
    fields: Vec<String>,
}

#[derive(Serialize)]
struct JsonCompany<'a> {
    #[serde(flatten)]
    record: &'a EnrichedRecord,
    scrape_timestamp: &'a str,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    metadata: Metadata<'a>,
    companies: Vec<JsonCompany<'a>>,
}

/// Writes `records` to `path` as a pretty-printed JSON document.
///
/// `metadata.fields` lists the keys of the first company object and is
/// empty when there are no records.
///
/// # Returns
///
/// The number of companies written.
pub fn export_json(
    records: &[EnrichedRecord],
    path: &Path,
    timestamp: &str,
) -> Result<usize, ExportError> {
    let companies: Vec<JsonCompany<'_>> = records
        .iter()
        .map(|record| JsonCompany {
            record,
            scrape_timestamp: timestamp,
        })
        .collect();

    let fields = match companies.first() {
        Some(first) => match serde_json::to_value(first)? {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        },
        None => Vec::new(),
    };

    let document = JsonExport {
        metadata: Metadata {
            export_timestamp: timestamp,
            total_companies: companies.len(),
            fields,
        },
        companies,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;

    log::info!(
        "Exported {} companies to JSON: {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}
