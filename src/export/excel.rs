//! Excel workbook export.
//!
//! Sheets:
//! - `Companies`: the flat export columns, one row per company
//! - `Statistics`: metric/value pairs over the generated domains
//! - `Domain_Details`: one row per domain candidate
//!
//! The last two are only added when there is something to put in them.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::config::OUTPUT_FIELDS;
use crate::domain::{domain_statistics, DomainStatistics};
use crate::error_handling::ExportError;
use crate::models::EnrichedRecord;

use super::row::ExportRow;

const COMPANIES_SHEET: &str = "Companies";
const STATISTICS_SHEET: &str = "Statistics";
const DOMAIN_DETAILS_SHEET: &str = "Domain_Details";

const STATISTICS_HEADER: &[&str] = &["Metric", "Value"];
const DOMAIN_DETAILS_HEADER: &[&str] = &["company_name", "domain", "variant", "tld", "status"];

/// Writes `records` to `path` as an `.xlsx` workbook.
///
/// # Returns
///
/// The number of company rows written.
pub fn export_excel(
    records: &[EnrichedRecord],
    path: &Path,
    scrape_timestamp: &str,
) -> Result<usize, ExportError> {
    if records.is_empty() {
        log::warn!("No data to export, writing header only to {}", path.display());
    }

    let header_format = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let mut companies = Worksheet::new();
    companies.set_name(COMPANIES_SHEET)?;
    write_header(&mut companies, OUTPUT_FIELDS, &header_format)?;
    for (index, record) in records.iter().enumerate() {
        let row = ExportRow::new(record, scrape_timestamp);
        write_text_row(&mut companies, row_number(index)?, &row.columns())?;
    }
    companies.autofit();
    workbook.push_worksheet(companies);

    if !records.is_empty() {
        let mut statistics = Worksheet::new();
        statistics.set_name(STATISTICS_SHEET)?;
        write_header(&mut statistics, STATISTICS_HEADER, &header_format)?;
        for (index, (metric, value)) in statistics_rows(&domain_statistics(records))
            .into_iter()
            .enumerate()
        {
            let row = row_number(index)?;
            statistics.write_string(row, 0, metric)?;
            statistics.write_number(row, 1, value)?;
        }
        statistics.autofit();
        workbook.push_worksheet(statistics);
    }

    if records.iter().any(|record| record.domain_count() > 0) {
        let mut details = Worksheet::new();
        details.set_name(DOMAIN_DETAILS_SHEET)?;
        write_header(&mut details, DOMAIN_DETAILS_HEADER, &header_format)?;
        let candidates = records.iter().flat_map(|record| {
            let company_name = record.company().company_name.as_str();
            record
                .domains()
                .iter()
                .map(move |candidate| (company_name, candidate))
        });
        for (index, (company_name, candidate)) in candidates.enumerate() {
            write_text_row(
                &mut details,
                row_number(index)?,
                &[
                    company_name,
                    candidate.domain.as_str(),
                    candidate.variant.as_str(),
                    candidate.tld.as_str(),
                    candidate.status.as_str(),
                ],
            )?;
        }
        details.autofit();
        workbook.push_worksheet(details);
    }

    workbook.save(path)?;

    log::info!(
        "Exported {} companies to Excel: {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

/// Metric/value pairs for the `Statistics` sheet.
///
/// Per-status counts follow the fixed status order, absent statuses omitted.
fn statistics_rows(stats: &DomainStatistics) -> Vec<(String, f64)> {
    let mut rows = vec![
        ("Total Companies".to_string(), stats.total_companies as f64),
        (
            "Companies with Domains".to_string(),
            stats.companies_with_domains as f64,
        ),
        (
            "Total Generated Domains".to_string(),
            stats.total_domains as f64,
        ),
        (
            "Average Domains per Company".to_string(),
            stats.avg_domains_per_company,
        ),
    ];
    rows.extend(stats.status_distribution.iter().map(|(status, count)| {
        (
            format!("Domains {}", capitalize(status.as_str())),
            *count as f64,
        )
    }));
    rows
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Worksheet row for the `index`-th data row, below the header.
fn row_number(index: usize) -> Result<u32, XlsxError> {
    u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_header(
    worksheet: &mut Worksheet,
    header: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (col, title) in (0u16..).zip(header) {
        worksheet.write_string_with_format(0, col, *title, format)?;
    }
    Ok(())
}

fn write_text_row(worksheet: &mut Worksheet, row: u32, values: &[&str]) -> Result<(), XlsxError> {
    for (col, value) in (0u16..).zip(values) {
        if !value.is_empty() {
            worksheet.write_string(row, col, *value)?;
        }
    }
    Ok(())
}
