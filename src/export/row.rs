//! Flattened export row.
//!
//! One row per company, columns in `OUTPUT_FIELDS` order. Domain candidates
//! and their status counts are folded into single string columns.

use serde::Serialize;

use crate::models::EnrichedRecord;

/// A company record reduced to the flat export columns.
///
/// Field order must match `OUTPUT_FIELDS`; the CSV header is written from
/// that constant and rows are serialized positionally.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub company_name: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub original_website: Option<&'a str>,
    pub generated_domains: String,
    pub domain_status: String,
    pub source_url: Option<&'a str>,
    pub scrape_timestamp: &'a str,
}

impl<'a> ExportRow<'a> {
    pub fn new(record: &'a EnrichedRecord, scrape_timestamp: &'a str) -> Self {
        let company = record.company();
        Self {
            company_name: &company.company_name,
            address: company.address.as_deref(),
            city: company.city.as_deref(),
            country: company.country.as_deref(),
            postal_code: company.postal_code.as_deref(),
            phone: company.phone.as_deref(),
            email: company.email.as_deref(),
            original_website: company.website.as_deref(),
            generated_domains: record.domains_summary(),
            domain_status: record.status_summary(),
            source_url: company.source_url.as_deref(),
            scrape_timestamp,
        }
    }

    /// Cell values in `OUTPUT_FIELDS` order, missing fields as empty strings.
    pub fn columns(&self) -> Vec<&str> {
        vec![
            self.company_name,
            self.address.unwrap_or_default(),
            self.city.unwrap_or_default(),
            self.country.unwrap_or_default(),
            self.postal_code.unwrap_or_default(),
            self.phone.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.original_website.unwrap_or_default(),
            &self.generated_domains,
            &self.domain_status,
            self.source_url.unwrap_or_default(),
            self.scrape_timestamp,
        ]
    }
}
