//! Records produced by the pipeline.
//!
//! - `CompanyRecord`: one exhibitor entry as extracted from a listing
//! - `DomainCandidate`: one generated domain name and its probe status
//! - `EnrichedRecord`: a company plus its candidates and summary counts

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One exhibitor entry.
///
/// `company_name` is always non-empty. Optional fields are either absent or
/// trimmed, non-empty strings; `email` and `website` have passed syntax
/// validation and `phone` is in `+<country><digits>` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub booth_number: Option<String>,
    pub contact_person: Option<String>,
    pub source_url: Option<String>,
}

impl CompanyRecord {
    /// Creates a record with only a name set.
    pub fn named(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

/// Registration status of a generated domain.
///
/// Variant order is the order used in status summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// No probe was run
    Unknown,
    /// DNS reported no such name
    Available,
    /// The name resolves
    Taken,
    /// The probe failed or timed out
    Error,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Unknown => "unknown",
            DomainStatus::Available => "available",
            DomainStatus::Taken => "taken",
            DomainStatus::Error => "error",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated domain name.
///
/// `domain` is always `variant + tld` and passes domain syntax validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCandidate {
    pub domain: String,
    pub variant: String,
    pub tld: String,
    pub status: DomainStatus,
}

/// A company record together with its generated domain candidates.
///
/// The wrapped record is never modified; the counts are derived once from the
/// candidate list at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    company: CompanyRecord,
    generated_domains: Vec<DomainCandidate>,
    domain_count: usize,
    domain_status_summary: BTreeMap<DomainStatus, usize>,
}

impl EnrichedRecord {
    pub fn new(company: CompanyRecord, generated_domains: Vec<DomainCandidate>) -> Self {
        let mut domain_status_summary = BTreeMap::new();
        for candidate in &generated_domains {
            *domain_status_summary.entry(candidate.status).or_insert(0) += 1;
        }
        Self {
            company,
            domain_count: generated_domains.len(),
            generated_domains,
            domain_status_summary,
        }
    }

    pub fn company(&self) -> &CompanyRecord {
        &self.company
    }

    pub fn domains(&self) -> &[DomainCandidate] {
        &self.generated_domains
    }

    pub fn domain_count(&self) -> usize {
        self.domain_count
    }

    /// Candidate count per status; statuses with no candidates are absent.
    pub fn status_counts(&self) -> &BTreeMap<DomainStatus, usize> {
        &self.domain_status_summary
    }

    /// Comma-separated domain names, e.g. `"acme.de, acme.com"`.
    pub fn domain_list(&self) -> String {
        self.generated_domains
            .iter()
            .map(|d| d.domain.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Flattened candidate list, e.g. `"acme.de (unknown); acme.com (taken)"`.
    pub fn domains_summary(&self) -> String {
        self.generated_domains
            .iter()
            .map(|d| format!("{} ({})", d.domain, d.status))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Status counts, e.g. `"available: 3, taken: 2"`.
    pub fn status_summary(&self) -> String {
        self.domain_status_summary
            .iter()
            .map(|(status, count)| format!("{status}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
