//! Aggregate statistics over enriched records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{DomainStatus, EnrichedRecord};

/// Totals over one run's generated domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DomainStatistics {
    pub total_companies: usize,
    pub companies_with_domains: usize,
    pub total_domains: usize,
    /// Rounded to two decimals; zero when there are no companies
    pub avg_domains_per_company: f64,
    pub status_distribution: BTreeMap<DomainStatus, usize>,
    pub tld_distribution: BTreeMap<String, usize>,
}

/// Aggregates candidate counts over all records.
pub fn domain_statistics(records: &[EnrichedRecord]) -> DomainStatistics {
    let mut stats = DomainStatistics {
        total_companies: records.len(),
        ..Default::default()
    };

    for record in records {
        stats.total_domains += record.domain_count();
        if record.domain_count() > 0 {
            stats.companies_with_domains += 1;
        }
        for candidate in record.domains() {
            *stats.status_distribution.entry(candidate.status).or_insert(0) += 1;
            *stats
                .tld_distribution
                .entry(candidate.tld.clone())
                .or_insert(0) += 1;
        }
    }

    if stats.total_companies > 0 {
        let avg = stats.total_domains as f64 / stats.total_companies as f64;
        stats.avg_domains_per_company = (avg * 100.0).round() / 100.0;
    }

    stats
}
