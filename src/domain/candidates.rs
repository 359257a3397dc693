//! Domain candidate generation for company records.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::app::log_progress;
use crate::config::{DomainConfig, LOGGING_INTERVAL, MAX_CONCURRENT_REQUESTS};
use crate::dns::DomainProbe;
use crate::error_handling::{ErrorType, ProcessingStats, WarningType};
use crate::models::{CompanyRecord, DomainCandidate, DomainStatus, EnrichedRecord};
use crate::utils::validate_domain;

use super::{expand_variants, normalize_company_name};

/// Builds domain candidates from company names.
///
/// Without a probe, or with `check_availability` off, every candidate keeps
/// the `unknown` status.
pub struct DomainGenerator {
    config: DomainConfig,
    probe: Option<Arc<dyn DomainProbe>>,
    stats: Arc<ProcessingStats>,
    concurrency: usize,
}

impl DomainGenerator {
    pub fn new(config: DomainConfig, stats: Arc<ProcessingStats>) -> Self {
        Self {
            config,
            probe: None,
            stats,
            concurrency: MAX_CONCURRENT_REQUESTS,
        }
    }

    /// Attaches the probe used when `check_availability` is set.
    pub fn with_probe(mut self, probe: Arc<dyn DomainProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Sets how many companies are enriched at once.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Returns the slug variants for a company name, capped by the config.
    pub fn generate_domain_variants(&self, company_name: &str) -> Vec<String> {
        let slug = normalize_company_name(company_name);
        expand_variants(&slug, self.config.max_variants_per_company)
    }

    /// Builds every valid `variant + tld` candidate for a company name.
    ///
    /// Candidates come out variant-major, tld-minor. Invalid names are
    /// skipped silently (counted as a warning) and probe failures end up as
    /// `error` status; this never fails.
    pub async fn generate_full_domains(&self, company_name: &str) -> Vec<DomainCandidate> {
        let mut candidates = Vec::new();
        if company_name.trim().is_empty() {
            return candidates;
        }

        let probe = match (&self.probe, self.config.check_availability) {
            (Some(probe), true) => Some(probe),
            (None, true) => {
                log::debug!("Availability check requested but no probe is configured");
                None
            }
            _ => None,
        };

        for variant in self.generate_domain_variants(company_name) {
            for tld in &self.config.tlds {
                let domain = format!("{variant}{tld}");
                if !validate_domain(&domain) {
                    log::debug!("Skipping invalid domain candidate: {domain}");
                    self.stats.increment_warning(WarningType::InvalidDomainSkipped);
                    continue;
                }

                let status = match probe {
                    Some(probe) => {
                        let status = probe.probe(&domain, self.config.dns_timeout()).await;
                        if status == DomainStatus::Error {
                            log::warn!("Error checking domain {domain}");
                            self.stats.increment_error(ErrorType::DomainProbeError);
                        }
                        status
                    }
                    None => DomainStatus::Unknown,
                };

                candidates.push(DomainCandidate {
                    domain,
                    variant: variant.clone(),
                    tld: tld.clone(),
                    status,
                });
            }
        }

        candidates
    }

    /// Attaches generated candidates to every record.
    ///
    /// Records are processed concurrently up to the configured limit; the
    /// output keeps the input order.
    pub async fn process_companies(&self, records: Vec<CompanyRecord>) -> Vec<EnrichedRecord> {
        let total = records.len();
        let start_time = std::time::Instant::now();
        let enriched: Vec<EnrichedRecord> = stream::iter(records.into_iter().enumerate())
            .map(|(index, record)| async move {
                let domains = self.generate_full_domains(&record.company_name).await;
                log::info!(
                    "Generated {} domains for: {}",
                    domains.len(),
                    record.company_name
                );
                if (index + 1) % LOGGING_INTERVAL == 0 {
                    log_progress("companies", start_time, index + 1, total);
                }
                EnrichedRecord::new(record, domains)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        enriched
    }
}
