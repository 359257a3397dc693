//! exhibitor_scraper library: exhibitor directory scraping and domain candidates
//!
//! This library fetches the pages of an online exhibitor directory, extracts one
//! company record per listing and derives candidate domain names for every
//! company, optionally probing each candidate through DNS. Results are written
//! as CSV, JSON or an Excel workbook.
//!
//! # Example
//!
//! ```no_run
//! use exhibitor_scraper::{run_scrape, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     max_pages: Some(2),
//!     ..Default::default()
//! };
//!
//! let report = run_scrape(config).await?;
//! println!(
//!     "Scraped {} companies from {} pages",
//!     report.companies_extracted, report.pages_visited
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The name-to-domain functions are synchronous and usable on their own:
//!
//! ```
//! use exhibitor_scraper::domain::{expand_variants, normalize_company_name};
//!
//! let slug = normalize_company_name("Schneider & Partner AG");
//! assert_eq!(slug, "schneider-partner");
//! assert!(expand_variants(&slug, 5).contains(&"sp".to_string()));
//! ```
//!
//! # Requirements
//!
//! The async entry points require a Tokio runtime.

mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod pipeline;
mod utils;

// Re-export public API
pub use config::{Config, DomainConfig, ExportFormat, LogFormat, LogLevel, ScrapeConfig};
pub use models::{CompanyRecord, DomainCandidate, DomainStatus, EnrichedRecord};
pub use run::{
    demo_companies, generate_domains_for, run_demo, run_scrape, run_test, ScrapeReport,
};
pub use utils::{normalize_phone_number, sanitize_filename, validate_domain, validate_email};

// Internal run module (wires fetch, parse, domain generation and export)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::app::{print_diagnostics, print_domain_statistics, print_error_statistics};
    use crate::config::{Config, DomainConfig, ScrapeConfig};
    use crate::dns::DnsProbe;
    use crate::domain::{domain_statistics, DomainGenerator, DomainStatistics};
    use crate::error_handling::ProcessingStats;
    use crate::export::{export_records, ExportOptions};
    use crate::fetch::{discover_pagination_urls, test_scraping, HttpFetcher, ScrapeDiagnostics};
    use crate::initialization::{init_client, init_resolver};
    use crate::models::{CompanyRecord, DomainCandidate, EnrichedRecord};
    use crate::parse::FieldExtractor;
    use crate::pipeline::scrape_pages;

    /// Filename stem used by the demo run.
    const DEMO_FILENAME: &str = "demo_data";

    /// Results of a scrape (or demo) run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Number of directory pages requested
        pub pages_visited: usize,
        /// Number of company records extracted
        pub companies_extracted: usize,
        /// Domain generation statistics over the exported records
        pub statistics: DomainStatistics,
        /// Export file, `None` when no company was found
        pub output_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full scrape with the provided configuration.
    ///
    /// Checks that the first directory page can be fetched, then discovers the
    /// directory pages from `config.scrape.base_url`, fetches and parses them
    /// one after another, attaches domain candidates when
    /// `config.generate_domains` is set and exports the records.
    ///
    /// Once the first page has been reached, page and probe failures are
    /// absorbed (and counted); they never abort the run. When no company is
    /// found nothing is exported.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built from the configured headers
    /// - The first directory page cannot be fetched
    /// - The export file cannot be written
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let start_time = std::time::Instant::now();
        let stats = Arc::new(ProcessingStats::new());

        let client = init_client(&config.scrape).context("Failed to initialize HTTP client")?;
        let fetcher = HttpFetcher::new(client, &config.scrape, Arc::clone(&stats));
        let extractor = FieldExtractor::new(&config.scrape.base_url, Arc::clone(&stats));

        // Sample extraction only, kept out of the run's counters
        let check_extractor =
            FieldExtractor::new(&config.scrape.base_url, Arc::new(ProcessingStats::new()));
        let diagnostics =
            test_scraping(&fetcher, &check_extractor, &config.scrape.base_url).await;
        if !diagnostics.success {
            anyhow::bail!(
                "Directory check failed: {}",
                diagnostics.error.as_deref().unwrap_or("no content")
            );
        }
        info!(
            "✅ Directory reachable, {} sample companies on the first page",
            diagnostics.sample_companies_found
        );

        info!("Starting scrape of {}", config.scrape.base_url);
        let mut urls = discover_pagination_urls(&fetcher, &config.scrape.base_url).await;
        if let Some(max_pages) = config.max_pages.filter(|&n| n > 0) {
            urls.truncate(max_pages);
        }
        info!("Scraping {} pages", urls.len());

        let companies = scrape_pages(
            &fetcher,
            &extractor,
            &urls,
            config.scrape.delay_between_requests,
        )
        .await;
        let companies_extracted = companies.len();

        if companies.is_empty() {
            warn!("No companies found during scraping");
            print_error_statistics(&stats);
            return Ok(ScrapeReport {
                pages_visited: urls.len(),
                companies_extracted: 0,
                statistics: DomainStatistics::default(),
                output_path: None,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            });
        }
        info!("✅ Successfully scraped {} companies", companies_extracted);

        let records = if config.generate_domains {
            info!("🌐 Generating domain variants...");
            domain_generator(
                &config.domains,
                config.scrape.max_concurrent_requests,
                Arc::clone(&stats),
            )
            .process_companies(companies)
            .await
        } else {
            companies
                .into_iter()
                .map(|company| EnrichedRecord::new(company, Vec::new()))
                .collect()
        };

        let statistics = domain_statistics(&records);
        if config.generate_domains {
            print_domain_statistics(&statistics);
        }
        print_error_statistics(&stats);

        let output_path = export_records(&records, &ExportOptions::from(&config))
            .context("Failed to export results")?;
        info!("💾 Data exported to: {}", output_path.display());

        Ok(ScrapeReport {
            pages_visited: urls.len(),
            companies_extracted,
            statistics,
            output_path: Some(output_path),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Fetches the first directory page once and reports what it yields.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built. An unreachable
    /// directory is reported in the diagnostics, not as an error.
    pub async fn run_test(scrape: &ScrapeConfig) -> Result<ScrapeDiagnostics> {
        let stats = Arc::new(ProcessingStats::new());
        let client = init_client(scrape).context("Failed to initialize HTTP client")?;
        let fetcher = HttpFetcher::new(client, scrape, Arc::clone(&stats));
        let extractor = FieldExtractor::new(&scrape.base_url, stats);

        let diagnostics = test_scraping(&fetcher, &extractor, &scrape.base_url).await;
        print_diagnostics(&diagnostics);
        Ok(diagnostics)
    }

    /// Generates domain candidates for a single company name.
    ///
    /// Probes every candidate through DNS when `config.check_availability` is
    /// set.
    pub async fn generate_domains_for(
        company_name: &str,
        config: &DomainConfig,
    ) -> Vec<DomainCandidate> {
        let stats = Arc::new(ProcessingStats::new());
        let candidates = domain_generator(config, 1, Arc::clone(&stats))
            .generate_full_domains(company_name)
            .await;
        print_error_statistics(&stats);
        candidates
    }

    /// Sample records used by the demo run.
    pub fn demo_companies() -> Vec<CompanyRecord> {
        [
            ("Mustermann GmbH", "Berlin", "Maschinenbau"),
            ("Schneider & Partner AG", "München", "Consulting"),
            ("Tech Solutions Ltd.", "Hamburg", "Software"),
        ]
        .into_iter()
        .map(|(name, city, industry)| CompanyRecord {
            city: Some(city.to_string()),
            country: Some("Deutschland".to_string()),
            industry: Some(industry.to_string()),
            ..CompanyRecord::named(name)
        })
        .collect()
    }

    /// Runs domain generation and export over [`demo_companies`].
    ///
    /// No network access unless `config.domains.check_availability` is set.
    /// The export is named `demo_data` unless `config.output_file` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the export file cannot be written.
    pub async fn run_demo(mut config: Config) -> Result<ScrapeReport> {
        let start_time = std::time::Instant::now();
        let stats = Arc::new(ProcessingStats::new());
        if config.output_file.is_none() {
            config.output_file = Some(DEMO_FILENAME.to_string());
        }

        info!("🔄 Processing sample companies...");
        let companies = demo_companies();
        let companies_extracted = companies.len();
        let records = domain_generator(
            &config.domains,
            config.scrape.max_concurrent_requests,
            Arc::clone(&stats),
        )
        .process_companies(companies)
        .await;

        let statistics = domain_statistics(&records);
        print_domain_statistics(&statistics);
        print_error_statistics(&stats);

        let output_path = export_records(&records, &ExportOptions::from(&config))
            .context("Failed to export demo data")?;
        info!("💾 Demo data exported to: {}", output_path.display());

        Ok(ScrapeReport {
            pages_visited: 0,
            companies_extracted,
            statistics,
            output_path: Some(output_path),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    fn domain_generator(
        config: &DomainConfig,
        concurrency: usize,
        stats: Arc<ProcessingStats>,
    ) -> DomainGenerator {
        let generator = DomainGenerator::new(config.clone(), stats).with_concurrency(concurrency);
        if config.check_availability {
            let resolver = init_resolver(config.dns_timeout());
            generator.with_probe(Arc::new(DnsProbe::new(resolver)))
        } else {
            generator
        }
    }
}
