//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the scraper and the domain generator programmatically.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TLDS, DEFAULT_USER_AGENT,
    DELAY_BETWEEN_REQUESTS_MS, DNS_TIMEOUT_SECS, MAX_CONCURRENT_REQUESTS,
    MAX_VARIANTS_PER_COMPANY, REQUEST_TIMEOUT_SECS, RETRY_ATTEMPTS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flattened rows, one per company
    Csv,
    /// Full records with metadata header
    Json,
    /// Workbook with company, statistics and domain detail sheets
    Excel,
}

impl ExportFormat {
    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => ".csv",
            ExportFormat::Json => ".json",
            ExportFormat::Excel => ".xlsx",
        }
    }
}

/// Page retrieval settings.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// First page of the exhibitor directory
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Attempts per page (initial attempt included)
    pub retry_attempts: usize,
    /// Pause between retries and between consecutive pages
    pub delay_between_requests: Duration,
    /// Upper bound on concurrent domain enrichment tasks
    pub max_concurrent_requests: usize,
    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: REQUEST_TIMEOUT_SECS,
            retry_attempts: RETRY_ATTEMPTS,
            delay_between_requests: Duration::from_millis(DELAY_BETWEEN_REQUESTS_MS),
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Domain candidate generation settings.
#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// TLD suffixes including their leading dot, e.g. ".de"
    pub tlds: Vec<String>,
    /// Maximum slug variants per company
    pub max_variants_per_company: usize,
    /// Probe every candidate through DNS
    pub check_availability: bool,
    /// Probe timeout in seconds
    pub dns_timeout_seconds: u64,
}

impl DomainConfig {
    /// Probe timeout as a `Duration`.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_seconds)
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            tlds: DEFAULT_TLDS.iter().map(|tld| tld.to_string()).collect(),
            max_variants_per_company: MAX_VARIANTS_PER_COMPANY,
            check_availability: false,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
        }
    }
}

/// Library configuration for a full scrape run (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use exhibitor_scraper::Config;
///
/// let mut config = Config::default();
/// config.max_pages = Some(2);
/// config.domains.check_availability = true;
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page retrieval settings
    pub scrape: ScrapeConfig,
    /// Domain generation settings
    pub domains: DomainConfig,
    /// Generate domain candidates for every company
    pub generate_domains: bool,
    /// Visit at most this many pages (all discovered pages when `None`)
    pub max_pages: Option<usize>,
    /// Export format
    pub output_format: ExportFormat,
    /// Directory export files are written to
    pub output_dir: PathBuf,
    /// Custom export filename stem (sanitized before use)
    pub output_file: Option<String>,
    /// Append a `_YYYYmmdd_HHMMSS` timestamp to the filename
    pub include_timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            domains: DomainConfig::default(),
            generate_domains: true,
            max_pages: None,
            output_format: ExportFormat::Csv,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: None,
            include_timestamp: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), ".csv");
        assert_eq!(ExportFormat::Json.extension(), ".json");
    }

    #[test]
    fn test_domain_config_default() {
        let config = DomainConfig::default();
        assert_eq!(config.tlds.len(), 7);
        assert_eq!(config.tlds[0], ".de");
        assert!(config.tlds.iter().all(|tld| tld.starts_with('.')));
        assert_eq!(config.max_variants_per_company, 5);
        assert!(!config.check_availability);
        assert_eq!(config.dns_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_scrape_config_default() {
        let config = ScrapeConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.delay_between_requests, Duration::from_secs(1));
        assert_eq!(config.max_concurrent_requests, 5);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.generate_domains);
        assert!(config.include_timestamp);
        assert_eq!(config.max_pages, None);
        assert_eq!(config.output_format, ExportFormat::Csv);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }
}
